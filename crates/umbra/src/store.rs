//! The session-owning theme store.
//!
//! A [`ThemeStore`] is created once at application start, injected at the
//! root, and mutated only through its own methods. Construction runs the
//! resolver cascade; afterwards the store keeps three things in sync on
//! every change: the in-memory [`SessionTheme`], the persisted preference
//! record, and all attached [`Surface`]s.
//!
//! # State Machine
//!
//! Two independent axes, `mode` and `follow_system`:
//!
//! - [`toggle`](ThemeStore::toggle) and [`set_mode`](ThemeStore::set_mode)
//!   always force `follow_system = false` and persist the new mode.
//! - [`follow_system`](ThemeStore::follow_system) forces
//!   `follow_system = true`, resyncs the mode from the OS immediately, and
//!   clears the persisted record (auto mode is represented by record
//!   absence).
//! - [`system_changed`](ThemeStore::system_changed) moves the mode only
//!   while `follow_system` is true; an explicit choice is never silently
//!   overridden.
//!
//! There is no terminal state; the machine runs for the whole session.
//!
//! # Example
//!
//! ```rust
//! use umbra::{FixedScheme, MemoryPreferences, PaletteSet, ThemeMode, ThemeStore};
//!
//! let mut store = ThemeStore::new(
//!     PaletteSet::builtin(),
//!     Box::new(MemoryPreferences::new()),
//!     Box::new(FixedScheme::reporting(ThemeMode::Dark)),
//!     ThemeMode::Light,
//! );
//!
//! // No record, so the session follows the OS.
//! assert_eq!(store.mode(), ThemeMode::Dark);
//! assert!(store.follows_system());
//!
//! // An explicit choice is sticky...
//! store.set_mode(ThemeMode::Light);
//! store.system_changed(ThemeMode::Dark);
//! assert_eq!(store.mode(), ThemeMode::Light);
//!
//! // ...until auto mode is re-enabled.
//! store.follow_system();
//! assert_eq!(store.mode(), ThemeMode::Dark);
//! ```

use tracing::{debug, warn};

use crate::mode::ThemeMode;
use crate::palette::{Palette, PaletteSet};
use crate::prefs::PreferenceStore;
use crate::resolve::{resolve_initial, SessionTheme};
use crate::scheme::SchemeSource;
use crate::surface::Surface;

/// Owns the live [`SessionTheme`] for one application session.
pub struct ThemeStore {
    session: SessionTheme,
    default_mode: ThemeMode,
    palettes: PaletteSet,
    prefs: Box<dyn PreferenceStore>,
    scheme: Box<dyn SchemeSource>,
    surfaces: Vec<Box<dyn Surface>>,
}

impl ThemeStore {
    /// Creates a store, resolving the initial session state through the
    /// record → OS → `default_mode` cascade.
    pub fn new(
        palettes: PaletteSet,
        prefs: Box<dyn PreferenceStore>,
        scheme: Box<dyn SchemeSource>,
        default_mode: ThemeMode,
    ) -> Self {
        let session = resolve_initial(prefs.as_ref(), scheme.as_ref(), default_mode);
        debug!(mode = %session.mode, follow_system = session.follow_system, "resolved initial theme");
        Self {
            session,
            default_mode,
            palettes,
            prefs,
            scheme,
            surfaces: Vec::new(),
        }
    }

    /// The active mode.
    pub fn mode(&self) -> ThemeMode {
        self.session.mode
    }

    /// Whether the session tracks the OS preference.
    pub fn follows_system(&self) -> bool {
        self.session.follow_system
    }

    /// The full session state.
    pub fn session(&self) -> SessionTheme {
        self.session
    }

    /// The palette for the active mode.
    pub fn palette(&self) -> &Palette {
        self.palettes.for_mode(self.session.mode)
    }

    /// The light/dark palette pair.
    pub fn palettes(&self) -> &PaletteSet {
        &self.palettes
    }

    /// Attaches a rendering surface and applies the current palette to it
    /// immediately, so a late-attached consumer never renders unthemed.
    pub fn attach<S: Surface + 'static>(&mut self, mut surface: S) {
        surface.apply(self.session.mode, self.palettes.for_mode(self.session.mode));
        self.surfaces.push(Box::new(surface));
    }

    /// Flips between light and dark as an explicit choice.
    ///
    /// Forces `follow_system` off and persists the new mode. Returns the
    /// mode that is now active.
    pub fn toggle(&mut self) -> ThemeMode {
        let next = self.session.mode.toggled();
        self.set_mode(next);
        next
    }

    /// Sets an explicit mode.
    ///
    /// Forces `follow_system` off and persists `mode` as the preference
    /// record, even when it equals the current mode — an explicit choice is
    /// recorded either way.
    pub fn set_mode(&mut self, mode: ThemeMode) {
        self.session = SessionTheme {
            mode,
            follow_system: false,
        };
        self.apply_surfaces();
        if let Err(err) = self.prefs.store(mode) {
            warn!(%err, "failed to persist theme preference");
        }
    }

    /// Re-enables auto mode.
    ///
    /// Resyncs the mode from the OS immediately (falling back to the
    /// session default when the platform reports nothing) and clears the
    /// persisted record; auto mode is represented by record absence.
    pub fn follow_system(&mut self) {
        let mode = self.scheme.current().unwrap_or(self.default_mode);
        self.session = SessionTheme {
            mode,
            follow_system: true,
        };
        self.apply_surfaces();
        if let Err(err) = self.prefs.clear() {
            warn!(%err, "failed to clear theme preference");
        }
    }

    /// Handles an OS preference-change notification.
    ///
    /// Moves the active mode only while `follow_system` is true; otherwise
    /// the event is ignored. Never writes the preference record.
    pub fn system_changed(&mut self, mode: ThemeMode) {
        if !self.session.follow_system {
            debug!(%mode, "ignoring system preference change, explicit choice active");
            return;
        }
        if self.session.mode == mode {
            return;
        }
        self.session.mode = mode;
        self.apply_surfaces();
    }

    fn apply_surfaces(&mut self) {
        let palette = self.palettes.for_mode(self.session.mode);
        for surface in &mut self.surfaces {
            surface.apply(self.session.mode, palette);
        }
    }
}
