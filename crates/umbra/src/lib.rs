//! # Umbra - Adaptive Light/Dark Theming
//!
//! `umbra` resolves, owns, and applies an application's light/dark theme:
//! read the user's stored preference, fall back to the OS color scheme,
//! fall back to a default, then keep every rendering surface synchronized
//! as the session moves between explicit choices and auto mode.
//!
//! ## Core Concepts
//!
//! - [`ThemeMode`]: the closed light/dark identifier
//! - [`Palette`] / [`PaletteSet`]: role-keyed colors, built in or loaded from YAML
//! - [`ThemeStore`]: the session-owning state machine (toggle / set / auto)
//! - [`PreferenceStore`]: persistence boundary; record absence means auto mode
//! - [`SchemeSource`]: OS color-scheme boundary
//! - [`Surface`]: synchronous palette fan-out to consumers
//!
//! ## Quick Start
//!
//! ```rust
//! use umbra::{ColorRole, FixedScheme, MemoryPreferences, PaletteSet, ThemeMode, ThemeStore};
//!
//! let mut store = ThemeStore::new(
//!     PaletteSet::builtin(),
//!     Box::new(MemoryPreferences::new()),
//!     Box::new(FixedScheme::reporting(ThemeMode::Dark)),
//!     ThemeMode::Light,
//! );
//!
//! // No stored preference, so the session follows the OS.
//! assert_eq!(store.mode(), ThemeMode::Dark);
//! assert!(store.follows_system());
//!
//! // Toggling is an explicit, persisted choice.
//! store.toggle();
//! assert_eq!(store.mode(), ThemeMode::Light);
//! assert!(!store.follows_system());
//!
//! // Colors come from the active palette.
//! let text = store.palette().get(ColorRole::Text);
//! assert_eq!(text.to_hex(), "#0f172a");
//! ```
//!
//! ## Production Wiring
//!
//! A real application swaps the test doubles for the OS-backed pieces:
//! [`FilePreferences`] pointed at a config-dir file and [`OsScheme`] for
//! detection, with the host event loop forwarding OS preference changes to
//! [`ThemeStore::system_changed`]. See `crates/swatch-example` for a
//! complete consumer.

pub mod mode;
pub mod palette;
pub mod prefs;
pub mod resolve;
pub mod scheme;
pub mod store;
pub mod surface;

pub use mode::{ParseModeError, ThemeMode};
pub use palette::{ColorRole, Palette, PaletteError, PaletteSet, Rgb};
pub use prefs::{FilePreferences, MemoryPreferences, PreferenceStore, PrefsError, PrefsResult};
pub use resolve::{resolve_initial, SessionTheme};
pub use scheme::{FixedScheme, OsScheme, SchemeSource};
pub use store::ThemeStore;
pub use surface::{surface_fn, Surface, VariableSurface};
