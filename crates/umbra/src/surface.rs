//! Rendering surfaces that receive palette changes.
//!
//! A [`Surface`] is anything the store pushes the active palette into: a
//! variable map consumed by visual components, a terminal renderer, a test
//! probe. Application is synchronous with every mode change, so consumers
//! never observe a window of stale colors.
//!
//! For the common case where the application keeps a handle to a surface
//! after attaching it, wrap it in `Rc<RefCell<_>>`; the store's event model
//! is single-threaded, so no heavier sharing is needed:
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use umbra::{MemoryPreferences, FixedScheme, PaletteSet, ThemeMode, ThemeStore, VariableSurface};
//!
//! let vars = Rc::new(RefCell::new(VariableSurface::new()));
//! let mut store = ThemeStore::new(
//!     PaletteSet::builtin(),
//!     Box::new(MemoryPreferences::new()),
//!     Box::new(FixedScheme::unavailable()),
//!     ThemeMode::Light,
//! );
//! store.attach(Rc::clone(&vars));
//!
//! assert_eq!(vars.borrow().get("color-background"), Some("#ffffff"));
//! store.set_mode(ThemeMode::Dark);
//! assert_eq!(vars.borrow().get("color-background"), Some("#0f172a"));
//! ```

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::mode::ThemeMode;
use crate::palette::{ColorRole, Palette};

/// A consumer of palette changes.
pub trait Surface {
    /// Applies a palette. Called once at attach time and again on every
    /// mode change.
    fn apply(&mut self, mode: ThemeMode, palette: &Palette);
}

/// Shared-handle surfaces, so the application can attach a surface and keep
/// reading it afterwards.
impl<S: Surface> Surface for Rc<RefCell<S>> {
    fn apply(&mut self, mode: ThemeMode, palette: &Palette) {
        self.borrow_mut().apply(mode, palette);
    }
}

/// Wraps a closure as a [`Surface`].
pub fn surface_fn<F>(f: F) -> impl Surface
where
    F: FnMut(ThemeMode, &Palette),
{
    struct FnSurface<F>(F);

    impl<F: FnMut(ThemeMode, &Palette)> Surface for FnSurface<F> {
        fn apply(&mut self, mode: ThemeMode, palette: &Palette) {
            (self.0)(mode, palette);
        }
    }

    FnSurface(f)
}

/// Publishes the active palette as named color variables.
///
/// Every role appears as a `color-<role>` variable holding the hex form of
/// its color (`color-primary` → `#2563eb`), the conventional handoff point
/// for visual components that style themselves by variable name.
#[derive(Debug, Clone, Default)]
pub struct VariableSurface {
    mode: Option<ThemeMode>,
    vars: BTreeMap<String, String>,
}

impl VariableSurface {
    /// Creates an empty surface; variables appear on first application.
    pub fn new() -> Self {
        Self::default()
    }

    /// The mode most recently applied, if any.
    pub fn mode(&self) -> Option<ThemeMode> {
        self.mode
    }

    /// Looks up a variable by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    /// All variables, sorted by name.
    pub fn vars(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl Surface for VariableSurface {
    fn apply(&mut self, mode: ThemeMode, palette: &Palette) {
        self.mode = Some(mode);
        for role in ColorRole::ALL {
            self.vars
                .insert(format!("color-{}", role.as_str()), palette.get(role).to_hex());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variable_surface_starts_empty() {
        let surface = VariableSurface::new();
        assert_eq!(surface.mode(), None);
        assert_eq!(surface.vars().count(), 0);
    }

    #[test]
    fn test_variable_surface_publishes_all_roles() {
        let mut surface = VariableSurface::new();
        surface.apply(ThemeMode::Light, Palette::builtin(ThemeMode::Light));

        assert_eq!(surface.mode(), Some(ThemeMode::Light));
        assert_eq!(surface.vars().count(), ColorRole::ALL.len());
        for role in ColorRole::ALL {
            let name = format!("color-{}", role.as_str());
            assert_eq!(
                surface.get(&name),
                Some(Palette::builtin(ThemeMode::Light).get(role).to_hex().as_str())
            );
        }
    }

    #[test]
    fn test_variable_surface_reapply_overwrites() {
        let mut surface = VariableSurface::new();
        surface.apply(ThemeMode::Light, Palette::builtin(ThemeMode::Light));
        surface.apply(ThemeMode::Dark, Palette::builtin(ThemeMode::Dark));

        assert_eq!(surface.mode(), Some(ThemeMode::Dark));
        assert_eq!(surface.get("color-background"), Some("#0f172a"));
        assert_eq!(surface.vars().count(), ColorRole::ALL.len());
    }

    #[test]
    fn test_surface_fn_receives_applications() {
        let mut seen = Vec::new();
        {
            let mut surface = surface_fn(|mode, _palette: &Palette| seen.push(mode));
            surface.apply(ThemeMode::Dark, Palette::builtin(ThemeMode::Dark));
            surface.apply(ThemeMode::Light, Palette::builtin(ThemeMode::Light));
        }
        assert_eq!(seen, vec![ThemeMode::Dark, ThemeMode::Light]);
    }

    #[test]
    fn test_shared_handle_surface() {
        let shared = Rc::new(RefCell::new(VariableSurface::new()));
        let mut handle = Rc::clone(&shared);
        handle.apply(ThemeMode::Dark, Palette::builtin(ThemeMode::Dark));
        assert_eq!(shared.borrow().mode(), Some(ThemeMode::Dark));
    }
}
