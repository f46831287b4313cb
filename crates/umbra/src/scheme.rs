//! OS color-scheme detection boundary.
//!
//! [`SchemeSource`] answers one question: does the platform currently report
//! a preferred color scheme, and if so which one? Sources are injected into
//! the store and resolver explicitly rather than read from process-global
//! state, so tests and embedders swap in a [`FixedScheme`] without touching
//! anything ambient.

use crate::mode::ThemeMode;

/// Trait for OS color-scheme providers.
pub trait SchemeSource {
    /// The currently reported preference, or `None` when the platform
    /// reports nothing.
    fn current(&self) -> Option<ThemeMode>;
}

/// Queries the operating system via the `dark-light` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsScheme;

impl OsScheme {
    pub fn new() -> Self {
        Self
    }
}

impl SchemeSource for OsScheme {
    fn current(&self) -> Option<ThemeMode> {
        match dark_light::detect() {
            Ok(dark_light::Mode::Dark) => Some(ThemeMode::Dark),
            Ok(dark_light::Mode::Light) => Some(ThemeMode::Light),
            // Unspecified and detection failures both mean "no signal";
            // the resolver falls through to its default tier.
            Ok(dark_light::Mode::Unspecified) | Err(_) => None,
        }
    }
}

/// A source with a constant answer, for tests and demos.
#[derive(Debug, Clone, Copy)]
pub struct FixedScheme {
    answer: Option<ThemeMode>,
}

impl FixedScheme {
    /// A source that always reports `mode`.
    pub fn reporting(mode: ThemeMode) -> Self {
        Self { answer: Some(mode) }
    }

    /// A source that never reports a preference.
    pub fn unavailable() -> Self {
        Self { answer: None }
    }
}

impl SchemeSource for FixedScheme {
    fn current(&self) -> Option<ThemeMode> {
        self.answer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_scheme_reporting() {
        assert_eq!(
            FixedScheme::reporting(ThemeMode::Dark).current(),
            Some(ThemeMode::Dark)
        );
        assert_eq!(
            FixedScheme::reporting(ThemeMode::Light).current(),
            Some(ThemeMode::Light)
        );
    }

    #[test]
    fn test_fixed_scheme_unavailable() {
        assert_eq!(FixedScheme::unavailable().current(), None);
    }
}
