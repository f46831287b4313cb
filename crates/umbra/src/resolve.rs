//! Startup resolution of the session theme.
//!
//! [`resolve_initial`] runs exactly once per session, when the store is
//! constructed. Priority order: stored preference, then OS preference, then
//! the caller's default. Absence of data at any tier simply advances to the
//! next; nothing here can fail.

use tracing::warn;

use crate::mode::ThemeMode;
use crate::prefs::PreferenceStore;
use crate::scheme::SchemeSource;

/// The live theme state for one application session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionTheme {
    /// The active mode. Always a valid mode, never absent.
    pub mode: ThemeMode,
    /// Whether the session tracks the OS preference ("auto mode") rather
    /// than a user override.
    pub follow_system: bool,
}

/// Computes the initial [`SessionTheme`] for a session.
///
/// A stored explicit preference wins and turns auto mode off. Otherwise the
/// OS-reported scheme is adopted with auto mode on, falling back to
/// `default_mode` (still auto) when the platform reports nothing.
///
/// Read-only: a failing preference store is logged and treated as "no
/// record", never propagated.
pub fn resolve_initial(
    prefs: &dyn PreferenceStore,
    scheme: &dyn SchemeSource,
    default_mode: ThemeMode,
) -> SessionTheme {
    let record = match prefs.load() {
        Ok(record) => record,
        Err(err) => {
            warn!(%err, "preference store unavailable, following system preference");
            None
        }
    };

    if let Some(mode) = record {
        return SessionTheme {
            mode,
            follow_system: false,
        };
    }

    match scheme.current() {
        Some(mode) => SessionTheme {
            mode,
            follow_system: true,
        },
        None => SessionTheme {
            mode: default_mode,
            follow_system: true,
        },
    }
}
