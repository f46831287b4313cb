//! Role-keyed color palettes.
//!
//! A [`Palette`] is a total mapping from semantic [`ColorRole`]s to concrete
//! [`Rgb`] colors, one palette per [`ThemeMode`]. Palettes are fixed at
//! construction time; switching modes swaps the whole palette rather than
//! mutating individual entries.
//!
//! # Construction Methods
//!
//! ## Built-in
//!
//! ```rust
//! use umbra::{ColorRole, Palette, ThemeMode};
//!
//! let dark = Palette::builtin(ThemeMode::Dark);
//! assert_eq!(dark.get(ColorRole::Background).to_hex(), "#0f172a");
//! ```
//!
//! ## From YAML
//!
//! Palette files map role names to hex colors. Every role must be present,
//! and nothing else is accepted:
//!
//! ```rust
//! use umbra::{ColorRole, Palette};
//!
//! let palette = Palette::from_yaml(r##"
//! primary: "#2563eb"
//! secondary: "#475569"
//! accent: "#7c3aed"
//! background: "#ffffff"
//! surface: "#f8fafc"
//! text: "#0f172a"
//! text-secondary: "#64748b"
//! border: "#e2e8f0"
//! error: "#dc2626"
//! success: "#16a34a"
//! warning: "#d97706"
//! "##).unwrap();
//!
//! assert_eq!(palette.get(ColorRole::Accent).to_hex(), "#7c3aed");
//! ```
//!
//! # Terminal Output
//!
//! [`Palette::style`] converts a role's color to a `console::Style` (nearest
//! ANSI-256 foreground) for terminal consumers.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use console::{Color, Style};

use crate::mode::ThemeMode;

/// A simple RGB color triplet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Parses a hex color code, `#rgb` or `#rrggbb`.
    pub fn from_hex(s: &str) -> Result<Self, String> {
        let hex = s
            .trim()
            .strip_prefix('#')
            .ok_or_else(|| format!("color '{}' must start with '#'", s))?;
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(format!("invalid hex color '{}'", s));
        }

        let nibble = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| format!("invalid hex color '{}'", s))
        };

        match hex.len() {
            // 3-digit shorthand: #rgb -> #rrggbb
            3 => Ok(Rgb(
                nibble(0..1)? * 17,
                nibble(1..2)? * 17,
                nibble(2..3)? * 17,
            )),
            6 => Ok(Rgb(nibble(0..2)?, nibble(2..4)?, nibble(4..6)?)),
            _ => Err(format!(
                "invalid hex color '{}' (must be 3 or 6 digits)",
                s
            )),
        }
    }

    /// Canonical 6-digit hex form, `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }

    /// Nearest ANSI 256-color palette index.
    pub fn to_ansi256(self) -> u8 {
        let Rgb(r, g, b) = self;
        if r == g && g == b {
            // Grayscale ramp, with the cube corners for near-black/near-white.
            return if r < 8 {
                16
            } else if r > 248 {
                231
            } else {
                232 + ((r as u16 - 8) * 24 / 247) as u8
            };
        }
        let scale = |c: u8| (c as u16 * 5 / 255) as u8;
        16 + 36 * scale(r) + 6 * scale(g) + scale(b)
    }

    /// This color as a `console` color value.
    pub fn to_console_color(self) -> Color {
        Color::Color256(self.to_ansi256())
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// The semantic color roles a palette assigns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorRole {
    Primary,
    Secondary,
    Accent,
    Background,
    Surface,
    Text,
    TextSecondary,
    Border,
    Error,
    Success,
    Warning,
}

impl ColorRole {
    /// All roles, in palette storage order.
    pub const ALL: [ColorRole; 11] = [
        ColorRole::Primary,
        ColorRole::Secondary,
        ColorRole::Accent,
        ColorRole::Background,
        ColorRole::Surface,
        ColorRole::Text,
        ColorRole::TextSecondary,
        ColorRole::Border,
        ColorRole::Error,
        ColorRole::Success,
        ColorRole::Warning,
    ];

    /// The role's name as it appears in palette files and variable names.
    pub fn as_str(self) -> &'static str {
        match self {
            ColorRole::Primary => "primary",
            ColorRole::Secondary => "secondary",
            ColorRole::Accent => "accent",
            ColorRole::Background => "background",
            ColorRole::Surface => "surface",
            ColorRole::Text => "text",
            ColorRole::TextSecondary => "text-secondary",
            ColorRole::Border => "border",
            ColorRole::Error => "error",
            ColorRole::Success => "success",
            ColorRole::Warning => "warning",
        }
    }

    /// Looks up a role by its file/variable name.
    pub fn from_name(name: &str) -> Option<ColorRole> {
        Self::ALL.into_iter().find(|role| role.as_str() == name)
    }
}

impl fmt::Display for ColorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error type for palette parsing and loading failures.
#[derive(Debug, thiserror::Error)]
pub enum PaletteError {
    /// YAML parse error.
    #[error("failed to parse palette: {message}")]
    Parse { message: String },

    /// A key in the file is not a recognized color role.
    #[error("unknown color role '{role}'")]
    UnknownRole { role: String },

    /// A color value could not be parsed as hex.
    #[error("invalid color '{value}' for role '{role}'")]
    InvalidColor { role: String, value: String },

    /// A required role is absent from the file.
    #[error("palette is missing color role '{role}'")]
    MissingRole { role: String },

    /// File loading error.
    #[error("failed to load palette: {0}")]
    Load(#[from] std::io::Error),
}

/// A total mapping from color roles to colors for one theme mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: [Rgb; ColorRole::ALL.len()],
}

/// Built-in light palette.
const LIGHT: Palette = Palette::new([
    Rgb(0x25, 0x63, 0xeb), // primary
    Rgb(0x47, 0x55, 0x69), // secondary
    Rgb(0x7c, 0x3a, 0xed), // accent
    Rgb(0xff, 0xff, 0xff), // background
    Rgb(0xf8, 0xfa, 0xfc), // surface
    Rgb(0x0f, 0x17, 0x2a), // text
    Rgb(0x64, 0x74, 0x8b), // text-secondary
    Rgb(0xe2, 0xe8, 0xf0), // border
    Rgb(0xdc, 0x26, 0x26), // error
    Rgb(0x16, 0xa3, 0x4a), // success
    Rgb(0xd9, 0x77, 0x06), // warning
]);

/// Built-in dark palette.
const DARK: Palette = Palette::new([
    Rgb(0x3b, 0x82, 0xf6), // primary
    Rgb(0x94, 0xa3, 0xb8), // secondary
    Rgb(0x8b, 0x5c, 0xf6), // accent
    Rgb(0x0f, 0x17, 0x2a), // background
    Rgb(0x1e, 0x29, 0x3b), // surface
    Rgb(0xf1, 0xf5, 0xf9), // text
    Rgb(0x94, 0xa3, 0xb8), // text-secondary
    Rgb(0x33, 0x41, 0x55), // border
    Rgb(0xf8, 0x71, 0x71), // error
    Rgb(0x4a, 0xde, 0x80), // success
    Rgb(0xfb, 0xbf, 0x24), // warning
]);

impl Palette {
    /// Creates a palette from colors in [`ColorRole::ALL`] order.
    pub const fn new(colors: [Rgb; ColorRole::ALL.len()]) -> Self {
        Self { colors }
    }

    /// Returns the built-in palette for a mode.
    pub fn builtin(mode: ThemeMode) -> &'static Palette {
        match mode {
            ThemeMode::Light => &LIGHT,
            ThemeMode::Dark => &DARK,
        }
    }

    /// The color assigned to a role.
    pub fn get(&self, role: ColorRole) -> Rgb {
        self.colors[role as usize]
    }

    /// A `console::Style` with the role's color as foreground.
    pub fn style(&self, role: ColorRole) -> Style {
        Style::new().fg(self.get(role).to_console_color())
    }

    /// Parses a palette from YAML content.
    ///
    /// The YAML must be a flat mapping of role names to hex colors covering
    /// every role exactly. Unknown roles, malformed colors, and missing
    /// roles are all rejected.
    ///
    /// # Errors
    ///
    /// Returns a [`PaletteError`] describing the first problem found.
    pub fn from_yaml(yaml: &str) -> Result<Self, PaletteError> {
        let entries: BTreeMap<String, String> =
            serde_yaml::from_str(yaml).map_err(|e| PaletteError::Parse {
                message: e.to_string(),
            })?;

        let mut colors: [Option<Rgb>; ColorRole::ALL.len()] = [None; ColorRole::ALL.len()];
        for (name, value) in &entries {
            let role = ColorRole::from_name(name).ok_or_else(|| PaletteError::UnknownRole {
                role: name.clone(),
            })?;
            let rgb = Rgb::from_hex(value).map_err(|_| PaletteError::InvalidColor {
                role: name.clone(),
                value: value.clone(),
            })?;
            colors[role as usize] = Some(rgb);
        }

        let mut resolved = [Rgb(0, 0, 0); ColorRole::ALL.len()];
        for role in ColorRole::ALL {
            resolved[role as usize] =
                colors[role as usize].ok_or_else(|| PaletteError::MissingRole {
                    role: role.as_str().to_string(),
                })?;
        }
        Ok(Self::new(resolved))
    }

    /// Loads a palette from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns a [`PaletteError`] if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, PaletteError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }
}

/// The light/dark palette pair a theme store selects from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteSet {
    light: Palette,
    dark: Palette,
}

impl PaletteSet {
    /// Creates a set from explicit light and dark palettes.
    pub fn new(light: Palette, dark: Palette) -> Self {
        Self { light, dark }
    }

    /// The built-in light/dark pair.
    pub fn builtin() -> Self {
        Self::new(LIGHT.clone(), DARK.clone())
    }

    /// The palette for a mode.
    pub fn for_mode(&self, mode: ThemeMode) -> &Palette {
        match mode {
            ThemeMode::Light => &self.light,
            ThemeMode::Dark => &self.dark,
        }
    }
}

impl Default for PaletteSet {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // Hex parsing tests
    // =========================================================================

    #[test]
    fn test_from_hex_6_digit() {
        assert_eq!(Rgb::from_hex("#ff6b35").unwrap(), Rgb(255, 107, 53));
        assert_eq!(Rgb::from_hex("#000000").unwrap(), Rgb(0, 0, 0));
        assert_eq!(Rgb::from_hex("#ffffff").unwrap(), Rgb(255, 255, 255));
    }

    #[test]
    fn test_from_hex_3_digit() {
        assert_eq!(Rgb::from_hex("#fff").unwrap(), Rgb(255, 255, 255));
        assert_eq!(Rgb::from_hex("#f80").unwrap(), Rgb(255, 136, 0));
    }

    #[test]
    fn test_from_hex_case_insensitive() {
        assert_eq!(Rgb::from_hex("#FF6B35").unwrap(), Rgb(255, 107, 53));
    }

    #[test]
    fn test_from_hex_invalid() {
        assert!(Rgb::from_hex("ff6b35").is_err());
        assert!(Rgb::from_hex("#ff").is_err());
        assert!(Rgb::from_hex("#ffff").is_err());
        assert!(Rgb::from_hex("#gggggg").is_err());
    }

    #[test]
    fn test_hex_round_trip() {
        let rgb = Rgb::from_hex("#2563eb").unwrap();
        assert_eq!(rgb.to_hex(), "#2563eb");
    }

    // =========================================================================
    // ANSI conversion tests
    // =========================================================================

    #[test]
    fn test_to_ansi256_grayscale() {
        assert_eq!(Rgb(0, 0, 0).to_ansi256(), 16);
        assert_eq!(Rgb(255, 255, 255).to_ansi256(), 231);
        let mid = Rgb(128, 128, 128).to_ansi256();
        assert!((232..=255).contains(&mid));
    }

    #[test]
    fn test_to_ansi256_color_cube() {
        assert_eq!(Rgb(255, 0, 0).to_ansi256(), 196);
        assert_eq!(Rgb(0, 255, 0).to_ansi256(), 46);
        assert_eq!(Rgb(0, 0, 255).to_ansi256(), 21);
    }

    // =========================================================================
    // Role tests
    // =========================================================================

    #[test]
    fn test_role_names_round_trip() {
        for role in ColorRole::ALL {
            assert_eq!(ColorRole::from_name(role.as_str()), Some(role));
        }
    }

    #[test]
    fn test_role_from_unknown_name() {
        assert_eq!(ColorRole::from_name("shadow"), None);
        assert_eq!(ColorRole::from_name(""), None);
    }

    // =========================================================================
    // Built-in palette tests
    // =========================================================================

    #[test]
    fn test_builtin_palettes_differ() {
        let light = Palette::builtin(ThemeMode::Light);
        let dark = Palette::builtin(ThemeMode::Dark);
        assert_ne!(
            light.get(ColorRole::Background),
            dark.get(ColorRole::Background)
        );
        assert_ne!(light.get(ColorRole::Text), dark.get(ColorRole::Text));
    }

    #[test]
    fn test_builtin_light_background_is_white() {
        let light = Palette::builtin(ThemeMode::Light);
        assert_eq!(light.get(ColorRole::Background), Rgb(255, 255, 255));
    }

    #[test]
    fn test_style_uses_role_color() {
        let light = Palette::builtin(ThemeMode::Light);
        let styled = light
            .style(ColorRole::Error)
            .force_styling(true)
            .apply_to("x")
            .to_string();
        assert!(styled.contains("\x1b["));
    }

    // =========================================================================
    // YAML parsing tests
    // =========================================================================

    fn full_yaml() -> String {
        ColorRole::ALL
            .iter()
            .map(|role| format!("{}: \"#102030\"\n", role.as_str()))
            .collect()
    }

    #[test]
    fn test_from_yaml_complete() {
        let palette = Palette::from_yaml(&full_yaml()).unwrap();
        for role in ColorRole::ALL {
            assert_eq!(palette.get(role), Rgb(0x10, 0x20, 0x30));
        }
    }

    #[test]
    fn test_from_yaml_unknown_role() {
        let yaml = format!("{}shadow: \"#000000\"\n", full_yaml());
        let err = Palette::from_yaml(&yaml).unwrap_err();
        assert!(matches!(err, PaletteError::UnknownRole { role } if role == "shadow"));
    }

    #[test]
    fn test_from_yaml_missing_role() {
        let yaml: String = ColorRole::ALL
            .iter()
            .filter(|role| **role != ColorRole::Warning)
            .map(|role| format!("{}: \"#102030\"\n", role.as_str()))
            .collect();
        let err = Palette::from_yaml(&yaml).unwrap_err();
        assert!(matches!(err, PaletteError::MissingRole { role } if role == "warning"));
    }

    #[test]
    fn test_from_yaml_invalid_color() {
        let yaml = full_yaml().replace("primary: \"#102030\"", "primary: \"blue\"");
        let err = Palette::from_yaml(&yaml).unwrap_err();
        assert!(matches!(err, PaletteError::InvalidColor { role, .. } if role == "primary"));
    }

    #[test]
    fn test_from_yaml_not_a_mapping() {
        assert!(matches!(
            Palette::from_yaml("- a\n- b\n"),
            Err(PaletteError::Parse { .. })
        ));
    }

    #[test]
    fn test_from_file() {
        use std::fs;
        use tempfile::TempDir;

        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ocean.yaml");
        fs::write(&path, full_yaml()).unwrap();

        let palette = Palette::from_file(&path).unwrap();
        assert_eq!(palette.get(ColorRole::Primary), Rgb(0x10, 0x20, 0x30));
    }

    #[test]
    fn test_from_file_not_found() {
        assert!(matches!(
            Palette::from_file("/nonexistent/palette.yaml"),
            Err(PaletteError::Load(_))
        ));
    }

    // =========================================================================
    // Palette set tests
    // =========================================================================

    #[test]
    fn test_palette_set_for_mode() {
        let set = PaletteSet::builtin();
        assert_eq!(set.for_mode(ThemeMode::Light), Palette::builtin(ThemeMode::Light));
        assert_eq!(set.for_mode(ThemeMode::Dark), Palette::builtin(ThemeMode::Dark));
    }

    #[test]
    fn test_palette_set_default_is_builtin() {
        assert_eq!(PaletteSet::default(), PaletteSet::builtin());
    }
}
