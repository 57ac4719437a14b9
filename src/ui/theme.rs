//! Theme system for the dashboard.
//!
//! Provides:
//! - Theme struct with all UI colors
//! - Built-in campus presets (main, scripps, torrey)
//! - Hex color parsing for config overrides

use ratatui::style::Color;
use thiserror::Error;

/// Theme colors for the UI
#[derive(Debug, Clone)]
pub struct Theme {
    /// Main background color
    pub background: Color,
    /// Primary text color
    pub foreground: Color,
    /// Background for the pressed navigation control
    pub selection_bg: Color,
    /// Text color on the pressed navigation control
    pub selection_fg: Color,
    /// Campus primary accent (navigation affordance, highlights)
    pub accent: Color,
    /// Dimmed text (summary line, secondary info)
    pub dimmed: Color,
    /// More dimmed text (hints, tertiary info)
    pub dimmed_alt: Color,
    /// Horizontal rules inside the card
    pub rule: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::main()
    }
}

impl Theme {
    /// Main campus theme - navy and gold, the default.
    pub fn main() -> Self {
        Self {
            background: Color::Rgb(13, 17, 23),     // #0d1117
            foreground: Color::Rgb(226, 232, 240),  // #e2e8f0
            selection_bg: Color::Rgb(24, 43, 73),   // #182b49 (navy)
            selection_fg: Color::Rgb(226, 232, 240),
            accent: Color::Rgb(255, 205, 0),        // #ffcd00 (gold)
            dimmed: Color::Rgb(148, 163, 184),      // #94a3b8
            dimmed_alt: Color::Rgb(100, 116, 139),  // #64748b
            rule: Color::Rgb(51, 65, 85),           // #334155
        }
    }

    /// Scripps campus theme - sea blues.
    pub fn scripps() -> Self {
        Self {
            background: Color::Rgb(10, 18, 25),     // #0a1219
            foreground: Color::Rgb(222, 235, 241),  // #deebf1
            selection_bg: Color::Rgb(18, 42, 52),   // #122a34
            selection_fg: Color::Rgb(222, 235, 241),
            accent: Color::Rgb(62, 177, 200),       // #3eb1c8 (sea blue)
            dimmed: Color::Rgb(140, 162, 173),      // #8ca2ad
            dimmed_alt: Color::Rgb(96, 117, 128),   // #607580
            rule: Color::Rgb(42, 62, 72),           // #2a3e48
        }
    }

    /// Torrey campus theme - coastal pines.
    pub fn torrey() -> Self {
        Self {
            background: Color::Rgb(14, 19, 16),     // #0e1310
            foreground: Color::Rgb(228, 236, 230),  // #e4ece6
            selection_bg: Color::Rgb(26, 46, 35),   // #1a2e23
            selection_fg: Color::Rgb(228, 236, 230),
            accent: Color::Rgb(108, 178, 131),      // #6cb283 (pine)
            dimmed: Color::Rgb(150, 167, 156),      // #96a79c
            dimmed_alt: Color::Rgb(103, 121, 110),  // #67796e
            rule: Color::Rgb(46, 64, 53),           // #2e4035
        }
    }

    /// Theme for a configured campus identity.
    ///
    /// An unrecognized identity falls back to [`Theme::main`], never fails.
    pub fn for_campus(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "main" | "default" => Self::main(),
            "scripps" => Self::scripps(),
            "torrey" => Self::torrey(),
            _ => Self::main(),
        }
    }

    /// The campus primary accent color.
    pub fn primary_accent(&self) -> Color {
        self.accent
    }
}

/// Parse hex color string to Color
/// Supports: #rrggbb, #rgb, rrggbb, rgb, #rrggbbaa (alpha ignored)
pub fn parse_hex_color(s: &str) -> Result<Color, ColorError> {
    let s = s.trim().trim_start_matches('#');

    match s.len() {
        // #rgb -> #rrggbb
        3 => {
            let r = u8::from_str_radix(&s[0..1], 16).map_err(|_| ColorError::InvalidHex)?;
            let g = u8::from_str_radix(&s[1..2], 16).map_err(|_| ColorError::InvalidHex)?;
            let b = u8::from_str_radix(&s[2..3], 16).map_err(|_| ColorError::InvalidHex)?;
            Ok(Color::Rgb(r * 17, g * 17, b * 17))
        }
        // #rrggbb
        6 => {
            let r = u8::from_str_radix(&s[0..2], 16).map_err(|_| ColorError::InvalidHex)?;
            let g = u8::from_str_radix(&s[2..4], 16).map_err(|_| ColorError::InvalidHex)?;
            let b = u8::from_str_radix(&s[4..6], 16).map_err(|_| ColorError::InvalidHex)?;
            Ok(Color::Rgb(r, g, b))
        }
        // #rrggbbaa (alpha ignored)
        8 => {
            let r = u8::from_str_radix(&s[0..2], 16).map_err(|_| ColorError::InvalidHex)?;
            let g = u8::from_str_radix(&s[2..4], 16).map_err(|_| ColorError::InvalidHex)?;
            let b = u8::from_str_radix(&s[4..6], 16).map_err(|_| ColorError::InvalidHex)?;
            Ok(Color::Rgb(r, g, b))
        }
        _ => Err(ColorError::InvalidLength),
    }
}

/// Color parsing error
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorError {
    #[error("invalid color length (expected 3, 6, or 8 hex chars)")]
    InvalidLength,
    #[error("invalid hex character")]
    InvalidHex,
}
