use odometer_core::config::ThemeConfig;
use odometer_core::Font;
use ratatui::style::{Color, Modifier, Style};
use tracing::warn;

/// Runtime colours for the counter and its status bar
#[derive(Debug, Clone)]
pub struct Theme {
    pub text: Color,
    pub font: Font,
    pub status_fg: Color,
    pub status_bg: Color,
    pub hint: Color,
    pub accent: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            text: Color::White,
            font: Font::default(),
            status_fg: Color::Rgb(0xd4, 0xbe, 0x98),
            status_bg: Color::Rgb(0x45, 0x40, 0x3d),
            hint: Color::Rgb(0xa8, 0x99, 0x84),
            accent: Color::Rgb(0x89, 0xb4, 0x82),
        }
    }
}

impl Theme {
    /// Build a theme from config, falling back to white for a bad colour
    pub fn from_config(config: &ThemeConfig) -> Self {
        let text = parse_hex_color(&config.text_color).unwrap_or_else(|| {
            warn!("Invalid text_color '{}', using white", config.text_color);
            Color::White
        });

        Self {
            text,
            font: Font::new(config.font, config.bold),
            ..Self::default()
        }
    }

    /// Style for counter glyphs drawn in `color` with `font`
    pub fn digit_style(color: Color, font: Font) -> Style {
        let style = Style::default().fg(color);
        if font.bold {
            style.add_modifier(Modifier::BOLD)
        } else {
            style
        }
    }
}

/// Parse a hex color string into a ratatui Color
/// Accepts formats: "#RRGGBB", "RRGGBB", "#RGB", "RGB"
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.trim().trim_start_matches('#');
    if !hex.is_ascii() {
        return None;
    }

    match hex.len() {
        // Short form: RGB -> RRGGBB
        3 => {
            let r = u8::from_str_radix(&hex[0..1], 16).ok()? * 17;
            let g = u8::from_str_radix(&hex[1..2], 16).ok()? * 17;
            let b = u8::from_str_radix(&hex[2..3], 16).ok()? * 17;
            Some(Color::Rgb(r, g, b))
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        }
        _ => None,
    }
}
