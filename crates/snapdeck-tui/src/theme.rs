use ratatui::style::Color;
use tracing::warn;

/// Runtime theme with configurable colors
#[derive(Debug, Clone)]
pub struct Theme {
    // Background colors
    pub bg0: Color,
    pub bg1: Color,
    pub bg2: Color,

    // Foreground colors
    pub fg0: Color,
    pub fg1: Color,
    pub grey0: Color,
    pub grey1: Color,

    // Semantic colors
    pub accent: Color,
    pub active: Color,
    pub warning: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::gruvbox_dark()
    }
}

impl Theme {
    pub fn gruvbox_dark() -> Self {
        Self {
            bg0: Color::Rgb(0x28, 0x28, 0x28),
            bg1: Color::Rgb(0x32, 0x30, 0x2f),
            bg2: Color::Rgb(0x45, 0x40, 0x3d),
            fg0: Color::Rgb(0xd4, 0xbe, 0x98),
            fg1: Color::Rgb(0xdd, 0xc7, 0xa1),
            grey0: Color::Rgb(0x7c, 0x6f, 0x64),
            grey1: Color::Rgb(0x92, 0x83, 0x74),
            accent: Color::Rgb(0x89, 0xb4, 0x82),
            active: Color::Rgb(0xd8, 0xa6, 0x57),
            warning: Color::Rgb(0xe7, 0x8a, 0x4e),
        }
    }

    pub fn nord() -> Self {
        Self {
            bg0: Color::Rgb(0x2e, 0x34, 0x40),
            bg1: Color::Rgb(0x3b, 0x42, 0x52),
            bg2: Color::Rgb(0x43, 0x4c, 0x5e),
            fg0: Color::Rgb(0xd8, 0xde, 0xe9),
            fg1: Color::Rgb(0xe5, 0xe9, 0xf0),
            grey0: Color::Rgb(0x4c, 0x56, 0x6a),
            grey1: Color::Rgb(0x61, 0x6e, 0x88),
            accent: Color::Rgb(0x88, 0xc0, 0xd0),
            active: Color::Rgb(0xeb, 0xcb, 0x8b),
            warning: Color::Rgb(0xd0, 0x87, 0x70),
        }
    }
}

/// Resolve a theme by its config name, falling back to the default
pub fn load_theme(name: &str) -> Theme {
    match name {
        "gruvbox-dark" => Theme::gruvbox_dark(),
        "nord" => Theme::nord(),
        other => {
            warn!("unknown theme '{}', using gruvbox-dark", other);
            Theme::default()
        }
    }
}
