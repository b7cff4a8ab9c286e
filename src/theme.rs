use ratatui::style::Color;
use ratatui::symbols::border;

/// Colors applied to every visual element.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Empty board cells, and the whole terminal behind the board.
    pub background: Color,
    /// Alternate board cells; draws the faint grid.
    pub grid: Color,
    /// Background star shades, dimmest last.
    pub stars: [Color; 3],
    pub snake_head: Color,
    /// Body segments alternate between these two.
    pub snake_body: Color,
    pub snake_body_alt: Color,
    pub snake_eyes: Color,
    pub food: Color,
    pub score: Color,
    pub game_over: Color,
    pub border: Color,
    pub button_fg: Color,
    pub button_bg: Color,
    pub hint: Color,
}

pub const THEME_NEON: Theme = Theme {
    background: Color::Rgb(0x05, 0x05, 0x10),
    grid: Color::Rgb(0x0f, 0x0f, 0x1f),
    stars: [
        Color::Rgb(0x55, 0x55, 0x66),
        Color::Rgb(0x33, 0x33, 0x44),
        Color::Rgb(0x1a, 0x1a, 0x2e),
    ],
    snake_head: Color::Rgb(0xcc, 0xff, 0x00),
    snake_body: Color::Rgb(0x00, 0xff, 0x00),
    snake_body_alt: Color::Rgb(0x00, 0xcc, 0x00),
    snake_eyes: Color::Black,
    food: Color::Rgb(0xff, 0x00, 0x44),
    score: Color::Rgb(0x00, 0xff, 0xff),
    game_over: Color::Rgb(0xff, 0x00, 0x00),
    border: Color::Rgb(0x33, 0x33, 0x44),
    button_fg: Color::White,
    button_bg: Color::Rgb(0xff, 0x00, 0x44),
    hint: Color::Rgb(0x55, 0x55, 0x66),
};

/// Glyphs for one board cell, which spans two terminal columns.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    pub empty: &'static str,
    pub star: &'static str,
    pub snake_head: &'static str,
    pub snake_body: &'static str,
    pub food: &'static str,
    /// Separator between HUD items.
    pub separator: &'static str,
    pub border: border::Set,
}

pub const GLYPHS_UNICODE: Glyphs = Glyphs {
    empty: "  ",
    star: "· ",
    snake_head: "▪▪",
    snake_body: "██",
    food: "◖◗",
    separator: " · ",
    border: border::ROUNDED,
};

pub const GLYPHS_ASCII: Glyphs = Glyphs {
    empty: "  ",
    star: ". ",
    snake_head: "::",
    snake_body: "##",
    food: "()",
    separator: " | ",
    border: border::Set {
        top_left: "+",
        top_right: "+",
        bottom_left: "+",
        bottom_right: "+",
        vertical_left: "|",
        vertical_right: "|",
        horizontal_top: "-",
        horizontal_bottom: "-",
    },
};

/// Palette and glyph set used for one session.
#[derive(Debug, Clone, Copy)]
pub struct Skin {
    pub theme: &'static Theme,
    pub glyphs: &'static Glyphs,
}

impl Skin {
    #[must_use]
    pub fn new(ascii: bool) -> Self {
        Self {
            theme: &THEME_NEON,
            glyphs: if ascii { &GLYPHS_ASCII } else { &GLYPHS_UNICODE },
        }
    }
}
