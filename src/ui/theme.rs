use ratatui::style::Color;

pub const TITLE: Color = Color::Rgb(0x60, 0xa5, 0xfa);
pub const CARD_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const TEXT_DIM: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const SUCCESS: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const BADGE: Color = Color::Rgb(0xf5, 0x9e, 0x0b);
