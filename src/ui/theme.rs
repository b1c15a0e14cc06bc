use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0x58, 0x81, 0x57);
pub const ACCENT_SOFT: Color = Color::Rgb(0xa3, 0xb1, 0x8a);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const DIM_TEXT: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);
