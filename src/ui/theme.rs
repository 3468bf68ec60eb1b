use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0x00, 0x6e, 0xb6);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const DIVIDER: Color = Color::Rgb(0xd1, 0xd1, 0xd1);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const MUTED_TEXT: Color = Color::Rgb(0x8e, 0x8e, 0x93);
pub const JOURNEY_LINE: Color = Color::Rgb(0x0a, 0x84, 0xff);
pub const POPUP_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);
