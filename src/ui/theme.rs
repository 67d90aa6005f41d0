use ratatui::style::Color;

pub const GIFT_ORANGE: Color = Color::Rgb(0xe9, 0x81, 0x30);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const LABEL_TEXT: Color = Color::Rgb(0x80, 0x80, 0x80);
pub const INPUT_BORDER: Color = Color::Rgb(0x35, 0x37, 0x40);
pub const SELECTOR_BG: Color = Color::Rgb(0xdc, 0xdc, 0xdc);
pub const SELECTOR_TEXT: Color = Color::Rgb(0x20, 0x20, 0x20);
pub const BUTTON_TEXT: Color = Color::Rgb(0xff, 0xff, 0xff);
pub const POPUP_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
