use colored::Color;

pub const PRIMARY: Color = Color::TrueColor { r: 102, g: 187, b: 106 };
pub const ACCENT: Color = Color::TrueColor { r: 255, g: 202, b: 40 };
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;
pub const PLACEHOLDER: Color = Color::BrightBlack;
pub const IPV4_ADDR: Color = Color::TrueColor { r: 79, g: 195, b: 247 };
pub const BINARY: Color = Color::TrueColor { r: 186, g: 104, b: 200 };
pub const FAILURE: Color = Color::Red;
