//! Color parsing and RGB → HSL conversion.

pub mod conversion;
pub mod parse;

pub use conversion::{rgb_to_hsl, Hsl, Rgb};
pub use parse::{parse_rgb, rgb_from_style};
