pub mod color;

pub use color::RgbaColor;
