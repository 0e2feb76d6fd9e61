use serde::{Serialize, Serializer};
use std::fmt;

/// 24-bit RGB color. Displays as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RgbColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn channels(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    pub fn to_hex(&self) -> String {
        self.to_string()
    }

    pub fn to_colorgrad(&self) -> colorgrad::Color {
        colorgrad::Color::from_rgba8(self.r, self.g, self.b, 255)
    }
}

impl From<colorgrad::Color> for RgbColor {
    fn from(color: colorgrad::Color) -> Self {
        let rgba8 = color.to_rgba8();
        RgbColor::new(rgba8[0], rgba8[1], rgba8[2])
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

// Serialized as the hex string so JSON consumers can use it as a CSS color directly
impl Serialize for RgbColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_is_zero_padded_lowercase() {
        assert_eq!(RgbColor::new(0, 0, 255).to_hex(), "#0000ff");
        assert_eq!(RgbColor::new(0xab, 0x0c, 0x01).to_hex(), "#ab0c01");
    }

    #[test]
    fn serializes_as_hex_string() {
        let json = serde_json::to_string(&RgbColor::new(255, 128, 128)).unwrap();
        assert_eq!(json, "\"#ff8080\"");
    }

    #[test]
    fn colorgrad_conversion_keeps_channels() {
        let original = RgbColor::new(12, 200, 99);
        assert_eq!(RgbColor::from(original.to_colorgrad()), original);
    }
}
