use serde::{Deserialize, Serialize};

/// Display color of a star as 8-bit RGB
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StellarColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl StellarColor {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Approximate blackbody color for an effective temperature in Kelvin
    ///
    /// Temperatures are clamped to 1000-40000 K before conversion.
    pub fn from_temperature(kelvin: f64) -> Self {
        let t = kelvin.clamp(1000.0, 40000.0) / 100.0;

        let red = if t <= 66.0 {
            255.0
        } else {
            329.698_727_446 * (t - 60.0).powf(-0.133_204_759_2)
        };

        let green = if t <= 66.0 {
            99.470_802_586_1 * t.ln() - 161.119_568_166_1
        } else {
            288.122_169_528_3 * (t - 60.0).powf(-0.075_514_849_2)
        };

        let blue = if t >= 66.0 {
            255.0
        } else if t <= 19.0 {
            0.0
        } else {
            138.517_731_223_1 * (t - 10.0).ln() - 305.044_792_730_7
        };

        Self::new(channel(red), channel(green), channel(blue))
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

fn channel(value: f64) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}
