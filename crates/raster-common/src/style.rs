//! Color and color ramp types for raster visualization.

use crate::error::{RasterError, RasterResult};
use serde::{Deserialize, Serialize};

/// Color value in RGBA format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn transparent() -> Self {
        Self {
            r: 0,
            g: 0,
            b: 0,
            a: 0,
        }
    }

    /// Parse a hex color string: "#RRGGBB" or "#RRGGBBAA".
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');

        match hex.len() {
            6 | 8 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                let a = if hex.len() == 8 {
                    u8::from_str_radix(&hex[6..8], 16).ok()?
                } else {
                    255
                };
                Some(Self { r, g, b, a })
            }
            _ => None,
        }
    }

    /// The channel values as `[r, g, b, a]`.
    pub fn to_array(&self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<[u8; 4]> for Color {
    fn from(c: [u8; 4]) -> Self {
        Self {
            r: c[0],
            g: c[1],
            b: c[2],
            a: c[3],
        }
    }
}

/// An ordered sequence of RGBA stops, implicitly positioned at equal
/// intervals over [0, 1].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorRamp {
    stops: Vec<Color>,
}

impl ColorRamp {
    /// Create a ramp from ordered stops. At least 2 stops are required for
    /// the segment arithmetic to be well defined.
    pub fn new(stops: Vec<Color>) -> RasterResult<Self> {
        if stops.len() < 2 {
            return Err(RasterError::InvalidRamp(format!(
                "ramp needs at least 2 stops, got {}",
                stops.len()
            )));
        }
        Ok(Self { stops })
    }

    /// Parse a ramp from a JSON array of `[r, g, b, a]` stop arrays.
    pub fn from_json(json: &str) -> RasterResult<Self> {
        let raw: Vec<[u8; 4]> = serde_json::from_str(json)?;
        Self::new(raw.into_iter().map(Color::from).collect())
    }

    /// The ordered stops.
    pub fn stops(&self) -> &[Color] {
        &self.stops
    }

    /// Number of stops.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Light gray to black, the conventional single-band display ramp.
    pub fn grayscale() -> Self {
        Self {
            stops: vec![Color::new(200, 200, 200, 255), Color::new(0, 0, 0, 255)],
        }
    }

    /// Red to blue diverging ramp.
    pub fn red_blue() -> Self {
        Self {
            stops: vec![Color::new(200, 0, 0, 255), Color::new(0, 0, 200, 255)],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        assert_eq!(Color::from_hex("#FF0000"), Some(Color::new(255, 0, 0, 255)));
        assert_eq!(Color::from_hex("00FF00"), Some(Color::new(0, 255, 0, 255)));
        assert_eq!(
            Color::from_hex("#0000FF80"),
            Some(Color::new(0, 0, 255, 128))
        );
        assert_eq!(Color::from_hex("#GGGGGG"), None);
        assert_eq!(Color::from_hex("#FFF"), None);
    }

    #[test]
    fn test_ramp_requires_two_stops() {
        assert!(ColorRamp::new(vec![Color::new(0, 0, 0, 255)]).is_err());
        assert!(ColorRamp::new(vec![]).is_err());
        assert!(ColorRamp::new(vec![
            Color::new(0, 0, 0, 255),
            Color::new(255, 255, 255, 255)
        ])
        .is_ok());
    }

    #[test]
    fn test_ramp_from_json() {
        let ramp = ColorRamp::from_json("[[200,0,0,255],[0,0,200,255]]").unwrap();
        assert_eq!(ramp.len(), 2);
        assert_eq!(ramp.stops()[0], Color::new(200, 0, 0, 255));
        assert_eq!(ramp.stops()[1], Color::new(0, 0, 200, 255));

        assert!(ColorRamp::from_json("[[1,2,3,255]]").is_err());
        assert!(ColorRamp::from_json("not json").is_err());
    }
}
