use crate::foundation::error::{MorphError, MorphResult};

pub use kurbo::{BezPath, CubicBez, Point, Size, Vec2};

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    pub num: u32,
    pub den: u32, // must be > 0
}

impl Fps {
    pub fn new(num: u32, den: u32) -> MorphResult<Self> {
        if den == 0 {
            return Err(MorphError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(MorphError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    pub fn frame_duration_secs(self) -> f64 {
        f64::from(self.den) / f64::from(self.num)
    }

    pub fn frames_to_secs(self, frames: u64) -> f64 {
        (frames as f64) * self.frame_duration_secs()
    }

    pub fn secs_to_frames_ceil(self, secs: f64) -> u64 {
        // Tolerate float noise so that e.g. 1.0s at 30fps stays 30 frames.
        let frames = secs * self.as_f64();
        (frames - 1e-9).ceil().max(0.0) as u64
    }
}

/// Straight-alpha RGBA8 color used for fill and stroke attributes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn transparent() -> Self {
        Self::new(0, 0, 0, 0)
    }

    /// Same color with alpha zero; fading "from nothing" keeps the hue stable.
    pub fn cleared(self) -> Self {
        Self { a: 0, ..self }
    }

    /// Parse `#rgb`, `#rrggbb` or `#rrggbbaa`.
    pub fn from_hex(s: &str) -> MorphResult<Self> {
        let hex = s
            .trim()
            .strip_prefix('#')
            .ok_or_else(|| MorphError::validation(format!("color '{s}' must start with '#'")))?;

        fn nibble(c: u8) -> Option<u8> {
            (c as char).to_digit(16).map(|d| d as u8)
        }

        let bytes = hex.as_bytes();
        let parsed = match bytes.len() {
            3 => bytes
                .iter()
                .map(|&c| nibble(c).map(|n| n * 17))
                .collect::<Option<Vec<_>>>()
                .map(|v| Self::new(v[0], v[1], v[2], 255)),
            6 | 8 => bytes
                .chunks(2)
                .map(|p| Some(nibble(p[0])? * 16 + nibble(p[1])?))
                .collect::<Option<Vec<_>>>()
                .map(|v| Self::new(v[0], v[1], v[2], v.get(3).copied().unwrap_or(255))),
            _ => None,
        };
        parsed.ok_or_else(|| MorphError::validation(format!("invalid hex color '{s}'")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
