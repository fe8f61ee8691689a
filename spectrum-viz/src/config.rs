//! Component configuration and the drawing-surface identifier.

use alloc::string::String;
use alloc::{vec, vec::Vec};
use core::fmt;

use embedded_graphics::pixelcolor::Rgb888;
use rand::RngCore;

/// Length of an auto-generated surface id.
pub const SURFACE_ID_LEN: usize = 50;

/// Character set for generated surface ids. Uniqueness is all that matters
/// here; the id anchors a drawing surface and is not security sensitive.
const SURFACE_ID_CHARSET: &[u8] =
    b"1234567890-qwertyuiopasdfghjklzxcvbnmQWERTYUIOPASDFGHJKLZXCVBNM";

/// One stop of a vertical meter gradient. `stop` is a fraction in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorStop {
    pub stop: f32,
    pub color: Rgb888,
}

/// Fill for the meter rectangles: a single flat color or an ordered stop
/// sequence defining a vertical gradient.
///
/// Stops are used verbatim; a non-monotonic sequence yields undefined
/// gradient visuals, not an error.
#[derive(Clone, Debug, PartialEq)]
pub enum MeterFill {
    Solid(Rgb888),
    Gradient(Vec<ColorStop>),
}

/// Immutable configuration for one render session.
#[derive(Clone, Debug, PartialEq)]
pub struct SpectrumConfig {
    pub width: u32,
    pub height: u32,
    pub cap_color: Rgb888,
    pub cap_height: u32,
    pub meter_width: u32,
    pub meter_count: usize,
    pub meter_color: MeterFill,
    /// Horizontal gap between meters, in pixels.
    pub gap: u32,
}

impl Default for SpectrumConfig {
    fn default() -> Self {
        Self {
            width: 300,
            height: 200,
            cap_color: Rgb888::new(0xFF, 0xFF, 0xFF),
            cap_height: 2,
            meter_width: 2,
            meter_count: 40 * (2 + 2),
            meter_color: MeterFill::Gradient(vec![
                ColorStop {
                    stop: 0.0,
                    color: Rgb888::new(0xFF, 0x00, 0x00),
                },
                ColorStop {
                    stop: 0.5,
                    color: Rgb888::new(0x0C, 0xD7, 0xFD),
                },
                ColorStop {
                    stop: 1.0,
                    color: Rgb888::new(0xFF, 0x00, 0x00),
                },
            ]),
            gap: 10,
        }
    }
}

/// Identifier of the drawable region a spectrum component owns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SurfaceId(String);

impl SurfaceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SurfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Generates a random 50-character surface id from an injected random source.
///
/// Used when the host does not name the surface itself.
pub fn random_surface_id<R: RngCore + ?Sized>(rng: &mut R) -> SurfaceId {
    let mut id = String::with_capacity(SURFACE_ID_LEN);
    for _ in 0..SURFACE_ID_LEN {
        let idx = rng.next_u32() as usize % SURFACE_ID_CHARSET.len();
        id.push(SURFACE_ID_CHARSET[idx] as char);
    }
    SurfaceId(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn default_config_matches_reference_defaults() {
        let config = SpectrumConfig::default();
        assert_eq!(config.width, 300);
        assert_eq!(config.height, 200);
        assert_eq!(config.cap_color, Rgb888::new(255, 255, 255));
        assert_eq!(config.cap_height, 2);
        assert_eq!(config.meter_width, 2);
        assert_eq!(config.meter_count, 160);
        assert_eq!(config.gap, 10);
        match &config.meter_color {
            MeterFill::Gradient(stops) => {
                assert_eq!(stops.len(), 3);
                assert_eq!(stops[0].stop, 0.0);
                assert_eq!(stops[1].color, Rgb888::new(0x0C, 0xD7, 0xFD));
                assert_eq!(stops[2].stop, 1.0);
            }
            MeterFill::Solid(_) => panic!("default fill should be a gradient"),
        }
    }

    #[test]
    fn generated_id_has_expected_length_and_charset() {
        let mut rng = SmallRng::seed_from_u64(7);
        let id = random_surface_id(&mut rng);
        assert_eq!(id.as_str().len(), SURFACE_ID_LEN);
        for ch in id.as_str().bytes() {
            assert!(SURFACE_ID_CHARSET.contains(&ch), "unexpected char {}", ch);
        }
    }

    #[test]
    fn generated_ids_differ_across_rng_states() {
        let mut rng = SmallRng::seed_from_u64(7);
        let first = random_surface_id(&mut rng);
        let second = random_surface_id(&mut rng);
        assert_ne!(first, second);
    }
}
