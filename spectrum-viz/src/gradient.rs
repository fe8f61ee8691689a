//! Meter fill colors: flat color or a vertical linear gradient.

use alloc::vec::Vec;

use embedded_graphics::{pixelcolor::Rgb888, prelude::*};

use crate::config::{ColorStop, MeterFill};

/// Vertical span of the gradient in pixels. Fixed reference height,
/// independent of the actual canvas height.
pub const GRADIENT_SPAN: f32 = 300.0;

/// A vertical linear gradient over `0..GRADIENT_SPAN`.
///
/// Stops are taken verbatim from the configuration. Rows above the first
/// stop and below the last clamp to the outermost colors; a non-monotonic
/// stop sequence produces undefined visuals rather than an error.
pub struct LinearGradient {
    stops: Vec<ColorStop>,
}

impl LinearGradient {
    pub fn new(stops: Vec<ColorStop>) -> Self {
        Self { stops }
    }

    /// Color of the horizontal row at canvas height `y`.
    pub fn color_at(&self, y: i32) -> Rgb888 {
        let Some(first) = self.stops.first() else {
            return Rgb888::BLACK;
        };
        let t = (y as f32 / GRADIENT_SPAN).clamp(0.0, 1.0);
        if t <= first.stop {
            return first.color;
        }
        for pair in self.stops.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if t <= b.stop {
                let span = b.stop - a.stop;
                let f = if span > 0.0 { (t - a.stop) / span } else { 1.0 };
                return lerp_rgb(a.color, b.color, f);
            }
        }
        self.stops[self.stops.len() - 1].color
    }
}

/// Resolved fill for the meter rectangles.
pub enum FillStyle {
    Solid(Rgb888),
    Gradient(LinearGradient),
}

impl FillStyle {
    /// Flat colors fill flat; stop sequences become a vertical gradient.
    pub fn from_config(fill: &MeterFill) -> Self {
        match fill {
            MeterFill::Solid(color) => FillStyle::Solid(*color),
            MeterFill::Gradient(stops) => FillStyle::Gradient(LinearGradient::new(stops.clone())),
        }
    }
}

fn lerp_rgb(a: Rgb888, b: Rgb888, f: f32) -> Rgb888 {
    let channel = |from: u8, to: u8| {
        (from as f32 + (to as f32 - from as f32) * f).clamp(0.0, 255.0) as u8
    };
    Rgb888::new(
        channel(a.r(), b.r()),
        channel(a.g(), b.g()),
        channel(a.b(), b.b()),
    )
}
