//! Draws one frame of meter bars and caps onto a `DrawTarget`.

use core::cmp;

use embedded_graphics::{
    draw_target::DrawTarget,
    geometry::{Point, Size},
    pixelcolor::Rgb888,
    prelude::*,
    primitives::{Line, PrimitiveStyle, Rectangle},
};

use crate::config::SpectrumConfig;
use crate::gradient::FillStyle;

/// Empirical ceiling for the vertical mapping. Magnitudes are 0..255 but map
/// against 270 so peak signals keep headroom below the top edge.
pub const PEAK_CEILING: f32 = 270.0;

const BACKGROUND: Rgb888 = Rgb888::BLACK;

/// Geometry and fill state for the bar/cap draw pass.
pub struct SpectrumRenderer {
    width: u32,
    height: u32,
    cap_color: Rgb888,
    cap_height: u32,
    meter_width: u32,
    gap: u32,
    meter_count: usize,
    fill: FillStyle,
}

impl SpectrumRenderer {
    pub fn new(config: &SpectrumConfig) -> Self {
        Self {
            width: config.width,
            height: config.height,
            cap_color: config.cap_color,
            cap_height: config.cap_height,
            meter_width: config.meter_width,
            gap: config.gap,
            meter_count: config.meter_count,
            fill: FillStyle::from_config(&config.meter_color),
        }
    }

    /// Canvas height minus the cap band.
    pub fn drawable_height(&self) -> u32 {
        self.height.saturating_sub(self.cap_height)
    }

    /// Left edge of bar `i`.
    pub fn bar_x(&self, i: usize) -> i32 {
        (i as u32 * (self.meter_width + self.gap)) as i32
    }

    /// Maps a magnitude in `0..=255` (or a cap position) to a canvas row.
    pub fn value_to_y(&self, value: i16) -> i32 {
        map_value(value as f32, self.drawable_height() as f32) as i32
    }

    /// Clears the entire canvas extent.
    pub fn clear<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        target.clear(BACKGROUND)
    }

    /// Clears and redraws every bar: cap rectangle first, meter below it.
    ///
    /// No partial invalidation; the whole frame repaints each tick.
    pub fn draw_frame<D>(&self, target: &mut D, values: &[u8], caps: &[i16]) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        self.clear(target)?;

        let cap_style = PrimitiveStyle::with_fill(self.cap_color);
        for i in 0..self.meter_count {
            let value = values.get(i).copied().unwrap_or(0) as i16;
            let cap = caps.get(i).copied().unwrap_or(0);
            let x = self.bar_x(i);

            Rectangle::new(
                Point::new(x, self.value_to_y(cap)),
                Size::new(self.meter_width, self.cap_height),
            )
            .into_styled(cap_style)
            .draw(target)?;

            let meter_top = self.value_to_y(value) + self.cap_height as i32;
            match &self.fill {
                FillStyle::Solid(color) => {
                    Rectangle::new(
                        Point::new(x, meter_top),
                        Size::new(self.meter_width, self.drawable_height()),
                    )
                    .into_styled(PrimitiveStyle::with_fill(*color))
                    .draw(target)?;
                }
                FillStyle::Gradient(gradient) => {
                    // Row-by-row so each row picks its gradient color.
                    let bottom = cmp::min(
                        meter_top + self.drawable_height() as i32,
                        self.height as i32,
                    );
                    for y in meter_top..bottom {
                        Line::new(
                            Point::new(x, y),
                            Point::new(x + self.meter_width as i32 - 1, y),
                        )
                        .into_styled(PrimitiveStyle::with_stroke(gradient.color_at(y), 1))
                        .draw(target)?;
                    }
                }
            }
        }
        Ok(())
    }
}

fn map_value(value: f32, drawable_height: f32) -> f32 {
    (PEAK_CEILING - value) * drawable_height / PEAK_CEILING
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MeterFill;
    use approx::assert_abs_diff_eq;
    use core::convert::Infallible;

    struct SinkDisplay {
        size: Size,
    }

    impl OriginDimensions for SinkDisplay {
        fn size(&self) -> Size {
            self.size
        }
    }

    impl DrawTarget for SinkDisplay {
        type Color = Rgb888;
        type Error = Infallible;

        fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
        where
            I: IntoIterator<Item = Pixel<Self::Color>>,
        {
            pixels.into_iter().for_each(drop);
            Ok(())
        }
    }

    fn renderer_with_cap_height(cap_height: u32) -> SpectrumRenderer {
        let config = SpectrumConfig {
            cap_height,
            ..SpectrumConfig::default()
        };
        SpectrumRenderer::new(&config)
    }

    #[test]
    fn ceiling_maps_to_top_and_zero_to_bottom() {
        for cap_height in [0, 2, 17] {
            let renderer = renderer_with_cap_height(cap_height);
            assert_eq!(renderer.value_to_y(270), 0);
            assert_eq!(
                renderer.value_to_y(0),
                renderer.drawable_height() as i32
            );
        }
    }

    #[test]
    fn mapping_is_linear_in_between() {
        // 135 is half the ceiling, so it lands mid-drawable.
        assert_abs_diff_eq!(map_value(135.0, 198.0), 99.0, epsilon = 1e-4);
        assert_abs_diff_eq!(map_value(90.0, 270.0), 180.0, epsilon = 1e-4);
    }

    #[test]
    fn peak_magnitude_keeps_headroom_below_the_top() {
        let renderer = renderer_with_cap_height(2);
        // A full-scale 255 still sits below row 0.
        assert!(renderer.value_to_y(255) > 0);
    }

    #[test]
    fn bars_advance_by_meter_width_plus_gap() {
        let renderer = SpectrumRenderer::new(&SpectrumConfig::default());
        assert_eq!(renderer.bar_x(0), 0);
        assert_eq!(renderer.bar_x(1), 12);
        assert_eq!(renderer.bar_x(7), 84);
    }

    #[test]
    fn gradient_frame_draws_without_error() {
        let renderer = SpectrumRenderer::new(&SpectrumConfig {
            meter_count: 4,
            ..SpectrumConfig::default()
        });
        let mut display = SinkDisplay {
            size: Size::new(300, 200),
        };
        let values = [0u8, 128, 255, 64];
        let caps = [10i16, 130, 255, 64];
        renderer.draw_frame(&mut display, &values, &caps).unwrap();
    }

    #[test]
    fn solid_frame_draws_without_error() {
        let renderer = SpectrumRenderer::new(&SpectrumConfig {
            meter_count: 4,
            meter_color: MeterFill::Solid(Rgb888::MAGENTA),
            ..SpectrumConfig::default()
        });
        let mut display = SinkDisplay {
            size: Size::new(300, 200),
        };
        renderer
            .draw_frame(&mut display, &[200, 0, 50, 255], &[200, 0, 50, 255])
            .unwrap();
    }
}
