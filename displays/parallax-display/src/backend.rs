//! `embedded-graphics` render sink
//!
//! Streams changed frame rows into any `DrawTarget<Color = Rgb565>`.

use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::geometry::{Dimensions, Point, Size};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::primitives::Rectangle;
use parallax_core::{Region, RenderSink};

use crate::color::to_rgb565;

/// Sink errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SinkError<E> {
    /// Region does not fit inside the display at the configured origin
    InvalidCoordinates,
    /// The display driver failed
    Display(E),
}

/// Render sink backed by an `embedded-graphics` draw target
///
/// Frame row `r` is drawn at `origin.y + r`, column `c` at `origin.x + c`,
/// which lets a 96x64 scene sit anywhere on a larger panel.
#[derive(Debug)]
pub struct DrawTargetSink<D> {
    display: D,
    origin: Point,
    regions: u32,
}

impl<D> DrawTargetSink<D>
where
    D: DrawTarget<Color = Rgb565>,
{
    /// Sink drawing the frame at the display's top-left corner
    pub fn new(display: D) -> Self {
        Self::with_origin(display, Point::zero())
    }

    /// Sink drawing the frame with its top-left corner at `origin`
    pub fn with_origin(display: D, origin: Point) -> Self {
        Self {
            display,
            origin,
            regions: 0,
        }
    }

    /// Number of regions drawn so far
    pub fn regions(&self) -> u32 {
        self.regions
    }

    /// Borrow the display
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Borrow the display mutably
    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    /// Give the display back
    pub fn release(self) -> D {
        self.display
    }

    /// Display area covered by `region`
    fn area(&self, region: &Region<'_>) -> Option<Rectangle> {
        let row = i32::try_from(region.origin_row).ok()?;
        let width = u32::try_from(region.width).ok()?;
        let height = u32::try_from(region.height).ok()?;
        Some(Rectangle::new(
            self.origin + Point::new(0, row),
            Size::new(width, height),
        ))
    }
}

impl<D> RenderSink for DrawTargetSink<D>
where
    D: DrawTarget<Color = Rgb565>,
{
    type Error = SinkError<D::Error>;

    fn push_region(&mut self, region: Region<'_>) -> Result<(), Self::Error> {
        if region.is_empty() {
            return Ok(());
        }
        if region.pixels.len() != region.width * region.height {
            return Err(SinkError::InvalidCoordinates);
        }

        let area = self.area(&region).ok_or(SinkError::InvalidCoordinates)?;
        if self.display.bounding_box().intersection(&area) != area {
            return Err(SinkError::InvalidCoordinates);
        }

        self.display
            .fill_contiguous(&area, region.pixels.iter().map(|p| to_rgb565(*p)))
            .map_err(SinkError::Display)?;
        self.regions = self.regions.wrapping_add(1);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::geometry::OriginDimensions;
    use embedded_graphics::pixelcolor::RgbColor;
    use embedded_graphics::Pixel;
    use parallax_core::{FrameBuffer, SceneDriver, LANDSCAPE};

    /// In-memory panel
    struct Panel<const W: usize, const H: usize> {
        pixels: [[Rgb565; W]; H],
        fail: bool,
    }

    impl<const W: usize, const H: usize> Panel<W, H> {
        fn new() -> Self {
            Self {
                pixels: [[Rgb565::BLACK; W]; H],
                fail: false,
            }
        }
    }

    impl<const W: usize, const H: usize> OriginDimensions for Panel<W, H> {
        fn size(&self) -> Size {
            Size::new(W as u32, H as u32)
        }
    }

    impl<const W: usize, const H: usize> DrawTarget for Panel<W, H> {
        type Color = Rgb565;
        type Error = ();

        fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
        where
            I: IntoIterator<Item = Pixel<Self::Color>>,
        {
            if self.fail {
                return Err(());
            }
            for Pixel(point, color) in pixels {
                let (Ok(x), Ok(y)) = (usize::try_from(point.x), usize::try_from(point.y)) else {
                    continue;
                };
                if x < W && y < H {
                    self.pixels[y][x] = color;
                }
            }
            Ok(())
        }
    }

    #[test]
    fn test_region_drawn_at_row() {
        let mut frame: FrameBuffer<4, 3> = FrameBuffer::new(0);
        frame.set(2, 1, 0xF800);
        frame.set(3, 2, 0x001F);

        let mut sink = DrawTargetSink::new(Panel::<4, 3>::new());
        sink.push_region(frame.region_from(1)).unwrap();

        let panel = sink.display();
        assert_eq!(panel.pixels[1][2], Rgb565::RED);
        assert_eq!(panel.pixels[2][3], Rgb565::BLUE);
        assert_eq!(panel.pixels[0], [Rgb565::BLACK; 4]);
        assert_eq!(sink.regions(), 1);
    }

    #[test]
    fn test_origin_offset() {
        let frame: FrameBuffer<2, 2> = FrameBuffer::new(0xFFFF);
        let mut sink = DrawTargetSink::with_origin(Panel::<4, 4>::new(), Point::new(1, 2));
        sink.push_region(frame.region_from(0)).unwrap();

        let panel = sink.release();
        assert_eq!(panel.pixels[2][1], Rgb565::WHITE);
        assert_eq!(panel.pixels[3][2], Rgb565::WHITE);
        assert_eq!(panel.pixels[1][1], Rgb565::BLACK);
        assert_eq!(panel.pixels[2][3], Rgb565::BLACK);
    }

    #[test]
    fn test_region_too_large() {
        let frame: FrameBuffer<8, 4> = FrameBuffer::new(0);
        let mut sink = DrawTargetSink::new(Panel::<4, 4>::new());
        assert_eq!(
            sink.push_region(frame.region_from(0)),
            Err(SinkError::InvalidCoordinates)
        );
        assert_eq!(sink.regions(), 0);
    }

    #[test]
    fn test_empty_region_is_noop() {
        let frame: FrameBuffer<4, 4> = FrameBuffer::new(0);
        let mut panel = Panel::<4, 4>::new();
        panel.fail = true;
        let mut sink = DrawTargetSink::new(panel);
        assert_eq!(sink.push_region(frame.region_from(4)), Ok(()));
    }

    #[test]
    fn test_display_error_propagates() {
        let frame: FrameBuffer<4, 4> = FrameBuffer::new(0);
        let mut panel = Panel::<4, 4>::new();
        panel.fail = true;
        let mut sink = DrawTargetSink::new(panel);
        assert_eq!(
            sink.push_region(frame.region_from(0)),
            Err(SinkError::Display(()))
        );
    }

    #[test]
    fn test_landscape_on_panel() {
        let mut driver: SceneDriver<'_> = SceneDriver::new(LANDSCAPE);
        let mut sink = DrawTargetSink::new(Panel::<96, 64>::new());
        driver.init().unwrap();

        for time in [0.0, 0.1, 0.2, 3.7] {
            driver.render_frame(time, &mut sink).unwrap();
            let panel = sink.display();
            for (y, row) in driver.previous().rows().iter().enumerate() {
                for (x, pixel) in row.iter().enumerate() {
                    assert_eq!(panel.pixels[y][x], to_rgb565(*pixel), "pixel ({x}, {y})");
                }
            }
        }
    }
}
