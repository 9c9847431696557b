//! Render sink trait

use crate::frame::Region;

/// Destination of changed frame regions
///
/// The renderer decides what changed and from which row; the sink decides
/// how those pixels reach the panel (SPI window writes, a `DrawTarget`,
/// a host window).
pub trait RenderSink {
    /// Transfer error
    type Error;

    /// Transfer `region` to the display
    ///
    /// On error the driver assumes the panel content is unknown and sends
    /// the next frame whole.
    fn push_region(&mut self, region: Region<'_>) -> Result<(), Self::Error>;
}

impl<S: RenderSink + ?Sized> RenderSink for &mut S {
    type Error = S::Error;

    fn push_region(&mut self, region: Region<'_>) -> Result<(), Self::Error> {
        (**self).push_region(region)
    }
}
