use crate::core::Colour;
use crate::core::types::Point2;

/// A single radiance sample at a subpixel position, written by a row task
/// and later splatted into the accumulator by [`crate::image::Image::commit_samples`].
#[derive(Copy, Clone, Debug, Default)]
pub struct Sample {
    pub position: Point2,
    pub color: Colour,
}
