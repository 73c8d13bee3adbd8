//! Interfaces the obstacle sampler is written against

use super::stereo_data::{DepthError, DepthEstimate, SearchParameters};
use crate::location::Coordinates;
use crate::projection::DepthParameters;

/// Read-only random access to an image's intensities
pub trait StereoImage {
    /// Width and height in pixels
    fn dimensions(&self) -> (u32, u32);

    /// Intensity of the pixel at (x, y); callers keep (x, y) inside `dimensions`
    fn intensity(&self, x: u32, y: u32) -> u8;
}

/// Estimates the depth of whatever is visible at a pixel of the left image
pub trait DepthEstimator: Send + Sync {
    fn estimate_depth<L, R>(
        &self,
        lhs: &L,
        rhs: &R,
        at: Coordinates,
        search: &SearchParameters,
        params: &DepthParameters,
    ) -> Result<DepthEstimate, DepthError>
    where
        L: StereoImage + ?Sized,
        R: StereoImage + ?Sized;
}
