//! Sum-of-absolute-differences block matching between a rectified stereo pair
//!
//! The patch around the probed pixel of the left image is compared against
//! every candidate position in the search window of the right image. The
//! horizontal distance to the cheapest candidate is the disparity, which gives
//! depth through the camera baseline.

use super::stereo_data::{DepthError, DepthEstimate, SearchParameters};
use super::stereo_interfaces::{DepthEstimator, StereoImage};
use super::stereo_operations::centre_offset_of;
use crate::location::Coordinates;
use crate::projection::DepthParameters;
use cgmath::{InnerSpace, Vector3};

/// Patch-search depth estimator
#[derive(Debug, Clone, Copy, Default)]
pub struct BlockMatcher;

impl BlockMatcher {
    pub fn new() -> Self {
        Self
    }
}

/// Whether a patch of radii (rx, ry) centred on (x, y) lies inside the image
fn patch_fits(x: i64, y: i64, rx: i64, ry: i64, width: u32, height: u32) -> bool {
    x - rx >= 0 && y - ry >= 0 && x + rx < i64::from(width) && y + ry < i64::from(height)
}

/// Absolute difference between two patches, or None once the running total
/// reaches `bound`
fn patch_cost<L, R>(
    lhs: &L,
    rhs: &R,
    lhs_centre: (i64, i64),
    rhs_centre: (i64, i64),
    radii: (i64, i64),
    bound: u64,
) -> Option<u64>
where
    L: StereoImage + ?Sized,
    R: StereoImage + ?Sized,
{
    let mut cost = 0u64;

    for dy in -radii.1..=radii.1 {
        for dx in -radii.0..=radii.0 {
            let a = lhs.intensity((lhs_centre.0 + dx) as u32, (lhs_centre.1 + dy) as u32);
            let b = rhs.intensity((rhs_centre.0 + dx) as u32, (rhs_centre.1 + dy) as u32);
            cost += u64::from(a.abs_diff(b));
        }
        if cost >= bound {
            return None;
        }
    }

    Some(cost)
}

impl DepthEstimator for BlockMatcher {
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
        R: StereoImage + ?Sized,
    {
        let (lhs_width, lhs_height) = lhs.dimensions();
        let (rhs_width, rhs_height) = rhs.dimensions();

        let radii = (
            i64::from(search.neighbourhood_radii.x),
            i64::from(search.neighbourhood_radii.y),
        );
        let centre = (i64::from(at.x), i64::from(at.y));

        if !patch_fits(centre.0, centre.1, radii.0, radii.1, lhs_width, lhs_height) {
            return Err(DepthError::OffImage {
                x: centre.0,
                y: centre.1,
            });
        }

        let window_x = centre.0 + search.search_offset.x;
        let window_y = centre.1 + search.search_offset.y;
        let search_x = i64::from(search.search_radii.x);
        let search_y = i64::from(search.search_radii.y);

        // (cost, candidate x)
        let mut best: Option<(u64, i64)> = None;

        for v in (window_y - search_y)..=(window_y + search_y) {
            for u in (window_x - search_x)..=(window_x + search_x) {
                if !patch_fits(u, v, radii.0, radii.1, rhs_width, rhs_height) {
                    continue;
                }

                let bound = best.map_or(u64::MAX, |(cost, _)| cost);
                if let Some(cost) = patch_cost(lhs, rhs, centre, (u, v), radii, bound) {
                    best = Some((cost, u));
                }
            }
        }

        let (best_cost, best_x) = best.ok_or(DepthError::NoMatch {
            best_cost: u64::MAX,
            max_cost: search.max_cost,
        })?;

        if best_cost > search.max_cost {
            return Err(DepthError::NoMatch {
                best_cost,
                max_cost: search.max_cost,
            });
        }

        let disparity = (centre.0 - best_x).abs();
        if disparity == 0 {
            return Err(DepthError::ZeroDisparity);
        }

        let centre_offset = centre_offset_of(lhs, at);

        // Depth along Z from the disparity, then stretched to the pixel's ray
        let z = params.focal_length * params.camera_displacement.abs()
            / (disparity as f64 * params.pixel_scale);
        let ray = Vector3::new(
            centre_offset.x as f64 * params.pixel_scale,
            centre_offset.y as f64 * params.pixel_scale,
            params.focal_length,
        );
        let depth = z * ray.magnitude() / params.focal_length;

        log::trace!(
            "[BlockMatcher::estimate_depth] ({}, {}) disparity={} cost={} depth={:.1}",
            at.x,
            at.y,
            disparity,
            best_cost,
            depth
        );

        Ok(DepthEstimate {
            depth,
            centre_offset,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::Offset;
    use crate::stereo::stereo_data::Radii;
    use image::{GrayImage, Luma};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    const WIDTH: u32 = 120;
    const HEIGHT: u32 = 40;

    /// Random texture and a copy of it shifted left by `disparity` pixels
    fn shifted_pair(disparity: u32) -> (GrayImage, GrayImage) {
        let mut rng = StdRng::seed_from_u64(42);
        let lhs = GrayImage::from_fn(WIDTH, HEIGHT, |_, _| Luma([rng.gen::<u8>()]));
        let rhs = GrayImage::from_fn(WIDTH, HEIGHT, |x, y| {
            *lhs.get_pixel((x + disparity).min(WIDTH - 1), y)
        });
        (lhs, rhs)
    }

    fn search() -> SearchParameters {
        SearchParameters {
            neighbourhood_radii: Radii { x: 3, y: 3 },
            search_offset: Offset::new(-10, 0),
            search_radii: Radii { x: 10, y: 2 },
            max_cost: 10_000,
        }
    }

    #[test]
    fn test_recovers_disparity_depth() {
        let (lhs, rhs) = shifted_pair(8);
        let params = DepthParameters::default();

        let estimate = BlockMatcher::new()
            .estimate_depth(&lhs, &rhs, Coordinates::new(60, 20), &search(), &params)
            .expect("textured images should match");

        let expected = params.focal_length * params.camera_displacement / (8.0 * params.pixel_scale);
        assert!((estimate.depth - expected).abs() < 1e-6);
        assert_eq!(estimate.centre_offset, Offset::new(0, 0));
    }

    #[test]
    fn test_off_centre_depth_is_ray_length() {
        let (lhs, rhs) = shifted_pair(5);
        let params = DepthParameters::default();

        let estimate = BlockMatcher::new()
            .estimate_depth(&lhs, &rhs, Coordinates::new(40, 10), &search(), &params)
            .expect("textured images should match");

        assert_eq!(estimate.centre_offset, Offset::new(-20, -10));
        let z = params.focal_length * params.camera_displacement / (5.0 * params.pixel_scale);
        assert!(estimate.depth > z);
    }

    #[test]
    fn test_unmatched_patch_reports_no_match() {
        let lhs = GrayImage::from_pixel(WIDTH, HEIGHT, Luma([255]));
        let rhs = GrayImage::from_pixel(WIDTH, HEIGHT, Luma([0]));

        let result = BlockMatcher::new().estimate_depth(
            &lhs,
            &rhs,
            Coordinates::new(60, 20),
            &search(),
            &DepthParameters::default(),
        );

        assert_eq!(
            result,
            Err(DepthError::NoMatch {
                best_cost: 255 * 49,
                max_cost: 10_000
            })
        );
    }

    #[test]
    fn test_identical_images_have_zero_disparity() {
        let (lhs, _) = shifted_pair(0);
        let mut search = search();
        search.search_offset = Offset::new(0, 0);

        let result = BlockMatcher::new().estimate_depth(
            &lhs,
            &lhs,
            Coordinates::new(60, 20),
            &search,
            &DepthParameters::default(),
        );
        assert_eq!(result, Err(DepthError::ZeroDisparity));
    }

    #[test]
    fn test_patch_off_image() {
        let (lhs, rhs) = shifted_pair(8);
        let result = BlockMatcher::new().estimate_depth(
            &lhs,
            &rhs,
            Coordinates::new(1, 20),
            &search(),
            &DepthParameters::default(),
        );
        assert_eq!(result, Err(DepthError::OffImage { x: 1, y: 20 }));
    }
}
