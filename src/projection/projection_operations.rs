//! Projection operations - pure functions on DepthParameters
//!
//! One formulation is used in both directions: similar triangles between the
//! camera plane (at `focal_length` along Z) and the observed location.

use super::projection_data::DepthParameters;
use crate::error::{PerceptionError, PerceptionResult};
use crate::location::{location_from_vector, Location, Offset};
use cgmath::{InnerSpace, Vector3};

// ============================================================================
// CONSTRUCTION
// ============================================================================

/// Create depth parameters, rejecting values the projection cannot use
pub fn create_depth_parameters(
    focal_length: f64,
    pixel_scale: f64,
    camera_displacement: f64,
) -> PerceptionResult<DepthParameters> {
    let params = DepthParameters {
        focal_length,
        pixel_scale,
        camera_displacement,
    };
    validate_depth_parameters(&params)?;
    Ok(params)
}

/// Validate that focal length and pixel scale are positive and finite, and the
/// baseline is non-zero
pub fn validate_depth_parameters(params: &DepthParameters) -> PerceptionResult<()> {
    let checks = [
        ("depth.focal_length", params.focal_length),
        ("depth.pixel_scale", params.pixel_scale),
    ];

    for (field, value) in checks {
        if !(value.is_finite() && value > 0.0) {
            return Err(PerceptionError::InvalidConfig {
                field: field.to_string(),
                value: value.to_string(),
                reason: "must be positive and finite".to_string(),
            });
        }
    }

    // Zero baseline turns every disparity into zero depth
    if !(params.camera_displacement.is_finite() && params.camera_displacement != 0.0) {
        return Err(PerceptionError::InvalidConfig {
            field: "depth.camera_displacement".to_string(),
            value: params.camera_displacement.to_string(),
            reason: "must be non-zero and finite".to_string(),
        });
    }

    Ok(())
}

// ============================================================================
// PROJECTION
// ============================================================================

/// Determine the offset from the image centre of the pixel where an obstacle
/// at `location` would appear.
///
/// A location with Z == 0 lies in the lens plane and has no defined pixel;
/// it is clamped to the centre offset (0, 0).
pub fn determine_pixel_offset_of_location(location: Location, params: &DepthParameters) -> Offset {
    debug_assert!(params.focal_length > 0.0 && params.pixel_scale > 0.0);

    // On the camera plane the focal length is the effective Z value
    let scale = location.z as f64 / params.focal_length;

    let (true_x, true_y) = if scale == 0.0 {
        (0.0, 0.0)
    } else {
        (location.x as f64 / scale, location.y as f64 / scale)
    };

    Offset {
        x: (true_x / params.pixel_scale).round() as i64,
        y: (true_y / params.pixel_scale).round() as i64,
    }
}

/// Determine the location of an obstacle `depth` away from the camera, seen at
/// the pixel `centre_offset` away from the image centre.
pub fn determine_location_of_pixel_offset(
    depth: f64,
    centre_offset: Offset,
    params: &DepthParameters,
) -> Location {
    debug_assert!(params.focal_length > 0.0 && params.pixel_scale > 0.0);

    let camera_plane_point = Vector3::new(
        centre_offset.x as f64 * params.pixel_scale,
        centre_offset.y as f64 * params.pixel_scale,
        params.focal_length,
    );

    // Ray length from the lens to the pixel on the camera plane
    let hypotenuse = camera_plane_point.magnitude();
    let scale = depth / hypotenuse;

    location_from_vector(camera_plane_point * scale)
}
