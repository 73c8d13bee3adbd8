//! Location operations - pure conversion functions

use super::location_data::{Location, PolarLocation};
use crate::error::{PerceptionError, PerceptionResult};
use cgmath::{InnerSpace, Vector3};

/// Convert a location to a real-valued vector
pub fn location_to_vector(location: Location) -> Vector3<f64> {
    Vector3::new(location.x as f64, location.y as f64, location.z as f64)
}

/// Round a real-valued vector to the nearest location (halves away from zero)
pub fn location_from_vector(vector: Vector3<f64>) -> Location {
    Location {
        x: vector.x.round() as i64,
        y: vector.y.round() as i64,
        z: vector.z.round() as i64,
    }
}

/// Convert a polar location to X, Y and Z values
pub fn convert_to_location(polar: PolarLocation) -> Location {
    let (sin_inclination, cos_inclination) = polar.inclination.sin_cos();
    let (sin_rotation, cos_rotation) = polar.rotation.sin_cos();

    location_from_vector(Vector3::new(
        polar.depth * cos_rotation * sin_inclination,
        polar.depth * sin_rotation * sin_inclination,
        polar.depth * cos_inclination,
    ))
}

/// Convert a location to its depth and angles.
///
/// The camera origin has no direction, so a zero-depth location is rejected
/// instead of producing NaN angles.
pub fn convert_to_polar_location(location: Location) -> PerceptionResult<PolarLocation> {
    let vector = location_to_vector(location);
    let depth = vector.magnitude();

    if depth == 0.0 {
        return Err(PerceptionError::DegenerateInput {
            operation: "convert_to_polar_location".to_string(),
            reason: "location is at the camera origin (depth 0)".to_string(),
        });
    }

    Ok(PolarLocation {
        depth,
        inclination: (vector.z / depth).acos(),
        rotation: vector.y.atan2(vector.x),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::f64::consts::{FRAC_PI_2, PI};

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_polar_on_axes() {
        let forward = convert_to_polar_location(Location::new(0, 0, 2400)).expect("non-zero depth");
        assert!(approx_eq(forward.depth, 2400.0));
        assert!(approx_eq(forward.inclination, 0.0));

        let right = convert_to_polar_location(Location::new(50, 0, 0)).expect("non-zero depth");
        assert!(approx_eq(right.inclination, FRAC_PI_2));
        assert!(approx_eq(right.rotation, 0.0));

        // +Y is down, so a point below the camera has positive rotation
        let below = convert_to_polar_location(Location::new(0, 10, 0)).expect("non-zero depth");
        assert!(approx_eq(below.rotation, FRAC_PI_2));

        let left = convert_to_polar_location(Location::new(-3, 0, 4)).expect("non-zero depth");
        assert!(approx_eq(left.depth, 5.0));
        assert!(approx_eq(left.rotation, PI));
    }

    #[test]
    fn test_zero_depth_is_rejected() {
        let result = convert_to_polar_location(Location::new(0, 0, 0));
        assert!(matches!(
            result,
            Err(PerceptionError::DegenerateInput { .. })
        ));
    }

    #[test]
    fn test_convert_to_location_rounds() {
        let polar = PolarLocation {
            depth: 10.0,
            inclination: FRAC_PI_2,
            rotation: PI,
        };
        assert_eq!(convert_to_location(polar), Location::new(-10, 0, 0));

        let straight_ahead = PolarLocation {
            depth: 2400.4,
            inclination: 0.0,
            rotation: 1.0,
        };
        assert_eq!(convert_to_location(straight_ahead), Location::new(0, 0, 2400));
    }

    #[test]
    fn test_polar_round_trip() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..1000 {
            let location = Location::new(
                rng.gen_range(-5000..=5000),
                rng.gen_range(-5000..=5000),
                rng.gen_range(-5000..=5000),
            );
            if location == Location::new(0, 0, 0) {
                continue;
            }

            let polar = convert_to_polar_location(location).expect("non-zero depth");
            let back = convert_to_location(polar);

            assert!((back.x - location.x).abs() <= 1, "{} -> {}", location, back);
            assert!((back.y - location.y).abs() <= 1, "{} -> {}", location, back);
            assert!((back.z - location.z).abs() <= 1, "{} -> {}", location, back);
        }
    }
}
