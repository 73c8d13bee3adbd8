//! Obstacle sampling operations
//!
//! One probe is taken per grid column on the far face of the map (Z = z_max),
//! spaced one cell apart in X and Y. If every obstacle sat at the far face,
//! every cell on that face would be probed. Each probe is projected into the
//! left image, the depth estimator reports what is actually visible there, and
//! the result is back-projected and marked in the map.
//!
//! Columns are independent: each produces a `ColumnOutcome` without touching
//! the map, and outcomes are written afterwards. The parallel sampler relies on
//! this so two columns landing in the same cell never race.

use super::obstacles_data::{ColumnOutcome, SamplingReport};
use crate::config::{validate_config, PerceptionConfig};
use crate::error::PerceptionResult;
use crate::location::{Coordinates, Location};
use crate::occupancy::{
    cell_index, create_occupancy_map, set_cell_by_index, CellState, MapExtents, OccupancyMap,
};
use crate::projection::{
    determine_location_of_pixel_offset, determine_pixel_offset_of_location,
    validate_depth_parameters, DepthParameters,
};
use crate::stereo::{to_absolute_coordinates, DepthError, DepthEstimator, SearchParameters, StereoImage};
#[cfg(feature = "parallel")]
use crate::thread_pool::create_sampling_pool;

/// Far-face probe locations, X outermost then Y
pub fn far_plane_probes(extents: &MapExtents) -> Vec<Location> {
    let step = extents.cell_size.max(1) as usize;

    (-extents.x_max..extents.x_max)
        .step_by(step)
        .flat_map(|x| {
            (-extents.y_max..extents.y_max)
                .step_by(step)
                .map(move |y| Location::new(x, y, extents.z_max))
        })
        .collect()
}

/// Locate the obstacle visible at `at` in the left image
pub fn locate_obstacle_at_coordinates<L, R, E>(
    lhs: &L,
    rhs: &R,
    at: Coordinates,
    search: &SearchParameters,
    params: &DepthParameters,
    estimator: &E,
) -> Result<Location, DepthError>
where
    L: StereoImage + ?Sized,
    R: StereoImage + ?Sized,
    E: DepthEstimator,
{
    let estimate = estimator.estimate_depth(lhs, rhs, at, search, params)?;

    // NaN or non-positive depth would back-project onto the camera origin
    if !(estimate.depth.is_finite() && estimate.depth > 0.0) {
        return Err(DepthError::InvalidDepth {
            depth: estimate.depth,
        });
    }

    Ok(determine_location_of_pixel_offset(
        estimate.depth,
        estimate.centre_offset,
        params,
    ))
}

/// Probe one column without modifying the map
pub fn sample_column<L, R, E>(
    map: &OccupancyMap,
    probe: Location,
    lhs: &L,
    rhs: &R,
    search: &SearchParameters,
    params: &DepthParameters,
    estimator: &E,
) -> ColumnOutcome
where
    L: StereoImage + ?Sized,
    R: StereoImage + ?Sized,
    E: DepthEstimator,
{
    let offset = determine_pixel_offset_of_location(probe, params);

    let Some(at) = to_absolute_coordinates(lhs, offset) else {
        return ColumnOutcome::OffImage { offset };
    };

    match locate_obstacle_at_coordinates(lhs, rhs, at, search, params, estimator) {
        Ok(location) => match cell_index(map, location) {
            Ok(index) => ColumnOutcome::Occupied { location, index },
            // Beyond sensing range or behind the camera
            Err(_) => ColumnOutcome::OutOfRange { location },
        },
        Err(error) => ColumnOutcome::NoDetection { error },
    }
}

/// Write column outcomes into the map and tally them
fn apply_outcomes<I>(map: &mut OccupancyMap, outcomes: I) -> SamplingReport
where
    I: IntoIterator<Item = ColumnOutcome>,
{
    let mut report = SamplingReport::default();

    for outcome in outcomes {
        report.columns_sampled += 1;
        match outcome {
            ColumnOutcome::Occupied { index, .. } => {
                set_cell_by_index(map, index, CellState::Occupied);
                report.cells_marked += 1;
            }
            ColumnOutcome::OutOfRange { .. } => report.out_of_range += 1,
            ColumnOutcome::NoDetection { .. } => report.no_detection += 1,
            ColumnOutcome::OffImage { .. } => report.off_image += 1,
        }
    }

    report
}

fn log_report(function: &str, report: &SamplingReport) {
    log::debug!(
        "[{}] {} columns: {} marked, {} out of range, {} no detection, {} off image",
        function,
        report.columns_sampled,
        report.cells_marked,
        report.out_of_range,
        report.no_detection,
        report.off_image
    );
}

/// Fill `map` with the obstacles visible in a stereo pair, one column at a time
pub fn locate_obstacles<L, R, E>(
    map: &mut OccupancyMap,
    lhs: &L,
    rhs: &R,
    search: &SearchParameters,
    params: &DepthParameters,
    estimator: &E,
) -> PerceptionResult<SamplingReport>
where
    L: StereoImage + ?Sized,
    R: StereoImage + ?Sized,
    E: DepthEstimator,
{
    validate_depth_parameters(params)?;

    let probes = far_plane_probes(map.extents());
    let shared: &OccupancyMap = map;
    let outcomes: Vec<ColumnOutcome> = probes
        .into_iter()
        .map(|probe| sample_column(shared, probe, lhs, rhs, search, params, estimator))
        .collect();

    let report = apply_outcomes(map, outcomes);
    log_report("locate_obstacles", &report);
    Ok(report)
}

/// Same as [`locate_obstacles`], with columns sampled on the current rayon pool
#[cfg(feature = "parallel")]
pub fn locate_obstacles_parallel<L, R, E>(
    map: &mut OccupancyMap,
    lhs: &L,
    rhs: &R,
    search: &SearchParameters,
    params: &DepthParameters,
    estimator: &E,
) -> PerceptionResult<SamplingReport>
where
    L: StereoImage + Sync + ?Sized,
    R: StereoImage + Sync + ?Sized,
    E: DepthEstimator,
{
    use rayon::prelude::*;

    validate_depth_parameters(params)?;

    let probes = far_plane_probes(map.extents());
    let shared: &OccupancyMap = map;
    let outcomes: Vec<ColumnOutcome> = probes
        .into_par_iter()
        .map(|probe| sample_column(shared, probe, lhs, rhs, search, params, estimator))
        .collect();

    let report = apply_outcomes(map, outcomes);
    log_report("locate_obstacles_parallel", &report);
    Ok(report)
}

/// Build a fresh map for one frame using `config`.
///
/// With `sampling.parallel` set, columns are sampled on a pool built from
/// `config.sampling` for this frame.
pub fn process_frame<L, R, E>(
    config: &PerceptionConfig,
    lhs: &L,
    rhs: &R,
    estimator: &E,
) -> PerceptionResult<(OccupancyMap, SamplingReport)>
where
    L: StereoImage + Sync + ?Sized,
    R: StereoImage + Sync + ?Sized,
    E: DepthEstimator,
{
    validate_config(config)?;
    let mut map = create_occupancy_map(config.map)?;

    #[cfg(feature = "parallel")]
    let report = if config.sampling.parallel {
        let pool = create_sampling_pool(&config.sampling)?;
        pool.install(|| {
            locate_obstacles_parallel(&mut map, lhs, rhs, &config.search, &config.depth, estimator)
        })?
    } else {
        locate_obstacles(&mut map, lhs, rhs, &config.search, &config.depth, estimator)?
    };

    #[cfg(not(feature = "parallel"))]
    let report = locate_obstacles(&mut map, lhs, rhs, &config.search, &config.depth, estimator)?;

    Ok((map, report))
}
