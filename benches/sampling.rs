use criterion::{black_box, criterion_group, criterion_main, Criterion};
use stereo_occupancy::{
    create_occupancy_map, locate_obstacles, locate_obstacles_parallel, occupancy::clear_occupancy_map,
    BlockMatcher, DepthParameters, MapExtents, Offset, Radii, SearchParameters,
};

fn textured(width: u32, height: u32, shift: u32) -> image::GrayImage {
    image::GrayImage::from_fn(width, height, |x, y| {
        let x = x + shift;
        image::Luma([((x * 31 + y * 17) ^ (x * y)) as u8])
    })
}

fn bench_sampling(c: &mut Criterion) {
    let lhs = textured(1280, 960, 0);
    let rhs = textured(1280, 960, 12);
    // rhs(x) = lhs(x + 12), so the match sits 12 pixels left
    let extents = MapExtents {
        x_max: 2000,
        y_max: 500,
        z_max: 5000,
        cell_size: 100,
    };
    let search = SearchParameters {
        neighbourhood_radii: Radii { x: 5, y: 5 },
        search_offset: Offset::new(-16, 0),
        search_radii: Radii { x: 32, y: 2 },
        max_cost: 100_000,
    };
    let params = DepthParameters::default();
    let matcher = BlockMatcher::new();

    let mut map = create_occupancy_map(extents).expect("valid extents");

    c.bench_function("locate_obstacles", |b| {
        b.iter(|| {
            clear_occupancy_map(&mut map);
            black_box(locate_obstacles(&mut map, &lhs, &rhs, &search, &params, &matcher).expect("valid"))
        })
    });

    c.bench_function("locate_obstacles_parallel", |b| {
        b.iter(|| {
            clear_occupancy_map(&mut map);
            black_box(
                locate_obstacles_parallel(&mut map, &lhs, &rhs, &search, &params, &matcher).expect("valid"),
            )
        })
    });
}

criterion_group!(benches, bench_sampling);
criterion_main!(benches);
