//! Check a stereo pair against expected cell states
//!
//! Usage: check_occupancy <lhs image> <rhs image> <expectations> [config.toml]
//!
//! Each line of the expectations file is `X Y Z occupied`, where `occupied`
//! is 1 or 0. Every mismatching cell is reported; the exit status is non-zero
//! if any check fails.

use anyhow::{bail, Context, Result};
use stereo_occupancy::{
    load_config, occupancy::cell, process_frame, BlockMatcher, CellState, Location,
    PerceptionConfig,
};

/// Parse one `X Y Z occupied` line
fn parse_expectation(line: &str) -> Result<(Location, CellState)> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != 4 {
        bail!("expected 4 fields, found {}", fields.len());
    }

    let location = Location::new(fields[0].parse()?, fields[1].parse()?, fields[2].parse()?);
    let state = match fields[3] {
        "1" => CellState::Occupied,
        "0" => CellState::Unoccupied,
        other => bail!("occupancy must be 0 or 1, found '{}'", other),
    };

    Ok((location, state))
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() < 3 || args.len() > 4 {
        bail!("usage: check_occupancy <lhs image> <rhs image> <expectations> [config.toml]");
    }

    let config = match args.get(3) {
        Some(path) => load_config(path)?,
        None => PerceptionConfig::default(),
    };

    let lhs = image::open(&args[0])
        .with_context(|| format!("failed to open {}", args[0]))?
        .to_luma8();
    let rhs = image::open(&args[1])
        .with_context(|| format!("failed to open {}", args[1]))?
        .to_luma8();
    let expectations = std::fs::read_to_string(&args[2])
        .with_context(|| format!("failed to read {}", args[2]))?;

    let (map, _) = process_frame(&config, &lhs, &rhs, &BlockMatcher::new())?;

    let mut checked = 0;
    let mut failures = 0;
    for (number, line) in expectations.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let (location, expected) =
            parse_expectation(line).with_context(|| format!("line {}", number + 1))?;
        let actual = *cell(&map, location)?;
        checked += 1;

        if actual != expected {
            failures += 1;
            println!(
                "Failed occupancy check, expected {} cell at {}",
                if expected == CellState::Occupied { "occupied" } else { "unoccupied" },
                location
            );
        }
    }

    println!("{} of {} cells matched", checked - failures, checked);
    if failures > 0 {
        bail!("{} occupancy checks failed", failures);
    }

    Ok(())
}
