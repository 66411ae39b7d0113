use std::path::Path;

use fracdiff_data::write_table_parquet;
use fracdiff_types::{Column, SeriesTable};

pub fn lcg_noise(n: usize, seed: u64) -> Vec<f64> {
    let mut seed = seed;
    (0..n)
        .map(|_| {
            seed = seed.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
            (seed >> 33) as f64 / f64::from(u32::MAX) - 0.5
        })
        .collect()
}

pub fn trending_walk(n: usize, seed: u64) -> Vec<f64> {
    let mut level = 100.0;
    lcg_noise(n, seed)
        .into_iter()
        .map(|u| {
            level += 0.6 + u;
            level
        })
        .collect()
}

/// Writes a 500-row table with one stationary, one trending and one
/// constant column.
pub fn write_input(path: &Path) {
    let timestamps = (0..500i64)
        .map(|i| 1_704_067_200_000_000_000 + i * 60_000_000_000)
        .collect();
    let table = SeriesTable::new(
        timestamps,
        vec![
            Column::new("noise", lcg_noise(500, 42)),
            Column::new("close", trending_walk(500, 11)),
            Column::new("flat", vec![5.0; 500]),
        ],
    )
    .expect("valid table");
    write_table_parquet(path, &table, "timestamp").expect("write input");
}
