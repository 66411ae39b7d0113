use fracdiff_types::{Column, SeriesTable};

/// Deterministic noise in `[-0.5, 0)` from a 64-bit LCG.
pub fn lcg_noise(n: usize, seed: u64) -> Vec<f64> {
    let mut seed = seed;
    (0..n)
        .map(|_| {
            seed = seed.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
            (seed >> 33) as f64 / f64::from(u32::MAX) - 0.5
        })
        .collect()
}

/// Strictly increasing random walk: steps of `0.6 + noise` from 100.
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

/// `1, 2, ..., n` plus half-scaled noise.
pub fn noisy_ramp(n: usize, seed: u64) -> Vec<f64> {
    lcg_noise(n, seed)
        .into_iter()
        .enumerate()
        .map(|(i, u)| (i + 1) as f64 + 0.5 * u)
        .collect()
}

/// Table with a one-minute index.
pub fn table_of(columns: Vec<(&str, Vec<f64>)>) -> SeriesTable {
    let len = columns.first().map_or(0, |(_, v)| v.len());
    let timestamps = (0..len as i64).map(|i| i * 60_000_000_000).collect();
    let columns = columns
        .into_iter()
        .map(|(name, values)| Column::new(name, values))
        .collect();
    SeriesTable::new(timestamps, columns).expect("valid table")
}
