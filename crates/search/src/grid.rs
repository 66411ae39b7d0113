//! Candidate order grid.

/// `points` equally spaced orders on `[0, 1]`, ascending.
///
/// Both endpoints are included; a single point yields `[0.0]`.
#[must_use]
pub fn candidate_grid(points: usize) -> Vec<f64> {
    match points {
        0 => Vec::new(),
        1 => vec![0.0],
        _ => {
            let last = (points - 1) as f64;
            (0..points).map(|i| i as f64 / last).collect()
        }
    }
}
