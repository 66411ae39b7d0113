//! Fracdiff Transform
//!
//! Fixed-width-window fractional differencing (FFD) for price series.
//!
//! # Features
//! - Binomial-series weight generator truncated at a magnitude threshold
//! - Causal fixed-width filter with `NaN` warmup
//! - Weight cache keyed by order for batch use over equally long columns
//! - `SeriesTransform` trait for column-level application

pub mod cache;
pub mod error;
pub mod ffd;
pub mod traits;
pub mod weights;

// Re-export main types
pub use cache::WeightCache;
pub use error::TransformError;
pub use ffd::{FfdOutput, FracDiff, frac_diff_ffd};
pub use traits::SeriesTransform;
pub use weights::FfdWeights;
