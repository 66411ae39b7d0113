//! Fracdiff Stats
//!
//! Unit-root testing used to decide whether a series is stationary.
//!
//! # Features
//! - Augmented Dickey-Fuller regression with a fixed augmentation lag
//! - MacKinnon (1994) approximate p-values and MacKinnon (2010) critical values
//! - `StationarityTest` trait so the order search can take any oracle

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(missing_docs)]

pub mod adf;
pub mod error;
pub mod mackinnon;
pub mod ols;
pub mod traits;

// Re-export main types
pub use adf::AdfTest;
pub use error::StatTestError;
pub use mackinnon::{CriticalValues, critical_values, mackinnon_p_value};
pub use traits::{StationarityTest, UnitRootResult};
