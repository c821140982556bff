//! tonalscale-test - Regression test framework for tonalscale
//!
//! This crate provides a small regression test harness with two modes:
//!
//! - **Compare**: Compare results with expected values (default)
//! - **Display**: Log values without comparison (manual inspection)
//!
//! # Usage
//!
//! ```
//! use tonalscale_test::RegParams;
//!
//! let mut rp = RegParams::new("transitions");
//! rp.compare_values(9.0, 9.0, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "compare" or "display"

mod params;

pub use params::{RegParams, RegTestMode};
