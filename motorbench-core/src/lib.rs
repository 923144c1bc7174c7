//! Core estimation engine for Motorbench
//!
//! Derives brushed-DC-motor constants from bench measurements and turns
//! them into idealized steady-state performance curves.
//!
//! Two pure pipelines share one physical model:
//! - bench measurements -> [`MeasurementSet::normalize`] ->
//!   [`estimator::estimate`] -> [`MotorConstants`]
//! - [`MotorConstants`] + voltage -> [`summary::summarize`] /
//!   [`curves::generate`] -> summary scalars and sampled curves
//!
//! Every stage is a stateless function over immutable value types, so
//! batch runs over several voltages or motor variants are independent.
//!
//! ```no_run
//! use motorbench_core::{estimator, summary, presets};
//!
//! let bench = presets::geared_12v().normalize();
//! let constants = estimator::estimate(&bench)?;
//!
//! let report = summary::summarize(&constants, bench.voltage)?;
//! assert!(report.max_speed > 0.0);
//! # Ok::<(), motorbench_core::MotorError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod constants;
pub mod curves;
pub mod errors;
pub mod estimator;
pub mod measurement;
pub mod presets;
pub mod summary;

// Public API
pub use curves::{Characteristic, CurvePoint, PerformanceCurve, DEFAULT_SAMPLE_COUNT};
pub use errors::{MotorError, MotorResult};
pub use estimator::{DerivationPath, MotorConstants, SlopeEstimates};
pub use measurement::MeasurementSet;
pub use summary::SummaryReport;

/// Crate version string
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
