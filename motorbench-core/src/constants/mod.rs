//! Constants for Motorbench Core
//!
//! Centralized, documented constants used throughout the estimation
//! engine. All numeric values are defined here with their purpose,
//! source, and rationale - no magic numbers in formula code.
//!
//! ## Organization
//!
//! - **Units**: conversion factors between bench-sheet units and SI

/// Unit conversion factors between common datasheet units and SI.
pub mod units;

// Re-export commonly used constants for convenience
pub use units::{NM_PER_KGCM, RAD_PER_S_PER_RPM, STANDARD_GRAVITY_M_PER_S2};
