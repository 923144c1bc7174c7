//! Error Types for Motor Parameter Estimation
//!
//! ## Design Philosophy
//!
//! Motorbench's error system follows a few rules suited to small numeric cores:
//!
//! 1. **Small Size**: Each variant carries at most one word of context
//!    (a static reason string or a single float), so errors stay cheap to
//!    return from hot formula paths.
//!
//! 2. **No Heap Allocation**: All error data is inline - no String, only
//!    &'static str for messages. This keeps the crate usable off-std.
//!
//! 3. **Copy Semantics**: Errors implement Copy for efficient return from
//!    functions without move semantics complications.
//!
//! 4. **Deterministic**: Every operation in this crate is a pure function,
//!    so the same input always produces the same error. There is no retry
//!    or partial-failure handling anywhere.
//!
//! ## Error Categories
//!
//! ### Measurement Violations
//! - `InvalidMeasurement`: a bench measurement violates a required ordering
//!   or positivity invariant (e.g., stall current below no-load current)
//! - `NonFinite`: an input is NaN or infinite
//!
//! ### Domain Violations
//! - `FrictionDominated`: friction torque too large for the operating
//!   voltage - the efficiency radicand would go negative
//! - `DegenerateConstants`: a derived quantity is undefined because a
//!   motor constant is zero or negative
//!
//! ### Request Errors
//! - `InvalidArgument`: malformed curve or summary request (sample count
//!   below two, non-positive voltage or inertia)
//!
//! All errors are immediate, local, and non-recoverable for the call that
//! raised them. Reporting is left to the caller; this crate never logs.

use thiserror_no_std::Error;

/// Result type for estimation and curve operations
pub type MotorResult<T> = Result<T, MotorError>;

/// Estimation and curve-generation errors - kept small and Copy
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum MotorError {
    /// Bench measurement violates a required ordering/positivity invariant
    #[error("Invalid measurement: {reason}")]
    InvalidMeasurement {
        /// Which invariant the measurement broke
        reason: &'static str,
    },

    /// Input value makes no physical sense (NaN, infinity)
    #[error("Invalid value: not a finite number")]
    NonFinite,

    /// Friction torque too large for the given voltage and constants.
    ///
    /// The maximum-efficiency radicand `Ra*Tf/(Va*KM)` exceeded one, which
    /// means the motor cannot overcome its own friction at this voltage.
    #[error("Motor cannot spin: friction ratio {ratio} exceeds 1")]
    FrictionDominated {
        /// The offending ratio `Ra*Tf/(Va*KM)`
        ratio: f32,
    },

    /// A derived quantity is undefined because a constant is degenerate
    #[error("Degenerate motor constants: {reason}")]
    DegenerateConstants {
        reason: &'static str,
    },

    /// Malformed curve or summary request
    #[error("Invalid argument: {reason}")]
    InvalidArgument {
        reason: &'static str,
    },
}

impl MotorError {
    /// True for errors where a derived physical quantity is undefined,
    /// as opposed to a bad measurement or a malformed request.
    pub fn is_domain(&self) -> bool {
        matches!(
            self,
            Self::FrictionDominated { .. } | Self::DegenerateConstants { .. }
        )
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for MotorError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::InvalidMeasurement { reason } =>
                defmt::write!(fmt, "Invalid measurement: {}", reason),
            Self::NonFinite =>
                defmt::write!(fmt, "Non-finite value"),
            Self::FrictionDominated { ratio } =>
                defmt::write!(fmt, "Friction ratio {} exceeds 1", ratio),
            Self::DegenerateConstants { reason } =>
                defmt::write!(fmt, "Degenerate constants: {}", reason),
            Self::InvalidArgument { reason } =>
                defmt::write!(fmt, "Invalid argument: {}", reason),
        }
    }
}
