//! Steady-State Motor Constant Estimation
//!
//! ## Overview
//!
//! Converts the three bench operating points (no-load, rated, stall) into
//! the four constants of the idealized brushed-DC-motor model with a
//! constant internal friction torque:
//!
//! - `Ra` - armature resistance (Ohm)
//! - `KM` - torque constant (N*m/A)
//! - `KF` - back-EMF constant (V*s/rad)
//! - `Tf` - friction torque (N*m)
//!
//! ## Model
//!
//! At steady state the speed-torque line and the torque-current line are
//! both straight, so each pair of operating points yields a slope estimate:
//!
//! ```text
//! dw/dT segments:    no-load -> rated, rated -> stall, no-load -> stall
//! dT/dI segments:    no-load -> rated, no-load -> stall
//! ```
//!
//! The no-load -> stall segments span the widest operating range and are
//! the least sensitive to measurement noise, so they are the canonical
//! derivation. The rated-based segments are retained as an alternative
//! path ([`DerivationPath::Rated`]) for cross-checking a dataset: if the
//! two paths disagree materially, the bench data is suspect.
//!
//! The friction torque follows from the no-load current (`Tf = KM * I0`),
//! and the back-EMF constant from the no-load point back-extrapolated to
//! the zero-friction speed intercept:
//!
//! ```text
//! w_ideal = w_no_load - Tf * dw/dT
//! KF      = Va / w_ideal
//! ```
//!
//! When the no-load current is zero there is no friction to correct for
//! and the back-extrapolation is a no-op.
//!
//! All functions here are pure: no state, no logging, no I/O.

use crate::{
    errors::{MotorError, MotorResult},
    measurement::MeasurementSet,
};

/// The four steady-state constants of the friction-aware DC motor model.
///
/// Produced once by [`estimate`] from a normalized [`MeasurementSet`],
/// never mutated afterward. Consumed by [`crate::summary`] and
/// [`crate::curves`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MotorConstants {
    /// Armature resistance Ra (Ohm)
    pub armature_resistance: f32,

    /// Torque constant KM (N*m/A)
    pub torque_constant: f32,

    /// Back-EMF constant KF (V*s/rad)
    pub back_emf_constant: f32,

    /// Constant internal friction torque Tf (N*m)
    pub friction_torque: f32,
}

impl MotorConstants {
    /// Validate the constants before deriving anything from them.
    ///
    /// Ra, KM and KF appear in denominators throughout the model, so they
    /// must be strictly positive; Tf must be finite and non-negative.
    pub fn check(&self) -> MotorResult<()> {
        let fields = [
            self.armature_resistance,
            self.torque_constant,
            self.back_emf_constant,
            self.friction_torque,
        ];
        for value in fields {
            if !value.is_finite() {
                return Err(MotorError::NonFinite);
            }
        }

        if self.armature_resistance <= 0.0 {
            return Err(MotorError::DegenerateConstants {
                reason: "armature resistance must be positive",
            });
        }
        if self.torque_constant <= 0.0 {
            return Err(MotorError::DegenerateConstants {
                reason: "torque constant must be positive",
            });
        }
        if self.back_emf_constant <= 0.0 {
            return Err(MotorError::DegenerateConstants {
                reason: "back-EMF constant must be positive",
            });
        }
        if self.friction_torque < 0.0 {
            return Err(MotorError::DegenerateConstants {
                reason: "friction torque must be non-negative",
            });
        }

        Ok(())
    }
}

/// Intermediate slope estimates from the idealized linear characteristics.
///
/// Not needed by the downstream pipeline stages; exposed via [`slopes`]
/// so a caller can sanity-check how well a dataset agrees with the
/// straight-line model before trusting the constants.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlopeEstimates {
    /// dw/dT over the no-load -> rated segment (rad/(s*N*m), negative)
    pub speed_torque_no_load_rated: f32,

    /// dw/dT over the rated -> stall segment (rad/(s*N*m), negative)
    pub speed_torque_rated_stall: f32,

    /// dw/dT over the full no-load -> stall span (canonical, negative)
    pub speed_torque_no_load_stall: f32,

    /// dT/dI over the no-load -> rated segment (N*m/A)
    pub torque_current_no_load_rated: f32,

    /// dT/dI over the full no-load -> stall span (canonical KM)
    pub torque_current_no_load_stall: f32,
}

/// Which slope segments feed the torque constant.
///
/// The two paths agree exactly on noise-free data; on real bench data the
/// stall-based path is preferred because its points are the most separated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DerivationPath {
    /// Derive KM from the no-load -> stall torque-current slope (canonical)
    #[default]
    Stall,
    /// Derive KM from the no-load -> rated torque-current slope
    Rated,
}

/// Estimate motor constants using the canonical stall-based derivation.
///
/// The measurement must already be referred to the motor shaft; apply
/// [`MeasurementSet::normalize`] first when a gearbox was in the loop.
pub fn estimate(measurements: &MeasurementSet) -> MotorResult<MotorConstants> {
    estimate_with(measurements, DerivationPath::Stall)
}

/// Estimate motor constants with an explicit derivation path.
pub fn estimate_with(
    measurements: &MeasurementSet,
    path: DerivationPath,
) -> MotorResult<MotorConstants> {
    check_estimable(measurements)?;

    let s = slope_estimates(measurements);

    let armature_resistance = measurements.voltage / measurements.stall_current;
    let torque_constant = match path {
        DerivationPath::Stall => s.torque_current_no_load_stall,
        DerivationPath::Rated => s.torque_current_no_load_rated,
    };
    let friction_torque = torque_constant * measurements.no_load_current;

    // Friction cannot exceed the magnetic torque available at stall,
    // otherwise the model says the motor never turns.
    if friction_torque >= torque_constant * measurements.stall_current {
        return Err(MotorError::InvalidMeasurement {
            reason: "friction torque exceeds stall magnetic torque",
        });
    }

    // Back-extrapolate the no-load point along the speed-torque line to the
    // zero-friction intercept. The slope is negative, so this raises the
    // intercept above the measured no-load speed.
    let ideal_no_load_speed =
        measurements.no_load_speed - friction_torque * s.speed_torque_no_load_stall;
    let back_emf_constant = measurements.voltage / ideal_no_load_speed;

    let constants = MotorConstants {
        armature_resistance,
        torque_constant,
        back_emf_constant,
        friction_torque,
    };
    constants.check()?;
    Ok(constants)
}

/// Compute all five slope estimates for a normalized measurement.
///
/// Fails under the same preconditions as [`estimate`].
pub fn slopes(measurements: &MeasurementSet) -> MotorResult<SlopeEstimates> {
    check_estimable(measurements)?;
    Ok(slope_estimates(measurements))
}

/// Ordering and positivity preconditions for a physically meaningful fit.
fn check_estimable(m: &MeasurementSet) -> MotorResult<()> {
    m.check()?;

    if !m.is_normalized() {
        return Err(MotorError::InvalidMeasurement {
            reason: "measurement not referred to the motor shaft",
        });
    }
    if m.voltage <= 0.0 {
        return Err(MotorError::InvalidMeasurement {
            reason: "armature voltage must be positive",
        });
    }
    if m.no_load_speed <= 0.0 {
        return Err(MotorError::InvalidMeasurement {
            reason: "no-load speed must be positive",
        });
    }
    if m.rated_speed >= m.no_load_speed {
        return Err(MotorError::InvalidMeasurement {
            reason: "rated speed must be below no-load speed",
        });
    }
    if m.rated_torque <= 0.0 {
        return Err(MotorError::InvalidMeasurement {
            reason: "rated torque must be positive",
        });
    }
    if m.stall_torque <= m.rated_torque {
        return Err(MotorError::InvalidMeasurement {
            reason: "stall torque must exceed rated torque",
        });
    }
    if m.rated_current <= m.no_load_current {
        return Err(MotorError::InvalidMeasurement {
            reason: "rated current must exceed no-load current",
        });
    }
    if m.stall_current <= m.no_load_current {
        return Err(MotorError::InvalidMeasurement {
            reason: "stall current must exceed no-load current",
        });
    }

    Ok(())
}

/// The raw slope arithmetic, assuming [`check_estimable`] already passed.
fn slope_estimates(m: &MeasurementSet) -> SlopeEstimates {
    SlopeEstimates {
        speed_torque_no_load_rated: (m.rated_speed - m.no_load_speed) / m.rated_torque,
        speed_torque_rated_stall: -m.rated_speed / (m.stall_torque - m.rated_torque),
        speed_torque_no_load_stall: -m.no_load_speed / m.stall_torque,
        torque_current_no_load_rated: m.rated_torque / (m.rated_current - m.no_load_current),
        torque_current_no_load_stall: m.stall_torque / (m.stall_current - m.no_load_current),
    }
}
