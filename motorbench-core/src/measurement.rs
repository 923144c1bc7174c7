//! Bench Measurement Data Model
//!
//! ## Overview
//!
//! A brushed DC motor is characterized from three steady-state operating
//! points measured on a bench:
//!
//! - **No-load**: maximum speed, minimum current, zero external torque
//! - **Rated**: the point near the manufacturer's continuous rating
//! - **Stall**: zero speed, maximum current and torque
//!
//! All three points are taken at the same armature voltage. When the motor
//! is measured through a gearbox, speeds and torques refer to the output
//! shaft; [`MeasurementSet::normalize`] refers them back to the motor shaft
//! before estimation.
//!
//! ## Units
//!
//! All quantities are SI: volts, amperes, rad/s, N*m. Bench data quoted in
//! rpm or kg*cm converts via [`crate::constants::units`].

use crate::errors::{MotorError, MotorResult};

/// One complete set of bench measurements at a single armature voltage.
///
/// Plain value type: construct it with a struct literal, then call
/// [`check`](Self::check) or let [`crate::estimator::estimate`] validate it.
/// Never mutated after construction - [`normalize`](Self::normalize)
/// returns a new set.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeasurementSet {
    /// Armature voltage during the bench run (V)
    pub voltage: f32,

    /// No-load angular speed (rad/s)
    pub no_load_speed: f32,

    /// No-load current draw (A) - feeds the friction torque estimate
    pub no_load_current: f32,

    /// Angular speed at the rated load point (rad/s)
    pub rated_speed: f32,

    /// Output torque at the rated load point (N*m)
    pub rated_torque: f32,

    /// Current at the rated load point (A)
    pub rated_current: f32,

    /// Stall torque (N*m)
    pub stall_torque: f32,

    /// Stall current (A)
    pub stall_current: f32,

    /// Output-shaft gear ratio relative to the motor shaft.
    /// 1.0 means the measurements were taken directly at the motor shaft.
    pub reduction_ratio: f32,
}

impl MeasurementSet {
    /// Refer the measurement to the motor shaft.
    ///
    /// Speeds are multiplied by the reduction ratio (the motor spins faster
    /// than the output shaft), torques are divided by it, and the ratio of
    /// the returned set is reset to 1. The original set is untouched.
    pub fn normalize(&self) -> Self {
        let r = self.reduction_ratio;
        Self {
            no_load_speed: self.no_load_speed * r,
            rated_speed: self.rated_speed * r,
            rated_torque: self.rated_torque / r,
            stall_torque: self.stall_torque / r,
            reduction_ratio: 1.0,
            ..*self
        }
    }

    /// Whether the set is already referred to the motor shaft.
    pub fn is_normalized(&self) -> bool {
        self.reduction_ratio == 1.0
    }

    /// Validate the basic value invariants.
    ///
    /// Every field must be finite, every physical quantity non-negative,
    /// and the reduction ratio strictly positive. Ordering invariants
    /// between the operating points are checked by the estimator, not here,
    /// since a partially-filled set is still useful for plotting overlays.
    pub fn check(&self) -> MotorResult<()> {
        let fields = [
            self.voltage,
            self.no_load_speed,
            self.no_load_current,
            self.rated_speed,
            self.rated_torque,
            self.rated_current,
            self.stall_torque,
            self.stall_current,
            self.reduction_ratio,
        ];

        for value in fields {
            if !value.is_finite() {
                return Err(MotorError::NonFinite);
            }
            if value < 0.0 {
                return Err(MotorError::InvalidMeasurement {
                    reason: "measurements must be non-negative",
                });
            }
        }

        if self.reduction_ratio <= 0.0 {
            return Err(MotorError::InvalidMeasurement {
                reason: "reduction ratio must be positive",
            });
        }

        Ok(())
    }
}
