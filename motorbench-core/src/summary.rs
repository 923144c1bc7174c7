//! Operating-Point Summary Scalars
//!
//! ## Overview
//!
//! Condenses a [`MotorConstants`] set at one armature voltage into the
//! handful of scalars a datasheet quotes: speed, torque, power and
//! efficiency ceilings plus the linear model coefficients.
//!
//! All formulas assume the idealized steady-state model with constant
//! friction torque:
//!
//! ```text
//! Tmag_max = Va*KM/Ra                    stall magnetic torque
//! w_max    = Va/KF - Tf*Ra/(KF*KM)       no-load speed with friction
//! h_max    = (KM/KF)*(1 - sqrt(Ra*Tf/(Va*KM)))^2
//! P_max    = Va^2*KM/(4*KF*Ra)           peak mechanical power
//! ```
//!
//! The efficiency radicand `Ra*Tf/(Va*KM)` exceeding one means friction
//! consumes the whole stall torque budget; that case is a domain error,
//! never a NaN.
//!
//! Maximum angular acceleration needs the rotor inertia, which no bench
//! measurement in this crate estimates - it is an external datasheet
//! parameter, so it enters through [`summarize_with_inertia`] and is
//! absent from plain [`summarize`] reports.

use crate::{
    errors::{MotorError, MotorResult},
    estimator::MotorConstants,
};

/// Summary scalars for one motor at one armature voltage.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SummaryReport {
    /// Maximum angular speed with friction (rad/s)
    pub max_speed: f32,

    /// Maximum magnetic torque, at stall (N*m)
    pub max_magnetic_torque: f32,

    /// Maximum efficiency (dimensionless, 0..1)
    pub max_efficiency: f32,

    /// Maximum mechanical output power (W)
    pub max_mechanical_power: f32,

    /// No-load armature current Tf/KM (A)
    pub no_load_current: f32,

    /// Torque-to-current coefficient 1/KM (A/(N*m))
    pub torque_to_current: f32,

    /// Voltage-to-speed coefficient 1/KF (rad/(V*s))
    pub voltage_to_speed: f32,

    /// Slope of the speed-torque line Ra/(KF*KM) (rad/(s*N*m))
    pub speed_torque_slope: f32,

    /// Maximum no-load angular acceleration (rad/s^2).
    /// Present only when the rotor inertia was supplied.
    pub max_angular_accel: Option<f32>,
}

/// Summarize a motor at the given armature voltage.
pub fn summarize(constants: &MotorConstants, voltage: f32) -> MotorResult<SummaryReport> {
    constants.check()?;
    if !voltage.is_finite() || voltage <= 0.0 {
        return Err(MotorError::InvalidArgument {
            reason: "armature voltage must be positive and finite",
        });
    }

    let ra = constants.armature_resistance;
    let km = constants.torque_constant;
    let kf = constants.back_emf_constant;
    let tf = constants.friction_torque;

    let ratio = ra * tf / (voltage * km);
    if ratio > 1.0 {
        return Err(MotorError::FrictionDominated { ratio });
    }

    let max_magnetic_torque = voltage * km / ra;
    let max_speed = voltage / kf - tf * ra / (kf * km);
    // libm keeps this usable off-std, same as the rest of the math here
    let max_efficiency = (km / kf) * {
        let margin = 1.0 - libm::sqrtf(ratio);
        margin * margin
    };
    let max_mechanical_power = voltage * voltage * km / (4.0 * kf * ra);

    Ok(SummaryReport {
        max_speed,
        max_magnetic_torque,
        max_efficiency,
        max_mechanical_power,
        no_load_current: tf / km,
        torque_to_current: 1.0 / km,
        voltage_to_speed: 1.0 / kf,
        speed_torque_slope: ra / (kf * km),
        max_angular_accel: None,
    })
}

/// Summarize a motor, including the no-load angular acceleration ceiling
/// `(Tmag_max - Tf) / J` for a rotor inertia `J` in kg*m^2.
pub fn summarize_with_inertia(
    constants: &MotorConstants,
    voltage: f32,
    rotor_inertia: f32,
) -> MotorResult<SummaryReport> {
    if !rotor_inertia.is_finite() || rotor_inertia <= 0.0 {
        return Err(MotorError::InvalidArgument {
            reason: "rotor inertia must be positive and finite",
        });
    }

    let mut report = summarize(constants, voltage)?;
    report.max_angular_accel =
        Some((report.max_magnetic_torque - constants.friction_torque) / rotor_inertia);
    Ok(report)
}
