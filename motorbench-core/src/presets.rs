//! Reference Motors
//!
//! Known-good datasets for demos, regression tests and quick sanity
//! checks of a bench setup. Two kinds are provided:
//!
//! - a complete bench [`MeasurementSet`] for a geared 12 V brushed motor,
//!   quoted in the units the bench instruments produced and converted
//!   here to SI;
//! - catalogue [`MotorConstants`] for a small precision motor, for
//!   exercising the curve and summary stages without bench data.

use crate::{
    constants::units::{NM_PER_KGCM, RAD_PER_S_PER_RPM},
    estimator::MotorConstants,
    measurement::MeasurementSet,
};

/// Bench measurement of a 12 V brushed gearmotor with a 37.3:1 gearbox,
/// taken at the output shaft.
///
/// Tachometer readings in rpm, torque-stick readings in kg*cm:
/// no-load 214 rpm at 0.15 A, rated 171 rpm at 2.3 kg*cm and 1 A,
/// stall 9 kg*cm at 6 A. Normalize before estimating.
pub fn geared_12v() -> MeasurementSet {
    MeasurementSet {
        voltage: 12.0,
        no_load_speed: 214.0 * RAD_PER_S_PER_RPM,
        no_load_current: 0.15,
        rated_speed: 171.0 * RAD_PER_S_PER_RPM,
        rated_torque: 2.3 * NM_PER_KGCM,
        rated_current: 1.0,
        stall_torque: 9.0 * NM_PER_KGCM,
        stall_current: 6.0,
        reduction_ratio: 37.3,
    }
}

/// Catalogue constants for a small precision coreless motor.
pub const REFERENCE_CONSTANTS: MotorConstants = MotorConstants {
    armature_resistance: 3.41,
    torque_constant: 6.59e-3,
    back_emf_constant: 6.589e-3,
    friction_torque: 1.3e-4,
};

/// Rotor inertia matching [`REFERENCE_CONSTANTS`] (kg*m^2).
///
/// Only the no-load angular-acceleration summary uses it; the estimation
/// core itself never needs an inertia.
pub const REFERENCE_ROTOR_INERTIA: f32 = 1.0e-7;
