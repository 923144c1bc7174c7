//! Unit Conversions for Bench Data
//!
//! Motor datasheets and bench instruments rarely speak SI: tachometers
//! read rpm, spring scales and torque sticks read kg*cm. The estimation
//! core works exclusively in rad/s and N*m, so raw bench numbers convert
//! through these factors exactly once, at the edge.

/// Angular speed conversion, rpm to rad/s.
///
/// One revolution is 2*pi radians and one minute is 60 seconds, so
/// 1 rpm = 2*pi/60 rad/s.
///
/// Source: SI brochure, 9th edition (BIPM)
pub const RAD_PER_S_PER_RPM: f32 = 0.104_719_755;

/// Standard gravitational acceleration used in gravimetric torque units
/// (m/s^2).
///
/// Motor datasheets quoting kg*cm use the two-digit convention rather
/// than the full standard value 9.80665.
///
/// Source: common motor datasheet practice
pub const STANDARD_GRAVITY_M_PER_S2: f32 = 9.8;

/// Torque conversion, kg*cm to N*m.
///
/// A kilogram-force acting on a one-centimeter arm:
/// 9.8 m/s^2 * 0.01 m = 0.098 N*m.
///
/// Source: derived from [`STANDARD_GRAVITY_M_PER_S2`]
pub const NM_PER_KGCM: f32 = 0.098;
