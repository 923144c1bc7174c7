//! Performance Curve Generation
//!
//! ## Overview
//!
//! Samples the idealized steady-state characteristics of a motor at a
//! given armature voltage into plain `(x, y)` arrays. Five characteristics
//! are available, one per chart the bench report needs:
//!
//! | Characteristic      | x axis            | y axis           |
//! |---------------------|-------------------|------------------|
//! | `TorqueSpeed`       | output torque     | angular speed    |
//! | `TorquePower`       | output torque     | mechanical power |
//! | `TorqueCurrent`     | output torque     | current          |
//! | `TorqueEfficiency`  | output torque     | efficiency       |
//! | `SpeedTorque`       | angular speed     | magnetic torque  |
//!
//! Torque-axis curves sample the magnetic torque `Tmag` uniformly over
//! `[Tf, Tmag_max]` and plot against the measurable output torque
//! `Tout = Tmag - Tf`, so overlaid bench points share the abscissa with
//! the idealized line. The speed-axis curve samples `[0, Va/KF]`.
//!
//! Curves are fully materialized: downstream consumers (chart rendering,
//! tabular export) need random access and repeated iteration, so nothing
//! here is lazy.
//!
//! ## Data Contract for Plotting
//!
//! A plotting collaborator gets, per curve: the axis labels
//! ([`Characteristic::x_label`]/[`Characteristic::y_label`]), the sampled
//! points, and up to three literal bench points
//! ([`Characteristic::markers`]) to scatter against the idealized line.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::{
    errors::{MotorError, MotorResult},
    estimator::MotorConstants,
    measurement::MeasurementSet,
};

/// Number of samples per curve when the caller has no preference.
pub const DEFAULT_SAMPLE_COUNT: usize = 1000;

/// One point on a performance curve. No identity, no mutation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurvePoint {
    /// Independent variable (torque or speed depending on the curve)
    pub x: f32,
    /// Dependent variable
    pub y: f32,
}

/// Which idealized characteristic to sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Characteristic {
    /// Angular speed vs output torque
    TorqueSpeed,
    /// Mechanical output power vs output torque
    TorquePower,
    /// Armature current vs output torque
    TorqueCurrent,
    /// Efficiency vs output torque
    TorqueEfficiency,
    /// Magnetic torque vs angular speed (the same line, transposed axes)
    SpeedTorque,
}

impl Characteristic {
    /// All five characteristics, in report order.
    pub const ALL: [Characteristic; 5] = [
        Characteristic::TorqueSpeed,
        Characteristic::TorquePower,
        Characteristic::TorqueCurrent,
        Characteristic::TorqueEfficiency,
        Characteristic::SpeedTorque,
    ];

    /// Label for the independent axis, with units.
    pub fn x_label(&self) -> &'static str {
        match self {
            Characteristic::SpeedTorque => "Speed [rad/s]",
            _ => "Torque [Nm]",
        }
    }

    /// Label for the dependent axis, with units.
    pub fn y_label(&self) -> &'static str {
        match self {
            Characteristic::TorqueSpeed => "Speed [rad/s]",
            Characteristic::TorquePower => "Power [W]",
            Characteristic::TorqueCurrent => "Current [A]",
            Characteristic::TorqueEfficiency => "Efficiency",
            Characteristic::SpeedTorque => "Torque [Nm]",
        }
    }

    /// Human-readable chart title.
    pub fn title(&self) -> &'static str {
        match self {
            Characteristic::TorqueSpeed => "Torque-to-speed characteristics",
            Characteristic::TorquePower => "Torque-to-power characteristics",
            Characteristic::TorqueCurrent => "Torque-to-current characteristics",
            Characteristic::TorqueEfficiency => "Torque-to-efficiency characteristics",
            Characteristic::SpeedTorque => "Speed-to-torque characteristics",
        }
    }

    /// Filename stem for tabular export, one file per characteristic.
    pub fn file_stem(&self) -> &'static str {
        match self {
            Characteristic::TorqueSpeed => "torque-to-speed",
            Characteristic::TorquePower => "torque-to-power",
            Characteristic::TorqueCurrent => "torque-to-current",
            Characteristic::TorqueEfficiency => "torque-to-efficiency",
            Characteristic::SpeedTorque => "speed-to-torque",
        }
    }

    /// The literal bench points to overlay on this curve as scatter
    /// markers. Power and efficiency are derived quantities with no
    /// directly measured points, so their marker sets are empty.
    ///
    /// The measurement should be normalized to the same shaft the curve
    /// was generated for.
    pub fn markers(&self, m: &MeasurementSet) -> heapless::Vec<CurvePoint, 3> {
        let overlay = match self {
            Characteristic::TorqueSpeed => [
                CurvePoint { x: 0.0, y: m.no_load_speed },
                CurvePoint { x: m.rated_torque, y: m.rated_speed },
                CurvePoint { x: m.stall_torque, y: 0.0 },
            ],
            Characteristic::TorqueCurrent => [
                CurvePoint { x: 0.0, y: m.no_load_current },
                CurvePoint { x: m.rated_torque, y: m.rated_current },
                CurvePoint { x: m.stall_torque, y: m.stall_current },
            ],
            Characteristic::SpeedTorque => [
                CurvePoint { x: m.no_load_speed, y: 0.0 },
                CurvePoint { x: m.rated_speed, y: m.rated_torque },
                CurvePoint { x: 0.0, y: m.stall_torque },
            ],
            Characteristic::TorquePower | Characteristic::TorqueEfficiency => {
                return heapless::Vec::new();
            }
        };

        let mut points = heapless::Vec::new();
        for p in overlay {
            let _ = points.push(p);
        }
        points
    }
}

/// A fully materialized, ordered sample of one characteristic.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PerformanceCurve {
    characteristic: Characteristic,
    points: Vec<CurvePoint>,
}

impl PerformanceCurve {
    /// Which characteristic this curve samples.
    pub fn characteristic(&self) -> Characteristic {
        self.characteristic
    }

    /// The sampled points, in increasing x order for torque-axis curves
    /// and increasing speed order for the speed-axis curve.
    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    /// Number of sampled points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when the curve holds no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Label for the independent axis.
    pub fn x_label(&self) -> &'static str {
        self.characteristic.x_label()
    }

    /// Label for the dependent axis.
    pub fn y_label(&self) -> &'static str {
        self.characteristic.y_label()
    }
}

/// Sample one characteristic with [`DEFAULT_SAMPLE_COUNT`] points.
pub fn generate(
    constants: &MotorConstants,
    voltage: f32,
    characteristic: Characteristic,
) -> MotorResult<PerformanceCurve> {
    generate_with_samples(constants, voltage, characteristic, DEFAULT_SAMPLE_COUNT)
}

/// Sample one characteristic of the idealized motor model.
///
/// `samples` is the number of points, endpoints included; two is the
/// smallest sample that still defines a line.
pub fn generate_with_samples(
    constants: &MotorConstants,
    voltage: f32,
    characteristic: Characteristic,
    samples: usize,
) -> MotorResult<PerformanceCurve> {
    constants.check()?;
    if !voltage.is_finite() || voltage <= 0.0 {
        return Err(MotorError::InvalidArgument {
            reason: "armature voltage must be positive and finite",
        });
    }
    if samples < 2 {
        return Err(MotorError::InvalidArgument {
            reason: "sample count must be at least 2",
        });
    }

    let ra = constants.armature_resistance;
    let km = constants.torque_constant;
    let kf = constants.back_emf_constant;
    let tf = constants.friction_torque;

    let max_mag_torque = voltage * km / ra;
    if tf >= max_mag_torque {
        // Equivalent to the efficiency radicand Ra*Tf/(Va*KM) exceeding 1:
        // friction eats the entire stall torque budget.
        return Err(MotorError::FrictionDominated {
            ratio: ra * tf / (voltage * km),
        });
    }

    let mut points = Vec::with_capacity(samples);
    let last = (samples - 1) as f32;

    match characteristic {
        Characteristic::SpeedTorque => {
            // Sample the speed axis from standstill to the frictionless
            // no-load speed; torque is the straight speed-torque line.
            let max_speed = voltage / kf;
            for i in 0..samples {
                let w = max_speed * i as f32 / last;
                let torque = voltage * km / ra - kf * km * w / ra;
                points.push(CurvePoint { x: w, y: torque });
            }
        }
        _ => {
            // Sample the magnetic torque from the friction floor to the
            // stall ceiling; plot against output torque.
            let span = max_mag_torque - tf;
            for i in 0..samples {
                let t_mag = tf + span * i as f32 / last;
                let t_out = t_mag - tf;
                let speed = voltage / kf - ra * t_mag / (kf * km);
                let y = match characteristic {
                    Characteristic::TorqueSpeed => speed,
                    Characteristic::TorqueCurrent => t_mag / km,
                    Characteristic::TorquePower => speed * t_out,
                    Characteristic::TorqueEfficiency => {
                        if i == 0 {
                            // At Tmag == Tf the no-load factor is 0/0;
                            // no output torque means no output power.
                            0.0
                        } else {
                            (km / kf)
                                * (1.0 - ra * t_mag / (voltage * km))
                                * (1.0 - tf / t_mag)
                        }
                    }
                    Characteristic::SpeedTorque => unreachable!(),
                };
                points.push(CurvePoint { x: t_out, y });
            }
        }
    }

    Ok(PerformanceCurve {
        characteristic,
        points,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Catalogue reference constants for a small precision motor.
    fn constants() -> MotorConstants {
        MotorConstants {
            armature_resistance: 3.41,
            torque_constant: 6.59e-3,
            back_emf_constant: 6.589e-3,
            friction_torque: 1.3e-4,
        }
    }

    const VA: f32 = 12.0;

    fn close(a: f32, b: f32, rel: f32) -> bool {
        (a - b).abs() <= rel * b.abs().max(f32::MIN_POSITIVE)
    }

    #[test]
    fn torque_speed_endpoints() {
        let curve = generate_with_samples(&constants(), VA, Characteristic::TorqueSpeed, 100)
            .unwrap();
        let first = curve.points()[0];
        let last = curve.points()[99];

        // Curve starts at zero output torque and the friction-corrected
        // no-load speed
        assert_eq!(first.x, 0.0);
        assert!(close(first.y, 1811.0, 1e-3));
        // ... and ends at stall: zero speed
        assert!(last.y.abs() < 0.5);
    }

    #[test]
    fn current_endpoints_match_model() {
        let c = constants();
        let curve =
            generate_with_samples(&c, VA, Characteristic::TorqueCurrent, 50).unwrap();
        let first = curve.points()[0];
        let last = curve.points()[49];

        // No-load current Tf/KM at the friction floor
        assert!(close(first.y, c.friction_torque / c.torque_constant, 1e-5));
        // Stall current Va/Ra at the ceiling
        assert!(close(last.y, VA / c.armature_resistance, 1e-5));
    }

    #[test]
    fn efficiency_zero_at_no_load() {
        let curve =
            generate_with_samples(&constants(), VA, Characteristic::TorqueEfficiency, 50)
                .unwrap();
        assert_eq!(curve.points()[0].y, 0.0);
        // Interior efficiency is positive and below unity
        for p in &curve.points()[1..49] {
            assert!(p.y > 0.0 && p.y < 1.0, "efficiency {} out of (0,1)", p.y);
        }
    }

    #[test]
    fn power_vanishes_at_both_endpoints() {
        let curve =
            generate_with_samples(&constants(), VA, Characteristic::TorquePower, 200)
                .unwrap();
        let pts = curve.points();

        assert_eq!(pts[0].y, 0.0);
        assert!(pts[199].y.abs() < 1e-2);
        for p in &pts[1..199] {
            assert!(p.y > 0.0, "interior power {} not positive", p.y);
        }
    }

    #[test]
    fn speed_decreases_current_increases() {
        let c = constants();
        let speed =
            generate_with_samples(&c, VA, Characteristic::TorqueSpeed, 100).unwrap();
        let current =
            generate_with_samples(&c, VA, Characteristic::TorqueCurrent, 100).unwrap();

        for pair in speed.points().windows(2) {
            assert!(pair[1].y < pair[0].y);
        }
        for pair in current.points().windows(2) {
            assert!(pair[1].y > pair[0].y);
        }
    }

    #[test]
    fn speed_torque_is_the_transposed_line() {
        let c = constants();
        let curve =
            generate_with_samples(&c, VA, Characteristic::SpeedTorque, 100).unwrap();
        let first = curve.points()[0];
        let last = curve.points()[99];

        // Standstill: full magnetic stall torque
        assert_eq!(first.x, 0.0);
        assert!(close(first.y, VA * c.torque_constant / c.armature_resistance, 1e-5));
        // Frictionless no-load speed: zero torque
        assert!(close(last.x, VA / c.back_emf_constant, 1e-5));
        assert!(last.y.abs() < 1e-4);
    }

    #[test]
    fn rejects_tiny_sample_count() {
        let err =
            generate_with_samples(&constants(), VA, Characteristic::TorqueSpeed, 1)
                .unwrap_err();
        assert!(matches!(err, MotorError::InvalidArgument { .. }));
    }

    #[test]
    fn rejects_bad_voltage() {
        for bad in [0.0, -5.0, f32::NAN] {
            let err = generate_with_samples(&constants(), bad, Characteristic::TorqueSpeed, 10)
                .unwrap_err();
            assert!(matches!(err, MotorError::InvalidArgument { .. }));
        }
    }

    #[test]
    fn friction_dominated_motor_cannot_generate() {
        let c = MotorConstants {
            friction_torque: 1.0, // far above Va*KM/Ra
            ..constants()
        };
        let err = generate_with_samples(&c, VA, Characteristic::TorqueEfficiency, 10)
            .unwrap_err();
        assert!(matches!(err, MotorError::FrictionDominated { .. }));
        assert!(err.is_domain());
    }

    #[test]
    fn default_sample_count() {
        let curve = generate(&constants(), VA, Characteristic::TorqueSpeed).unwrap();
        assert_eq!(curve.len(), DEFAULT_SAMPLE_COUNT);
        assert!(!curve.is_empty());
    }

    #[test]
    fn markers_follow_the_bench_points() {
        let m = MeasurementSet {
            voltage: 12.0,
            no_load_speed: 1800.0,
            no_load_current: 0.02,
            rated_speed: 1500.0,
            rated_torque: 0.004,
            rated_current: 0.6,
            stall_torque: 0.023,
            stall_current: 3.5,
            reduction_ratio: 1.0,
        };

        let speed_markers = Characteristic::TorqueSpeed.markers(&m);
        assert_eq!(speed_markers.len(), 3);
        assert_eq!(speed_markers[0], CurvePoint { x: 0.0, y: 1800.0 });
        assert_eq!(speed_markers[2], CurvePoint { x: 0.023, y: 0.0 });

        let current_markers = Characteristic::TorqueCurrent.markers(&m);
        assert_eq!(current_markers[1], CurvePoint { x: 0.004, y: 0.6 });

        assert!(Characteristic::TorquePower.markers(&m).is_empty());
        assert!(Characteristic::TorqueEfficiency.markers(&m).is_empty());

        let transposed = Characteristic::SpeedTorque.markers(&m);
        assert_eq!(transposed[0], CurvePoint { x: 1800.0, y: 0.0 });
        assert_eq!(transposed[2], CurvePoint { x: 0.0, y: 0.023 });
    }

    #[test]
    fn axis_labels() {
        assert_eq!(Characteristic::TorqueSpeed.x_label(), "Torque [Nm]");
        assert_eq!(Characteristic::TorqueSpeed.y_label(), "Speed [rad/s]");
        assert_eq!(Characteristic::SpeedTorque.x_label(), "Speed [rad/s]");
        assert_eq!(Characteristic::SpeedTorque.y_label(), "Torque [Nm]");
    }
}
