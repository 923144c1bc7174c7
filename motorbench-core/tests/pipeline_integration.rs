//! Integration tests for the full bench-to-curves pipeline
//!
//! Runs the complete flow on the geared bench preset: raw measurement ->
//! normalization -> constant estimation -> summary scalars and sampled
//! characteristics, checking the stages against each other rather than in
//! isolation.

use motorbench_core::{
    curves::{self, Characteristic},
    estimator::{self, DerivationPath},
    presets, summary,
};

fn close(a: f32, b: f32, rel: f32) -> bool {
    (a - b).abs() <= rel * b.abs().max(f32::MIN_POSITIVE)
}

#[test]
fn bench_preset_full_pipeline() {
    let bench = presets::geared_12v().normalize();
    let constants = estimator::estimate(&bench).unwrap();

    // Constants for the 37.3:1 gearmotor referred to the motor shaft
    assert_eq!(constants.armature_resistance, 2.0);
    assert!(close(constants.torque_constant, 4.042e-3, 1e-3));
    assert!(close(constants.friction_torque, 6.063e-4, 1e-3));
    assert!(close(constants.back_emf_constant, 1.400e-2, 1e-3));

    let report = summary::summarize(&constants, bench.voltage).unwrap();

    // The summary must agree with the measurement the constants came from:
    // no-load current is reproduced exactly by Tf/KM = I0
    assert!(close(report.no_load_current, bench.no_load_current, 1e-5));
    // Stall magnetic torque is KM * Imax
    assert!(close(
        report.max_magnetic_torque,
        constants.torque_constant * bench.stall_current,
        1e-5,
    ));

    // Curves close the loop with the summary
    let current =
        curves::generate_with_samples(&constants, bench.voltage, Characteristic::TorqueCurrent, 500)
            .unwrap();
    let first = current.points()[0];
    let last = current.points()[499];
    assert!(close(first.y, report.no_load_current, 1e-5));
    assert!(close(last.y, bench.stall_current, 1e-5));

    let speed =
        curves::generate_with_samples(&constants, bench.voltage, Characteristic::TorqueSpeed, 500)
            .unwrap();
    // The back-extrapolated zero-friction intercept cancels against the
    // friction drop, so the idealized line passes through the measured
    // no-load point itself
    assert!(close(speed.points()[0].y, bench.no_load_speed, 1e-4));
}

#[test]
fn derivation_paths_bracket_the_data() {
    let bench = presets::geared_12v().normalize();

    let stall = estimator::estimate_with(&bench, DerivationPath::Stall).unwrap();
    let rated = estimator::estimate_with(&bench, DerivationPath::Rated).unwrap();

    // Same electrical path, different torque-current segment
    assert_eq!(stall.armature_resistance, rated.armature_resistance);
    assert!(stall.torque_constant != rated.torque_constant);

    // Both stay physical on this dataset
    for c in [stall, rated] {
        assert!(c.check().is_ok());
    }
}

#[test]
fn slope_segments_agree_with_the_fit() {
    let bench = presets::geared_12v().normalize();
    let s = estimator::slopes(&bench).unwrap();
    let c = estimator::estimate(&bench).unwrap();

    // The canonical KM is exactly the no-load -> stall segment
    assert_eq!(c.torque_constant, s.torque_current_no_load_stall);

    // All three speed-torque segments describe a dropping line
    assert!(s.speed_torque_no_load_rated < 0.0);
    assert!(s.speed_torque_rated_stall < 0.0);
    assert!(s.speed_torque_no_load_stall < 0.0);
}

#[test]
fn reference_constants_reproduce_catalogue_figures() {
    let report =
        summary::summarize_with_inertia(&presets::REFERENCE_CONSTANTS, 12.0, presets::REFERENCE_ROTOR_INERTIA)
            .unwrap();

    assert!(close(report.max_speed, 1811.0, 1e-3));
    assert!(close(report.max_magnetic_torque, 2.319e-2, 1e-3));
    assert!(close(report.no_load_current, 1.973e-2, 1e-3));
    assert!(close(report.max_angular_accel.unwrap(), 2.306e5, 1e-3));
}

#[test]
fn markers_share_the_curve_abscissa() {
    let bench = presets::geared_12v().normalize();
    let constants = estimator::estimate(&bench).unwrap();
    let curve =
        curves::generate_with_samples(&constants, bench.voltage, Characteristic::TorqueSpeed, 100)
            .unwrap();
    let markers = Characteristic::TorqueSpeed.markers(&bench);

    // With the stall-based fit the sampled output-torque range ends at the
    // measured stall torque: Tmag_max - Tf = KM*(Imax - I0) = Tmax
    let x_max = curve.points()[99].x;
    assert_eq!(markers.len(), 3);
    assert!(close(markers[2].x, x_max, 1e-4));
}
