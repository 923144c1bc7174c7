//! Bench Estimation Example
//!
//! This example demonstrates the simplest use case of Motorbench:
//! turning three bench operating points into motor constants.
//!
//! ## What You'll Learn
//!
//! - Building a measurement set from bench readings
//! - Referring geared measurements back to the motor shaft
//! - Estimating the four motor constants
//! - Cross-checking the two derivation paths
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_bench_estimation
//! ```

use motorbench_core::{
    constants::units::{NM_PER_KGCM, RAD_PER_S_PER_RPM},
    estimator::{self, DerivationPath},
    MeasurementSet,
};

fn main() {
    println!("Motorbench Bench Estimation Example");
    println!("===================================\n");

    // A 12 V gearmotor measured at the output shaft of its 37.3:1 gearbox.
    // Tachometer readings in rpm, torque stick in kg*cm.
    let bench = MeasurementSet {
        voltage: 12.0,
        no_load_speed: 214.0 * RAD_PER_S_PER_RPM,
        no_load_current: 0.15,
        rated_speed: 171.0 * RAD_PER_S_PER_RPM,
        rated_torque: 2.3 * NM_PER_KGCM,
        rated_current: 1.0,
        stall_torque: 9.0 * NM_PER_KGCM,
        stall_current: 6.0,
        reduction_ratio: 37.3,
    };

    println!("Output-shaft measurement:");
    println!("  No-load:  {:.1} rad/s at {:.2} A", bench.no_load_speed, bench.no_load_current);
    println!("  Rated:    {:.1} rad/s, {:.3} Nm, {:.2} A", bench.rated_speed, bench.rated_torque, bench.rated_current);
    println!("  Stall:    {:.3} Nm at {:.2} A", bench.stall_torque, bench.stall_current);
    println!("  Gearbox:  {}:1\n", bench.reduction_ratio);

    // Refer everything to the motor shaft before estimating
    let normalized = bench.normalize();
    println!("Referred to the motor shaft:");
    println!("  No-load speed: {:.1} rad/s", normalized.no_load_speed);
    println!("  Stall torque:  {:.4} Nm\n", normalized.stall_torque);

    let constants = match estimator::estimate(&normalized) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Estimation failed: {e}");
            return;
        }
    };

    println!("Estimated constants (stall-based derivation):");
    println!("  Armature resistance Ra: {:.3} Ohm", constants.armature_resistance);
    println!("  Torque constant KM:     {:.3e} Nm/A", constants.torque_constant);
    println!("  Back-EMF constant KF:   {:.3e} Vs/rad", constants.back_emf_constant);
    println!("  Friction torque Tf:     {:.3e} Nm\n", constants.friction_torque);

    // The rated-based path uses the no-load -> rated segment instead.
    // A large disagreement between the two flags suspect bench data.
    let rated = estimator::estimate_with(&normalized, DerivationPath::Rated)
        .expect("rated path fails only when the stall path does");
    let spread = (rated.torque_constant - constants.torque_constant).abs()
        / constants.torque_constant;
    println!("Cross-check against the rated-based derivation:");
    println!("  KM (rated segment): {:.3e} Nm/A", rated.torque_constant);
    println!("  Relative spread:    {:.0}%", spread * 100.0);
}
