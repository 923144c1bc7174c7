//! Performance Curve Example
//!
//! Samples every idealized characteristic of a catalogue motor at one
//! operating voltage and prints the headline figures a datasheet quotes.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 02_performance_curves
//! ```

use motorbench_core::{
    curves::{self, Characteristic},
    presets, summary,
};

fn main() {
    let voltage = 6.0;
    let constants = presets::REFERENCE_CONSTANTS;

    println!("Motorbench Performance Curve Example");
    println!("====================================\n");

    let report = summary::summarize_with_inertia(
        &constants,
        voltage,
        presets::REFERENCE_ROTOR_INERTIA,
    )
    .expect("catalogue constants are valid");

    println!("Summary at {voltage} V:");
    println!("  Maximum speed:       {:.3e} rad/s", report.max_speed);
    println!("  Maximum torque:      {:.3e} Nm", report.max_magnetic_torque);
    println!("  Maximum efficiency:  {:.1}%", report.max_efficiency * 100.0);
    println!("  Maximum power:       {:.3e} W", report.max_mechanical_power);
    println!("  No-load current:     {:.3e} A\n", report.no_load_current);

    for characteristic in Characteristic::ALL {
        let curve = curves::generate(&constants, voltage, characteristic)
            .expect("catalogue constants are valid");
        let first = curve.points()[0];
        let last = curve.points()[curve.len() - 1];
        println!(
            "{:<40} {} points, {} {:.3e} -> {:.3e}",
            characteristic.title(),
            curve.len(),
            curve.y_label(),
            first.y,
            last.y,
        );
    }
}
