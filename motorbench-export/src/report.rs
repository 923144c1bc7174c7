//! Console Summary Formatting
//!
//! Renders a [`SummaryReport`] as the fixed-order text block a bench
//! session prints after a run. Values use scientific notation with three
//! digits, efficiency is shown in percent, and the acceleration line only
//! appears when a rotor inertia was supplied.

use std::fmt::Write;

use motorbench_core::SummaryReport;

/// Render the summary block as plain text, one figure per line.
pub fn render_summary(report: &SummaryReport) -> String {
    let mut out = String::new();

    // Writes into a String are infallible
    let _ = writeln!(out, "Maximum speed = {:.3e} rad/s", report.max_speed);
    let _ = writeln!(out, "Maximum torque = {:.3e} Nm", report.max_magnetic_torque);
    let _ = writeln!(
        out,
        "Maximum efficiency = {:.3e} %",
        report.max_efficiency * 100.0
    );
    let _ = writeln!(
        out,
        "Maximum mechanical power = {:.3e} W",
        report.max_mechanical_power
    );
    let _ = writeln!(
        out,
        "No-load armature current = {:.3e} A",
        report.no_load_current
    );
    let _ = writeln!(
        out,
        "Torque-to-current coefficient = {:.3e} A/(Nm)",
        report.torque_to_current
    );
    let _ = writeln!(
        out,
        "Voltage-to-speed coefficient (no load) = {:.3e} rad/(Vs)",
        report.voltage_to_speed
    );
    let _ = writeln!(
        out,
        "dw/dT slope = {:.3e} rad/(sNm)",
        report.speed_torque_slope
    );

    if let Some(accel) = report.max_angular_accel {
        let _ = writeln!(
            out,
            "Maximum angular acceleration (no load) = {:.3e} rad/s^2",
            accel
        );
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use motorbench_core::{presets, summary};

    #[test]
    fn renders_all_figures_in_order() {
        let report = summary::summarize(&presets::REFERENCE_CONSTANTS, 12.0).unwrap();
        let text = render_summary(&report);

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 8);
        assert!(lines[0].starts_with("Maximum speed = "));
        assert!(lines[0].ends_with(" rad/s"));
        assert!(lines[2].contains("efficiency"));
        assert!(lines[7].starts_with("dw/dT slope = "));
    }

    #[test]
    fn acceleration_line_requires_inertia() {
        let constants = presets::REFERENCE_CONSTANTS;

        let without = summary::summarize(&constants, 12.0).unwrap();
        assert!(!render_summary(&without).contains("acceleration"));

        let with = summary::summarize_with_inertia(
            &constants,
            12.0,
            presets::REFERENCE_ROTOR_INERTIA,
        )
        .unwrap();
        let text = render_summary(&with);
        assert_eq!(text.lines().count(), 9);
        assert!(text.contains("Maximum angular acceleration"));
    }

    #[test]
    fn efficiency_is_rendered_in_percent() {
        let report = summary::summarize(&presets::REFERENCE_CONSTANTS, 12.0).unwrap();
        let text = render_summary(&report);

        // 0.856 as a fraction renders as 8.560e1 percent
        let line = text.lines().nth(2).unwrap();
        assert!(line.contains("8.56"), "unexpected efficiency line: {line}");
    }
}
