//! CSV Export Example
//!
//! Runs the full pipeline end to end: bench measurement -> constants ->
//! curves -> one CSV file per characteristic, plus the console summary
//! block.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 03_curves_to_csv
//! ```

use std::path::Path;

use motorbench_core::{curves, estimator, presets, summary, Characteristic};
use motorbench_export::{render_summary, save_curve};

fn main() {
    println!("Motorbench CSV Export Example");
    println!("=============================\n");

    let bench = presets::geared_12v().normalize();
    let constants = match estimator::estimate(&bench) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Estimation failed: {e}");
            return;
        }
    };

    let report = summary::summarize(&constants, bench.voltage)
        .expect("estimated constants are valid");
    print!("{}", render_summary(&report));
    println!();

    let out_dir = Path::new(".");
    for characteristic in Characteristic::ALL {
        let curve = curves::generate(&constants, bench.voltage, characteristic)
            .expect("estimated constants are valid");
        match save_curve(&curve, out_dir) {
            Ok(path) => println!("Wrote {}", path.display()),
            Err(e) => eprintln!("Export failed for {}: {e}", characteristic.title()),
        }
    }
}
