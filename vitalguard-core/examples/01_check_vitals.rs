//! Basic Vital Sign Evaluation Example
//!
//! Evaluates a handful of bedside readings against the default reference
//! ranges and against a tighter ward configuration.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_check_vitals
//! ```

use vitalguard_core::{VitalKind, VitalLimits, VitalSigns, VitalStatus};

fn main() {
    println!("VitalGuard Evaluation Example");
    println!("=============================\n");

    let limits = VitalLimits::default();
    println!("Reference limits:");
    println!(
        "  Temperature: {}-{} °F",
        limits.temperature_range.min(),
        limits.temperature_range.max()
    );
    println!("  Pulse rate:  {}-{} bpm", limits.pulse_range.min(), limits.pulse_range.max());
    println!("  SpO2:        >= {} %", limits.spo2_minimum);
    println!("  Tolerance:   {} %\n", limits.tolerance.percent());

    let readings = [
        VitalSigns::new(98.0, 80.0, 95.0),
        VitalSigns::new(95.5, 80.0, 95.0),
        VitalSigns::new(98.0, 61.5, 95.0),
        VitalSigns::new(94.5, 80.0, 95.0),
        VitalSigns::new(94.0, 59.0, 89.0),
    ];

    for signs in &readings {
        let result = signs.evaluate(&limits);
        let marker = match result.status() {
            VitalStatus::Normal => "  ok ",
            VitalStatus::Warning => " warn",
            VitalStatus::OutOfRange => "ALERT",
        };
        println!(
            "[{marker}] T={:5.1} P={:5.1} SpO2={:5.1}  {}",
            signs.temperature, signs.pulse_rate, signs.spo2, result
        );
    }

    // Per-vital breakdown shows what the composite hides
    println!("\nPer-vital breakdown for the last reading:");
    let last = readings[readings.len() - 1];
    for kind in VitalKind::ALL {
        let result = kind.evaluate(last.get(kind), &limits);
        println!("  {:<12} {}", kind.name(), result);
    }

    // Tighter ward limits
    let ward = VitalLimits::default()
        .with_temperature_range(96.0, 101.0)
        .with_pulse_range(65.0, 99.0)
        .with_spo2_minimum(92.0);

    match ward.validate() {
        Ok(()) => {
            let result = VitalSigns::new(101.0, 80.0, 95.0).evaluate(&ward);
            println!("\nWard limits, T=101.0: {}", result);
        }
        Err(e) => println!("\nInvalid ward limits: {}", e),
    }
}
