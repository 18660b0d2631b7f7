//! Integration tests: limits file -> evaluation -> alert sink

use std::io::Write;
use std::time::Duration;

use tempfile::NamedTempFile;
use vitalguard_alerts::{
    check_and_alert, load_limits, AlertConfig, AlertError, AlertSink, ConsoleAlerter,
    RecordingAlerter,
};
use vitalguard_core::{VitalLimits, VitalSigns, VitalStatus};

fn limits_file(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

#[test]
fn ward_limits_from_file() {
    let file = limits_file(
        r#"{
            "temperature_range": { "min": 96, "max": 101 },
            "pulse_range": { "min": 65, "max": 99 },
            "spo2_minimum": 92
        }"#,
    );
    let limits = load_limits(file.path()).unwrap();

    let mut sink = RecordingAlerter::default();
    assert!(check_and_alert(&VitalSigns::new(101.0, 80.0, 95.0), &limits, &mut sink).unwrap());
    assert!(!check_and_alert(&VitalSigns::new(98.0, 80.0, 91.0), &limits, &mut sink).unwrap());

    let received = sink.received();
    assert_eq!(received[0].status(), VitalStatus::Normal);
    assert_eq!(
        received[1].message(),
        Some("Oxygen Saturation out of range! (min 92)")
    );
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = load_limits(dir.path().join("absent.json"));
    assert!(matches!(result, Err(AlertError::Io(_))));
}

#[test]
fn overlapping_bands_in_file_rejected() {
    let file = limits_file(r#"{ "tolerance_percent": 25 }"#);
    assert!(matches!(load_limits(file.path()), Err(AlertError::Config(_))));
}

#[test]
fn console_only_blinks_for_critical_results() {
    let config = AlertConfig::default()
        .with_cycles(1)
        .with_interval(Duration::ZERO);
    let mut console = ConsoleAlerter::new(Vec::new(), config);
    let limits = VitalLimits::default();

    for signs in [
        VitalSigns::new(98.0, 80.0, 95.0),
        VitalSigns::new(98.0, 98.5, 95.0),
        VitalSigns::new(98.0, 80.0, 85.0),
    ] {
        check_and_alert(&signs, &limits, &mut console).unwrap();
    }

    let out = String::from_utf8(console.into_inner()).unwrap();
    assert_eq!(
        out,
        "Warning: Approaching tachycardia\n\
         Oxygen Saturation out of range! (min 90)\n\r* \r *\r  "
    );
}

#[test]
fn sinks_are_interchangeable() {
    let limits = VitalLimits::default();
    let signs = VitalSigns::new(94.0, 59.0, 89.0);
    let mut recorder = RecordingAlerter::default();
    let mut console = ConsoleAlerter::new(
        Vec::new(),
        AlertConfig::default().with_cycles(0).with_interval(Duration::ZERO),
    );

    let sinks: [&mut dyn AlertSink; 2] = [&mut recorder, &mut console];
    for sink in sinks {
        assert!(!check_and_alert(&signs, &limits, sink).unwrap());
    }

    assert_eq!(
        recorder.received()[0].message(),
        Some("Temperature out of range! (95-102)")
    );
}
