//! Console alerter
//!
//! Prints the result message and, for out-of-range readings, blinks a
//! two-frame marker on the current line:
//!
//! ```text
//! Temperature out of range! (95-102)
//! \r*   ->  \r *  ->  \r*   ->  ...  ->  \r    (cleared)
//! ```
//!
//! The animation blocks the calling thread for `2 * cycles * interval`.

use std::io::{self, Stdout, Write};
use std::thread;
use std::time::Duration;

use vitalguard_core::{EvaluationResult, VitalStatus};

use crate::errors::AlertResult;
use crate::sink::AlertSink;

/// Default number of blink cycles per critical alert
pub const DEFAULT_BLINK_CYCLES: u32 = 6;

/// Default pause after each frame (milliseconds)
pub const DEFAULT_BLINK_INTERVAL_MS: u64 = 1_000;

/// Frames drawn once per cycle, in order
pub const BLINK_FRAMES: [&str; 2] = ["\r* ", "\r *"];

/// Frame that clears the marker when the animation ends
pub const CLEAR_FRAME: &str = "\r  ";

/// Blink animation settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlertConfig {
    /// Number of full blink cycles
    pub cycles: u32,
    /// Pause after each frame
    pub interval: Duration,
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            cycles: DEFAULT_BLINK_CYCLES,
            interval: Duration::from_millis(DEFAULT_BLINK_INTERVAL_MS),
        }
    }
}

impl AlertConfig {
    /// Set the number of blink cycles
    pub fn with_cycles(mut self, cycles: u32) -> Self {
        self.cycles = cycles;
        self
    }

    /// Set the pause after each frame
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }
}

/// Alert sink that writes to a terminal-like output
#[derive(Debug)]
pub struct ConsoleAlerter<W: Write = Stdout> {
    out: W,
    config: AlertConfig,
}

impl ConsoleAlerter<Stdout> {
    /// Alerter on standard output with default timing
    pub fn stdout() -> Self {
        Self::new(io::stdout(), AlertConfig::default())
    }
}

impl<W: Write> ConsoleAlerter<W> {
    /// Alerter on any writer
    pub fn new(out: W, config: AlertConfig) -> Self {
        Self { out, config }
    }

    /// Current animation settings
    pub fn config(&self) -> &AlertConfig {
        &self.config
    }

    /// Give back the underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Run the blocking blink animation
    pub fn animate(&mut self) -> io::Result<()> {
        for _ in 0..self.config.cycles {
            for frame in BLINK_FRAMES {
                self.out.write_all(frame.as_bytes())?;
                self.out.flush()?;
                thread::sleep(self.config.interval);
            }
        }

        self.out.write_all(CLEAR_FRAME.as_bytes())?;
        self.out.flush()
    }
}

impl<W: Write> AlertSink for ConsoleAlerter<W> {
    fn alert(&mut self, result: &EvaluationResult) -> AlertResult<bool> {
        if let Some(message) = result.message() {
            writeln!(self.out, "{message}")?;
        }

        match result.status() {
            VitalStatus::Normal => {}
            VitalStatus::Warning => log::info!("{}", result),
            VitalStatus::OutOfRange => {
                log::warn!("critical vital sign: {}", result);
                self.animate()?;
            }
        }

        Ok(result.is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitalguard_core::{evaluate_vitals, VitalLimits};

    fn quiet(cycles: u32) -> ConsoleAlerter<Vec<u8>> {
        ConsoleAlerter::new(
            Vec::new(),
            AlertConfig::default()
                .with_cycles(cycles)
                .with_interval(Duration::ZERO),
        )
    }

    fn output(alerter: ConsoleAlerter<Vec<u8>>) -> String {
        String::from_utf8(alerter.into_inner()).unwrap()
    }

    #[test]
    fn default_timing() {
        let config = AlertConfig::default();
        assert_eq!(config.cycles, 6);
        assert_eq!(config.interval, Duration::from_secs(1));
    }

    #[test]
    fn normal_writes_nothing() {
        let mut alerter = quiet(2);
        let result = evaluate_vitals(98.0, 80.0, 95.0, &VitalLimits::default());
        assert!(alerter.alert(&result).unwrap());
        assert_eq!(output(alerter), "");
    }

    #[test]
    fn warning_prints_without_animation() {
        let mut alerter = quiet(2);
        let result = evaluate_vitals(95.5, 80.0, 95.0, &VitalLimits::default());
        assert!(alerter.alert(&result).unwrap());
        assert_eq!(output(alerter), "Warning: Approaching hypothermia\n");
    }

    #[test]
    fn out_of_range_blinks() {
        let mut alerter = quiet(2);
        let result = evaluate_vitals(94.5, 80.0, 95.0, &VitalLimits::default());
        assert!(!alerter.alert(&result).unwrap());
        assert_eq!(
            output(alerter),
            "Temperature out of range! (95-102)\n\r* \r *\r* \r *\r  "
        );
    }

    #[test]
    fn zero_cycles_only_clears() {
        let mut alerter = quiet(0);
        alerter.animate().unwrap();
        assert_eq!(output(alerter), CLEAR_FRAME);
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_failure_surfaces() {
        let config = AlertConfig::default().with_interval(Duration::ZERO);
        let mut alerter = ConsoleAlerter::new(BrokenPipe, config);
        let result = evaluate_vitals(94.5, 80.0, 95.0, &VitalLimits::default());
        assert!(matches!(alerter.alert(&result), Err(crate::AlertError::Io(_))));
    }
}
