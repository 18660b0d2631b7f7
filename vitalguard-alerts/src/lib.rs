//! Alert delivery for VitalGuard
//!
//! ## Overview
//!
//! `vitalguard-core` only classifies readings. This crate is the collaborator
//! that acts on the result:
//!
//! - [`AlertSink`]: anything that can signal an
//!   [`EvaluationResult`](vitalguard_core::EvaluationResult)
//! - [`ConsoleAlerter`]: prints the message and blinks the terminal for
//!   out-of-range readings (blocking)
//! - [`RecordingAlerter`]: keeps results in memory, for tests and dashboards
//! - [`check_and_alert`]: evaluate then alert, composed explicitly
//! - [`load_limits`]: read `VitalLimits` from a JSON file
//!
//! ## Usage Example
//!
//! ```no_run
//! use vitalguard_alerts::{check_and_alert, load_limits, ConsoleAlerter};
//! use vitalguard_core::VitalSigns;
//!
//! let limits = load_limits("limits.json")?;
//! let mut console = ConsoleAlerter::stdout();
//!
//! if check_and_alert(&VitalSigns::new(101.0, 80.0, 95.0), &limits, &mut console)? {
//!     println!("All vitals are within range.");
//! } else {
//!     println!("One or more vitals are out of range.");
//! }
//! # Ok::<(), vitalguard_alerts::AlertError>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod console;
pub mod errors;
pub mod sink;

pub use config::{limits_from_json, load_limits};
pub use console::{AlertConfig, ConsoleAlerter};
pub use errors::{AlertError, AlertResult};
pub use sink::{check_and_alert, AlertSink, RecordingAlerter};
