//! Stress-Shield domain logic.
//!
//! Pure, synchronous scoring of physiological vitals. No I/O, no async,
//! no shared state -- the HTTP boundary lives in `stressshield-api`.

pub mod scoring;

pub use scoring::{assess, StressAssessment, StressLevel, VitalsReading};
