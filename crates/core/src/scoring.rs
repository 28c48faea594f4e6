//! Rule-based stress scoring constants, types, and pure logic.
//!
//! Converts one set of physiological readings (heart rate, skin
//! conductance, skin temperature) into a continuous stress score in
//! `[0, 10]` and a discrete stress level. Every input produces a defined
//! result; there is no error path at this layer.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Neutral bands
// ---------------------------------------------------------------------------

/// Lower edge of the neutral heart-rate band (beats per minute).
pub const HEART_RATE_NEUTRAL_MIN: f64 = 60.0;
/// Upper edge of the neutral heart-rate band (beats per minute).
pub const HEART_RATE_NEUTRAL_MAX: f64 = 100.0;
/// Lower edge of the neutral skin-temperature band (degrees Celsius).
pub const TEMPERATURE_NEUTRAL_MIN: f64 = 36.5;
/// Upper edge of the neutral skin-temperature band (degrees Celsius).
pub const TEMPERATURE_NEUTRAL_MAX: f64 = 37.5;

// ---------------------------------------------------------------------------
// Contribution weights
// ---------------------------------------------------------------------------

/// Each 20 bpm of heart-rate deviation outside the neutral band adds 1.0.
pub const HEART_RATE_DIVISOR: f64 = 20.0;
/// Each 2 microsiemens of skin conductance adds 1.0 (no neutral band).
pub const SKIN_CONDUCTANCE_DIVISOR: f64 = 2.0;
/// Each degree of temperature deviation outside the neutral band adds 2.0.
pub const TEMPERATURE_MULTIPLIER: f64 = 2.0;

// ---------------------------------------------------------------------------
// Score bounds and level thresholds
// ---------------------------------------------------------------------------

/// Lower clamp bound for the final score.
pub const SCORE_MIN: f64 = 0.0;
/// Upper clamp bound for the final score.
pub const SCORE_MAX: f64 = 10.0;

/// Scores below this are [`StressLevel::Low`].
pub const LOW_THRESHOLD: f64 = 3.0;
/// Scores below this (and at or above [`LOW_THRESHOLD`]) are Normal.
pub const NORMAL_THRESHOLD: f64 = 5.0;
/// Scores below this (and at or above [`NORMAL_THRESHOLD`]) are Moderate.
pub const MODERATE_THRESHOLD: f64 = 7.0;
/// Scores below this are High; at or above, Critical.
pub const HIGH_THRESHOLD: f64 = 9.0;

/// Fixed placeholder confidence reported with every assessment. Not
/// derived from the input.
pub const CONFIDENCE: f64 = 0.92;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// One set of physiological readings, taken as-is from a single request.
///
/// No range is enforced: negative or physiologically absurd values are
/// scored arithmetically, not rejected.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct VitalsReading {
    /// Heart rate in beats per minute.
    pub heart_rate: f64,
    /// Skin conductance in microsiemens.
    pub skin_conductance: f64,
    /// Skin temperature in degrees Celsius.
    pub temperature: f64,
}

/// Discrete stress category, ordered from calmest to most severe.
///
/// Serializes as the uppercase name (`"LOW"`, `"CRITICAL"`, ...) to match
/// the wire contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StressLevel {
    Low,
    Normal,
    Moderate,
    High,
    Critical,
}

impl StressLevel {
    /// Map a clamped score onto its level band.
    ///
    /// Bands are half-open with strict `<` comparisons, so a boundary
    /// value belongs to the upper band: exactly 3.0 is Normal, exactly
    /// 9.0 is Critical.
    pub fn from_score(score: f64) -> Self {
        if score < LOW_THRESHOLD {
            Self::Low
        } else if score < NORMAL_THRESHOLD {
            Self::Normal
        } else if score < MODERATE_THRESHOLD {
            Self::Moderate
        } else if score < HIGH_THRESHOLD {
            Self::High
        } else {
            Self::Critical
        }
    }

    /// Uppercase wire name for display and logging.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Normal => "NORMAL",
            Self::Moderate => "MODERATE",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

/// Result of scoring one reading.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct StressAssessment {
    /// Discrete stress category.
    pub level: StressLevel,
    /// Continuous stress score, clamped to `[0, 10]`.
    pub score: f64,
    /// Always [`CONFIDENCE`].
    pub confidence: f64,
}

// ---------------------------------------------------------------------------
// Scoring logic
// ---------------------------------------------------------------------------

/// Compute the clamped stress score for a reading.
///
/// Heart rate and temperature contribute only outside their neutral bands
/// (the band edges are inclusive and contribute nothing); skin conductance
/// contributes unconditionally. The accumulated score is clamped to
/// `[0, 10]`. The max/min chain ignores NaN, so even non-finite readings
/// yield a defined score.
pub fn compute_score(reading: &VitalsReading) -> f64 {
    let mut score = 0.0;

    let hr = reading.heart_rate;
    if hr > HEART_RATE_NEUTRAL_MAX {
        score += (hr - HEART_RATE_NEUTRAL_MAX) / HEART_RATE_DIVISOR;
    } else if hr < HEART_RATE_NEUTRAL_MIN {
        score += (HEART_RATE_NEUTRAL_MIN - hr) / HEART_RATE_DIVISOR;
    }

    score += reading.skin_conductance / SKIN_CONDUCTANCE_DIVISOR;

    let t = reading.temperature;
    if t > TEMPERATURE_NEUTRAL_MAX {
        score += (t - TEMPERATURE_NEUTRAL_MAX) * TEMPERATURE_MULTIPLIER;
    } else if t < TEMPERATURE_NEUTRAL_MIN {
        score += (TEMPERATURE_NEUTRAL_MIN - t) * TEMPERATURE_MULTIPLIER;
    }

    score.max(SCORE_MIN).min(SCORE_MAX)
}

/// Score a reading and classify the result.
pub fn assess(reading: &VitalsReading) -> StressAssessment {
    let score = compute_score(reading);
    StressAssessment {
        level: StressLevel::from_score(score),
        score,
        confidence: CONFIDENCE,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
