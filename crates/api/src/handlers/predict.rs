//! Handler for the stress prediction endpoint.

use axum::extract::rejection::JsonRejection;
use axum::Json;
use serde::Serialize;
use stressshield_core::scoring::{self, StressLevel, VitalsReading};

use crate::error::ApiResult;

/// Wire response for `POST /predict`.
#[derive(Debug, Serialize)]
pub struct PredictResponse {
    /// Discrete stress category, serialized as the uppercase name.
    pub stress_level: StressLevel,
    /// Continuous stress score in `[0, 10]`.
    pub stress_score: f64,
    /// Fixed placeholder confidence (0.92).
    pub confidence: f64,
}

/// Score one set of physiological vitals.
///
/// Deserialization failures (malformed JSON, missing fields, non-numeric
/// values) are rejected here with the JSON error envelope; the scorer is
/// never invoked for a body that does not parse.
pub async fn predict(
    body: Result<Json<VitalsReading>, JsonRejection>,
) -> ApiResult<Json<PredictResponse>> {
    let Json(reading) = body?;

    let assessment = scoring::assess(&reading);

    tracing::debug!(
        heart_rate = reading.heart_rate,
        skin_conductance = reading.skin_conductance,
        temperature = reading.temperature,
        score = assessment.score,
        level = assessment.level.as_str(),
        "Vitals scored",
    );

    Ok(Json(PredictResponse {
        stress_level: assessment.level,
        stress_score: assessment.score,
        confidence: assessment.confidence,
    }))
}
