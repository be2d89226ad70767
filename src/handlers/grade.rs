// src/handlers/grade.rs

use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::header,
    response::IntoResponse,
};
use validator::Validate;

use crate::{
    error::AppError,
    grading::GradingEngine,
    models::{grade_request::GradeRequest, report::GradingResult},
    utils::text_report::{self, REPORT_FILE_NAME},
};

/// Validates the request and grades it off the async workers.
async fn run_grading(
    engine: Arc<GradingEngine>,
    req: GradeRequest,
) -> Result<GradingResult, AppError> {
    req.validate()?;

    tracing::info!(
        "Grading request: key {} bytes, submissions {} bytes",
        req.answer_key.len(),
        req.submissions.len()
    );

    let result = tokio::task::spawn_blocking(move || {
        engine.grade_texts(&req.answer_key, &req.submissions)
    })
    .await??;

    tracing::info!(
        "Graded {} students against {} questions",
        result.summary.total_students,
        result.reports.first().map_or(0, |r| r.total_questions)
    );

    Ok(result)
}

/// Grades the submissions against the key.
///
/// * Responds with per-student reports plus the class summary.
/// * An answer key with no recognizable answers is a 400.
pub async fn grade(
    State(engine): State<Arc<GradingEngine>>,
    payload: Result<Json<GradeRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(req) = payload?;
    let result = run_grading(engine, req).await?;
    Ok(Json(result))
}

/// Grades the submissions and returns the plain-text report as a download.
pub async fn download_report(
    State(engine): State<Arc<GradingEngine>>,
    payload: Result<Json<GradeRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(req) = payload?;
    let result = run_grading(engine, req).await?;
    let body = text_report::render(&result, chrono::Utc::now());

    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", REPORT_FILE_NAME),
            ),
        ],
        body,
    ))
}
