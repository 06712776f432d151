//! Axum route handler for the analysis endpoint — the whole pipeline:
//! multipart validation, text extraction, prompt build, one completion
//! call, JSON extraction/validation.

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use tracing::info;

use crate::analysis::models::{AnalysisResult, CaregiverRole, ExplanationLevel, Language};
use crate::analysis::pdf_text::extract_pdf_text;
use crate::analysis::prompts::build_prompts;
use crate::analysis::response_parser::extract_and_validate;
use crate::errors::AppError;
use crate::state::AppState;

/// Maximum accepted PDF size: 10 MiB.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

#[derive(Default)]
struct AnalyzeForm {
    /// Declared content type and raw bytes of the `file` part.
    file: Option<(Option<String>, Bytes)>,
    caregiver_type: Option<String>,
    explanation_level: Option<String>,
    language: Option<String>,
}

/// POST /api/analyze
///
/// Multipart fields: `file` (PDF), `caregiverType`, `explanationLevel`,
/// optional `language`. Every validation failure is a 400 before any
/// completion call; at most one outbound call happens per request.
pub async fn handle_analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalysisResult>, AppError> {
    let mut form = AnalyzeForm::default();

    while let Some(field) = multipart.next_field().await? {
        match field.name() {
            Some("file") => {
                let content_type = field.content_type().map(str::to_owned);
                let bytes = field.bytes().await?;
                form.file = Some((content_type, bytes));
            }
            Some("caregiverType") => form.caregiver_type = Some(field.text().await?),
            Some("explanationLevel") => form.explanation_level = Some(field.text().await?),
            Some("language") => form.language = Some(field.text().await?),
            // Unknown parts are skipped.
            _ => {}
        }
    }

    let (content_type, bytes) = form
        .file
        .ok_or_else(|| AppError::Validation("No PDF file provided".to_string()))?;

    if content_type.as_deref() != Some("application/pdf") {
        return Err(AppError::Validation(
            "Only PDF files are allowed".to_string(),
        ));
    }

    if bytes.len() > MAX_UPLOAD_BYTES {
        return Err(AppError::Validation(
            "File too large. Maximum size is 10MB.".to_string(),
        ));
    }

    // Missing, empty, and out-of-set values all get the same rejection.
    let role = form
        .caregiver_type
        .as_deref()
        .and_then(CaregiverRole::parse)
        .ok_or_else(missing_preferences)?;

    let level = form
        .explanation_level
        .as_deref()
        .and_then(ExplanationLevel::parse)
        .ok_or_else(missing_preferences)?;

    let language = Language::from_code(form.language.as_deref().unwrap_or("en"));

    let text = extract_pdf_text(&bytes)?;

    info!(
        "Analyzing document: {} bytes uploaded, {} chars extracted, role={role:?}, level={level:?}, language={language:?}",
        bytes.len(),
        text.chars().count(),
    );

    let prompts = build_prompts(role, level, language, &text);

    let completion = state
        .completion
        .complete(&prompts.system, &prompts.user)
        .await?;

    let result = extract_and_validate(&completion)?;

    Ok(Json(result))
}

fn missing_preferences() -> AppError {
    AppError::Validation("Missing caregiverType or explanationLevel".to_string())
}
