use tracing::warn;

use crate::errors::AppError;

/// Extracts plain text from PDF bytes.
///
/// Scanned or image-only documents extract to nothing; that case and a
/// library-level parse failure surface as the same user-actionable error.
pub fn extract_pdf_text(bytes: &[u8]) -> Result<String, AppError> {
    let text = pdf_extract::extract_text_from_mem(bytes).map_err(|e| {
        warn!("PDF text extraction failed: {e}");
        AppError::Extraction
    })?;

    if text.trim().is_empty() {
        return Err(AppError::Extraction);
    }

    Ok(text)
}
