//! Prompt templates for the analysis completion call.
//! Pure construction: same preferences and text always produce the same pair.

use crate::analysis::models::{CaregiverRole, ExplanationLevel, Language};
use crate::analysis::preferences::{language_directive, level_phrase, role_phrase};

/// Document text beyond this many characters is dropped from the user prompt.
/// A token-budget guard, not a semantic boundary: truncation may cut
/// mid-sentence or mid-section, and that is accepted behavior.
pub const PROMPT_CHAR_BUDGET: usize = 15_000;

/// System prompt — fixes the output contract: a bare JSON object with exactly
/// four keys, no markdown, no code fences. Replace the `{role_phrase}`,
/// `{level_phrase}`, and `{language_directive}` placeholders before sending.
const SYSTEM_PROMPT_TEMPLATE: &str = r#"You are MediClarify, an AI assistant that helps caregivers understand medical documents. Your role is to transform complex medical information into clear, actionable guidance.

You are creating a summary for {role_phrase}.

{level_phrase}

IMPORTANT: {language_directive}

You must respond with valid JSON only, no markdown formatting or code blocks. The JSON must have this exact structure:
{
  "summary": "A clear 2-3 paragraph explanation of what the document says, tailored to the caregiver type",
  "checklist": ["Array of 6-8 specific daily care tasks the caregiver should do"],
  "warnings": ["Array of 4-6 warning signs that require immediate medical attention"],
  "questions": ["Array of 4-6 important questions to ask the doctor at the next visit"]
}"#;

/// User prompt. Replace `{document_text}` before sending.
const USER_PROMPT_TEMPLATE: &str = r#"Please analyze this medical document and provide a summary, care checklist, warning signs, and questions for the doctor.

Document text:
{document_text}"#;

/// The system/user prompt pair for one completion call.
#[derive(Debug, Clone)]
pub struct PromptPair {
    pub system: String,
    pub user: String,
}

/// Renders the prompt pair for the given preferences and extracted text.
pub fn build_prompts(
    role: CaregiverRole,
    level: ExplanationLevel,
    language: Language,
    document_text: &str,
) -> PromptPair {
    let system = SYSTEM_PROMPT_TEMPLATE
        .replace("{role_phrase}", role_phrase(role))
        .replace("{level_phrase}", level_phrase(level))
        .replace("{language_directive}", language_directive(language));

    let user = USER_PROMPT_TEMPLATE.replace(
        "{document_text}",
        truncate_chars(document_text, PROMPT_CHAR_BUDGET),
    );

    PromptPair { system, user }
}

/// Truncates to at most `limit` characters, on a char boundary.
fn truncate_chars(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}
