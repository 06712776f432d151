//! The analysis pipeline: PDF text extraction, preference-conditioned prompt
//! construction, one completion call, and JSON extraction/validation.

pub mod handlers;
pub mod models;
pub mod pdf_text;
pub mod preferences;
pub mod prompts;
pub mod response_parser;
