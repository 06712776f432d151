//! Caregiver preference phrasing — the closed lookup tables behind the
//! system prompt, rendered as exhaustive matches so adding a role, level,
//! or language forces every dispatch site to be revisited.

use crate::analysis::models::{CaregiverRole, ExplanationLevel, Language};

/// How the caregiver is described inside the system prompt.
pub fn role_phrase(role: CaregiverRole) -> &'static str {
    match role {
        CaregiverRole::Parent => "a parent caring for their child",
        CaregiverRole::Spouse => "a spouse or partner caring for their loved one",
        CaregiverRole::HomeNurse => "a home nurse or professional caregiver",
    }
}

/// The depth instruction for the requested explanation level.
pub fn level_phrase(level: ExplanationLevel) -> &'static str {
    match level {
        ExplanationLevel::Simple => {
            "Use simple, everyday language. Avoid medical jargon. Explain things as you would to someone with no medical background."
        }
        ExplanationLevel::Detailed => {
            "Provide comprehensive information including relevant medical terms (with explanations), specific measurements, and clinical details that would be helpful for someone who wants to understand the full picture."
        }
    }
}

/// The language directive for the response. The English fallback for
/// unknown codes happens in `Language::from_code`, not here.
pub fn language_directive(language: Language) -> &'static str {
    match language {
        Language::En => "Respond in English.",
        Language::Es => {
            "Respond entirely in Spanish (Español). All text in the JSON response must be in Spanish."
        }
        Language::Zh => {
            "Respond entirely in Simplified Chinese (简体中文). All text in the JSON response must be in Chinese."
        }
        Language::Ar => {
            "Respond entirely in Arabic (العربية). All text in the JSON response must be in Arabic."
        }
        Language::Fr => {
            "Respond entirely in French (Français). All text in the JSON response must be in French."
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_phrases() {
        assert_eq!(
            role_phrase(CaregiverRole::Parent),
            "a parent caring for their child"
        );
        assert_eq!(
            role_phrase(CaregiverRole::Spouse),
            "a spouse or partner caring for their loved one"
        );
        assert_eq!(
            role_phrase(CaregiverRole::HomeNurse),
            "a home nurse or professional caregiver"
        );
    }

    #[test]
    fn test_simple_level_avoids_jargon() {
        let phrase = level_phrase(ExplanationLevel::Simple);
        assert!(phrase.contains("Avoid medical jargon"));
    }

    #[test]
    fn test_detailed_level_includes_clinical_details() {
        let phrase = level_phrase(ExplanationLevel::Detailed);
        assert!(phrase.contains("clinical details"));
        assert!(phrase.contains("medical terms"));
    }

    #[test]
    fn test_language_directives_name_the_target_language() {
        assert_eq!(language_directive(Language::En), "Respond in English.");
        assert!(language_directive(Language::Es).contains("Spanish"));
        assert!(language_directive(Language::Zh).contains("Chinese"));
        assert!(language_directive(Language::Ar).contains("Arabic"));
        assert!(language_directive(Language::Fr).contains("French"));
    }

    #[test]
    fn test_non_english_directives_cover_the_whole_response() {
        for language in [Language::Es, Language::Zh, Language::Ar, Language::Fr] {
            assert!(
                language_directive(language).contains("All text in the JSON response"),
                "directive for {language:?} must constrain the whole response"
            );
        }
    }
}
