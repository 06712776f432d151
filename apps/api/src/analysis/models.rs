use serde::{Deserialize, Serialize};

/// The validated analysis output returned to the client.
///
/// Item counts and summary length are passed through from the model
/// unbounded; the completion token cap already bounds the practical size.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub summary: String,
    pub checklist: Vec<String>,
    pub warnings: Vec<String>,
    pub questions: Vec<String>,
}

/// Who is caring for the patient. Selects tone and focus of the summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaregiverRole {
    Parent,
    Spouse,
    HomeNurse,
}

impl CaregiverRole {
    /// Unknown values are rejected, not defaulted.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "parent" => Some(CaregiverRole::Parent),
            "spouse" => Some(CaregiverRole::Spouse),
            "home-nurse" => Some(CaregiverRole::HomeNurse),
            _ => None,
        }
    }
}

/// How much clinical depth the summary carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExplanationLevel {
    Simple,
    Detailed,
}

impl ExplanationLevel {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "simple" => Some(ExplanationLevel::Simple),
            "detailed" => Some(ExplanationLevel::Detailed),
            _ => None,
        }
    }
}

/// Output language for the analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    En,
    Es,
    Zh,
    Ar,
    Fr,
}

impl Language {
    /// Unrecognized codes deliberately fall back to English rather than
    /// erroring; the wildcard arm here is the only place that fallback lives.
    pub fn from_code(code: &str) -> Self {
        match code {
            "en" => Language::En,
            "es" => Language::Es,
            "zh" => Language::Zh,
            "ar" => Language::Ar,
            "fr" => Language::Fr,
            _ => Language::En,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_roles_parse() {
        assert_eq!(CaregiverRole::parse("parent"), Some(CaregiverRole::Parent));
        assert_eq!(CaregiverRole::parse("spouse"), Some(CaregiverRole::Spouse));
        assert_eq!(
            CaregiverRole::parse("home-nurse"),
            Some(CaregiverRole::HomeNurse)
        );
    }

    #[test]
    fn test_unknown_role_rejected() {
        assert_eq!(CaregiverRole::parse("grandparent"), None);
        assert_eq!(CaregiverRole::parse("Parent"), None);
        assert_eq!(CaregiverRole::parse(""), None);
    }

    #[test]
    fn test_known_levels_parse() {
        assert_eq!(
            ExplanationLevel::parse("simple"),
            Some(ExplanationLevel::Simple)
        );
        assert_eq!(
            ExplanationLevel::parse("detailed"),
            Some(ExplanationLevel::Detailed)
        );
    }

    #[test]
    fn test_unknown_level_rejected() {
        assert_eq!(ExplanationLevel::parse("expert"), None);
    }

    #[test]
    fn test_supported_language_codes() {
        assert_eq!(Language::from_code("es"), Language::Es);
        assert_eq!(Language::from_code("zh"), Language::Zh);
        assert_eq!(Language::from_code("ar"), Language::Ar);
        assert_eq!(Language::from_code("fr"), Language::Fr);
    }

    #[test]
    fn test_unsupported_language_falls_back_to_english() {
        assert_eq!(Language::from_code("de"), Language::En);
        assert_eq!(Language::from_code("ES"), Language::En);
        assert_eq!(Language::from_code(""), Language::En);
    }

    #[test]
    fn test_result_serializes_with_four_keys() {
        let result = AnalysisResult {
            summary: "s".to_string(),
            checklist: vec!["a".to_string()],
            warnings: vec![],
            questions: vec!["q".to_string()],
        };
        let value = serde_json::to_value(&result).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 4);
        assert!(obj.contains_key("summary"));
        assert!(obj.contains_key("checklist"));
        assert!(obj.contains_key("warnings"));
        assert!(obj.contains_key("questions"));
    }
}
