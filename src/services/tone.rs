// src/services/tone.rs
use std::fmt;

use serde_json::Value;

const PROFESSIONAL_PROMPT: &str = "You are a professional therapist assistant. Provide helpful, evidence-based responses while maintaining professional boundaries. Always encourage clients to seek in-person therapy when appropriate.";

const EMPATHETIC_PROMPT: &str = "You are a warm, empathetic therapist assistant. Show understanding and compassion in your responses while providing helpful guidance. Always encourage professional therapy when needed.";

const SUPPORTIVE_PROMPT: &str = "You are a supportive therapist assistant. Provide encouraging, positive responses that help clients feel heard and supported. Always recommend professional therapy for serious concerns.";

/// Register of a generated reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Professional,
    Empathetic,
    Supportive,
}

impl Tone {
    /// Resolve a raw tone selector. Labels match exactly; anything else,
    /// including a missing or non-string value, is `Professional`.
    pub fn resolve(raw: Option<&Value>) -> Self {
        match raw.and_then(Value::as_str) {
            Some("empathetic") => Tone::Empathetic,
            Some("supportive") => Tone::Supportive,
            Some("professional") => Tone::Professional,
            _ => Tone::Professional,
        }
    }

    /// System instruction sent to the provider for this tone.
    pub fn system_prompt(self) -> &'static str {
        match self {
            Tone::Professional => PROFESSIONAL_PROMPT,
            Tone::Empathetic => EMPATHETIC_PROMPT,
            Tone::Supportive => SUPPORTIVE_PROMPT,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Tone::Professional => "professional",
            Tone::Empathetic => "empathetic",
            Tone::Supportive => "supportive",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn known_labels_resolve() {
        assert_eq!(Tone::resolve(Some(&json!("empathetic"))), Tone::Empathetic);
        assert_eq!(Tone::resolve(Some(&json!("supportive"))), Tone::Supportive);
        assert_eq!(Tone::resolve(Some(&json!("professional"))), Tone::Professional);
    }

    #[test]
    fn labels_are_case_and_space_sensitive() {
        assert_eq!(Tone::resolve(Some(&json!("Empathetic"))), Tone::Professional);
        assert_eq!(Tone::resolve(Some(&json!(" supportive "))), Tone::Professional);
        assert_eq!(Tone::resolve(Some(&json!("SUPPORTIVE"))), Tone::Professional);
    }

    #[test]
    fn everything_else_is_professional() {
        assert_eq!(Tone::resolve(None), Tone::Professional);
        assert_eq!(Tone::resolve(Some(&json!("sarcastic"))), Tone::Professional);
        assert_eq!(Tone::resolve(Some(&json!(""))), Tone::Professional);
        assert_eq!(Tone::resolve(Some(&json!(42))), Tone::Professional);
        assert_eq!(Tone::resolve(Some(&Value::Null)), Tone::Professional);
    }

    #[test]
    fn each_tone_has_its_own_instruction() {
        let prompts = [
            Tone::Professional.system_prompt(),
            Tone::Empathetic.system_prompt(),
            Tone::Supportive.system_prompt(),
        ];
        assert_ne!(prompts[0], prompts[1]);
        assert_ne!(prompts[1], prompts[2]);
        assert!(prompts.iter().all(|p| p.contains("therap")));
    }
}
