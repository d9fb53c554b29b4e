use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::ids::{SectionId, StepId};

//
// ─── CODE SNIPPETS ─────────────────────────────────────────────────────────────
//

/// Language tag attached to a code snippet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodeLanguage {
    Bash,
    Sql,
    Typescript,
    Javascript,
    Html,
    Css,
    Php,
    Java,
    Text,
    Xml,
    Powershell,
}

impl CodeLanguage {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            CodeLanguage::Bash => "bash",
            CodeLanguage::Sql => "sql",
            CodeLanguage::Typescript => "typescript",
            CodeLanguage::Javascript => "javascript",
            CodeLanguage::Html => "html",
            CodeLanguage::Css => "css",
            CodeLanguage::Php => "php",
            CodeLanguage::Java => "java",
            CodeLanguage::Text => "text",
            CodeLanguage::Xml => "xml",
            CodeLanguage::Powershell => "powershell",
        }
    }
}

impl fmt::Display for CodeLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeSnippet {
    language: CodeLanguage,
    code: String,
}

impl CodeSnippet {
    #[must_use]
    pub fn new(language: CodeLanguage, code: impl Into<String>) -> Self {
        Self {
            language,
            code: code.into(),
        }
    }

    #[must_use]
    pub fn language(&self) -> CodeLanguage {
        self.language
    }

    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }
}

//
// ─── STEPS ─────────────────────────────────────────────────────────────────────
//

/// A single hands-on task inside a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    id: StepId,
    title: String,
    description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    code_snippet: Option<CodeSnippet>,
}

impl Step {
    #[must_use]
    pub fn new(id: StepId, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            code_snippet: None,
        }
    }

    #[must_use]
    pub fn with_snippet(mut self, snippet: CodeSnippet) -> Self {
        self.code_snippet = Some(snippet);
        self
    }

    #[must_use]
    pub fn id(&self) -> &StepId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn code_snippet(&self) -> Option<&CodeSnippet> {
        self.code_snippet.as_ref()
    }
}

//
// ─── SECTIONS ──────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommonQuestion {
    pub question: String,
    pub answer: String,
}

/// A top-level curriculum unit.
///
/// Everything except `id`, `title` and `steps` is optional authoring content:
/// text fields are `None` when absent and list fields are empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    id: SectionId,
    title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    overview: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    core_concepts: Vec<String>,
    #[serde(default)]
    steps: Vec<Step>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tips: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    estimated_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    prerequisites: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    live_session_notes: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    common_questions: Vec<CommonQuestion>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    technologies: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    learning_outcomes: Vec<String>,
}

impl Section {
    /// Creates a section with only the required fields set.
    #[must_use]
    pub fn new(id: SectionId, title: impl Into<String>, steps: Vec<Step>) -> Self {
        Self {
            id,
            title: title.into(),
            description: None,
            overview: None,
            core_concepts: Vec::new(),
            steps,
            tips: None,
            estimated_time: None,
            prerequisites: None,
            live_session_notes: None,
            common_questions: Vec::new(),
            technologies: Vec::new(),
            learning_outcomes: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_overview(mut self, overview: impl Into<String>) -> Self {
        self.overview = Some(overview.into());
        self
    }

    #[must_use]
    pub fn with_core_concepts(mut self, concepts: Vec<String>) -> Self {
        self.core_concepts = concepts;
        self
    }

    #[must_use]
    pub fn with_tips(mut self, tips: impl Into<String>) -> Self {
        self.tips = Some(tips.into());
        self
    }

    #[must_use]
    pub fn with_common_questions(mut self, questions: Vec<CommonQuestion>) -> Self {
        self.common_questions = questions;
        self
    }

    #[must_use]
    pub fn id(&self) -> &SectionId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[must_use]
    pub fn overview(&self) -> Option<&str> {
        self.overview.as_deref()
    }

    #[must_use]
    pub fn core_concepts(&self) -> &[String] {
        &self.core_concepts
    }

    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    #[must_use]
    pub fn tips(&self) -> Option<&str> {
        self.tips.as_deref()
    }

    #[must_use]
    pub fn estimated_time(&self) -> Option<&str> {
        self.estimated_time.as_deref()
    }

    #[must_use]
    pub fn prerequisites(&self) -> Option<&str> {
        self.prerequisites.as_deref()
    }

    #[must_use]
    pub fn live_session_notes(&self) -> Option<&str> {
        self.live_session_notes.as_deref()
    }

    #[must_use]
    pub fn common_questions(&self) -> &[CommonQuestion] {
        &self.common_questions
    }

    #[must_use]
    pub fn technologies(&self) -> &[String] {
        &self.technologies
    }

    #[must_use]
    pub fn learning_outcomes(&self) -> &[String] {
        &self.learning_outcomes
    }

    /// True when the section carries anything worth expanding in a detail view.
    #[must_use]
    pub fn has_content(&self) -> bool {
        self.overview.is_some()
            || !self.core_concepts.is_empty()
            || !self.steps.is_empty()
            || self.tips.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_fields_default_when_missing() {
        let json = r#"{ "id": "basics", "title": "Basics", "steps": [] }"#;
        let section: Section = serde_json::from_str(json).unwrap();
        assert_eq!(section.id().as_str(), "basics");
        assert!(section.overview().is_none());
        assert!(section.core_concepts().is_empty());
        assert!(section.common_questions().is_empty());
        assert!(!section.has_content());
    }

    #[test]
    fn deserializes_camel_case_fields_and_snippets() {
        let json = r#"{
            "id": "php",
            "title": "PHP",
            "liveSessionNotes": "Show XAMPP first",
            "commonQuestions": [{ "question": "Why PDO?", "answer": "Prepared statements." }],
            "steps": [{
                "id": "php-1",
                "title": "Install",
                "description": "Install XAMPP",
                "codeSnippet": { "language": "powershell", "code": "choco install xampp" }
            }]
        }"#;
        let section: Section = serde_json::from_str(json).unwrap();
        assert_eq!(section.live_session_notes(), Some("Show XAMPP first"));
        assert_eq!(section.common_questions()[0].answer, "Prepared statements.");
        let snippet = section.steps()[0].code_snippet().unwrap();
        assert_eq!(snippet.language(), CodeLanguage::Powershell);
        assert_eq!(snippet.code(), "choco install xampp");
        assert!(section.has_content());
    }

    #[test]
    fn unknown_language_is_rejected() {
        let json = r#"{ "language": "cobol", "code": "DISPLAY 'HI'." }"#;
        assert!(serde_json::from_str::<CodeSnippet>(json).is_err());
    }
}
