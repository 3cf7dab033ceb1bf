use crate::error::GenerationError;
use serde::Serialize;

/// One requested copy of an identifier, successful or not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedRecord {
    pub index: usize,
    pub kind: String,
    pub value: Option<String>,
    pub error: Option<String>,
}

impl GeneratedRecord {
    pub fn from_result(index: usize, kind: &str, result: Result<String, GenerationError>) -> Self {
        let (value, error) = match result {
            Ok(value) => (Some(value), None),
            Err(err) => (None, Some(err.to_string())),
        };
        Self {
            index,
            kind: kind.to_string(),
            value,
            error,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.value.is_some()
    }

    /// The line shown to users: the value, or the error rendered inline.
    pub fn line(&self) -> String {
        match (&self.value, &self.error) {
            (Some(value), _) => value.clone(),
            (None, Some(error)) => format!("Error: {}", error),
            (None, None) => String::new(),
        }
    }
}

/// Plain-text export: one line per record.
pub fn render_text(records: &[GeneratedRecord]) -> String {
    records
        .iter()
        .map(GeneratedRecord::line)
        .collect::<Vec<_>>()
        .join("\n")
}
