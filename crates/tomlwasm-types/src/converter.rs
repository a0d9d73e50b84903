use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a conversion produced a diagnostic instead of data.
///
/// The `Display` text is what ends up in the `error` field of the payload
/// handed back to the host.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    #[error("parse error: {0}")]
    Parse(String),

    #[error("serialize error: {0}")]
    Serialize(String),

    #[error("invalid input region: {0}")]
    Input(String),

    #[error("capacity error: {0}")]
    Capacity(String),
}

/// Single-field object returned in place of converted data on failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorPayload {
    pub error: String,
}

impl ErrorPayload {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

impl From<&Diagnostic> for ErrorPayload {
    fn from(diagnostic: &Diagnostic) -> Self {
        Self::new(diagnostic.to_string())
    }
}

/// A parser/serializer pair the bridge can drive.
///
/// Implementations are pure: no shared state, no side effects beyond the
/// returned bytes. Any conforming pair can be plugged into the export macros.
pub trait FormatConverter {
    type Value;

    /// Parse raw input bytes into a structured value.
    fn parse(&self, input: &[u8]) -> Result<Self::Value, Diagnostic>;

    /// Re-encode a parsed value into the output format.
    fn serialize(&self, value: &Self::Value) -> Result<Vec<u8>, Diagnostic>;

    /// Render a diagnostic as a single-field object in the output format.
    /// Must not fail.
    fn render_diagnostic(&self, diagnostic: &Diagnostic) -> Vec<u8>;

    /// Parse then serialize.
    fn convert(&self, input: &[u8]) -> Result<Vec<u8>, Diagnostic> {
        let value = self.parse(input)?;
        self.serialize(&value)
    }
}
