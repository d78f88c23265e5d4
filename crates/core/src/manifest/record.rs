//! Manifest records.

use crate::error::SkipReason;
use serde_json::Value;

/// Transcript attached to a manifest record.
///
/// Manifests are not validated beyond duration, so the text may be absent or
/// of the wrong type. That only surfaces when the record is counted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transcript {
    /// A usable transcript
    Text(String),
    /// No text field, or an empty CSV cell
    Missing,
    /// A JSON value that is not a string; holds the JSON type name
    Invalid(String),
}

impl Transcript {
    /// Iterate the Unicode scalar values of the transcript.
    pub fn chars(&self) -> Result<std::str::Chars<'_>, SkipReason> {
        match self {
            Self::Text(text) => Ok(text.chars()),
            Self::Missing => Err(SkipReason::MissingText),
            Self::Invalid(found) => Err(SkipReason::InvalidText {
                found: found.clone(),
            }),
        }
    }

    /// Classify a JSON `text` field.
    pub fn from_json(value: Option<Value>) -> Self {
        match value {
            None | Some(Value::Null) => Self::Missing,
            Some(Value::String(text)) => Self::Text(text),
            Some(other) => Self::Invalid(json_type_name(&other).to_string()),
        }
    }
}

impl From<&str> for Transcript {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// One training example from a manifest.
#[derive(Debug, Clone, PartialEq)]
pub struct ManifestRecord {
    /// Path of the audio clip, as written in the manifest
    pub audio_filepath: String,
    /// Clip length in seconds
    pub duration: f64,
    /// Transcribed text
    pub text: Transcript,
}

impl ManifestRecord {
    pub fn new(audio_filepath: impl Into<String>, duration: f64, text: impl Into<Transcript>) -> Self {
        Self {
            audio_filepath: audio_filepath.into(),
            duration,
            text: text.into(),
        }
    }
}
