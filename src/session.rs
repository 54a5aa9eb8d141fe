//! Session descriptor sent by the host on stdin
//!
//! `{"model": {"display_name": "Opus"}, "transcript_path": "/path/session.jsonl"}`

use std::path::{Path, PathBuf};

use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct SessionDescriptor {
    pub(crate) model_name: Option<String>,
    pub(crate) transcript_path: Option<PathBuf>,
}

impl SessionDescriptor {
    /// Anything that is not a JSON document reads as an empty descriptor
    pub(crate) fn parse(input: &str) -> Self {
        let value: Value = serde_json::from_str(input).unwrap_or(Value::Null);

        let model_name = non_empty_str(value.pointer("/model/display_name")).map(str::to_string);
        let transcript_path = non_empty_str(value.get("transcript_path"))
            .or_else(|| non_empty_str(value.get("transcriptPath")))
            .map(PathBuf::from);

        Self {
            model_name,
            transcript_path,
        }
    }

    pub(crate) fn transcript(&self) -> Option<&Path> {
        self.transcript_path.as_deref()
    }
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_descriptor() {
        let d = SessionDescriptor::parse(
            r#"{"model":{"display_name":"Opus"},"transcript_path":"/tmp/session-xyz.jsonl"}"#,
        );
        assert_eq!(d.model_name.as_deref(), Some("Opus"));
        assert_eq!(d.transcript(), Some(Path::new("/tmp/session-xyz.jsonl")));
    }

    #[test]
    fn camel_case_transcript_key() {
        let d = SessionDescriptor::parse(r#"{"transcriptPath":"/tmp/a.jsonl"}"#);
        assert_eq!(d.transcript(), Some(Path::new("/tmp/a.jsonl")));
    }

    #[test]
    fn snake_case_key_wins() {
        let d = SessionDescriptor::parse(
            r#"{"transcript_path":"/tmp/snake.jsonl","transcriptPath":"/tmp/camel.jsonl"}"#,
        );
        assert_eq!(d.transcript(), Some(Path::new("/tmp/snake.jsonl")));
    }

    #[test]
    fn empty_snake_case_falls_back_to_camel_case() {
        let d = SessionDescriptor::parse(
            r#"{"transcript_path":"","transcriptPath":"/tmp/camel.jsonl"}"#,
        );
        assert_eq!(d.transcript(), Some(Path::new("/tmp/camel.jsonl")));
    }

    #[test]
    fn malformed_input_is_empty() {
        assert_eq!(SessionDescriptor::parse("not json"), SessionDescriptor::default());
        assert_eq!(SessionDescriptor::parse(""), SessionDescriptor::default());
        assert_eq!(SessionDescriptor::parse("[1,2]"), SessionDescriptor::default());
    }

    #[test]
    fn wrong_field_types_are_ignored() {
        let d = SessionDescriptor::parse(r#"{"model":"Opus","transcript_path":42}"#);
        assert_eq!(d, SessionDescriptor::default());
    }
}
