//! Slash command detection in Claude Code JSONL transcripts
//!
//! Each transcript line is either a JSON event or free text. Only user events
//! and bare lines starting with `/` can yield a command.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::consts::{ELLIPSIS, MAX_COMMAND_LENGTH, TRANSCRIPT_TAIL_LINES};

static COMMAND_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<command-name>(/[^<]+)</command-name>").expect("valid command-name pattern")
});

static COMMAND_ARGS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<command-args>([^<]*)</command-args>").expect("valid command-args pattern")
});

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace pattern"));

const USER_ROLE_MARKERS: [&str; 2] = [r#""role":"user""#, r#""role": "user""#];

// ============================================================================
// Message content
// ============================================================================

/// Where a user event keeps its text
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum MessageContent<'a> {
    /// `{"message": {"content": ...}}`
    Nested(&'a Value),
    /// `{"content": ...}`
    TopLevel(&'a Value),
}

impl<'a> MessageContent<'a> {
    /// Nested content wins whenever it carries a value
    pub(crate) fn decode(event: &'a Value) -> Option<Self> {
        if let Some(nested) = event.pointer("/message/content").filter(|v| is_present(v)) {
            return Some(MessageContent::Nested(nested));
        }
        event
            .get("content")
            .filter(|v| is_present(v))
            .map(MessageContent::TopLevel)
    }

    /// Structured content (tool results, image blocks) carries no command
    pub(crate) fn text(&self) -> Option<&'a str> {
        match self {
            MessageContent::Nested(v) | MessageContent::TopLevel(v) => v.as_str(),
        }
    }
}

fn is_present(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => false,
        Value::String(s) => !s.is_empty(),
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        _ => true,
    }
}

// ============================================================================
// Extraction
// ============================================================================

/// Outcome of inspecting one transcript line
enum LineMatch {
    Command(String),
    /// Not a command; keep scanning earlier lines
    Miss,
    /// Looked like a user event but was not valid JSON
    Malformed,
}

/// Find the most recent command in the last lines of a transcript
pub(crate) fn find_last_command(content: &str) -> Option<String> {
    let lines: Vec<&str> = content.split('\n').collect();
    let start = lines.len().saturating_sub(TRANSCRIPT_TAIL_LINES);

    for raw in lines[start..].iter().rev() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        match match_line(line) {
            LineMatch::Command(cmd) => return Some(truncate_command(&cmd)),
            LineMatch::Miss | LineMatch::Malformed => continue,
        }
    }
    None
}

fn match_line(line: &str) -> LineMatch {
    if USER_ROLE_MARKERS.iter().any(|m| line.contains(m)) {
        let Ok(event) = serde_json::from_str::<Value>(line) else {
            return LineMatch::Malformed;
        };
        if let Some(cmd) = MessageContent::decode(&event)
            .and_then(|c| c.text())
            .and_then(command_from_text)
        {
            return LineMatch::Command(cmd);
        }
    }

    if line.starts_with('/') {
        let first = line.split('\n').next().unwrap_or(line).trim();
        return LineMatch::Command(first.to_string());
    }

    LineMatch::Miss
}

/// Command from the text of a user message, either tagged or typed directly
fn command_from_text(text: &str) -> Option<String> {
    if let Some(name) = COMMAND_NAME.captures(text).and_then(|c| c.get(1)) {
        let mut cmd = name.as_str().to_string();
        if let Some(args) = COMMAND_ARGS
            .captures(text)
            .and_then(|c| c.get(1))
            .filter(|a| !a.as_str().is_empty())
        {
            cmd.push(' ');
            cmd.push_str(args.as_str());
        }
        return Some(cmd.trim().to_string());
    }

    let collapsed = WHITESPACE.replace_all(text, " ");
    let collapsed = collapsed.trim();
    collapsed.starts_with('/').then(|| collapsed.to_string())
}

/// Cut to `MAX_COMMAND_LENGTH` characters plus an ellipsis
pub(crate) fn truncate_command(cmd: &str) -> String {
    if cmd.chars().count() <= MAX_COMMAND_LENGTH {
        return cmd.to_string();
    }
    let mut truncated: String = cmd.chars().take(MAX_COMMAND_LENGTH).collect();
    truncated.push(ELLIPSIS);
    truncated
}
