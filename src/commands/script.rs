//! Session script parsing
//!
//! A script replays what a user does interactively: create nodes, connect
//! them, ask for paths, reset or clear. One command per line; blank lines
//! and text after `#` are ignored.

use minpath_core::error::Result;
use minpath_core::{bail_script, MinPathError};

#[derive(Debug, Clone, PartialEq)]
pub enum ScriptCommand {
    /// Add a node, auto-labelled when no label is given
    Node(Option<String>),
    Edge { from: String, to: String, weight: f64 },
    Path { from: String, to: String },
    Reset,
    Clear,
}

/// A parsed command with its 1-based source line
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptLine {
    pub line: usize,
    pub command: ScriptCommand,
}

pub fn parse_script(text: &str) -> Result<Vec<ScriptLine>> {
    let mut lines = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        if let Some(command) = parse_line(line, raw)? {
            lines.push(ScriptLine { line, command });
        }
    }
    Ok(lines)
}

pub fn parse_line(line: usize, raw: &str) -> Result<Option<ScriptCommand>> {
    let content = raw.split('#').next().unwrap_or_default();
    let words: Vec<&str> = content.split_whitespace().collect();
    let Some((keyword, args)) = words.split_first() else {
        return Ok(None);
    };

    let command = match (keyword.to_lowercase().as_str(), args) {
        ("node", []) => ScriptCommand::Node(None),
        ("node", [label]) => ScriptCommand::Node(Some(label.to_string())),
        ("edge", [from, to, weight]) => ScriptCommand::Edge {
            from: from.to_string(),
            to: to.to_string(),
            weight: parse_weight(line, weight)?,
        },
        ("path", [from, to]) => ScriptCommand::Path {
            from: from.to_string(),
            to: to.to_string(),
        },
        ("reset", []) => ScriptCommand::Reset,
        ("clear", []) => ScriptCommand::Clear,
        ("node", _) => bail_script!(line, "usage: node [LABEL]"),
        ("edge", _) => bail_script!(line, "usage: edge FROM TO WEIGHT"),
        ("path", _) => bail_script!(line, "usage: path FROM TO"),
        ("reset" | "clear", _) => bail_script!(line, format!("{keyword} takes no arguments")),
        (other, _) => bail_script!(line, format!("unknown command: {other}")),
    };
    Ok(Some(command))
}

fn parse_weight(line: usize, raw: &str) -> Result<f64> {
    raw.parse::<f64>()
        .map_err(|_| MinPathError::script(line, format!("invalid weight: {raw}")))
}
