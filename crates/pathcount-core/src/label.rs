//! Letter labels for vertices (A, B, ..., Z, AA, AB, ...)
//!
//! Labels are display only. The graph itself only knows numeric ids.

use serde::{Deserialize, Serialize};

use crate::graph::VertexId;

/// How vertices are rendered in output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelStyle {
    #[default]
    Letters,
    Numbers,
}

impl LabelStyle {
    pub fn format(&self, vertex: VertexId) -> String {
        match self {
            Self::Letters => letter_label(vertex),
            Self::Numbers => vertex.to_string(),
        }
    }

    /// Space-separated labels of a path
    pub fn format_path(&self, path: &[VertexId]) -> String {
        path.iter()
            .map(|&v| self.format(v))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl std::str::FromStr for LabelStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "letters" => Ok(Self::Letters),
            "numbers" => Ok(Self::Numbers),
            other => Err(format!("unknown label style: {}", other)),
        }
    }
}

impl std::fmt::Display for LabelStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Letters => write!(f, "letters"),
            Self::Numbers => write!(f, "numbers"),
        }
    }
}

/// Spreadsheet-style column label: 0 -> "A", 25 -> "Z", 26 -> "AA"
pub fn letter_label(vertex: VertexId) -> String {
    let mut n = vertex;
    let mut letters = Vec::new();
    loop {
        letters.push(char::from(b'A' + (n % 26) as u8));
        if n < 26 {
            break;
        }
        // bijective base 26 has no zero digit
        n = n / 26 - 1;
    }
    letters.iter().rev().collect()
}

/// Parse a decimal id or a letter label (case-insensitive)
pub fn parse_vertex(text: &str) -> Option<VertexId> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    if let Ok(id) = text.parse::<VertexId>() {
        return Some(id);
    }
    if !text.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }

    let mut n: VertexId = 0;
    for c in text.to_ascii_uppercase().bytes() {
        n = n
            .checked_mul(26)?
            .checked_add((c - b'A') as VertexId + 1)?;
    }
    Some(n - 1)
}
