//! Output formatting utilities

use pathcount_core::{Adjacency, Error, LabelStyle, VertexId};
use serde::Serialize;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

impl From<&str> for OutputFormat {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            "csv" => Self::Csv,
            _ => Self::Table,
        }
    }
}

/// Pretty JSON for any serializable value
pub fn to_json<T: Serialize>(data: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(data)?)
}

pub fn path_csv_header() -> &'static str {
    "index,path"
}

/// One streamed path line; `index` is 1-based
pub fn path_line(index: usize, path: &[VertexId], labels: LabelStyle, format: OutputFormat) -> String {
    match format {
        OutputFormat::Csv => format!("{},{}", index, labels.format_path(path)),
        _ => labels.format_path(path),
    }
}

pub fn path_total(count: usize) -> String {
    format!("No. of paths found: {}", count)
}

/// Error text with out-of-range vertices shown in the active label style
pub fn vertex_error(err: &Error, labels: LabelStyle) -> String {
    match err {
        Error::InvalidVertex {
            vertex,
            endpoint,
            vertex_count,
        } => format!(
            "{} vertex {} out of range (graph has {} vertices)",
            endpoint,
            labels.format(*vertex),
            vertex_count
        ),
        other => other.to_string(),
    }
}

/// Render the adjacency dump as table or CSV
pub fn adjacency(rows: &[Adjacency], labels: LabelStyle, format: OutputFormat) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);
    if format == OutputFormat::Csv {
        lines.push("vertex,neighbors".to_string());
    }

    for row in rows {
        let vertex = labels.format(row.vertex);
        let line = match format {
            OutputFormat::Csv => format!("{},{}", vertex, labels.format_path(&row.neighbors)),
            _ if row.neighbors.is_empty() => format!("{} (no neighbors)", vertex),
            _ => {
                let neighbors: Vec<String> = row.neighbors.iter().map(|&n| labels.format(n)).collect();
                format!("{} -> {}", vertex, neighbors.join(" -> "))
            }
        };
        lines.push(line);
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_str() {
        assert_eq!(OutputFormat::from("JSON"), OutputFormat::Json);
        assert_eq!(OutputFormat::from("csv"), OutputFormat::Csv);
        assert_eq!(OutputFormat::from("anything"), OutputFormat::Table);
    }

    #[test]
    fn test_path_line() {
        let path = [0, 4, 8, 7];
        assert_eq!(path_line(1, &path, LabelStyle::Letters, OutputFormat::Table), "A E I H");
        assert_eq!(path_line(2, &path, LabelStyle::Numbers, OutputFormat::Csv), "2,0 4 8 7");
    }

    #[test]
    fn test_vertex_error_uses_labels() {
        let err = pathcount_core::Graph::new(4).add_edge(0, 9).unwrap_err();
        assert_eq!(
            vertex_error(&err, LabelStyle::Letters),
            "Destination vertex J out of range (graph has 4 vertices)"
        );
        assert_eq!(
            vertex_error(&err, LabelStyle::Numbers),
            "Destination vertex 9 out of range (graph has 4 vertices)"
        );

        let err = pathcount_core::Graph::new(1).add_edge(usize::MAX, 0).unwrap_err();
        assert_eq!(
            vertex_error(&err, LabelStyle::Letters),
            "Source vertex GKGWBYLWRXTLPP out of range (graph has 1 vertices)"
        );
    }

    #[test]
    fn test_adjacency_table() {
        let rows = vec![
            Adjacency { vertex: 0, neighbors: vec![2, 1] },
            Adjacency { vertex: 1, neighbors: vec![0] },
            Adjacency { vertex: 3, neighbors: vec![] },
        ];
        let table = adjacency(&rows, LabelStyle::Letters, OutputFormat::Table);
        assert_eq!(table, "A -> C -> B\nB -> A\nD (no neighbors)");

        let csv = adjacency(&rows, LabelStyle::Numbers, OutputFormat::Csv);
        assert_eq!(csv, "vertex,neighbors\n0,2 1\n1,0\n3,");
    }
}
