//! Graph file loading and export

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, ValueEnum};

use crate::output;
use crate::AppContext;
use pathcount_core::{Graph, GraphSpec, LabelStyle};

/// Graph description format
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum SpecFormat {
    #[default]
    Json,
    Toml,
}

impl SpecFormat {
    /// Guess from file extension; anything but `.toml` is JSON
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Self::Toml,
            _ => Self::Json,
        }
    }
}

#[derive(Args)]
pub struct ExportArgs {
    /// Output file (stdout if omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Description format (default: from output extension, else json)
    #[arg(long, value_enum)]
    pub spec_format: Option<SpecFormat>,
}

/// Read a graph description and build it.
///
/// Out-of-range edges are reported with `labels` and skipped, or fail the
/// load when `strict` is set.
pub fn load_graph(path: &Path, strict: bool, labels: LabelStyle) -> anyhow::Result<Graph> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read graph file {}", path.display()))?;

    let spec = match SpecFormat::from_path(path) {
        SpecFormat::Toml => GraphSpec::from_toml_str(&text),
        SpecFormat::Json => GraphSpec::from_json_str(&text),
    }
    .with_context(|| format!("Failed to parse graph file {}", path.display()))?;

    tracing::info!(
        "Loaded {} vertices, {} edges from {}",
        spec.vertices,
        spec.edges.len(),
        path.display()
    );

    if strict {
        return match spec.build_strict() {
            Ok(graph) => Ok(graph),
            Err(e) if e.is_invalid_vertex() => Err(anyhow::anyhow!(output::vertex_error(&e, labels))),
            Err(e) => Err(e.into()),
        };
    }

    let built = spec.build()?;
    for edge in &built.rejected {
        tracing::warn!(
            "Skipping edge ({}, {}): {}",
            labels.format(edge.src),
            labels.format(edge.dest),
            output::vertex_error(&edge.error, labels)
        );
    }
    Ok(built.graph)
}

fn render_spec(spec: &GraphSpec, format: SpecFormat) -> anyhow::Result<String> {
    Ok(match format {
        SpecFormat::Json => serde_json::to_string_pretty(spec)?,
        SpecFormat::Toml => toml::to_string(spec)?,
    })
}

pub fn run_export(args: &ExportArgs, ctx: &AppContext) -> anyhow::Result<()> {
    let format = args
        .spec_format
        .or_else(|| args.output.as_deref().map(SpecFormat::from_path))
        .unwrap_or_default();
    let text = render_spec(&ctx.graph.to_spec(), format)?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, &text)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!(
                "Exported {} vertices, {} edges to {}",
                ctx.graph.vertex_count(),
                ctx.graph.edge_count(),
                path.display()
            );
        }
        None => println!("{}", text),
    }
    Ok(())
}
