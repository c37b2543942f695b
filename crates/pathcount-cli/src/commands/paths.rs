//! Path enumeration command

use clap::Args;

use crate::output::{self, OutputFormat};
use crate::AppContext;
use pathcount_core::{limits, parse_vertex, Error, PathEnumerator, PathReport, VertexId};

#[derive(Args)]
pub struct PathsArgs {
    /// Start vertex, as an id or letter label (default from config)
    #[arg(short, long)]
    pub start: Option<String>,

    /// Path length in edges (default from config)
    #[arg(short = 'n', long)]
    pub length: Option<usize>,

    /// Only print the number of paths
    #[arg(short, long)]
    pub count: bool,
}

pub fn run(args: &PathsArgs, ctx: &AppContext) -> anyhow::Result<()> {
    let start_text = args.start.as_deref().unwrap_or(&ctx.config.start);
    let start = parse_vertex(start_text)
        .ok_or_else(|| anyhow::anyhow!("Invalid start vertex: {}", start_text))?;
    let length = args.length.unwrap_or(ctx.config.length);
    limits::validate_path_length(length)?;

    tracing::info!(
        "Enumerating paths of length {} from {}",
        length,
        ctx.labels.format(start)
    );

    match ctx.format {
        OutputFormat::Json => run_json(start, length, args.count, ctx),
        format => run_streaming(start, length, args.count, format, ctx),
    }
}

/// Print each path the moment it is found, then the total
fn run_streaming(
    start: VertexId,
    length: usize,
    count_only: bool,
    format: OutputFormat,
    ctx: &AppContext,
) -> anyhow::Result<()> {
    if format == OutputFormat::Csv && !count_only {
        println!("{}", output::path_csv_header());
    }

    let mut index = 0;
    let mut print_path = |path: &[VertexId]| {
        index += 1;
        if !count_only {
            println!("{}", output::path_line(index, path, ctx.labels, format));
        }
    };

    let found = match PathEnumerator::enumerate(&ctx.graph, start, length, &mut print_path) {
        Ok(summary) => summary.paths_found,
        Err(e) => recover(e, ctx)?,
    };

    if count_only || format == OutputFormat::Table {
        println!("{}", output::path_total(found));
    }
    Ok(())
}

fn run_json(start: VertexId, length: usize, count_only: bool, ctx: &AppContext) -> anyhow::Result<()> {
    let report = match PathEnumerator::collect(&ctx.graph, start, length) {
        Ok(report) => report,
        Err(e) => {
            recover(e, ctx)?;
            PathReport {
                paths: Vec::new(),
                summary: pathcount_core::EnumerationSummary {
                    start,
                    length,
                    ..Default::default()
                },
            }
        }
    };

    if count_only {
        println!("{}", output::to_json(&report.summary)?);
    } else {
        println!("{}", output::to_json(&report)?);
    }
    Ok(())
}

/// Out-of-range vertices are reported and counted as zero paths; anything
/// else is fatal
fn recover(err: Error, ctx: &AppContext) -> anyhow::Result<usize> {
    match err {
        Error::InvalidVertex {
            vertex,
            endpoint,
            vertex_count,
        } => {
            tracing::warn!(
                "{} vertex {} doesn't exist (graph has {} vertices)",
                endpoint,
                ctx.labels.format(vertex),
                vertex_count
            );
            Ok(0)
        }
        other => Err(other.into()),
    }
}
