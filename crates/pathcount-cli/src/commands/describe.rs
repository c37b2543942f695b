//! Adjacency dump command

use crate::output::{self, OutputFormat};
use crate::AppContext;

pub fn run(ctx: &AppContext) -> anyhow::Result<()> {
    let rows = ctx.graph.describe();
    tracing::debug!(
        "Describing graph with {} vertices, {} edges",
        ctx.graph.vertex_count(),
        ctx.graph.edge_count()
    );

    match ctx.format {
        OutputFormat::Json => println!("{}", output::to_json(&rows)?),
        format => println!("{}", output::adjacency(&rows, ctx.labels, format)),
    }
    Ok(())
}
