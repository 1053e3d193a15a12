//! Command dispatch and the graph-reporting commands.

use crate::cli::{Cli, Command, GraphArgs};
use crate::config_handlers::handle_config_command;
use crate::error::Result;
use serde::Serialize;
use std::io::Write;
use tracing::{info, warn};
use wikimap_content::FieldCleaner;
use wikimap_core::WikimapConfig;
use wikimap_graph::{BuildStats, ErrorHandling, GraphBuilder, WikiMap, compute_stats};

/// Run the parsed command, writing its output to `out`.
pub fn run(cli: &Cli, out: &mut dyn Write) -> Result<()> {
    let config_path = cli.config.as_deref();
    match &cli.command {
        Command::Stats { graph, json } => {
            let config = WikimapConfig::load(config_path)?;
            cmd_stats(&config, graph, *json, out)
        }
        Command::Components { graph, size, json } => {
            let config = WikimapConfig::load(config_path)?;
            cmd_components(&config, graph, *size, *json, out)
        }
        Command::Clean { names } => {
            let config = WikimapConfig::load(config_path)?;
            cmd_clean(&config, names, out)
        }
        Command::Config { action } => handle_config_command(config_path, action, out),
    }
}

fn load_graph(config: &WikimapConfig, args: &GraphArgs) -> Result<(WikiMap, BuildStats)> {
    let handling = if args.strict {
        ErrorHandling::FailFast
    } else {
        ErrorHandling::Skip
    };
    let (graph, stats) = GraphBuilder::new()
        .with_mappings_path(&args.mappings)
        .with_cleaner(FieldCleaner::new(&config.cleaner))
        .with_error_handling(handling)
        .build()?;

    info!(
        mappings = stats.mappings_read,
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "loaded {}",
        args.mappings.display()
    );
    if stats.mappings_skipped > 0 {
        warn!(skipped = stats.mappings_skipped, "some mappings were not usable");
    }
    Ok((graph, stats))
}

/// Print node, edge, and component-size statistics.
pub fn cmd_stats(
    config: &WikimapConfig,
    args: &GraphArgs,
    json: bool,
    out: &mut dyn Write,
) -> Result<()> {
    let (graph, _) = load_graph(config, args)?;
    let stats = compute_stats(&graph);

    if json {
        serde_json::to_writer_pretty(&mut *out, &stats)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "Fields:             {}", stats.node_count)?;
    writeln!(out, "Mappings:           {}", stats.edge_count)?;
    writeln!(out, "Components:         {}", stats.component_count)?;
    writeln!(out, "Largest component:  {}", stats.largest_component)?;
    if !stats.size_counts.is_empty() {
        writeln!(out)?;
        writeln!(out, "{:>6}  {:>6}", "size", "count")?;
        for (size, count) in &stats.size_counts {
            writeln!(out, "{size:>6}  {count:>6}")?;
        }
    }
    Ok(())
}

#[derive(Serialize)]
struct ComponentListing {
    size: usize,
    components: Vec<Vec<String>>,
}

/// List the components with exactly `size` fields, one per line.
pub fn cmd_components(
    config: &WikimapConfig,
    args: &GraphArgs,
    size: usize,
    json: bool,
    out: &mut dyn Write,
) -> Result<()> {
    let (graph, _) = load_graph(config, args)?;
    let components: Vec<Vec<String>> = graph
        .connected_components_with_size(size)
        .iter()
        .map(|component| {
            let mut labels: Vec<String> = component.node_labels().map(str::to_string).collect();
            labels.sort_unstable();
            labels
        })
        .collect();

    if json {
        let listing = ComponentListing { size, components };
        serde_json::to_writer_pretty(&mut *out, &listing)?;
        writeln!(out)?;
        return Ok(());
    }

    if components.is_empty() {
        writeln!(out, "No components of size {size}")?;
    }
    for labels in &components {
        writeln!(out, "{}", labels.join(" | "))?;
    }
    Ok(())
}

/// Print the cleaned form of each name, one per line.
pub fn cmd_clean(config: &WikimapConfig, names: &[String], out: &mut dyn Write) -> Result<()> {
    let cleaner = FieldCleaner::new(&config.cleaner);
    for name in names {
        writeln!(out, "{}", cleaner.clean(name))?;
    }
    Ok(())
}
