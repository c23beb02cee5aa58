use std::collections::BTreeSet;
use std::io::Write;
use std::path::Path;

use serde::Serialize;
use tracing::info;

use graphdata_contract::{parse_graph_data, to_string, validate_graph, GraphData, GraphFormat, ValidationPolicy};

use crate::cli::{Commands, InputArgs};
use crate::config::CliConfig;
use crate::error::{CliError, CliResult};

/// Summary printed by `graphcheck stats`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphStats {
    pub nodes: usize,
    pub edges: usize,
    pub clusters: usize,
    pub unclustered_nodes: usize,
    pub weighted_edges: usize,
    /// Distinct extra attribute names across all nodes and edges
    pub extension_keys: Vec<String>,
}

impl GraphStats {
    pub fn collect(graph: &GraphData) -> Self {
        let clusters: BTreeSet<&str> = graph.nodes.iter()
            .filter_map(|node| node.cluster_id.as_deref())
            .collect();

        let extension_keys: BTreeSet<&str> = graph.nodes.iter()
            .flat_map(|node| node.extra.keys())
            .chain(graph.edges.iter().flat_map(|edge| edge.extra.keys()))
            .collect();

        GraphStats {
            nodes: graph.nodes.len(),
            edges: graph.edges.len(),
            clusters: clusters.len(),
            unclustered_nodes: graph.nodes.iter().filter(|node| node.cluster_id.is_none()).count(),
            weighted_edges: graph.edges.iter().filter(|edge| edge.weight.is_some()).count(),
            extension_keys: extension_keys.into_iter().map(str::to_string).collect(),
        }
    }
}

/// Resolve the input format: explicit flag, then file extension, then JSON
pub fn input_format(input: &InputArgs) -> GraphFormat {
    input.format
        .map(GraphFormat::from)
        .or_else(|| GraphFormat::from_path(&input.file))
        .unwrap_or_default()
}

/// Read and decode a graph document from disk
pub fn load_graph(path: &Path, format: GraphFormat) -> CliResult<GraphData> {
    let content = std::fs::read_to_string(path).map_err(|source| CliError::ReadError {
        path: path.to_path_buf(),
        source,
    })?;
    let graph = parse_graph_data(&content, format)?;
    info!(path = %path.display(), %format, nodes = graph.nodes.len(), edges = graph.edges.len(), "Loaded graph");
    Ok(graph)
}

/// Execute a parsed command, writing its output to `out`
pub fn run(command: &Commands, config: &CliConfig, out: &mut dyn Write) -> CliResult<()> {
    match command {
        Commands::Validate { input, skip_references } => {
            let mut policy: ValidationPolicy = config.policy.clone();
            if *skip_references {
                policy.check_references = false;
            }

            let graph = load_graph(&input.file, input_format(input))?;
            validate_graph(&graph, &policy)?;
            writeln!(
                out,
                "OK: {} ({} nodes, {} edges)",
                input.file.display(),
                graph.nodes.len(),
                graph.edges.len()
            )?;
        }
        Commands::Normalize { input, to, pretty } => {
            let format = input_format(input);
            let graph = load_graph(&input.file, format)?;
            let output_format = to.map(GraphFormat::from).unwrap_or(format);
            let text = to_string(&graph, output_format, *pretty)?;
            write!(out, "{}", text)?;
            if !text.ends_with('\n') {
                writeln!(out)?;
            }
        }
        Commands::Stats { input } => {
            let graph = load_graph(&input.file, input_format(input))?;
            let stats = GraphStats::collect(&graph);
            writeln!(out, "{}", serde_json::to_string_pretty(&stats)?)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use graphdata_contract::{EdgeConfig, NodeConfig};
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    #[test]
    fn test_stats_collect() {
        let graph = GraphData::new(
            vec![
                NodeConfig::new("a").with_cluster("c1").with_attribute("label", "A"),
                NodeConfig::new("b").with_cluster("c1"),
                NodeConfig::new("c").with_attribute("color", "red"),
            ],
            vec![
                EdgeConfig::new("a", "b").with_weight(2.0).with_attribute("label", "ab"),
                EdgeConfig::new("b", "c"),
            ],
        );

        assert_eq!(
            GraphStats::collect(&graph),
            GraphStats {
                nodes: 3,
                edges: 2,
                clusters: 1,
                unclustered_nodes: 1,
                weighted_edges: 1,
                extension_keys: vec!["color".to_string(), "label".to_string()],
            }
        );
    }

    #[test]
    fn test_input_format_resolution() {
        let by_extension = InputArgs { file: PathBuf::from("g.yml"), format: None };
        assert_eq!(input_format(&by_extension), GraphFormat::Yaml);

        let explicit = InputArgs {
            file: PathBuf::from("g.yml"),
            format: Some(crate::cli::FormatArg::Json),
        };
        assert_eq!(input_format(&explicit), GraphFormat::Json);

        let unknown = InputArgs { file: PathBuf::from("graph.txt"), format: None };
        assert_eq!(input_format(&unknown), GraphFormat::Json);
    }
}
