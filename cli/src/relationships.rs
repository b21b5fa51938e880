use costar_core::{bounded_paths, Graph, PathsResult};
use serde::Serialize;

use crate::config::Settings;
use crate::error::CliError;
use crate::util::{join_path, missing_origin_notice, require_name, to_json, OutputFormat};

#[derive(Debug, Serialize)]
pub struct RelationshipsReport {
    pub origin: String,
    pub destination: String,
    pub origin_found: bool,
    /// Edge cap used for the search; None when unbounded.
    pub max_length: Option<usize>,
    pub result: PathsResult,
}

/// Enumerate paths between two vertices, capped at `max_length` edges.
pub fn relationships_report(
    graph: &Graph,
    origin: &str,
    destination: &str,
    max_length: Option<usize>,
) -> Result<RelationshipsReport, CliError> {
    let origin = require_name(origin, "origin")?;
    let destination = require_name(destination, "destination")?;

    Ok(RelationshipsReport {
        origin: origin.to_string(),
        destination: destination.to_string(),
        origin_found: graph.contains(origin),
        max_length,
        result: bounded_paths(graph, origin, destination, max_length),
    })
}

pub fn render_relationships(report: &RelationshipsReport, settings: &Settings) -> String {
    if !report.origin_found {
        return missing_origin_notice(&report.origin);
    }

    let paths = &report.result.paths;
    let mut out = match (report.max_length, paths.is_empty()) {
        (Some(max), true) => {
            return format!(
                "No relationships with length at most {} found between {} and {}.",
                max, report.origin, report.destination
            )
        }
        (None, true) => {
            return format!(
                "No relationships found between {} and {}.",
                report.origin, report.destination
            )
        }
        (Some(max), false) => format!(
            "{} and {} with a maximum length of {} edges:\n",
            report.origin, report.destination, max
        ),
        (None, false) => format!(
            "All relationships between {} and {}:\n",
            report.origin, report.destination
        ),
    };

    for path in paths {
        out.push('\n');
        out.push_str(&join_path(path, &settings.separator));
    }
    out
}

pub fn run_relationships(
    graph: &Graph,
    origin: &str,
    destination: &str,
    max_length: Option<usize>,
    settings: &Settings,
    format: OutputFormat,
) -> Result<String, CliError> {
    let report = relationships_report(graph, origin, destination, max_length)?;
    match format {
        OutputFormat::Text => Ok(render_relationships(&report, settings)),
        OutputFormat::Json => to_json(&report),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use costar_core::{build_graph, MovieRecord};

    fn graph() -> Graph {
        build_graph(&[
            MovieRecord::new("M1", ["A", "B"]),
            MovieRecord::new("M2", ["A", "C"]),
            MovieRecord::new("M3", ["C", "B"]),
        ])
        .unwrap()
    }

    #[test]
    fn test_render_capped() {
        let out = run_relationships(&graph(), "A", "B", Some(2), &Settings::default(), OutputFormat::Text)
            .unwrap();
        assert_eq!(out, "A and B with a maximum length of 2 edges:\n\nA -> M1 -> B");
    }

    #[test]
    fn test_render_unbounded() {
        let out = run_relationships(&graph(), "A", "B", None, &Settings::default(), OutputFormat::Text)
            .unwrap();
        assert_eq!(
            out,
            "All relationships between A and B:\n\nA -> M1 -> B\nA -> M2 -> C -> M3 -> B"
        );
    }

    #[test]
    fn test_render_none_within_cap() {
        let out = run_relationships(&graph(), "A", "B", Some(1), &Settings::default(), OutputFormat::Text)
            .unwrap();
        assert_eq!(out, "No relationships with length at most 1 found between A and B.");
    }

    #[test]
    fn test_render_unreachable() {
        let out = run_relationships(&graph(), "A", "Nobody", None, &Settings::default(), OutputFormat::Text)
            .unwrap();
        assert_eq!(out, "No relationships found between A and Nobody.");
    }

    #[test]
    fn test_render_missing_origin() {
        let out = run_relationships(&graph(), "Ghost", "A", Some(6), &Settings::default(), OutputFormat::Text)
            .unwrap();
        assert_eq!(out, "Vertex 'Ghost' does not exist in the graph.");
    }

    #[test]
    fn test_json_output() {
        let out = run_relationships(&graph(), "A", "B", None, &Settings::default(), OutputFormat::Json)
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["result"]["paths"].as_array().unwrap().len(), 2);
        assert!(value["max_length"].is_null());
        assert_eq!(value["result"]["cutoff_reached"], false);
    }
}
