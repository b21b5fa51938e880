use costar_core::{shortest_path, Graph, ShortestPath};
use serde::Serialize;

use crate::config::Settings;
use crate::error::CliError;
use crate::util::{join_path, missing_origin_notice, require_name, to_json, OutputFormat};

#[derive(Debug, Serialize)]
pub struct PathReport {
    pub origin: String,
    pub destination: String,
    pub origin_found: bool,
    pub shortest: Option<ShortestPath>,
}

/// Run a shortest path query against the session graph.
pub fn path_report(graph: &Graph, origin: &str, destination: &str) -> Result<PathReport, CliError> {
    let origin = require_name(origin, "origin")?;
    let destination = require_name(destination, "destination")?;

    Ok(PathReport {
        origin: origin.to_string(),
        destination: destination.to_string(),
        origin_found: graph.contains(origin),
        shortest: shortest_path(graph, origin, destination),
    })
}

pub fn render_path(report: &PathReport, settings: &Settings) -> String {
    if !report.origin_found {
        return missing_origin_notice(&report.origin);
    }
    match &report.shortest {
        Some(sp) => format!(
            "{} and {}: {}\nShortest path length: {}",
            report.origin,
            report.destination,
            join_path(&sp.path, &settings.separator),
            sp.length
        ),
        None => format!(
            "No path found between {} and {}.",
            report.origin, report.destination
        ),
    }
}

pub fn run_path(
    graph: &Graph,
    origin: &str,
    destination: &str,
    settings: &Settings,
    format: OutputFormat,
) -> Result<String, CliError> {
    let report = path_report(graph, origin, destination)?;
    match format {
        OutputFormat::Text => Ok(render_path(&report, settings)),
        OutputFormat::Json => to_json(&report),
    }
}
