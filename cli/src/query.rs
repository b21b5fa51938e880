use clap::Subcommand;
use serde::Serialize;

use crate::config::Settings;
use crate::error::CliError;
use crate::load::Session;
use crate::path::{path_report, render_path, run_path, PathReport};
use crate::relationships::{
    relationships_report, render_relationships, run_relationships, RelationshipsReport,
};
use crate::status::{run_actors, run_show, run_stats};
use crate::util::{to_json, OutputFormat};

/// Queries the front end can answer from a loaded dataset.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Query {
    /// Shortest path between two vertices
    Path { origin: String, destination: String },
    /// Paths between two vertices up to the configured maximum length
    Relationships {
        origin: String,
        destination: String,
        /// Ignore the maximum length and list every path found
        #[arg(long)]
        all: bool,
    },
    /// Shortest path, capped relationships and the full relationship listing
    Search { origin: String, destination: String },
    /// List every distinct cast member
    Actors,
    /// Print the adjacency list of the whole graph
    Show,
    /// Print graph size and load statistics
    Stats,
}

#[derive(Debug, Serialize)]
struct SearchReport {
    path: PathReport,
    relationships: RelationshipsReport,
    all_relationships: RelationshipsReport,
}

/// Run one query and return the rendered output.
pub fn execute(
    query: &Query,
    session: &Session,
    settings: &Settings,
    format: OutputFormat,
) -> Result<String, CliError> {
    let graph = &session.graph;
    match query {
        Query::Path {
            origin,
            destination,
        } => run_path(graph, origin, destination, settings, format),
        Query::Relationships {
            origin,
            destination,
            all,
        } => {
            let cap = if *all { None } else { Some(settings.max_length) };
            run_relationships(graph, origin, destination, cap, settings, format)
        }
        Query::Search {
            origin,
            destination,
        } => {
            let report = SearchReport {
                path: path_report(graph, origin, destination)?,
                relationships: relationships_report(
                    graph,
                    origin,
                    destination,
                    Some(settings.max_length),
                )?,
                all_relationships: relationships_report(graph, origin, destination, None)?,
            };
            match format {
                OutputFormat::Json => to_json(&report),
                OutputFormat::Text => Ok(render_search(&report, settings)),
            }
        }
        Query::Actors => run_actors(session, format),
        Query::Show => run_show(session, format),
        Query::Stats => run_stats(session, format),
    }
}

fn render_search(report: &SearchReport, settings: &Settings) -> String {
    // a missing origin is reported once, not per section
    if !report.path.origin_found {
        return render_path(&report.path, settings);
    }
    [
        render_path(&report.path, settings),
        render_relationships(&report.relationships, settings),
        render_relationships(&report.all_relationships, settings),
    ]
    .join("\n\n")
}
