use costar_core::cast_members;
use serde::Serialize;

use crate::error::CliError;
use crate::load::Session;
use crate::util::{to_json, OutputFormat};

#[derive(Debug, Serialize)]
pub struct GraphStatus {
    pub source: String,
    pub record_count: usize,
    pub actor_count: usize,
    pub vertex_count: usize,
    pub edge_count: usize,
    pub memory_bytes: usize,
    pub load_time_ms: f64,
}

pub fn graph_status(session: &Session) -> GraphStatus {
    GraphStatus {
        source: session.source.clone(),
        record_count: session.records.len(),
        actor_count: cast_members(&session.records).len(),
        vertex_count: session.graph.vertex_count(),
        edge_count: session.graph.edge_count(),
        memory_bytes: session.graph.memory_usage(),
        load_time_ms: session.load_time_ms,
    }
}

pub fn run_stats(session: &Session, format: OutputFormat) -> Result<String, CliError> {
    let status = graph_status(session);
    match format {
        OutputFormat::Json => to_json(&status),
        OutputFormat::Text => Ok(format!(
            "source:   {}\nrecords:  {}\nactors:   {}\nvertices: {}\nedges:    {}\nmemory:   ~{:.1}KB\nloaded:   {:.1}ms",
            status.source,
            status.record_count,
            status.actor_count,
            status.vertex_count,
            status.edge_count,
            status.memory_bytes as f64 / 1024.0,
            status.load_time_ms
        )),
    }
}

/// Distinct cast members, one per line, in first-appearance order.
pub fn run_actors(session: &Session, format: OutputFormat) -> Result<String, CliError> {
    let actors = cast_members(&session.records);
    match format {
        OutputFormat::Json => to_json(&actors),
        OutputFormat::Text => Ok(actors.join("\n")),
    }
}

/// Dump every vertex with its neighbor list.
pub fn run_show(session: &Session, format: OutputFormat) -> Result<String, CliError> {
    let graph = &session.graph;
    match format {
        OutputFormat::Text => Ok(graph.to_string().trim_end().to_string()),
        OutputFormat::Json => {
            let adjacency: Vec<(&str, Vec<&str>)> = graph
                .vertices()
                .map(|v| (v, graph.neighbors(v).unwrap_or_default()))
                .collect();
            to_json(&adjacency)
        }
    }
}
