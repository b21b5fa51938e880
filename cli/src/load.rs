use std::io::Read;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use costar_core::{build_graph, Graph, MovieRecord};

/// A dataset and the graph built from it. Built once per invocation and
/// never mutated afterwards.
#[derive(Debug)]
pub struct Session {
    pub records: Vec<MovieRecord>,
    pub graph: Graph,
    /// Where the records came from, for status output.
    pub source: String,
    pub load_time_ms: f64,
}

impl Session {
    /// Read and parse the dataset at `path` (`-` reads stdin), then build
    /// the graph.
    pub fn load(path: &Path) -> Result<Self> {
        let start = Instant::now();
        let source = path.display().to_string();

        let text = if source == "-" {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read dataset from stdin")?;
            buf
        } else {
            std::fs::read_to_string(path)
                .with_context(|| format!("failed to read dataset {}", source))?
        };

        let records = parse_dataset(&text)
            .with_context(|| format!("failed to parse dataset {}", source))?;
        let mut session = Self::from_records(records, source)?;
        session.load_time_ms = start.elapsed().as_secs_f64() * 1000.0;

        log::info!(
            "loaded {} records from {}: {} vertices, {} edges in {:.1}ms",
            session.records.len(),
            session.source,
            session.graph.vertex_count(),
            session.graph.edge_count(),
            session.load_time_ms
        );
        Ok(session)
    }

    /// Build a session from records already in memory.
    pub fn from_records(records: Vec<MovieRecord>, source: impl Into<String>) -> Result<Self> {
        let start = Instant::now();
        let graph = build_graph(&records)?;
        Ok(Self {
            records,
            graph,
            source: source.into(),
            load_time_ms: start.elapsed().as_secs_f64() * 1000.0,
        })
    }
}

/// Parse a JSON array of `{"title": ..., "cast": [...]}` objects. Extra
/// fields are ignored; a missing title or cast is an error.
pub fn parse_dataset(json: &str) -> Result<Vec<MovieRecord>, serde_json::Error> {
    serde_json::from_str(json)
}
