use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::graph::{Graph, GraphError};

/// One movie and its cast, as it appears in the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub title: String,
    pub cast: Vec<String>,
}

impl MovieRecord {
    pub fn new<T, I, S>(title: T, cast: I) -> Self
    where
        T: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.into(),
            cast: cast.into_iter().map(Into::into).collect(),
        }
    }
}

/// Build the movie/cast graph: every title and every cast member becomes a
/// vertex, and each cast member is linked to the title they appear in.
///
/// Records are processed in order, so neighbor lists follow dataset order.
/// The input is not modified.
pub fn build_graph(records: &[MovieRecord]) -> Result<Graph, GraphError> {
    let mut graph = Graph::with_capacity(records.len() * 4);

    for record in records {
        graph.add_vertex(&record.title);
        for member in &record.cast {
            graph.add_vertex(member);
            graph.add_edge(&record.title, member)?;
        }
    }

    log::debug!(
        "built graph from {} records: {} vertices, {} edges",
        records.len(),
        graph.vertex_count(),
        graph.edge_count()
    );
    Ok(graph)
}

/// Every distinct cast member in order of first appearance. Titles are not
/// included unless they also appear in some cast list.
pub fn cast_members(records: &[MovieRecord]) -> Vec<&str> {
    let mut seen = HashSet::new();
    records
        .iter()
        .flat_map(|r| r.cast.iter())
        .map(|s| s.as_str())
        .filter(|name| seen.insert(*name))
        .collect()
}
