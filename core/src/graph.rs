use std::collections::HashMap;
use std::fmt;

use thiserror::Error;

/// Interned vertex index. Assigned in first-seen order, so iteration by id
/// is iteration in insertion order.
pub type VertexId = u32;

/// Errors raised while assembling a graph.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    /// An edge endpoint was never registered with `add_vertex`.
    #[error("vertex '{0}' is not in the graph")]
    MissingVertex(String),
}

/// Undirected, unweighted adjacency structure keyed by vertex name.
///
/// Movie titles and actor names share one namespace. Neighbor lists keep
/// insertion order and are not deduplicated: linking the same pair twice
/// yields two entries on each side.
#[derive(Debug)]
pub struct Graph {
    names: Vec<String>,
    index: HashMap<String, VertexId>,
    adjacency: Vec<Vec<VertexId>>,
    edge_count: usize,
}

impl Graph {
    pub fn new() -> Self {
        Self {
            names: Vec::new(),
            index: HashMap::new(),
            adjacency: Vec::new(),
            edge_count: 0,
        }
    }

    /// Pre-allocate for a known vertex count.
    pub fn with_capacity(vertex_count: usize) -> Self {
        Self {
            names: Vec::with_capacity(vertex_count),
            index: HashMap::with_capacity(vertex_count),
            adjacency: Vec::with_capacity(vertex_count),
            edge_count: 0,
        }
    }

    /// Register a vertex with an empty neighbor list. Idempotent: an existing
    /// vertex keeps its id and its neighbors.
    pub fn add_vertex(&mut self, name: &str) -> VertexId {
        if let Some(&id) = self.index.get(name) {
            return id;
        }
        let id = self.names.len() as VertexId;
        self.names.push(name.to_string());
        self.index.insert(name.to_string(), id);
        self.adjacency.push(Vec::new());
        id
    }

    /// Link two registered vertices. Appends `b` to `a`'s list and `a` to
    /// `b`'s list. Fails without touching the graph if either is unknown.
    pub fn add_edge(&mut self, a: &str, b: &str) -> Result<(), GraphError> {
        let a_id = self.require(a)?;
        let b_id = self.require(b)?;
        self.adjacency[a_id as usize].push(b_id);
        self.adjacency[b_id as usize].push(a_id);
        self.edge_count += 1;
        Ok(())
    }

    fn require(&self, name: &str) -> Result<VertexId, GraphError> {
        self.vertex_id(name)
            .ok_or_else(|| GraphError::MissingVertex(name.to_string()))
    }

    pub fn vertex_id(&self, name: &str) -> Option<VertexId> {
        self.index.get(name).copied()
    }

    /// Resolve an id back to its name. Ids come from this graph, so an
    /// out-of-range id is a caller bug.
    pub fn vertex_name(&self, id: VertexId) -> &str {
        &self.names[id as usize]
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Neighbor ids of `id`, in insertion order.
    pub fn neighbor_ids(&self, id: VertexId) -> &[VertexId] {
        self.adjacency
            .get(id as usize)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Neighbor names of `name`, or None if the vertex is unknown.
    pub fn neighbors(&self, name: &str) -> Option<Vec<&str>> {
        let id = self.vertex_id(name)?;
        Some(
            self.neighbor_ids(id)
                .iter()
                .map(|&n| self.vertex_name(n))
                .collect(),
        )
    }

    /// Vertex names in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(|s| s.as_str())
    }

    pub fn vertex_count(&self) -> usize {
        self.names.len()
    }

    /// Number of `add_edge` calls, i.e. undirected edges including repeats.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Approximate memory usage in bytes.
    pub fn memory_usage(&self) -> usize {
        use std::mem::size_of;

        let name_bytes: usize = self.names.iter().map(|s| s.len()).sum();
        // each name is held twice: once in `names`, once as an index key
        let names_mem = 2 * (name_bytes + self.names.len() * size_of::<String>());
        let index_mem = self.index.len() * (size_of::<VertexId>() + 16);
        let adj_mem: usize = self
            .adjacency
            .iter()
            .map(|v| size_of::<Vec<VertexId>>() + v.len() * size_of::<VertexId>())
            .sum();

        names_mem + index_mem + adj_mem
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

/// One line per vertex in insertion order: `vertex -> n1, n2, ...`.
impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (id, name) in self.names.iter().enumerate() {
            let neighbors: Vec<&str> = self.adjacency[id]
                .iter()
                .map(|&n| self.vertex_name(n))
                .collect();
            writeln!(f, "{} -> {}", name, neighbors.join(", "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_vertex_idempotent() {
        let mut g = Graph::new();
        let a = g.add_vertex("A");
        g.add_vertex("B");
        g.add_edge("A", "B").unwrap();
        assert_eq!(g.add_vertex("A"), a);
        assert_eq!(g.vertex_count(), 2);
        // re-adding must not clear the neighbor list
        assert_eq!(g.neighbors("A").unwrap(), vec!["B"]);
    }

    #[test]
    fn test_add_edge_symmetric() {
        let mut g = Graph::new();
        g.add_vertex("A");
        g.add_vertex("B");
        g.add_edge("A", "B").unwrap();
        assert_eq!(g.neighbors("A").unwrap(), vec!["B"]);
        assert_eq!(g.neighbors("B").unwrap(), vec!["A"]);
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn test_add_edge_missing_vertex() {
        let mut g = Graph::new();
        g.add_vertex("A");
        assert_eq!(
            g.add_edge("A", "Ghost"),
            Err(GraphError::MissingVertex("Ghost".into()))
        );
        assert_eq!(
            g.add_edge("Ghost", "A"),
            Err(GraphError::MissingVertex("Ghost".into()))
        );
        // nothing half-inserted
        assert!(g.neighbors("A").unwrap().is_empty());
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn test_multi_edges_kept() {
        let mut g = Graph::new();
        g.add_vertex("M");
        g.add_vertex("X");
        g.add_edge("M", "X").unwrap();
        g.add_edge("M", "X").unwrap();
        assert_eq!(g.neighbors("M").unwrap(), vec!["X", "X"]);
        assert_eq!(g.neighbors("X").unwrap(), vec!["M", "M"]);
        assert_eq!(g.edge_count(), 2);
    }

    #[test]
    fn test_self_edge_appends_twice() {
        let mut g = Graph::new();
        g.add_vertex("A");
        g.add_edge("A", "A").unwrap();
        assert_eq!(g.neighbors("A").unwrap(), vec!["A", "A"]);
    }

    #[test]
    fn test_neighbor_order_preserved() {
        let mut g = Graph::new();
        for v in ["M", "C", "A", "B"] {
            g.add_vertex(v);
        }
        g.add_edge("M", "C").unwrap();
        g.add_edge("M", "A").unwrap();
        g.add_edge("M", "B").unwrap();
        assert_eq!(g.neighbors("M").unwrap(), vec!["C", "A", "B"]);
    }

    #[test]
    fn test_unknown_vertex_lookups() {
        let g = Graph::new();
        assert!(!g.contains("A"));
        assert!(g.neighbors("A").is_none());
        assert!(g.vertex_id("A").is_none());
        assert!(g.neighbor_ids(42).is_empty());
    }

    #[test]
    fn test_vertices_insertion_order() {
        let mut g = Graph::new();
        for v in ["Zeta", "Alpha", "Mid"] {
            g.add_vertex(v);
        }
        assert_eq!(g.vertices().collect::<Vec<_>>(), vec!["Zeta", "Alpha", "Mid"]);
    }

    #[test]
    fn test_display() {
        let mut g = Graph::new();
        g.add_vertex("M1");
        g.add_vertex("X");
        g.add_vertex("Y");
        g.add_edge("M1", "X").unwrap();
        g.add_edge("M1", "Y").unwrap();
        assert_eq!(g.to_string(), "M1 -> X, Y\nX -> M1\nY -> M1\n");
    }

    #[test]
    fn test_memory_usage_nonzero() {
        let mut g = Graph::with_capacity(2);
        assert_eq!(g.memory_usage(), 0);
        g.add_vertex("A");
        g.add_vertex("B");
        g.add_edge("A", "B").unwrap();
        assert!(g.memory_usage() > 0);
    }
}
