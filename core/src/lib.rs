//! costar-core: movie/cast graph and path queries.
//!
//! Builds an undirected adjacency structure from `{title, cast}` records
//! (movies and actors are both vertices, linked by appearances) and answers
//! BFS shortest path and bounded path enumeration queries between vertices.
//! No I/O: callers hand in parsed records and render the results.

mod builder;
mod graph;
mod traversal;

pub use builder::{build_graph, cast_members, MovieRecord};
pub use graph::{Graph, GraphError, VertexId};
pub use traversal::{bounded_paths, shortest_path, PathsResult, ShortestPath, DEFAULT_MAX_LENGTH};
