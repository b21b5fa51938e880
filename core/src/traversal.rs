use std::collections::{HashSet, VecDeque};

use serde::Serialize;

use crate::graph::{Graph, VertexId};

/// Edge cap applied by front ends that don't ask for something else.
pub const DEFAULT_MAX_LENGTH: usize = 6;

/// Result of a shortest path query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestPath {
    /// Vertices from origin to destination, both included.
    pub path: Vec<String>,
    /// Number of edges traversed (`path.len() - 1`).
    pub length: usize,
}

/// Result of a bounded path enumeration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PathsResult {
    /// Destination-reaching paths in discovery order (non-decreasing length).
    pub paths: Vec<Vec<String>>,
    /// Vertices expanded before the search ended.
    pub vertices_visited: usize,
    /// True if the search stopped because a dequeued path exceeded the cap.
    pub cutoff_reached: bool,
}

/// FIFO queue of partial paths.
///
/// Each path is an immutable snapshot stored as an arena entry pointing at
/// its parent entry, so appending a vertex never copies or mutates the
/// prefix shared with sibling paths.
struct PathQueue {
    /// (terminus, parent entry, edge count)
    arena: Vec<(VertexId, Option<usize>, usize)>,
    queue: VecDeque<usize>,
}

impl PathQueue {
    fn seeded(origin: VertexId) -> Self {
        let mut queue = VecDeque::new();
        queue.push_back(0);
        Self {
            arena: vec![(origin, None, 0)],
            queue,
        }
    }

    fn pop(&mut self) -> Option<usize> {
        self.queue.pop_front()
    }

    fn terminus(&self, entry: usize) -> VertexId {
        self.arena[entry].0
    }

    fn edges(&self, entry: usize) -> usize {
        self.arena[entry].2
    }

    /// Enqueue `entry + neighbor` for every neighbor of its terminus, in
    /// neighbor-list order.
    ///
    /// Neighbors already visited are skipped: the visited set only grows, so
    /// such a path would be dropped unexpanded when dequeued. The destination
    /// is never in `visited`, so every route to it is still enqueued.
    fn expand(&mut self, graph: &Graph, entry: usize, visited: &HashSet<VertexId>) {
        let (last, _, edges) = self.arena[entry];
        for &next in graph.neighbor_ids(last) {
            if visited.contains(&next) {
                continue;
            }
            self.arena.push((next, Some(entry), edges + 1));
            self.queue.push_back(self.arena.len() - 1);
        }
    }

    /// Walk parent pointers back to the origin and return the path in
    /// origin-first order.
    fn materialize(&self, graph: &Graph, entry: usize) -> Vec<String> {
        let mut path = Vec::with_capacity(self.edges(entry) + 1);
        let mut current = Some(entry);
        while let Some(idx) = current {
            let (vertex, parent, _) = self.arena[idx];
            path.push(graph.vertex_name(vertex).to_string());
            current = parent;
        }
        path.reverse();
        path
    }
}

/// Shortest path from `origin` to `destination` by BFS over paths.
///
/// Returns the first dequeued path whose terminus is `destination`; each
/// vertex is expanded at most once, the first time it is dequeued, so that
/// path has the minimum edge count.
///
/// Returns None if `origin` is not in the graph or `destination` is not
/// reachable. An unknown `destination` is not special-cased: the search
/// simply exhausts the origin's component.
pub fn shortest_path(graph: &Graph, origin: &str, destination: &str) -> Option<ShortestPath> {
    let Some(start) = graph.vertex_id(origin) else {
        log::debug!("shortest_path: origin '{}' not in graph", origin);
        return None;
    };
    let target = graph.vertex_id(destination);

    let mut queue = PathQueue::seeded(start);
    let mut visited: HashSet<VertexId> = HashSet::new();

    while let Some(entry) = queue.pop() {
        let last = queue.terminus(entry);

        if Some(last) == target {
            let path = queue.materialize(graph, entry);
            log::debug!(
                "shortest_path: {} -> {} in {} edges ({} vertices visited)",
                origin,
                destination,
                queue.edges(entry),
                visited.len()
            );
            return Some(ShortestPath {
                length: path.len() - 1,
                path,
            });
        }

        if visited.insert(last) {
            queue.expand(graph, entry, &visited);
        }
    }

    log::debug!(
        "shortest_path: no path {} -> {} ({} vertices visited)",
        origin,
        destination,
        visited.len()
    );
    None
}

/// Enumerate paths from `origin` to `destination` with the same BFS as
/// [`shortest_path`], collecting every dequeued path that ends at
/// `destination` instead of stopping at the first.
///
/// A collected path is not extended, so `destination` is never marked
/// visited: later routes into it keep being collected, including repeats
/// caused by parallel edges. Every other vertex is still expanded only once,
/// which limits the result to routes whose intermediate vertices were first
/// reached along that route.
///
/// `max_length` caps paths in edges. It is a breadth cutoff: the first
/// dequeued path longer than the cap ends the whole search, since every
/// path still queued is at least as long. `None` means unbounded.
pub fn bounded_paths(
    graph: &Graph,
    origin: &str,
    destination: &str,
    max_length: Option<usize>,
) -> PathsResult {
    let mut result = PathsResult::default();

    let Some(start) = graph.vertex_id(origin) else {
        log::debug!("bounded_paths: origin '{}' not in graph", origin);
        return result;
    };
    let target = graph.vertex_id(destination);

    let mut queue = PathQueue::seeded(start);
    let mut visited: HashSet<VertexId> = HashSet::new();

    while let Some(entry) = queue.pop() {
        if max_length.is_some_and(|max| queue.edges(entry) > max) {
            result.cutoff_reached = true;
            break;
        }

        let last = queue.terminus(entry);

        if Some(last) == target {
            let path = queue.materialize(graph, entry);
            log::trace!("bounded_paths: collected {:?}", path);
            result.paths.push(path);
            continue;
        }

        if visited.insert(last) {
            queue.expand(graph, entry, &visited);
        }
    }

    result.vertices_visited = visited.len();
    log::debug!(
        "bounded_paths: {} -> {} found {} paths ({} vertices visited, cutoff={})",
        origin,
        destination,
        result.paths.len(),
        result.vertices_visited,
        result.cutoff_reached
    );
    result
}
