//! Weighted graph: adjacency list, Dijkstra, DFS, BFS.

use std::collections::{HashMap, HashSet, VecDeque};

use thiserror::Error;

use crate::queue::LinkedPriorityQueue;
use crate::types::Identifiable;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("vertex does not exist: {0}")]
    UnknownVertex(String),
    #[error("vertex cannot be reached: {0}")]
    Unreachable(String),
}

/// Whether an edge is stored in one adjacency direction or mirrored
/// in both.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GraphKind {
    Directed,
    Undirected,
}

#[derive(Clone, Debug)]
struct Edge {
    to: String,
    weight: f64,
}

struct Vertex<T> {
    value: T,
    /// Outgoing adjacency in insertion order. This order decides
    /// which of several equal-length shortest paths Dijkstra keeps.
    edges: Vec<Edge>,
    /// Shortest known distance from the last Dijkstra source.
    distance: f64,
    /// Predecessor on the best known path from that source.
    previous: Option<String>,
}

impl<T> Vertex<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            edges: Vec::new(),
            distance: f64::INFINITY,
            previous: None,
        }
    }
}

/// Weighted graph keyed by string vertex identity.
///
/// The per-vertex `distance`/`previous` state is transient: it is
/// reset at the start of every [`WeightedGraph::dijkstra`] call and
/// read back by [`WeightedGraph::shortest_path`], so path queries
/// must not interleave with a later Dijkstra run they do not belong
/// to.
pub struct WeightedGraph<T: Identifiable> {
    kind: GraphKind,
    vertices: HashMap<String, Vertex<T>>,
    edge_count: usize,
}

impl<T: Identifiable> WeightedGraph<T> {
    pub fn new(kind: GraphKind) -> Self {
        Self {
            kind,
            vertices: HashMap::new(),
            edge_count: 0,
        }
    }

    pub fn directed() -> Self {
        Self::new(GraphKind::Directed)
    }

    pub fn undirected() -> Self {
        Self::new(GraphKind::Undirected)
    }

    pub fn kind(&self) -> GraphKind {
        self.kind
    }

    /// Adds a vertex; `false` if its id is already taken.
    pub fn add_vertex(&mut self, value: T) -> bool {
        let id = value.id().to_string();
        if self.vertices.contains_key(&id) {
            return false;
        }
        self.vertices.insert(id, Vertex::new(value));
        true
    }

    /// Adds every vertex in order; `true` only if all succeeded.
    pub fn add_all_vertices(&mut self, values: impl IntoIterator<Item = T>) -> bool {
        let mut ok = true;
        for value in values {
            ok &= self.add_vertex(value);
        }
        ok
    }

    /// Removes a vertex and every edge incident to it; `false` if
    /// the id is unknown.
    pub fn remove_vertex(&mut self, id: &str) -> bool {
        let Some(removed) = self.vertices.remove(id) else {
            return false;
        };
        let mut dropped = removed.edges.len();
        let kind = self.kind;
        for vertex in self.vertices.values_mut() {
            let before = vertex.edges.len();
            vertex.edges.retain(|edge| edge.to != id);
            // Mirrored entries of an undirected edge were already
            // counted once through the removed vertex's own list.
            if kind == GraphKind::Directed {
                dropped += before - vertex.edges.len();
            }
        }
        self.edge_count -= dropped;
        true
    }

    /// Adds an edge; `false` if either endpoint is missing. Parallel
    /// edges are permitted. Undirected graphs mirror the adjacency
    /// entry in both directions but count the edge once.
    pub fn add_edge(&mut self, from: &str, to: &str, weight: f64) -> bool {
        if !self.vertices.contains_key(to) {
            return false;
        }
        let Some(vertex) = self.vertices.get_mut(from) else {
            return false;
        };
        vertex.edges.push(Edge {
            to: to.to_string(),
            weight,
        });
        if self.kind == GraphKind::Undirected && from != to {
            if let Some(other) = self.vertices.get_mut(to) {
                other.edges.push(Edge {
                    to: from.to_string(),
                    weight,
                });
            }
        }
        self.edge_count += 1;
        true
    }

    /// Removes every parallel copy of the edge; `false` if none
    /// existed. Undirected graphs drop the mirror entry as well.
    pub fn remove_edge(&mut self, from: &str, to: &str) -> bool {
        let Some(vertex) = self.vertices.get_mut(from) else {
            return false;
        };
        let before = vertex.edges.len();
        vertex.edges.retain(|edge| edge.to != to);
        let removed = before - vertex.edges.len();
        if removed == 0 {
            return false;
        }
        if self.kind == GraphKind::Undirected && from != to {
            if let Some(other) = self.vertices.get_mut(to) {
                other.edges.retain(|edge| edge.to != from);
            }
        }
        self.edge_count -= removed;
        true
    }

    /// Resets to the empty state.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.edge_count = 0;
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Shortest known distance from the last Dijkstra source, if the
    /// vertex exists.
    pub fn distance(&self, id: &str) -> Option<f64> {
        self.vertices.get(id).map(|v| v.distance)
    }

    /// Predecessor id on the best known path, if any.
    pub fn previous(&self, id: &str) -> Option<&str> {
        self.vertices.get(id).and_then(|v| v.previous.as_deref())
    }

    fn reset_path(&mut self) {
        for vertex in self.vertices.values_mut() {
            vertex.distance = f64::INFINITY;
            vertex.previous = None;
        }
    }

    /// Single-source shortest paths.
    ///
    /// A vertex is re-enqueued on every improvement instead of
    /// decreasing its key in place, so the queue may transiently
    /// hold several entries per vertex. Entries snapshot the
    /// distance at enqueue time for ordering only; relaxation reads
    /// the vertex's current distance, so a stale entry can never
    /// relax anything further.
    pub fn dijkstra(&mut self, source: &str) -> Result<(), GraphError> {
        if !self.vertices.contains_key(source) {
            return Err(GraphError::UnknownVertex(source.to_string()));
        }
        self.reset_path();

        let mut pq = LinkedPriorityQueue::with_predicate(|a: &(String, f64), b: &(String, f64)| {
            if a.1 < b.1 {
                1
            } else if a.1 > b.1 {
                -1
            } else {
                0
            }
        });
        if let Some(vertex) = self.vertices.get_mut(source) {
            vertex.distance = 0.0;
        }
        pq.enqueue((source.to_string(), 0.0));

        while let Ok((id, _)) = pq.dequeue() {
            let Some(vertex) = self.vertices.get(&id) else {
                continue;
            };
            let from_distance = vertex.distance;
            let edges = vertex.edges.clone();
            for edge in edges {
                let Some(dest) = self.vertices.get_mut(&edge.to) else {
                    continue;
                };
                let candidate = edge.weight + from_distance;
                if candidate < dest.distance {
                    dest.distance = candidate;
                    dest.previous = Some(id.clone());
                    pq.enqueue((edge.to.clone(), candidate));
                }
            }
        }
        Ok(())
    }

    /// Path from the last Dijkstra source to `target`, source first,
    /// as `(value, cumulative distance)` pairs.
    pub fn shortest_path(&self, target: &str) -> Result<Vec<(T, f64)>, GraphError>
    where
        T: Clone,
    {
        let mut curr = self
            .vertices
            .get(target)
            .ok_or_else(|| GraphError::UnknownVertex(target.to_string()))?;
        if curr.previous.is_none() && curr.distance != 0.0 {
            return Err(GraphError::Unreachable(target.to_string()));
        }

        let mut path = Vec::new();
        loop {
            path.push((curr.value.clone(), curr.distance));
            match &curr.previous {
                Some(prev) => {
                    curr = self
                        .vertices
                        .get(prev)
                        .ok_or_else(|| GraphError::UnknownVertex(prev.clone()))?;
                }
                None => break,
            }
        }
        path.reverse();
        Ok(path)
    }

    /// Depth-first traversal from `source`, neighbour order given by
    /// edge insertion order.
    pub fn dfs(&self, source: &str) -> Result<Vec<T>, GraphError>
    where
        T: Clone,
    {
        if !self.vertices.contains_key(source) {
            return Err(GraphError::UnknownVertex(source.to_string()));
        }
        let mut visited = HashSet::new();
        let mut out = Vec::new();
        self.dfs_inner(source, &mut visited, &mut out);
        Ok(out)
    }

    fn dfs_inner(&self, id: &str, visited: &mut HashSet<String>, out: &mut Vec<T>)
    where
        T: Clone,
    {
        let Some(vertex) = self.vertices.get(id) else {
            return;
        };
        visited.insert(id.to_string());
        out.push(vertex.value.clone());
        for edge in &vertex.edges {
            if !visited.contains(&edge.to) {
                self.dfs_inner(&edge.to, visited, out);
            }
        }
    }

    /// Breadth-first traversal from `source`.
    pub fn bfs(&self, source: &str) -> Result<Vec<T>, GraphError>
    where
        T: Clone,
    {
        let start = self
            .vertices
            .get(source)
            .ok_or_else(|| GraphError::UnknownVertex(source.to_string()))?;
        let mut visited = HashSet::new();
        visited.insert(source.to_string());
        let mut out = vec![start.value.clone()];
        let mut queue = VecDeque::new();
        queue.push_back(source.to_string());

        while let Some(id) = queue.pop_front() {
            let Some(vertex) = self.vertices.get(&id) else {
                continue;
            };
            for edge in &vertex.edges {
                if !visited.contains(&edge.to) {
                    if let Some(next) = self.vertices.get(&edge.to) {
                        visited.insert(edge.to.clone());
                        out.push(next.value.clone());
                        queue.push_back(edge.to.clone());
                    }
                }
            }
        }
        Ok(out)
    }
}
