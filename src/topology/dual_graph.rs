use std::collections::hash_map::Entry;
use std::collections::HashMap;

use slotmap::SlotMap;

use crate::error::TopologyError;

slotmap::new_key_type! {
    /// Unique identifier for an adjacency edge in a [`DualGraph`].
    pub struct AdjacencyId;
}

/// Two triangles sharing a triangle edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdjacencyEdge {
    /// The triangle whose registration completed the shared edge.
    pub a: usize,
    /// The triangle that registered the reverse direction first.
    pub b: usize,
    /// Whether a traversal has already consumed this edge.
    pub used: bool,
}

impl AdjacencyEdge {
    /// Returns the triangle on the other side of this edge from `triangle`.
    #[must_use]
    pub fn other(&self, triangle: usize) -> usize {
        if self.a == triangle {
            self.b
        } else {
            self.a
        }
    }
}

/// Adjacency graph over the triangles of a triangulation.
///
/// Nodes are triangle indices `0..triangle_count()`. Two triangles are joined
/// by one [`AdjacencyEdge`] when one registers the directed vertex pair
/// `(p, q)` and the other registers `(q, p)`.
#[derive(Debug, Default)]
pub struct DualGraph {
    edges: SlotMap<AdjacencyId, AdjacencyEdge>,
    incidents: Vec<Vec<AdjacencyId>>,
}

impl DualGraph {
    /// Builds the dual graph of `triangles`, given as point index triples with
    /// consistent winding.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::DuplicateDirectedEdge`] if two triangles
    /// register the same directed vertex pair, and
    /// [`TopologyError::RepeatedVertex`] if a triangle names a point twice.
    pub fn build(triangles: &[[usize; 3]]) -> Result<Self, TopologyError> {
        let mut graph = Self {
            edges: SlotMap::with_capacity_and_key(triangles.len() * 3 / 2),
            incidents: vec![Vec::new(); triangles.len()],
        };
        let mut directed: HashMap<(usize, usize), usize> = HashMap::new();

        for (i, &[v0, v1, v2]) in triangles.iter().enumerate() {
            if v0 == v1 || v1 == v2 || v2 == v0 {
                return Err(TopologyError::RepeatedVertex { triangle: i });
            }
            for (p, q) in [(v0, v1), (v1, v2), (v2, v0)] {
                graph.register(&mut directed, p, q, i)?;
            }
        }

        Ok(graph)
    }

    fn register(
        &mut self,
        directed: &mut HashMap<(usize, usize), usize>,
        p: usize,
        q: usize,
        triangle: usize,
    ) -> Result<(), TopologyError> {
        match directed.entry((p, q)) {
            Entry::Occupied(first) => {
                return Err(TopologyError::DuplicateDirectedEdge {
                    from: p,
                    to: q,
                    first: *first.get(),
                    second: triangle,
                });
            }
            Entry::Vacant(slot) => {
                slot.insert(triangle);
            }
        }

        if let Some(&other) = directed.get(&(q, p)) {
            let id = self.edges.insert(AdjacencyEdge {
                a: triangle,
                b: other,
                used: false,
            });
            self.incidents[triangle].push(id);
            self.incidents[other].push(id);
        }
        Ok(())
    }

    /// Returns the number of triangle nodes.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.incidents.len()
    }

    /// Returns the number of adjacency edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the adjacency edges touching `triangle`, in registration order.
    #[must_use]
    pub fn incidents(&self, triangle: usize) -> &[AdjacencyId] {
        match self.incidents.get(triangle) {
            Some(incidents) => incidents,
            None => &[],
        }
    }

    /// Returns the number of neighbors of `triangle`.
    #[must_use]
    pub fn degree(&self, triangle: usize) -> usize {
        self.incidents(triangle).len()
    }

    /// Returns the adjacency edge with the given ID.
    #[must_use]
    pub fn edge(&self, id: AdjacencyId) -> Option<&AdjacencyEdge> {
        self.edges.get(id)
    }

    /// Iterates over all adjacency edges.
    pub fn edges(&self) -> impl Iterator<Item = (AdjacencyId, &AdjacencyEdge)> {
        self.edges.iter()
    }

    /// Returns the neighbors of `triangle` in adjacency order.
    pub fn neighbors(&self, triangle: usize) -> impl Iterator<Item = usize> + '_ {
        self.incidents(triangle)
            .iter()
            .filter_map(move |&id| self.edges.get(id).map(|e| e.other(triangle)))
    }

    /// Returns `true` if `a` and `b` share an adjacency edge.
    #[must_use]
    pub fn are_adjacent(&self, a: usize, b: usize) -> bool {
        self.neighbors(a).any(|n| n == b)
    }

    /// Returns the lowest-indexed triangle with exactly one neighbor.
    #[must_use]
    pub fn first_leaf(&self) -> Option<usize> {
        self.incidents.iter().position(|inc| inc.len() == 1)
    }

    /// Marks every unused edge of `triangle` as used and returns the triangles
    /// on their far side, in adjacency order.
    pub fn take_unused(&mut self, triangle: usize) -> Vec<usize> {
        let Some(incidents) = self.incidents.get(triangle) else {
            return Vec::new();
        };
        let mut far = Vec::new();
        for &id in incidents {
            if let Some(edge) = self.edges.get_mut(id) {
                if !edge.used {
                    edge.used = true;
                    far.push(edge.other(triangle));
                }
            }
        }
        far
    }

    /// Returns `true` once every adjacency edge has been consumed.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.edges.values().all(|e| e.used)
    }

    /// Clears the `used` flag on every edge.
    pub fn reset(&mut self) {
        for edge in self.edges.values_mut() {
            edge.used = false;
        }
    }
}
