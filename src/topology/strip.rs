use super::DualGraph;

/// A path of pairwise-adjacent triangles produced by [`DecomposeStrips`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Strip {
    /// Triangle indices in path order.
    pub triangles: Vec<usize>,
    /// For a side branch, the triangle it branches off. `None` for trunks.
    pub junction: Option<usize>,
}

impl Strip {
    /// Returns the number of triangles in the strip.
    #[must_use]
    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    /// Returns `true` if the strip holds no triangles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }
}

/// Decomposes a [`DualGraph`] into vertex-disjoint strips.
///
/// Traversal starts at the lowest-indexed leaf (a triangle with one
/// neighbor), or triangle 0 when there is none, and descends depth-first.
/// At every branching triangle the longest chain below it continues the
/// current strip; the other chains become side branches whose `junction`
/// names the branching triangle. Ties go to the chain first reached in
/// adjacency order. Components the first traversal cannot reach are started
/// from their own lowest-indexed leaf.
///
/// A triangle marks all of its unused edges as used on entry, so every
/// reachable edge is consumed exactly once. With visited tracking disabled,
/// a cyclic dual graph can enter a triangle twice and the resulting strips
/// overlap.
#[derive(Debug, Clone, Copy)]
pub struct DecomposeStrips {
    track_visited: bool,
}

impl Default for DecomposeStrips {
    fn default() -> Self {
        Self::new()
    }
}

/// A triangle on the traversal stack.
struct Frame {
    triangle: usize,
    children: Vec<usize>,
    next: usize,
    /// Completed chains below this triangle, each stored leaf first.
    chains: Vec<Vec<usize>>,
}

impl Frame {
    fn enter(graph: &mut DualGraph, triangle: usize, entered: &mut [bool]) -> Self {
        entered[triangle] = true;
        Self {
            triangle,
            children: graph.take_unused(triangle),
            next: 0,
            chains: Vec::new(),
        }
    }

    fn next_child(&mut self, entered: &[bool], track_visited: bool) -> Option<usize> {
        while let Some(&child) = self.children.get(self.next) {
            self.next += 1;
            if !(track_visited && entered[child]) {
                return Some(child);
            }
        }
        None
    }

    /// Extends the longest chain with this triangle and emits the rest as
    /// side branches. Returns the extended chain, leaf first.
    fn finish(self, branches: &mut Vec<Strip>) -> Vec<usize> {
        let mut best: Option<usize> = None;
        for (i, chain) in self.chains.iter().enumerate() {
            match best {
                Some(b) if chain.len() <= self.chains[b].len() => {}
                _ => best = Some(i),
            }
        }

        let mut trunk = Vec::new();
        for (i, mut chain) in self.chains.into_iter().enumerate() {
            if Some(i) == best {
                trunk = chain;
            } else {
                chain.reverse();
                branches.push(Strip {
                    triangles: chain,
                    junction: Some(self.triangle),
                });
            }
        }
        trunk.push(self.triangle);
        trunk
    }
}

impl DecomposeStrips {
    /// Creates a new `DecomposeStrips` with visited tracking enabled.
    #[must_use]
    pub fn new() -> Self {
        Self {
            track_visited: true,
        }
    }

    /// Enables or disables visited-triangle tracking.
    #[must_use]
    pub fn with_visited_tracking(mut self, track_visited: bool) -> Self {
        self.track_visited = track_visited;
        self
    }

    /// Executes the decomposition, consuming the graph's unused edges.
    ///
    /// Each traversal's trunk precedes the side branches it produced.
    pub fn execute(&self, graph: &mut DualGraph) -> Vec<Strip> {
        let count = graph.triangle_count();
        let mut entered = vec![false; count];
        let mut strips = Vec::new();

        let mut root = graph.first_leaf().or((count > 0).then_some(0));
        while let Some(start) = root {
            let trunk_at = strips.len();
            let trunk = self.traverse(graph, start, &mut entered, &mut strips);
            strips.insert(trunk_at, trunk);

            root = (0..count)
                .find(|&t| !entered[t] && graph.degree(t) == 1)
                .or_else(|| entered.iter().position(|&e| !e));
        }

        tracing::debug!(
            triangles = count,
            strips = strips.len(),
            "decomposed dual graph"
        );
        strips
    }

    fn traverse(
        &self,
        graph: &mut DualGraph,
        root: usize,
        entered: &mut [bool],
        branches: &mut Vec<Strip>,
    ) -> Strip {
        let mut stack = vec![Frame::enter(graph, root, entered)];

        loop {
            let Some(frame) = stack.last_mut() else {
                break;
            };
            if let Some(child) = frame.next_child(entered, self.track_visited) {
                let frame = Frame::enter(graph, child, entered);
                stack.push(frame);
                continue;
            }

            let Some(done) = stack.pop() else {
                break;
            };
            let mut chain = done.finish(branches);
            match stack.last_mut() {
                Some(parent) => parent.chains.push(chain),
                None => {
                    chain.reverse();
                    return Strip {
                        triangles: chain,
                        junction: None,
                    };
                }
            }
        }

        Strip {
            triangles: vec![root],
            junction: None,
        }
    }
}
