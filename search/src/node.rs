//! Search nodes, the expanded-node arena, and the frontier ordering key.

use std::ops::Index;

use pancake_kernel::PlateStack;

/// Index of an expanded node in [`ExpandedNodes`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    #[must_use]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// One search node: a stack plus the bookkeeping for the path that reached it.
///
/// Nodes are values. A successor is built from a clone of its parent's stack,
/// and the parent is referenced by [`NodeId`] only after the parent has been
/// expanded, so nothing a child points to is ever mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchNode {
    /// The stack at this node.
    pub stack: PlateStack,
    /// Expanded predecessor on the best-known path (`None` for the root).
    pub parent: Option<NodeId>,
    /// Sum of flip depths from the root.
    pub g_cost: u64,
    /// Gap heuristic of `stack`, cached at construction.
    pub h_cost: u32,
    /// The flip that produced this node from its parent (`None` for the root).
    pub flip_depth: Option<usize>,
    /// Creation counter, used only to break `f_cost` ties.
    pub step_index: u64,
}

impl SearchNode {
    /// The root node for `stack`.
    #[must_use]
    pub fn root(stack: PlateStack, step_index: u64) -> Self {
        let h_cost = stack.gap_heuristic();
        Self {
            stack,
            parent: None,
            g_cost: 0,
            h_cost,
            flip_depth: None,
            step_index,
        }
    }

    /// Build the successor reached by flipping `depth` plates.
    ///
    /// Returns `None` if `depth` is not a legal flip for this stack.
    #[must_use]
    pub fn successor(&self, parent: NodeId, depth: usize, step_index: u64) -> Option<Self> {
        let stack = self.stack.flipped(depth).ok()?;
        let h_cost = stack.gap_heuristic();
        Some(Self {
            stack,
            parent: Some(parent),
            g_cost: self.g_cost + depth as u64,
            h_cost,
            flip_depth: Some(depth),
            step_index,
        })
    }

    /// `f_cost = g_cost + h_cost`.
    #[must_use]
    pub fn f_cost(&self) -> u64 {
        self.g_cost + u64::from(self.h_cost)
    }

    #[must_use]
    pub fn is_goal(&self) -> bool {
        self.h_cost == 0
    }

    #[must_use]
    pub fn key(&self) -> FrontierKey {
        FrontierKey::from(self)
    }
}

/// The frontier ordering key: `(f_cost, step_index)`.
///
/// Lower `f_cost` first, then older `step_index`. Step indices are unique,
/// so this is a strict total order over live nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FrontierKey {
    pub f_cost: u64,
    pub step_index: u64,
}

impl From<&SearchNode> for FrontierKey {
    fn from(node: &SearchNode) -> Self {
        Self {
            f_cost: node.f_cost(),
            step_index: node.step_index,
        }
    }
}

/// Append-only arena of expanded nodes.
///
/// Only expanded nodes can be parents, so parent links always resolve here.
#[derive(Debug, Default)]
pub struct ExpandedNodes {
    nodes: Vec<SearchNode>,
}

impl ExpandedNodes {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Move `node` into the arena and return its id.
    pub fn push(&mut self, node: SearchNode) -> NodeId {
        let id = NodeId(u32::try_from(self.nodes.len()).unwrap_or(u32::MAX));
        self.nodes.push(node);
        id
    }

    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&SearchNode> {
        self.nodes.get(id.index())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl Index<NodeId> for ExpandedNodes {
    type Output = SearchNode;

    /// Ids are only minted by [`ExpandedNodes::push`], so indexing with one
    /// from the same arena cannot go out of bounds.
    fn index(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.index()]
    }
}
