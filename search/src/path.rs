//! Path reconstruction: parent links from a goal node back to the root.

use crate::node::{ExpandedNodes, NodeId};

/// The flip sequence recovered from a solved search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathOutcome {
    /// The root was already the goal; no flips are needed.
    AlreadySorted,
    /// Flip depths in root-to-goal order. Never empty.
    Flips(Vec<usize>),
}

impl PathOutcome {
    /// Flip depths, empty for [`PathOutcome::AlreadySorted`].
    #[must_use]
    pub fn flips(&self) -> &[usize] {
        match self {
            Self::AlreadySorted => &[],
            Self::Flips(flips) => flips,
        }
    }
}

/// Node ids from the root to `goal`, inclusive.
#[must_use]
pub fn reconstruct_path(nodes: &ExpandedNodes, goal: NodeId) -> Vec<NodeId> {
    let mut path = Vec::new();
    let mut current = Some(goal);

    while let Some(id) = current {
        path.push(id);
        current = nodes.get(id).and_then(|n| n.parent);
    }

    path.reverse();
    path
}

/// The flips along the path to `goal`.
///
/// A single-node path means the root was the goal.
#[must_use]
pub fn flip_sequence(nodes: &ExpandedNodes, goal: NodeId) -> PathOutcome {
    let path = reconstruct_path(nodes, goal);
    if path.len() <= 1 {
        return PathOutcome::AlreadySorted;
    }
    let flips = path[1..]
        .iter()
        .filter_map(|&id| nodes.get(id).and_then(|n| n.flip_depth))
        .collect();
    PathOutcome::Flips(flips)
}
