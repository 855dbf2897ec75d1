//! A* search handle and expansion loop.
//!
//! ```text
//! Search::new(plates) → run() → result()
//! ```
//!
//! Each iteration pops the best node, closes its state, stops if it is the
//! goal, and otherwise offers every flip successor to the open set:
//! closed states are discarded, resident states go through
//! `replace_if_better`, and new states are inserted.

use std::collections::HashSet;
use std::time::Instant;

use pancake_kernel::PlateStack;
use serde::Serialize;
use tracing::{debug, info, trace};

use crate::error::SearchError;
use crate::node::{ExpandedNodes, NodeId, SearchNode};
use crate::open_set::{OpenSet, Replacement};
use crate::path::{flip_sequence, PathOutcome};
use crate::policy::SearchPolicy;

/// Why a run ended before reaching a terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// `max_expansions` was reached.
    ExpansionBudget,
    /// `time_limit` elapsed.
    TimeLimit,
}

/// Search state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    /// Created, or mid-run.
    Running,
    /// The goal was popped; holds its id in the expanded arena.
    Succeeded(NodeId),
    /// The open set emptied without reaching the goal.
    Failed,
    /// A policy budget ended the run.
    Stopped(StopReason),
}

impl SearchStatus {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Running)
    }
}

/// What the caller gets back from a finished search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResult {
    /// The stack was sorted by `outcome`, at total flip depth `total_cost`.
    Solved {
        outcome: PathOutcome,
        total_cost: u64,
    },
    /// Every reachable state was expanded without finding the goal.
    NoSolution,
    /// The search was cut short by its policy.
    Stopped { reason: StopReason },
}

impl SearchResult {
    #[must_use]
    pub fn is_solved(&self) -> bool {
        matches!(self, Self::Solved { .. })
    }

    /// The flip sequence, if solved. Empty when the stack was already sorted.
    #[must_use]
    pub fn flips(&self) -> Option<&[usize]> {
        match self {
            Self::Solved { outcome, .. } => Some(outcome.flips()),
            _ => None,
        }
    }
}

/// Counters collected during a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Non-goal nodes whose successors were generated.
    pub expansions: u64,
    /// Successor candidates built.
    pub generated: u64,
    /// Candidates dropped because their state was already closed.
    pub closed_discards: u64,
    /// Candidates added to the open set as new states.
    pub inserted: u64,
    /// Candidates that replaced a costlier resident node.
    pub replacements: u64,
    /// Candidates dropped because the resident node was no worse.
    pub replacements_rejected: u64,
    /// Largest open-set size seen.
    pub open_high_water: u64,
}

/// A single A* search over one root stack.
#[derive(Debug)]
pub struct Search {
    root: PlateStack,
    policy: SearchPolicy,
    open: OpenSet,
    closed: HashSet<Box<[u32]>>,
    expanded: ExpandedNodes,
    next_step: u64,
    status: SearchStatus,
    stats: SearchStats,
    started: Option<Instant>,
}

impl Search {
    /// Validate `plates` and seed the open set with the root node.
    ///
    /// # Errors
    ///
    /// - [`SearchError::InvalidStack`] if `plates` is not a valid stack.
    /// - [`SearchError::InvalidPolicy`] if `policy` fails validation.
    pub fn new(plates: Vec<u32>, policy: SearchPolicy) -> Result<Self, SearchError> {
        let stack = PlateStack::new(plates)?;
        Self::from_stack(stack, policy)
    }

    /// Seed a search from an already-validated stack.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if `policy` fails validation.
    pub fn from_stack(stack: PlateStack, policy: SearchPolicy) -> Result<Self, SearchError> {
        policy.validate()?;

        let mut open = OpenSet::new();
        open.insert(SearchNode::root(stack.clone(), 0))?;

        Ok(Self {
            root: stack,
            policy,
            open,
            closed: HashSet::new(),
            expanded: ExpandedNodes::new(),
            next_step: 1,
            status: SearchStatus::Running,
            stats: SearchStats::default(),
            started: None,
        })
    }

    /// Run until the search reaches a terminal status.
    ///
    /// Calling `run` again after termination returns the same status without
    /// doing any work.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::OpenSet`] only on an open-set invariant
    /// violation, which indicates a bug rather than a property of the input.
    pub fn run(&mut self) -> Result<&SearchStatus, SearchError> {
        let started = *self.started.get_or_insert_with(Instant::now);
        debug!(root = %self.root, policy = ?self.policy, "search started");

        while !self.status.is_terminal() {
            if let Some(reason) = self.budget_exhausted(started) {
                self.status = SearchStatus::Stopped(reason);
                break;
            }
            self.step()?;
        }

        self.stats.open_high_water = self.open.high_water() as u64;
        info!(
            root = %self.root,
            status = ?self.status,
            expansions = self.stats.expansions,
            generated = self.stats.generated,
            replacements = self.stats.replacements,
            open_high_water = self.stats.open_high_water,
            "search finished"
        );
        Ok(&self.status)
    }

    /// Result of a terminal search; `None` while still running.
    #[must_use]
    pub fn result(&self) -> Option<SearchResult> {
        match self.status {
            SearchStatus::Running => None,
            SearchStatus::Succeeded(goal) => Some(SearchResult::Solved {
                outcome: flip_sequence(&self.expanded, goal),
                total_cost: self.expanded[goal].g_cost,
            }),
            SearchStatus::Failed => Some(SearchResult::NoSolution),
            SearchStatus::Stopped(reason) => Some(SearchResult::Stopped { reason }),
        }
    }

    #[must_use]
    pub fn status(&self) -> SearchStatus {
        self.status
    }

    #[must_use]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    #[must_use]
    pub fn root(&self) -> &PlateStack {
        &self.root
    }

    #[must_use]
    pub fn policy(&self) -> &SearchPolicy {
        &self.policy
    }

    /// Nodes expanded so far, including the goal once found.
    #[must_use]
    pub fn expanded(&self) -> &ExpandedNodes {
        &self.expanded
    }

    fn budget_exhausted(&self, started: Instant) -> Option<StopReason> {
        if self
            .policy
            .max_expansions
            .is_some_and(|cap| self.stats.expansions >= cap)
        {
            return Some(StopReason::ExpansionBudget);
        }
        if self
            .policy
            .time_limit
            .is_some_and(|limit| started.elapsed() >= limit)
        {
            return Some(StopReason::TimeLimit);
        }
        None
    }

    /// One iteration of the main loop.
    fn step(&mut self) -> Result<(), SearchError> {
        if self.open.is_empty() {
            self.status = SearchStatus::Failed;
            return Ok(());
        }

        let current = self.open.extract_best()?;
        self.closed.insert(current.stack.plates().into());

        let is_goal = current.is_goal();
        let current_id = self.expanded.push(current);
        if is_goal {
            self.status = SearchStatus::Succeeded(current_id);
            return Ok(());
        }

        let current = &self.expanded[current_id];
        trace!(
            stack = %current.stack,
            g_cost = current.g_cost,
            f_cost = current.f_cost(),
            open = self.open.len(),
            "expanding"
        );

        for depth in current.stack.flip_depths() {
            let step_index = self.next_step;
            self.next_step += 1;

            let Some(candidate) = current.successor(current_id, depth, step_index) else {
                continue;
            };
            self.stats.generated += 1;

            if self.closed.contains(candidate.stack.plates()) {
                self.stats.closed_discards += 1;
                continue;
            }

            if self.open.contains(candidate.stack.plates()) {
                match self.open.replace_if_better(candidate) {
                    Replacement::Replaced => self.stats.replacements += 1,
                    Replacement::Kept | Replacement::Absent => {
                        self.stats.replacements_rejected += 1;
                    }
                }
            } else {
                self.open.insert(candidate)?;
                self.stats.inserted += 1;
            }
        }

        self.stats.expansions += 1;
        Ok(())
    }
}

/// Build, run, and read out a search with no budget.
///
/// # Errors
///
/// Same as [`Search::new`] and [`Search::run`].
pub fn solve(plates: Vec<u32>) -> Result<SearchResult, SearchError> {
    let mut search = Search::new(plates, SearchPolicy::unlimited())?;
    search.run()?;
    // A finished run always has a result.
    Ok(search.result().unwrap_or(SearchResult::NoSolution))
}
