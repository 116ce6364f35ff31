//! Search-node arena and solution paths.

use std::fmt;

use super::grid::{Grid, Move};

/// Index of a node in its [`NodeArena`].
pub type NodeId = usize;

/// One explored state in a puzzle search tree.
///
/// Nodes are immutable once inserted and reference their parent by arena
/// index, so the tree is parent-linked only and dropped wholesale with
/// its arena.
#[derive(Debug, Clone, Copy)]
pub struct SearchNode {
    /// Board at this node.
    pub grid: Grid,
    /// Parent arena index and the move that led here; `None` for the root.
    pub parent: Option<(NodeId, Move)>,
    /// Moves from the root (the g-cost).
    pub depth: u32,
    /// Heuristic estimate to the goal, fixed at construction.
    pub heuristic: u32,
}

impl SearchNode {
    /// Best-first priority: `depth + heuristic` (the A* f-value).
    pub fn priority(&self) -> u32 {
        self.depth + self.heuristic
    }
}

/// Flat owner of every node a search allocates.
///
/// An arena lives inside the `run` call that created it; no search state
/// survives the call.
#[derive(Debug, Default)]
pub struct NodeArena {
    nodes: Vec<SearchNode>,
}

impl NodeArena {
    pub fn new() -> Self {
        NodeArena { nodes: Vec::new() }
    }

    /// Inserts the root node at depth 0.
    pub fn insert_root(&mut self, grid: Grid, heuristic: u32) -> NodeId {
        self.insert(SearchNode {
            grid,
            parent: None,
            depth: 0,
            heuristic,
        })
    }

    /// Inserts a child one move below `parent`.
    pub fn insert_child(&mut self, parent: NodeId, grid: Grid, step: Move, heuristic: u32) -> NodeId {
        let depth = self.nodes[parent].depth + 1;
        self.insert(SearchNode {
            grid,
            parent: Some((parent, step)),
            depth,
            heuristic,
        })
    }

    fn insert(&mut self, node: SearchNode) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(node);
        id
    }

    pub fn get(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id]
    }

    /// Number of nodes allocated so far.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Reconstructs the root-to-`id` path by walking parent links.
    pub fn path_to(&self, id: NodeId) -> SolutionPath {
        let mut steps = Vec::with_capacity(self.nodes[id].depth as usize);
        let mut cursor = id;
        while let Some((parent, step)) = self.nodes[cursor].parent {
            steps.push((step, self.nodes[cursor].grid));
            cursor = parent;
        }
        steps.reverse();
        SolutionPath {
            start: self.nodes[cursor].grid,
            steps,
        }
    }
}

/// A root-to-terminal move sequence reconstructed from an arena.
///
/// Holds the start board plus each `(move, resulting board)` step in
/// order. Built only by [`NodeArena::path_to`], so consecutive boards
/// always differ by exactly the recorded move.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SolutionPath {
    start: Grid,
    steps: Vec<(Move, Grid)>,
}

impl SolutionPath {
    /// Board the search started from.
    pub fn start(&self) -> &Grid {
        &self.start
    }

    /// The `(move, resulting board)` steps from start to terminal.
    pub fn steps(&self) -> &[(Move, Grid)] {
        &self.steps
    }

    /// Moves only, in order.
    pub fn moves(&self) -> Vec<Move> {
        self.steps.iter().map(|&(mv, _)| mv).collect()
    }

    /// Number of moves.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// True when the start already satisfied the goal.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Final board (the start when no moves were needed).
    pub fn terminal(&self) -> &Grid {
        self.steps.last().map(|(_, grid)| grid).unwrap_or(&self.start)
    }
}

impl fmt::Display for SolutionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "step 0:")?;
        write!(f, "{}", self.start)?;
        for (i, (mv, grid)) in self.steps.iter().enumerate() {
            writeln!(f)?;
            writeln!(f, "step {} ({mv}):", i + 1)?;
            write!(f, "{grid}")?;
        }
        Ok(())
    }
}
