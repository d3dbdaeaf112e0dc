//! Search tree nodes and the arena that owns them.

use crate::board::Board;
use crate::moves::Move;

/// Index of a node in its search's [`NodeArena`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// An immutable node in the search tree.
///
/// The parent link is an arena index, so nodes never own each other and the
/// tree cannot form cycles: a parent is always allocated before its children.
#[derive(Clone, Copy, Debug)]
pub struct Node {
    pub board: Board,
    /// `None` for the root.
    pub parent: Option<NodeId>,
    /// The move that produced this node from its parent.
    pub mv: Option<Move>,
    /// Cost of the path from the root (one per move).
    pub path_cost: u32,
    pub depth: u32,
}

impl Node {
    pub fn root(board: Board) -> Self {
        Self {
            board,
            parent: None,
            mv: None,
            path_cost: 0,
            depth: 0,
        }
    }

    /// A child reached from `parent` (stored at `parent_id`) by one move.
    pub fn child(parent: &Node, parent_id: NodeId, board: Board, mv: Move) -> Self {
        Self {
            board,
            parent: Some(parent_id),
            mv: Some(mv),
            path_cost: parent.path_cost + 1,
            depth: parent.depth + 1,
        }
    }
}

/// Append-only storage for every node generated during one search.
#[derive(Debug, Default)]
pub struct NodeArena {
    nodes: Vec<Node>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a node and returns its id.
    pub fn alloc(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Moves from the root to `id`, found by walking parent links.
    pub fn path_to(&self, id: NodeId) -> Vec<Move> {
        let mut moves = Vec::with_capacity(self.get(id).depth as usize);
        let mut current = Some(id);
        while let Some(node_id) = current {
            let node = self.get(node_id);
            if let Some(mv) = node.mv {
                moves.push(mv);
            }
            current = node.parent;
        }
        moves.reverse();
        moves
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_child_increments_cost_and_depth() {
        let board = Board::from_grid([[1, 2, 3], [4, 5, 6], [0, 7, 8]]);
        let root = Node::root(board);
        let next = board.apply(Move::Right).unwrap();
        let child = Node::child(&root, NodeId(0), next, Move::Right);

        assert_eq!(child.path_cost, 1);
        assert_eq!(child.depth, 1);
        assert_eq!(child.parent, Some(NodeId(0)));
        assert_eq!(child.mv, Some(Move::Right));
    }

    #[test]
    fn test_path_reconstruction_walks_parents() {
        let start = Board::from_grid([[1, 2, 3], [4, 5, 6], [0, 7, 8]]);
        let mut arena = NodeArena::new();
        let root_id = arena.alloc(Node::root(start));

        let first_board = start.apply(Move::Right).unwrap();
        let first = Node::child(arena.get(root_id), root_id, first_board, Move::Right);
        let first_id = arena.alloc(first);

        // an unrelated sibling does not appear on the path
        let sibling_board = start.apply(Move::Up).unwrap();
        let sibling = Node::child(arena.get(root_id), root_id, sibling_board, Move::Up);
        arena.alloc(sibling);

        let second_board = first_board.apply(Move::Right).unwrap();
        let second = Node::child(arena.get(first_id), first_id, second_board, Move::Right);
        let second_id = arena.alloc(second);

        assert_eq!(arena.len(), 4);
        assert_eq!(arena.path_to(second_id), vec![Move::Right, Move::Right]);
        assert!(arena.path_to(root_id).is_empty());
    }
}
