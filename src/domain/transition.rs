//! Drag-and-drop column transitions.
//!
//! A card's lifecycle state is its board membership: there is one state per
//! board, any board may move to any other, and no state is terminal.

use crate::domain::{
    board::{Board, BoardId},
    card::Card,
};

/// A resolved request to move a card between boards
#[derive(Debug, Clone, PartialEq)]
pub struct MoveRequest {
    pub card: Card,
    pub source_board_id: BoardId,
    pub target_board_id: BoardId,
    pub new_status: String,
}

/// Tracks the card currently being dragged and the board it came from
#[derive(Debug, Default)]
pub struct DragSession {
    dragged: Option<(Card, BoardId)>,
}

impl DragSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, card: Card, source_board_id: BoardId) {
        self.dragged = Some((card, source_board_id));
    }

    pub fn cancel(&mut self) {
        self.dragged = None;
    }

    pub fn is_active(&self) -> bool {
        self.dragged.is_some()
    }

    pub fn source_board_id(&self) -> Option<BoardId> {
        self.dragged.as_ref().map(|(_, id)| *id)
    }

    /// Ends the drag on a target board.
    ///
    /// Returns `None` when nothing was being dragged, the target is unknown, or
    /// the card was dropped back on its own board. A drop on an unknown board
    /// keeps the drag in progress. The new status is always the target board's
    /// title.
    pub fn resolve_drop(
        &mut self,
        boards: &[Board],
        target_board_id: BoardId,
    ) -> Option<MoveRequest> {
        self.dragged.as_ref()?;
        let target = boards.iter().find(|board| board.id == target_board_id)?;
        let (card, source_board_id) = self.dragged.take()?;

        if source_board_id == target_board_id {
            return None;
        }

        Some(MoveRequest {
            card,
            source_board_id,
            target_board_id,
            new_status: target.title.clone(),
        })
    }
}
