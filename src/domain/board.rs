use crate::domain::card::{Card, JobId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Numeric identifier of a board column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoardId(u32);

impl BoardId {
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for BoardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Configuration for a kanban board column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub id: BoardId,
    pub title: String,
}

impl Column {
    pub fn new(id: u32, title: impl Into<String>) -> Self {
        Self {
            id: BoardId::new(id),
            title: title.into(),
        }
    }
}

/// The fixed set of columns a dashboard starts with
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardLayout {
    pub columns: Vec<Column>,
}

impl Default for BoardLayout {
    fn default() -> Self {
        Self {
            columns: vec![
                Column::new(1, "Pending"),
                Column::new(2, "Assigned"),
                Column::new(3, "In Transit"),
                Column::new(4, "Completed"),
            ],
        }
    }
}

impl BoardLayout {
    /// Creates one empty board per column
    pub fn build(&self) -> Vec<Board> {
        self.columns
            .iter()
            .map(|col| Board::new(col.id, col.title.clone()))
            .collect()
    }
}

/// A status column and the job cards it holds, in insertion order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub id: BoardId,
    pub title: String,
    pub cards: Vec<Card>,
}

impl Board {
    pub fn new(id: BoardId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            cards: Vec::new(),
        }
    }

    pub fn find_card(&self, job_id: &JobId) -> Option<&Card> {
        self.cards.iter().find(|card| &card.job_id == job_id)
    }

    pub fn contains(&self, job_id: &JobId) -> bool {
        self.find_card(job_id).is_some()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Returns the id of the first board holding the card
pub fn find_card_location(boards: &[Board], job_id: &JobId) -> Option<BoardId> {
    boards
        .iter()
        .find(|board| board.contains(job_id))
        .map(|board| board.id)
}
