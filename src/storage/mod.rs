use crate::{
    domain::{Board, BoardId, Card, JobId},
    error::Result,
};
use async_trait::async_trait;

pub mod memory_storage;

pub use memory_storage::InMemoryStore;

/// Record store holding the boards and their job cards
#[async_trait]
pub trait BoardStore: Send + Sync {
    /// Returns every board with its cards
    async fn list_boards(&self) -> Result<Vec<Board>>;

    /// Appends a card to a board, stamping the board title as its status
    async fn create_card(&self, board_id: BoardId, card: Card) -> Result<Card>;

    /// Replaces a card in place, wherever it lives
    async fn update_card(&self, card: Card) -> Result<Card>;

    /// Removes a card from a board. Unknown job ids are ignored.
    async fn delete_card(&self, board_id: BoardId, job_id: &JobId) -> Result<()>;

    /// Moves a card to the end of the target board
    async fn move_card(
        &self,
        card: Card,
        target_board_id: BoardId,
        new_status: &str,
    ) -> Result<()>;
}
