use crate::{
    config::StoreConfig,
    domain::{Board, BoardId, Card, JobId},
    error::{DispatchError, Result},
    storage::BoardStore,
};
use async_trait::async_trait;
use std::time::Duration;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info, warn};

/// In-process record store with simulated network latency
pub struct InMemoryStore {
    boards: RwLock<Vec<Board>>,
    config: StoreConfig,
    pending_failure: Mutex<Option<String>>,
}

impl InMemoryStore {
    /// Creates a store over the given initial boards
    pub fn new(boards: Vec<Board>, config: StoreConfig) -> Self {
        Self {
            boards: RwLock::new(boards),
            config,
            pending_failure: Mutex::new(None),
        }
    }

    /// Makes the next operation fail with `TransientFailure` without touching
    /// any data
    pub async fn inject_failure(&self, message: impl Into<String>) {
        *self.pending_failure.lock().await = Some(message.into());
    }

    async fn simulate_round_trip(&self, latency: Duration) -> Result<()> {
        if !latency.is_zero() {
            tokio::time::sleep(latency).await;
        }

        if let Some(message) = self.pending_failure.lock().await.take() {
            return Err(DispatchError::TransientFailure(message));
        }

        Ok(())
    }
}

#[async_trait]
impl BoardStore for InMemoryStore {
    async fn list_boards(&self) -> Result<Vec<Board>> {
        self.simulate_round_trip(self.config.list_latency()).await?;

        let boards = self.boards.read().await;
        debug!(boards = boards.len(), "listed boards");
        Ok(boards.clone())
    }

    async fn create_card(&self, board_id: BoardId, mut card: Card) -> Result<Card> {
        self.simulate_round_trip(self.config.mutation_latency()).await?;

        let mut boards = self.boards.write().await;

        if boards.iter().any(|b| b.contains(&card.job_id)) {
            return Err(DispatchError::DuplicateCard(card.job_id.to_string()));
        }

        let board = boards
            .iter_mut()
            .find(|b| b.id == board_id)
            .ok_or(DispatchError::BoardNotFound(board_id))?;

        card.status = board.title.clone();
        card.touch();
        board.cards.push(card.clone());

        info!(job_id = %card.job_id, board_id = %board_id, "created card");
        Ok(card)
    }

    async fn update_card(&self, mut card: Card) -> Result<Card> {
        self.simulate_round_trip(self.config.mutation_latency()).await?;

        let mut boards = self.boards.write().await;

        for board in boards.iter_mut() {
            if let Some(slot) = board.cards.iter_mut().find(|c| c.job_id == card.job_id) {
                card.status = board.title.clone();
                card.touch();
                *slot = card.clone();

                info!(job_id = %card.job_id, board_id = %board.id, "updated card");
                return Ok(card);
            }
        }

        Err(DispatchError::CardNotFound(card.job_id.to_string()))
    }

    async fn delete_card(&self, board_id: BoardId, job_id: &JobId) -> Result<()> {
        self.simulate_round_trip(self.config.mutation_latency()).await?;

        let mut boards = self.boards.write().await;
        let board = boards
            .iter_mut()
            .find(|b| b.id == board_id)
            .ok_or(DispatchError::BoardNotFound(board_id))?;

        let before = board.cards.len();
        board.cards.retain(|c| &c.job_id != job_id);

        info!(
            job_id = %job_id,
            board_id = %board_id,
            removed = before - board.cards.len(),
            "deleted card"
        );
        Ok(())
    }

    async fn move_card(
        &self,
        mut card: Card,
        target_board_id: BoardId,
        new_status: &str,
    ) -> Result<()> {
        self.simulate_round_trip(self.config.mutation_latency()).await?;

        let mut boards = self.boards.write().await;

        let target_index = boards
            .iter()
            .position(|b| b.id == target_board_id)
            .ok_or(DispatchError::BoardNotFound(target_board_id))?;

        let mut source_board_id = None;
        for board in boards.iter_mut() {
            if let Some(pos) = board.cards.iter().position(|c| c.job_id == card.job_id) {
                board.cards.remove(pos);
                source_board_id = Some(board.id);
                break;
            }
        }

        // A card missing from every board is still appended to the target.
        if source_board_id.is_none() {
            warn!(
                job_id = %card.job_id,
                target_board_id = %target_board_id,
                "moved card was not on any board; inserting into target"
            );
        }

        let target = &mut boards[target_index];
        if new_status != target.title {
            warn!(
                job_id = %card.job_id,
                requested = new_status,
                title = %target.title,
                "move status does not match target board; using board title"
            );
        }

        card.status = target.title.clone();
        card.touch();

        info!(
            job_id = %card.job_id,
            from = ?source_board_id.map(|id| id.get()),
            to = %target_board_id,
            status = %card.status,
            "moved card"
        );
        target.cards.push(card);
        Ok(())
    }
}
