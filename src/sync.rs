//! State-sync layer between a presentation front end and the record store.
//!
//! Every successful mutation is followed by a full reload, so callers only
//! ever observe the store's own snapshot. Failures are flattened into a single
//! human-readable message and the previous snapshot is kept. Patching the
//! snapshot locally or streaming diffs is out of scope.

use crate::{
    catalog::Catalog,
    domain::{Board, BoardId, Card, CardDraft, CardEdit, DragSession, DriverChange, JobId},
    error::DispatchError,
    storage::BoardStore,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

const LOAD_FAILED: &str = "Failed to load boards";
const ADD_FAILED: &str = "Failed to add card";
const UPDATE_FAILED: &str = "Failed to update card";
const DELETE_FAILED: &str = "Failed to delete card";
const MOVE_FAILED: &str = "Failed to move card";

// Upper bound on redraws when a generated job id is already on the board
const MAX_JOB_ID_DRAWS: usize = 1000;

pub struct BoardSync<S: BoardStore> {
    store: Arc<S>,
    catalog: Catalog,
    boards: Vec<Board>,
    is_loading: bool,
    error: Option<String>,
}

impl<S: BoardStore> BoardSync<S> {
    /// Creates the mediator and performs the initial load
    pub async fn connect(store: Arc<S>, catalog: Catalog) -> Self {
        let mut sync = Self {
            store,
            catalog,
            boards: Vec::new(),
            is_loading: true,
            error: None,
        };
        sync.reload().await;
        sync
    }

    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    pub fn board(&self, id: BoardId) -> Option<&Board> {
        self.boards.iter().find(|b| b.id == id)
    }

    /// True only while a reload is in flight.
    ///
    /// Every operation takes `&mut self` and settles the flag before it
    /// returns, so callers observe `false` between calls. Front ends that show
    /// a spinner should key it off the pending future instead.
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn find_card(&self, job_id: &JobId) -> Option<(BoardId, &Card)> {
        self.boards
            .iter()
            .find_map(|b| b.find_card(job_id).map(|card| (b.id, card)))
    }

    /// Replaces the snapshot with the store's current boards
    pub async fn reload(&mut self) -> bool {
        self.is_loading = true;

        let loaded = match self.store.list_boards().await {
            Ok(boards) => {
                debug!(boards = boards.len(), "snapshot refreshed");
                self.boards = boards;
                self.error = None;
                true
            }
            Err(err) => {
                self.fail(LOAD_FAILED, &err);
                false
            }
        };

        self.is_loading = false;
        loaded
    }

    pub async fn add_card(&mut self, board_id: BoardId, card: Card) -> bool {
        match self.store.create_card(board_id, card).await {
            Ok(_) => self.reload().await,
            Err(err) => {
                self.fail(ADD_FAILED, &err);
                false
            }
        }
    }

    pub async fn update_card(&mut self, card: Card) -> bool {
        match self.store.update_card(card).await {
            Ok(_) => self.reload().await,
            Err(err) => {
                self.fail(UPDATE_FAILED, &err);
                false
            }
        }
    }

    pub async fn delete_card(&mut self, board_id: BoardId, job_id: &JobId) -> bool {
        match self.store.delete_card(board_id, job_id).await {
            Ok(()) => self.reload().await,
            Err(err) => {
                self.fail(DELETE_FAILED, &err);
                false
            }
        }
    }

    pub async fn move_card(
        &mut self,
        card: Card,
        target_board_id: BoardId,
        new_status: &str,
    ) -> bool {
        match self.store.move_card(card, target_board_id, new_status).await {
            Ok(()) => self.reload().await,
            Err(err) => {
                self.fail(MOVE_FAILED, &err);
                false
            }
        }
    }

    /// Books a new job on a board from a filled-in draft
    pub async fn create_job(
        &mut self,
        board_id: BoardId,
        draft: CardDraft,
        created_by: &str,
    ) -> Option<JobId> {
        let mut card = Card::from_draft(draft, created_by);

        if let Err(err) = self.catalog.validate_card(&card) {
            self.fail(ADD_FAILED, &err);
            return None;
        }

        card.job_id = self.unused_job_id(card.job_id);

        let job_id = card.job_id.clone();
        self.add_card(board_id, card).await.then_some(job_id)
    }

    /// Applies a form edit to a card from the current snapshot and saves it
    pub async fn save_edit(&mut self, job_id: &JobId, edit: CardEdit) -> bool {
        let Some((_, current)) = self.find_card(job_id) else {
            self.fail(UPDATE_FAILED, &DispatchError::CardNotFound(job_id.to_string()));
            return false;
        };

        let mut card = current.clone();
        let change = DriverChange::classify(&card.driver_id, &edit.driver_id);
        card.apply_edit(edit);

        if let Err(err) = self.catalog.validate_card(&card) {
            self.fail(UPDATE_FAILED, &err);
            return false;
        }

        if change != DriverChange::Unchanged {
            info!(
                job_id = %job_id,
                change = %change,
                driver = %card.driver_id,
                assigned_count = card.driver_assigned_count,
                "driver changed"
            );
        }

        self.update_card(card).await
    }

    /// Completes a drag gesture over a target board.
    ///
    /// Dropping a card back on its own board, or with no drag in progress, does
    /// nothing and reports success.
    /// Dropping on a board missing from the snapshot fails and keeps the drag.
    pub async fn drop_card(&mut self, session: &mut DragSession, target_board_id: BoardId) -> bool {
        if session.is_active() && self.board(target_board_id).is_none() {
            self.fail(MOVE_FAILED, &DispatchError::BoardNotFound(target_board_id));
            return false;
        }

        match session.resolve_drop(&self.boards, target_board_id) {
            Some(request) => {
                self.move_card(request.card, request.target_board_id, &request.new_status)
                    .await
            }
            None => true,
        }
    }

    /// Redraws generated ids that collide with a card already in the snapshot
    fn unused_job_id(&self, candidate: JobId) -> JobId {
        let mut job_id = candidate;
        for _ in 0..MAX_JOB_ID_DRAWS {
            if self.find_card(&job_id).is_none() {
                break;
            }
            debug!(job_id = %job_id, "generated job id already in use, drawing another");
            job_id = JobId::generate();
        }
        job_id
    }

    fn fail(&mut self, message: &str, err: &DispatchError) {
        warn!(error = %err, "{}", message);
        self.error = Some(message.to_string());
    }
}
