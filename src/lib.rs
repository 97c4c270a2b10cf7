//! # Dispatch Board Core
//!
//! Domain model and state handling for a kanban dashboard of delivery jobs.
//!
//! Jobs are cards on four status boards (Pending, Assigned, In Transit,
//! Completed). The crate provides the card model, an in-memory record store
//! with simulated latency, and a state-sync mediator that reloads the full
//! snapshot after every mutation. Rendering is left to the front end.

pub mod catalog;
pub mod config;
pub mod domain;
pub mod error;
pub mod storage;
pub mod sync;
pub mod telemetry;

// Re-export commonly used types
pub use catalog::{Catalog, PricingTier, SuburbanArea};
pub use config::{DashboardConfig, StoreConfig};
pub use domain::{
    board::{Board, BoardId, BoardLayout, Column},
    card::{Card, CardDraft, CardEdit, JobId, Priority},
    transition::{DragSession, MoveRequest},
};
pub use error::{DispatchError, Result};
pub use storage::{BoardStore, InMemoryStore};
pub use sync::BoardSync;
