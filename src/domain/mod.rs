pub mod assignment;
pub mod board;
pub mod card;
pub mod seed;
pub mod transition;

pub use assignment::{next_assigned_count, DriverChange};
pub use board::{find_card_location, Board, BoardId, BoardLayout, Column};
pub use card::{Card, CardDraft, CardEdit, ChargingTo, InvoiceMode, JobId, JobSource, Priority};
pub use transition::{DragSession, MoveRequest};
