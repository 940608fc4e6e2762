//! Game state and rules
//!
//! The word in progress, the submitted-word ledger, and the controller that
//! wires them to a presentation.

mod controller;
mod error;
pub mod ledger;
pub mod port;
pub mod session;

pub use controller::{Game, TileAction};
pub use error::GameError;
pub use ledger::{HistoryLedger, LedgerEntry};
pub use port::{BoardView, Presentation};
pub use session::WordSession;
