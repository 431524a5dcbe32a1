//! Stacked tic-tac-toe game engine.
//!
//! Nine independent tic-tac-toe boards stacked into a 3x3 meta-board:
//! winning a sub-board claims its slot on the meta-board, a tied
//! sub-board blocks its slot for both marks, and the meta-board is
//! scored with the exact same rules as any single board. Sessions run
//! repeated matches between two named identities, rotating who holds X
//! and accumulating scores and a result log across resets.
//!
//! # Architecture
//!
//! - **Rules**: pure grid evaluation shared by both board levels
//! - **Boards**: nine sub-boards composed into a meta-board
//! - **Session**: turn order, identities, and scoring across matches
//! - **Invariants**: composable checks asserted after every transition
//!
//! # Example
//!
//! ```
//! use stacked_tictactoe::MatchSession;
//!
//! let mut session = MatchSession::new("Ada".to_string(), "Grace".to_string());
//!
//! // X opens in the center cell of the center sub-board
//! let snapshot = session.apply_move(4, 4)?;
//! assert!(!snapshot.outcome().is_terminal());
//! assert_eq!(snapshot.current_identity(), "Grace");
//! # Ok::<(), stacked_tictactoe::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod grid;
mod invariants;
mod meta;
mod position;
mod rules;
mod score;
mod session;
mod subboard;
mod turn;
mod types;

// Crate-level exports - core types
pub use types::{Cell, Mark, Outcome};

// Crate-level exports - board geometry
pub use grid::Grid;
pub use position::Position;

// Crate-level exports - rules
pub use rules::{evaluate, is_dead, is_full, winner};

// Crate-level exports - boards
pub use meta::MetaBoard;
pub use subboard::{PlaceError, SubBoard};

// Crate-level exports - moves and errors
pub use action::{InvalidMove, MoveError, MoveRecord};

// Crate-level exports - session and scoring
pub use score::{MatchRecord, ScoreBoard, ScoreKeeper, TIE_LABEL};
pub use session::{MatchSession, Snapshot};
pub use turn::TurnController;

// Crate-level exports - invariants
pub use invariants::{
    AlternatingMarksInvariant, Invariant, InvariantSet, InvariantViolation,
    ReplayConsistentInvariant, ScoreLedgerInvariant, SessionInvariants,
};
