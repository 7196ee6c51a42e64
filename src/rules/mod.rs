//! Turn rules: the phase state machine, rent, and win detection.
//!
//! Every state change a caller can make goes through the `Game` methods
//! defined in [`turn`]. They validate first, then mutate, then check for a
//! winner and audit the zones.

pub mod rent;
pub mod turn;
pub mod win;

pub use rent::{compute_rent, rent_for};
pub use win::{check_win, has_won, GameResult};
