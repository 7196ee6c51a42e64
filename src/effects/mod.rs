//! Card effects that move value between players.
//!
//! - `payment`: settles a debt in whole cards, bank first
//! - `resolver`: applies action card effects
//!
//! Both are driven by the turn engine after it has validated a play.

mod payment;
mod resolver;

pub use payment::{settle, Settlement};
pub use resolver::{first_loose_property, ActionResolver};
