pub mod action;
pub use action::*;

pub mod engine;
pub use engine::*;

pub mod ledger;
pub use ledger::*;

pub mod payoff;
pub use payoff::*;

pub mod play;
pub use play::*;

pub mod seat;
pub use seat::*;

pub mod sizing;
pub use sizing::*;
