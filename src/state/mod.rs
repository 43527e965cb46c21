//! Application state module

mod app_state;
mod forms;
mod gauge_animation;
mod ledger;
mod session;
mod toast;

pub use app_state::*;
pub use forms::*;
pub use gauge_animation::*;
pub use ledger::*;
pub use session::*;
pub use toast::*;
