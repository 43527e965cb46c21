//! Reusable UI components

mod button;
mod dialog;
mod select_popup;

pub use button::{render_action_button, BUTTON_HEIGHT};
pub use dialog::{render_confirm_dialog, render_error_dialog};
pub use select_popup::render_select_popup;
