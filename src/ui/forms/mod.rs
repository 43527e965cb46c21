//! Form rendering module
//!
//! - `field_renderer`: drawing of individual catalog fields
//! - `dynamic_form`: the form pane built from the selected form type

mod dynamic_form;
mod field_renderer;

pub use dynamic_form::draw as draw_dynamic_form;
