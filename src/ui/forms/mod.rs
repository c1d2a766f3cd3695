//! Form rendering module
//!
//! - `field_renderer`: single input rendering
//! - `people_form`: the people list form

mod field_renderer;
mod people_form;

pub use people_form::draw_people_form;
