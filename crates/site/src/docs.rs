//! Documentation pages, one module per component family.

pub mod alerts;
pub mod button_group;
pub mod buttons;
pub mod grid;
pub mod navs;
pub mod typography;
