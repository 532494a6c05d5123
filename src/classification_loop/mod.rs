pub mod core;
pub mod label_selection;
pub mod main;
pub mod render;
pub mod run_effect;
