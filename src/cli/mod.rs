//! Interactive terminal workflows

pub mod bond;
pub mod input;
pub mod investment;
pub mod menu;
pub mod ui;

pub use input::{InputError, Prompter};
