pub mod config;
pub mod dictionary;
pub mod error;
pub mod renderer;
pub mod terminal;
