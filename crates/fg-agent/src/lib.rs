pub mod actions;
pub mod config;
pub mod dispatcher;
pub mod extract;
pub mod intent;
pub mod render;
