pub mod backend;
pub mod config;
pub mod error;
pub mod fallback;
pub mod models;
pub mod parser;
pub mod planner;
pub mod prompt;
pub mod render;
pub mod server;
pub mod upstream;
