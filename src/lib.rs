pub mod commands;
pub mod config;
pub mod error;
pub mod game;
pub mod input;
pub mod models;
pub mod output;
pub mod renderer;
pub mod services;
pub mod state;
pub mod util;

// Convenient re-exports (so call sites can do `textquest::Registry`, etc.)
pub use commands::{process_command, run_command, run_loop};
pub use state::{
    registry::Registry,
    session::{SessionState, Session},
};
