//! Command-line interface module.
//!
//! Provides the CLI structure, the console approval gate, and the command
//! handlers for the chronicle binary.

mod commands;
mod gate;
mod run;

pub use commands::{Cli, Commands};
pub use gate::ConsoleGate;
pub use run::{
    handle_curriculum, handle_generate, handle_history, handle_post, handle_status,
    run_interactive, run_scheduled,
};
