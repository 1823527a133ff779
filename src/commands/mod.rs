//! CLI command implementations
//!
//! Each command lives in its own submodule with an options struct and an
//! `execute_*` entry point. Handlers print to stdout; the library modules
//! underneath never do.

pub mod check;
pub mod first;
pub mod init;
pub mod output;
pub mod run;
pub mod up_to;

pub use check::{execute_check, CheckOptions, CheckOutcome};
pub use first::{execute_first, FirstOptions};
pub use init::{execute_init, InitOptions};
pub use output::write_listing;
pub use run::{execute_run, RunOptions};
pub use up_to::{execute_up_to, UpToOptions};
