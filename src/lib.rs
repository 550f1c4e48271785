//! Core library for the `tct` CLI.
//!
//! `tct` sweeps the number of parallel HTTP GET requests sent to one URL from
//! 1 up to a maximum, times each fully joined batch, and reports the level
//! that finished fastest. The modules here hold the CLI types, config file
//! handling, the HTTP transport seam, and the sweep controller itself.
pub mod args;
pub mod config;
pub mod entry;
pub mod error;
pub mod http;
pub mod logger;
pub mod shutdown;
pub mod shutdown_handlers;
pub mod sweep;
