//! # CLI Module
//!
//! Command implementations behind the `notspotify` binary.
//!
//! - [`serve`] - runs the web server until interrupted
//! - [`token`] - performs one client-credentials exchange and prints the
//!   token metadata as a table
//!
//! Output goes through the crate's console macros (`info!`, `success!`,
//! `warning!`, `error!`); `error!` terminates the process with exit code 1.
//!
//! ## Usage
//!
//! ```bash
//! notspotify serve --addr 0.0.0.0:8080
//! notspotify serve --prefix /notspotify/api
//! notspotify token
//! notspotify completions zsh
//! ```

mod serve;
mod token;

pub use serve::serve;
pub use token::token;
