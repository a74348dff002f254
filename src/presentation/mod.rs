//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Decoding command lines into typed commands
//! - Creating the roster with infrastructure dependencies
//!
//! ## Usage
//!
//! ```ignore
//! use roster::presentation::{factory, parse_command};
//!
//! let roster = factory::create_roster(&config);
//! if let Some(command) = parse_command("COURSE GETALL")? {
//!     println!("{}", roster.execute(command)?);
//! }
//! ```

pub mod cli;
pub mod command_line;
pub mod factory;

pub use cli::{Cli, ColorWhen};
pub use command_line::{parse_command, tokenize};
pub use factory::create_roster;
