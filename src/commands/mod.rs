pub mod exec;
pub mod repl;

pub use exec::cmd_exec;
pub use repl::cmd_interactive;
