// Shell Module
// Command line front end; all state it needs lives in the session file

pub mod app;
pub mod session;

pub use app::{run, Cli, Commands};
pub use session::{Session, SessionError, SessionResult};
