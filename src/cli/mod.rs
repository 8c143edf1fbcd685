//! Command-line interface.
//!
//! - `create`: state snapshot -> configuration files
//! - `import`: backup inventory -> skeleton, import script, terraform state
//! - `vars`: device variable exports -> attachment resources

mod args;
pub mod create;
pub mod import;
pub mod vars;

pub use args::{Cli, Commands, DirArgs};
