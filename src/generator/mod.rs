//! Configuration generators for the `import` and `vars` commands.
//!
//! - `skeleton`: empty resource blocks plus the `terraform import` script
//! - `variables`: device template attachments from variable exports

pub mod skeleton;
pub mod variables;
