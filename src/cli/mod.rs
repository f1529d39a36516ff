//! CLI command implementations
//!
//! - `eval`: Evaluate a subtotal against settings
//! - `validate`: Settings validation
//! - `config`: Schema output
//! - `util`: Shared argument and loading helpers

pub mod config;
pub mod eval;
pub mod util;
pub mod validate;

pub use config::cmd_schema;
pub use eval::cmd_eval;
pub use validate::cmd_validate;
