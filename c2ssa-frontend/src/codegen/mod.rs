//! Expression translation from AST to SSA IR
//!
//! The translator never fails: malformed input becomes diagnostics plus
//! placeholder values, so a partial tree still yields IR.

mod config;
mod types;
pub mod literals;
pub mod expressions;


pub use config::TranslatorConfig;
pub use expressions::{ir_binary_op, ExpressionTranslator, Translated};
pub use types::resolve_type;
