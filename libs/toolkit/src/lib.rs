//! Small, typed utilities used by the demo binary: arithmetic helpers,
//! a chaining calculator, text helpers, fixed demo settings and a catalog
//! of idiomatic replacements for common code smells.

pub mod arith;
pub mod error;
pub mod idioms;
pub mod settings;
pub mod text;

pub use arith::{add_numbers, safe_divide, Calculator};
pub use error::ToolkitError;
pub use settings::{get_config, DemoSettings};
pub use text::{capitalize, format_name, process_data};
