//! Configuration utility types.
//!
//! | Module   | Purpose                                      |
//! |----------|----------------------------------------------|
//! | `error`  | Configuration error types                    |
//! | `field`  | Field paths for diagnostics                  |
//! | `handle` | Global configuration handle (thread-safe)    |
//! | `target` | Link target classification                   |

mod error;
mod field;
pub mod handle;
mod target;

pub use error::{ConfigDiagnostic, ConfigDiagnostics, ConfigError};
pub use field::FieldPath;
pub use handle::{ConfigHandle, cfg, init_config};
pub use target::{Target, TargetError};
