//! # Parallel Web Telemetry
//!
//! Structured logging for the Parallel web search crates, built on `tracing`.
//!
//! ## Usage
//!
//! ```rust
//! use parallel_web_telemetry::{init_telemetry, info, instrument};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     init_telemetry("my-service")?;
//!
//!     #[instrument]
//!     async fn my_function() {
//!         info!("Function called");
//!     }
//!     Ok(())
//! }
//! ```

pub mod init;
pub mod spans;

// Re-export tracing macros for convenience
pub use tracing::{Instrument, Span, debug, error, info, instrument, trace, warn};

pub use init::{init_json_telemetry, init_telemetry};
pub use spans::*;
