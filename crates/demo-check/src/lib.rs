//! Finance Demo Checks
//!
//! Entrypoints that verify the committed notebook and figure of each
//! finance demo:
//!
//! | demo           | counts          |
//! |----------------|-----------------|
//! | `fixed-income` | code cells      |
//! | `market-risk`  | markdown cells  |
//! | `sentiment`    | total cells     |
//!
//! # Example
//!
//! ```rust,ignore
//! use demo_check::{run_demo, CheckConfig, Demo};
//!
//! let report = run_demo(Demo::FixedIncome, &CheckConfig::new())?;
//! println!("{report}");
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod catalog;
pub mod config;
pub mod error;
pub mod logging;
pub mod runner;

// Re-exports for convenience
pub use catalog::Demo;
pub use config::{default_root, CheckConfig, OutputFormat};
pub use error::{CheckError, CheckResult};
pub use logging::init_tracing;
pub use runner::{render, run_all, run_demo};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Run one demo with default configuration and print its text report
///
/// Shared body of the single-demo binaries.
///
/// # Errors
/// Returns `CheckError` if either artifact cannot be read
pub fn run_entrypoint(demo: Demo) -> CheckResult<()> {
    init_tracing();
    let report = run_demo(demo, &CheckConfig::new())?;
    println!("{report}");
    Ok(())
}
