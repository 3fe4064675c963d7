//! Market risk demo entrypoint
//!
//! Prints the artifact check for the committed notebook and figure.

use demo_check::Demo;

fn main() -> anyhow::Result<()> {
    demo_check::run_entrypoint(Demo::MarketRisk)?;
    Ok(())
}
