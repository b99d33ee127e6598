use anyhow::Context;
use vectordemo::{logging::init_logging, DemoConfig};

fn main() -> anyhow::Result<()> {
    let config = DemoConfig::default();
    init_logging(config.logging());

    let reports = vectordemo::run(&config).context("vector walk-through failed")?;
    for report in reports {
        println!("{}", report);
    }
    Ok(())
}
