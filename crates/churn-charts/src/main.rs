// File: crates/churn-charts/src/main.rs
// Summary: Renders every churn portfolio chart into ./viz.

use anyhow::Result;
use churn_charts::{generate_all, Config, ALL};

fn banner(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

fn main() -> Result<()> {
    env_logger::init();

    let cfg = Config::default();
    log::debug!("output dir {}, {} dpi", cfg.out_dir().display(), cfg.dpi);

    banner("GENERATING PORTFOLIO CHARTS");
    println!();

    generate_all(&cfg)?;

    banner("ALL CHARTS GENERATED SUCCESSFULLY");
    println!("\nFiles created in ./{}/:", cfg.out_dir().display());
    for job in &ALL {
        println!("  {}", job.file);
    }
    println!();
    Ok(())
}
