// Sphere surface area calculator.
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use pointer_concepts::config::DemoConfig;
use pointer_concepts::sphere::{format_report, parse_radius, surface_area};
use pointer_concepts::{DemoError, DemoResult};

#[derive(Parser, Debug)]
#[command(name = "sphere", about = "Surface area of a sphere from its radius")]
struct Cli {
    /// Radius; prompted for on stdin when omitted
    #[arg(long, allow_negative_numbers = true)]
    radius: Option<f32>,

    #[arg(long)]
    config: Option<PathBuf>,
}

fn read_radius() -> DemoResult<f32> {
    print!("Enter the radius of the sphere: ");
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Err(DemoError::invalid_input("", "no radius given"));
    }
    parse_radius(&line)
}

fn main() -> DemoResult<()> {
    let cli = Cli::parse();
    let config = DemoConfig::load(cli.config.as_deref())?;
    config.init_logging();
    let style = config.style();

    println!("{}\n", style.banner("Sphere Surface Area Calculator"));

    let radius = match cli.radius {
        Some(radius) => radius,
        None => read_radius()?,
    };
    let area = surface_area(radius)?;
    log::debug!("radius {radius} -> area {area}");

    println!("\n{}", format_report(radius, area));
    Ok(())
}
