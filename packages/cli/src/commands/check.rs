use super::read_template;
use crate::config::Config;
use anyhow::{anyhow, Result};
use badgecraft_model::{Layout, Side};
use clap::Args;
use colored::Colorize;
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Card template JSON
    #[arg(short, long)]
    pub template: PathBuf,
}

pub fn check(args: CheckArgs, cwd: &Path) -> Result<()> {
    let config = Config::load(cwd)?;
    let loaded = read_template(&cwd.join(&args.template))?;
    let format = match loaded.format {
        Some(format) => format,
        None => config.card_format()?,
    };
    let layout = Layout::new(format).with_placeholders(loaded.placeholders);
    let (width, height) = layout.canvas_size(config.canvas_scale);

    println!("🔍 {} {}", "Checking".green().bold(), args.template.display());
    println!(
        "   Format: {} ({:.0} x {:.0} px)",
        layout.format.name, width, height
    );
    match config.grid() {
        Some(grid) => println!("   Grid:   {} px", grid),
        None => println!("   Grid:   off"),
    }
    println!(
        "   Placeholders: {} front, {} back",
        layout.side_elements(Side::Front).len(),
        layout.side_elements(Side::Back).len()
    );
    println!();

    let outside = layout.out_of_bounds(config.canvas_scale);
    if outside.is_empty() {
        println!("{} All placeholders fit the card", "✅".green());
        return Ok(());
    }

    for id in &outside {
        if let Some(el) = layout.get(id) {
            println!(
                "  {} {} ({}) at {},{} size {}x{} on {}",
                "✗".red(),
                id.as_str().bright_white(),
                el.label,
                el.x,
                el.y,
                el.width,
                el.height,
                el.side.as_str()
            );
        }
    }
    Err(anyhow!("{} placeholder(s) outside the card", outside.len()))
}
