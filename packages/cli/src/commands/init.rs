use super::DATA_FILE_NAME;
use crate::config::{Config, DEFAULT_CONFIG_NAME};
use anyhow::Result;
use badgecraft_editor::{template, TEMPLATE_FILE_NAME};
use badgecraft_model::{default_placeholders, CardFormat, Layout};
use badgecraft_store::default_record;
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::Path;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Card format preset (e.g. "A5 Landscape")
    #[arg(short, long)]
    pub format: Option<String>,

    /// Force overwrite existing files
    #[arg(long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &Path) -> Result<()> {
    let config_path = cwd.join(DEFAULT_CONFIG_NAME);

    if config_path.exists() && !args.force {
        println!("{} {} already exists", "⚠️".yellow(), DEFAULT_CONFIG_NAME.bright_white());
        println!("Use --force to overwrite");
        return Ok(());
    }

    println!("{}", "📝 Initializing card project...".bright_blue().bold());

    let mut config = Config::default();
    if let Some(format) = args.format {
        config.format = format;
    }
    let format: CardFormat = config.card_format()?;

    fs::write(&config_path, serde_json::to_string_pretty(&config)?)?;
    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);

    let record = default_record();
    let data_path = cwd.join(DATA_FILE_NAME);
    if !data_path.exists() || args.force {
        fs::write(&data_path, record.to_json_pretty()?)?;
        println!("  {} Created {}", "✓".green(), DATA_FILE_NAME);
    }

    let template_path = cwd.join(TEMPLATE_FILE_NAME);
    if !template_path.exists() || args.force {
        let layout = Layout::new(format).with_placeholders(default_placeholders());
        fs::write(&template_path, template::serialize(&layout, &record)?)?;
        println!("  {} Created {}", "✓".green(), TEMPLATE_FILE_NAME);
    }

    println!();
    println!("{}", "✅ Project initialized!".green().bold());
    println!();
    println!("Next steps:");
    println!("  1. Edit {} with the card holder's details", DATA_FILE_NAME);
    println!(
        "  2. Run: badgecraft render --template {} --data {}",
        TEMPLATE_FILE_NAME, DATA_FILE_NAME
    );
    println!("  3. Check output in {}/", config.out_dir);

    Ok(())
}
