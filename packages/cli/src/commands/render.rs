use super::{read_record, read_template};
use crate::config::Config;
use anyhow::{anyhow, Result};
use badgecraft_compiler_html::render as render_card;
use badgecraft_export::{export_file_name, print_document, print_title, ExportKind};
use badgecraft_model::{DataRecord, Layout};
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Card template JSON
    #[arg(short, long)]
    pub template: PathBuf,

    /// Data record JSON (defaults to the record stored in the template)
    #[arg(short, long)]
    pub data: Option<PathBuf>,

    /// Output directory (overrides config)
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Also write a print document
    #[arg(long)]
    pub print: bool,
}

pub fn render(args: RenderArgs, cwd: &Path) -> Result<()> {
    let config = Config::load(cwd)?;
    let loaded = read_template(&cwd.join(&args.template))?;

    let record: DataRecord = match (&args.data, loaded.record) {
        (Some(path), _) => read_record(&cwd.join(path))?,
        (None, Some(record)) => record,
        (None, None) => return Err(anyhow!("No data record: pass --data or save one into the template")),
    };
    let format = match loaded.format {
        Some(format) => format,
        None => config.card_format()?,
    };
    let layout = Layout::new(format).with_placeholders(loaded.placeholders);

    println!("{}", "🔨 Rendering card...".bright_blue().bold());

    for id in layout.out_of_bounds(config.canvas_scale) {
        println!("  {} {} lies outside the card", "⚠️".yellow(), id.as_str().bright_white());
    }

    let card = render_card(&layout, &record, &config.render_options());

    let out_dir = args.out.map(|out| cwd.join(out)).unwrap_or_else(|| config.out_dir(cwd));
    fs::create_dir_all(&out_dir)?;

    let preview_name = export_file_name(&record, ExportKind::Html);
    let name = record.get_str("name").unwrap_or_default();
    fs::write(out_dir.join(&preview_name), print_document(&card, &format!("Card Preview - {}", name)))?;
    println!("  {} {}", "✓".green(), preview_name);

    if args.print {
        let print_name = preview_name.replace("_card.html", "_card.print.html");
        fs::write(out_dir.join(&print_name), print_document(&card, &print_title(&record)))?;
        println!("  {} {}", "✓".green(), print_name);
    }

    info!(out = %out_dir.display(), format = %layout.format.name, "Card rendered");
    println!();
    println!("{} Output in {}", "✅".green(), out_dir.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{init, InitArgs, DATA_FILE_NAME};
    use badgecraft_editor::TEMPLATE_FILE_NAME;

    fn project() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        init(InitArgs { format: None, force: false }, dir.path()).unwrap();
        fs::write(
            dir.path().join(DATA_FILE_NAME),
            r#"{"name": "RUETHEMANN, Christoph", "function": "official", "rank": "Head of Delegation"}"#,
        )
        .unwrap();
        dir
    }

    #[test]
    fn test_render_writes_preview() {
        let dir = project();
        render(
            RenderArgs {
                template: TEMPLATE_FILE_NAME.into(),
                data: Some(DATA_FILE_NAME.into()),
                out: None,
                print: false,
            },
            dir.path(),
        )
        .unwrap();

        let preview = dir.path().join("dist/RUETHEMANN,_Christoph_official_card.html");
        let page = fs::read_to_string(preview).unwrap();
        assert!(page.contains("RUETHEMANN, Christoph"));
        assert!(page.contains("data-function=\"official\""));
        assert!(!dir.path().join("dist/RUETHEMANN,_Christoph_official_card.print.html").exists());
    }

    #[test]
    fn test_render_print_uses_template_record() {
        let dir = project();
        render(
            RenderArgs {
                template: TEMPLATE_FILE_NAME.into(),
                data: None,
                out: Some("out".into()),
                print: true,
            },
            dir.path(),
        )
        .unwrap();

        let page = fs::read_to_string(dir.path().join("out/New_Card_athlete_card.print.html")).unwrap();
        assert!(page.contains("<title>Accreditation Card - New Card</title>"));
        assert!(page.contains("@media print"));
    }

    #[test]
    fn test_render_needs_a_record() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("t.json"), r#"{"placeholders": []}"#).unwrap();

        let result = render(
            RenderArgs {
                template: "t.json".into(),
                data: None,
                out: None,
                print: false,
            },
            dir.path(),
        );
        assert!(result.is_err());
    }
}
