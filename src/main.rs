//! Page Composer CLI
//!
//! Usage:
//!   page-composer [OPTIONS] [FILE]
//!
//! Options:
//!   -t, --template <ID>             Append a template's sections (repeatable)
//!   -s, --section <KIND[:VARIANT]>  Append one section (repeatable)
//!       --themes <FILE>             Extra theme catalog (TOML)
//!       --templates <FILE>          Extra template catalog (TOML)
//!       --theme <NAME>              Override the design theme
//!       --mode <MODE>               Override light/dark mode
//!   -p, --preview                   Emit the HTML preview instead of TSX
//!   -o, --output <DIR>              Write the export file into DIR
//!   -l, --list                      List templates, sections, variants and themes
//!       --outline                   Print the assembled page structure instead of rendering
//!   -d, --debug                     Verbose logging on stderr
//!   -h, --help                      Print help

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use page_composer::{
    render_page, ComposeConfig, ExportConfig, ExportFile, OutputFormat, PageFile, PageModel,
    SectionKind, TemplateRegistry, ThemeCatalog, ThemeMode,
};

#[derive(Parser)]
#[command(name = "page-composer")]
#[command(about = "Assemble landing pages from sections and export them as TSX")]
struct Cli {
    /// Page file (TOML); read from stdin if not provided
    input: Option<PathBuf>,

    /// Append the sections of a template
    #[arg(short, long = "template", value_name = "ID")]
    templates_to_add: Vec<String>,

    /// Append a section, optionally with a variant
    #[arg(short, long = "section", value_name = "KIND[:VARIANT]")]
    sections: Vec<String>,

    /// Extra theme catalog (TOML format)
    #[arg(long, value_name = "FILE")]
    themes: Option<PathBuf>,

    /// Extra template catalog (TOML format)
    #[arg(long, value_name = "FILE")]
    templates: Option<PathBuf>,

    /// Override the design theme
    #[arg(long)]
    theme: Option<String>,

    /// Override the theme mode (light or dark)
    #[arg(long)]
    mode: Option<ThemeMode>,

    /// Name of the exported component
    #[arg(short, long, default_value = "LandingPage")]
    name: String,

    /// Emit the HTML preview instead of TSX
    #[arg(short, long)]
    preview: bool,

    /// Write the export file into this directory instead of stdout
    #[arg(short, long, value_name = "DIR")]
    output: Option<PathBuf>,

    /// List templates, section kinds, variants and themes
    #[arg(short, long)]
    list: bool,

    /// Print the assembled page structure instead of rendering it
    #[arg(long)]
    outline: bool,

    /// Verbose logging on stderr
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.debug { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(message) => fail(&message),
    };

    if cli.list {
        print_listing(&config);
        return;
    }

    let has_cli_sections = !cli.templates_to_add.is_empty() || !cli.sections.is_empty();
    if cli.input.is_none() && !has_cli_sections && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    let page = match build_page(&cli, &config) {
        Ok(page) => page,
        Err(message) => fail(&message),
    };

    if cli.outline {
        print_outline(&page);
        return;
    }

    let output = match render_page(&page, &config) {
        Ok(output) => output,
        Err(e) => fail(&format!("Error: {e}")),
    };

    match &cli.output {
        Some(dir) => {
            let file_name = match config.format {
                OutputFormat::Source => config.export.file_name.clone(),
                OutputFormat::Preview => format!("{}.html", config.export.component_name),
            };
            match ExportFile::new(file_name, output).write_to(dir) {
                Ok(path) => tracing::info!(path = %path.display(), "wrote export"),
                Err(e) => fail(&format!("Error writing to '{}': {}", dir.display(), e)),
            }
        }
        None => print!("{output}"),
    }
}

fn fail(message: &str) -> ! {
    eprintln!("{message}");
    std::process::exit(1);
}

fn load_config(cli: &Cli) -> Result<ComposeConfig, String> {
    let mut templates = TemplateRegistry::default();
    if let Some(path) = &cli.templates {
        templates
            .load_file(path)
            .map_err(|e| format!("Error loading templates '{}': {}", path.display(), e))?;
    }

    let mut themes = ThemeCatalog::default();
    if let Some(path) = &cli.themes {
        themes
            .load_file(path)
            .map_err(|e| format!("Error loading themes '{}': {}", path.display(), e))?;
    }

    let format = if cli.preview {
        OutputFormat::Preview
    } else {
        OutputFormat::Source
    };

    Ok(ComposeConfig::new()
        .with_templates(templates)
        .with_themes(themes)
        .with_export(ExportConfig::new().with_component_name(&cli.name))
        .with_format(format))
}

fn read_source(cli: &Cli) -> Result<Option<String>, String> {
    match &cli.input {
        Some(path) => fs::read_to_string(path)
            .map(Some)
            .map_err(|e| format!("Error reading file '{}': {}", path.display(), e)),
        None if io::stdin().is_terminal() => Ok(None),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|e| format!("Error reading from stdin: {e}"))?;
            Ok(Some(buffer))
        }
    }
}

fn build_page(cli: &Cli, config: &ComposeConfig) -> Result<PageModel, String> {
    let mut page = config.page();

    if let Some(source) = read_source(cli)? {
        let file = PageFile::from_str(&source).map_err(|e| format!("Error: {e}"))?;
        file.apply_to(&mut page).map_err(|e| format!("Error: {e}"))?;
    }

    for id in &cli.templates_to_add {
        if page.instantiate_template(id).is_empty() {
            return Err(format!("Error: unknown template '{id}' (see --list)"));
        }
    }

    for entry in &cli.sections {
        let (kind_name, variant) = match entry.split_once(':') {
            Some((kind, variant)) => (kind, Some(variant)),
            None => (entry.as_str(), None),
        };
        let kind: SectionKind = kind_name
            .parse()
            .map_err(|e| format!("Error: {e} (see --list)"))?;
        let id = page.add_component(kind);
        if let Some(variant) = variant {
            if !page.update_variant(id, variant) {
                return Err(format!(
                    "Error: variant '{variant}' is not registered for {kind} (see --list)"
                ));
            }
        }
    }

    if let Some(theme) = &cli.theme {
        page.design_mut().theme = theme.clone();
    }
    if let Some(mode) = cli.mode {
        page.design_mut().mode = mode;
    }
    page.deselect();

    tracing::info!(sections = page.components().len(), "page assembled");
    Ok(page)
}

fn print_listing(config: &ComposeConfig) {
    println!("TEMPLATES");
    for template in config.templates.iter() {
        println!("  {:<18} {} - {}", template.id, template.label, template.description);
        let kinds: Vec<&str> = template.items.iter().map(|i| i.kind.name()).collect();
        println!("  {:<18} {}", "", kinds.join(", "));
    }

    println!();
    println!("SECTIONS");
    for kind in SectionKind::ALL {
        let variants: Vec<&str> = kind.variants().iter().map(|v| v.id).collect();
        if variants.is_empty() {
            println!("  {:<14} {}", kind.name(), kind.label());
        } else {
            println!("  {:<14} {} [{}]", kind.name(), kind.label(), variants.join(", "));
        }
    }

    println!();
    println!("THEMES");
    for theme in config.themes.iter() {
        println!("  {:<10} {}", theme.name, theme.label);
    }
}

fn print_outline(page: &PageModel) {
    let design = page.design();
    println!(
        "theme {} ({}), radius {}",
        page.resolved_theme().name,
        design.mode,
        design.radius
    );
    for (index, node) in page.components().iter().enumerate() {
        let variant = node.variant().map(|v| format!(" [{v}]")).unwrap_or_default();
        let title = node.props.title().map(|t| format!(" \"{t}\"")).unwrap_or_default();
        println!("{:>2}. {}{}{}", index + 1, node.kind().label(), variant, title);
        if let Some(items) = node.props.items() {
            for i in 0..items.item_count() {
                if let Some(label) = items.item_label(i) {
                    println!("      - {label}");
                }
            }
        }
    }
}

fn print_intro() {
    println!(
        r#"Page Composer - Assemble landing pages from sections and export them as TSX

USAGE:
    page-composer [OPTIONS] [FILE]
    cat page.toml | page-composer

OPTIONS:
    -t, --template <ID>             Append a template's sections
    -s, --section <KIND[:VARIANT]>  Append one section
    --theme <NAME>, --mode <MODE>   Override the design theme
    -p, --preview                   HTML preview instead of TSX
    -o, --output <DIR>              Write the export file into DIR
    -l, --list                      List templates, sections and themes
    -h, --help                      Print help

QUICK START:
    page-composer --template template-saas --theme blue -o src/

This writes src/LandingPage.tsx with the SaaS landing template."#
    );
}
