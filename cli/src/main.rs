//! polybook CLI - convert multilingual book Markdown to JSON and split-pane HTML.

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

use polybook::{
    build_split_pane, check_file, parse_file_with_options, BookStats, ItemKind, JsonFormat,
    Orientation, ParseOptions, RenderOptions, Severity, ValidationError,
};

#[derive(Parser)]
#[command(name = "polybook")]
#[command(version)]
#[command(about = "Convert multilingual book Markdown to JSON and split-pane HTML", long_about = None)]
struct Cli {
    /// Input Markdown file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output directory
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Do not check that referenced images exist
    #[arg(long, global = true, env = "POLYBOOK_NO_IMAGE_CHECK")]
    no_image_check: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a book to all formats (JSON, HTML)
    Convert {
        /// Input Markdown file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Split panes for landscape pages
        #[arg(long)]
        landscape: bool,
    },

    /// Convert a book to JSON
    Json {
        /// Input Markdown file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Convert a book to split-pane HTML
    Html {
        /// Input Markdown file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Split panes for landscape pages
        #[arg(long)]
        landscape: bool,

        /// Emit a complete HTML document
        #[arg(long)]
        standalone: bool,

        /// Prefix for image paths (e.g., "images/")
        #[arg(long, value_name = "PREFIX", default_value = "")]
        image_prefix: String,
    },

    /// Validate a book and list every problem found
    Check {
        /// Input Markdown file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show book information
    Info {
        /// Input Markdown file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Print bare split-pane scaffolding for a list of item kinds
    Origami {
        /// Item kinds in order (e.g., text image text)
        #[arg(value_name = "KIND", required = true)]
        kinds: Vec<String>,

        /// Split panes for landscape pages
        #[arg(long)]
        landscape: bool,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let parse_options = ParseOptions::new().with_image_validation(!cli.no_image_check);

    let result = match cli.command {
        Some(Commands::Convert {
            input,
            output,
            landscape,
        }) => cmd_convert(&input, output.as_deref(), landscape, parse_options),
        Some(Commands::Json {
            input,
            output,
            compact,
        }) => cmd_json(&input, output.as_deref(), compact, parse_options),
        Some(Commands::Html {
            input,
            output,
            landscape,
            standalone,
            image_prefix,
        }) => {
            let render_options = RenderOptions::new()
                .with_orientation(orientation(landscape))
                .with_standalone(standalone)
                .with_image_prefix(image_prefix);
            cmd_html(&input, output.as_deref(), &render_options, parse_options)
        }
        Some(Commands::Check { input }) => cmd_check(&input, parse_options),
        Some(Commands::Info { input }) => cmd_info(&input, parse_options),
        Some(Commands::Origami { kinds, landscape }) => cmd_origami(&kinds, landscape),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: convert if input is provided
            if let Some(input) = cli.input {
                cmd_convert(&input, cli.output.as_deref(), false, parse_options)
            } else {
                println!("{}", "Usage: polybook <FILE> [OUTPUT]".yellow());
                println!("       polybook --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        if let Some(err) = e.downcast_ref::<polybook::Error>() {
            print_diagnostics(err.diagnostics());
        }
        std::process::exit(1);
    }
}

fn orientation(landscape: bool) -> Orientation {
    if landscape {
        Orientation::Landscape
    } else {
        Orientation::Portrait
    }
}

fn cmd_convert(
    input: &Path,
    output: Option<&Path>,
    landscape: bool,
    parse_options: ParseOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let output_dir = output.map(|p| p.to_path_buf()).unwrap_or_else(|| {
        let stem = input.file_stem().unwrap_or_default().to_string_lossy();
        PathBuf::from(format!("{}_output", stem))
    });

    let book = parse_file_with_options(input, parse_options)?;

    let json = polybook::render::to_json(&book, JsonFormat::Pretty)?;
    let render_options = RenderOptions::new()
        .with_orientation(orientation(landscape))
        .with_standalone(true);
    let html = polybook::render::to_html(&book, &render_options)?;

    fs::create_dir_all(&output_dir)?;
    log::debug!("Writing output to {}", output_dir.display());
    fs::write(output_dir.join("book.json"), &json)?;
    fs::write(output_dir.join("book.html"), &html)?;

    println!(
        "{} {} page(s) to {}",
        "Converted".green().bold(),
        book.page_count(),
        output_dir.display()
    );
    println!("  {} book.json", "├─".dimmed());
    println!("  {} book.html", "└─".dimmed());

    Ok(())
}

fn cmd_json(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
    parse_options: ParseOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let book = parse_file_with_options(input, parse_options)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = polybook::render::to_json(&book, format)?;
    write_output(output, &json)
}

fn cmd_html(
    input: &Path,
    output: Option<&Path>,
    render_options: &RenderOptions,
    parse_options: ParseOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let book = parse_file_with_options(input, parse_options)?;
    let html = polybook::render::to_html(&book, render_options)?;
    write_output(output, &html)
}

fn cmd_check(input: &Path, parse_options: ParseOptions) -> Result<(), Box<dyn std::error::Error>> {
    let report = check_file(input, parse_options)?;

    print_diagnostics(&report.diagnostics);
    println!(
        "{} error(s), {} warning(s)",
        report.error_count(),
        report.warning_count()
    );

    match report.book {
        Some(book) => {
            println!("{} {} page(s)", "OK".green().bold(), book.page_count());
            Ok(())
        }
        None => Err(format!("{} failed validation", input.display()).into()),
    }
}

fn cmd_info(input: &Path, parse_options: ParseOptions) -> Result<(), Box<dyn std::error::Error>> {
    let book = parse_file_with_options(input, parse_options)?;
    let meta = &book.metadata;

    println!("{}", "Book Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    for (lang, title) in meta.all_titles.iter() {
        println!("{} [{}]: {}", "Title".bold(), lang, title);
    }
    let languages: Vec<String> = meta
        .languages
        .iter()
        .map(|(code, name)| format!("{} ({})", name, code))
        .collect();
    println!("{}: {}", "Languages".bold(), languages.join(", "));
    println!("{}: {}", "Primary".bold(), meta.l1);
    if let Some(ref l2) = meta.l2 {
        println!("{}: {}", "Secondary".bold(), l2);
    }
    if let Some(ref isbn) = meta.isbn {
        println!("{}: {}", "ISBN".bold(), isbn);
    }
    if let Some(ref license) = meta.license {
        println!("{}: {}", "License".bold(), license);
    }
    if let Some(ref copyright) = meta.copyright {
        println!("{}: {}", "Copyright".bold(), copyright);
    }

    let stats = BookStats::from_book(&book);

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Pages".bold(), stats.page_count);
    println!("{}: {}", "Images".bold(), stats.image_count);
    println!("{}: {}", "Text blocks".bold(), stats.text_block_count);
    println!("{}: {}", "Words".bold(), stats.word_count);
    for (lang, count) in &stats.language_blocks {
        println!("  {} {}: {}", "├─".dimmed(), lang, count);
    }
    for (layout, count) in &stats.layouts {
        println!("{} {}: {}", "Layout".bold(), layout, count);
    }

    Ok(())
}

fn cmd_origami(kinds: &[String], landscape: bool) -> Result<(), Box<dyn std::error::Error>> {
    let items = kinds
        .iter()
        .map(|kind| kind.parse::<ItemKind>())
        .collect::<Result<Vec<_>, _>>()?;
    let html = build_split_pane(&items, orientation(landscape))?;
    print!("{}", html);
    Ok(())
}

fn cmd_version() {
    println!("{} {}", "polybook".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Multilingual book Markdown converter");
    println!();
    println!("License: MIT");
}

fn write_output(output: Option<&Path>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn print_diagnostics(diagnostics: &[ValidationError]) {
    for diagnostic in diagnostics {
        let label = match diagnostic.severity {
            Severity::Error => "error".red().bold(),
            Severity::Warning => "warning".yellow().bold(),
        };
        match diagnostic.line {
            Some(line) => println!("{} (line {}): {}", label, line, diagnostic.message),
            None => println!("{}: {}", label, diagnostic.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const BOOK: &str = "---
allTitles:
  en: Test
languages:
  en: English
l1: en
---
<!-- lang=en -->
Hello
";

    #[test]
    fn test_convert_writes_both_outputs() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("book.md");
        fs::write(&input, BOOK).unwrap();
        let output = dir.path().join("out");

        cmd_convert(&input, Some(&output), false, ParseOptions::new()).unwrap();

        let json = fs::read_to_string(output.join("book.json")).unwrap();
        assert!(json.contains("\"allTitles\""));
        let html = fs::read_to_string(output.join("book.html")).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<p>Hello</p>"));
    }

    #[test]
    fn test_convert_failure_leaves_no_output_dir() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("broken.md");
        fs::write(&input, "no frontmatter at all").unwrap();
        let output = dir.path().join("out");

        assert!(cmd_convert(&input, Some(&output), false, ParseOptions::new()).is_err());
        assert!(!output.exists());
    }

    #[test]
    fn test_origami_rejects_empty_kind() {
        assert!(cmd_origami(&["text".to_string(), String::new()], false).is_err());
    }
}
