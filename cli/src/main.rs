//! ungdoc CLI - Google Docs to Markdown conversion tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use ungdoc::render::{self, RenderOptions, TabFragment};
use ungdoc::{parse_file, Document, JsonFormat, Tab};

#[derive(Parser)]
#[command(name = "ungdoc")]
#[command(version)]
#[command(about = "Convert Google Docs JSON to Markdown, text, and JSON", long_about = None)]
struct Cli {
    /// Input document JSON file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output directory
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a document to one Markdown file per tab plus content.json
    Convert {
        /// Input document JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,
    },

    /// Convert a document to Markdown
    #[command(alias = "md")]
    Markdown {
        /// Input document JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Only output the tab with this ID or title
        #[arg(long, value_name = "TAB")]
        tab: Option<String>,

        /// Levels to add to every heading (capped at 6)
        #[arg(long, default_value = "0", env = "UNGDOC_HEADING_OFFSET")]
        heading_offset: u8,

        /// Skip nested tabs
        #[arg(long)]
        no_child_tabs: bool,
    },

    /// Convert a document to compact text
    Text {
        /// Input document JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Convert a document to the JSON envelope
    Json {
        /// Input document JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show document information
    Info {
        /// Input document JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Convert { input, output }) => cmd_convert(&input, output.as_deref()),
        Some(Commands::Markdown {
            input,
            output,
            tab,
            heading_offset,
            no_child_tabs,
        }) => cmd_markdown(
            &input,
            output.as_deref(),
            tab.as_deref(),
            heading_offset,
            no_child_tabs,
        ),
        Some(Commands::Text { input, output }) => cmd_text(&input, output.as_deref()),
        Some(Commands::Json {
            input,
            output,
            compact,
        }) => cmd_json(&input, output.as_deref(), compact),
        Some(Commands::Info { input }) => cmd_info(&input),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: convert if input is provided
            if let Some(input) = cli.input {
                cmd_convert(&input, cli.output.as_deref())
            } else {
                println!("{}", "Usage: ungdoc <FILE> [OUTPUT]".yellow());
                println!("       ungdoc --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_convert(input: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let output_dir = output.map(|p| p.to_path_buf()).unwrap_or_else(|| {
        let stem = input.file_stem().unwrap_or_default().to_string_lossy();
        PathBuf::from(format!("{}_output", stem))
    });

    fs::create_dir_all(&output_dir)?;
    log::debug!("Writing output to {}", output_dir.display());

    let pb = ProgressBar::new(3);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {msg}")?
            .progress_chars("#>-"),
    );

    pb.set_message("Parsing document...");
    let doc = parse_file(input)?;
    pb.inc(1);

    pb.set_message("Generating Markdown...");
    let response = render::to_response(&doc, &RenderOptions::default());
    let mut written = Vec::with_capacity(response.tabs.len());
    for (i, tab) in response.tabs.iter().enumerate() {
        let filename = tab_filename(i, tab);
        fs::write(output_dir.join(&filename), &tab.tab_markdown)?;
        written.push(filename);
    }
    pb.inc(1);

    pb.set_message("Generating JSON...");
    let json = render::to_json(&response, JsonFormat::Pretty)?;
    fs::write(output_dir.join("content.json"), &json)?;
    pb.inc(1);

    pb.finish_with_message("Done!");

    println!("\n{}", "Output files:".green().bold());
    for filename in &written {
        println!("  {} {}", "├─".dimmed(), filename);
    }
    println!("  {} content.json", "└─".dimmed());

    Ok(())
}

fn cmd_markdown(
    input: &Path,
    output: Option<&Path>,
    tab: Option<&str>,
    heading_offset: u8,
    no_child_tabs: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = parse_file(input)?;

    let options = RenderOptions::new()
        .with_heading_offset(heading_offset)
        .with_child_tabs(!no_child_tabs);
    let tabs = render::to_markdown(&doc, &options);

    let markdown = match tab {
        Some(key) => ungdoc::find_tab(&tabs, key)?.tab_markdown.clone(),
        None => join_tabs(&tabs),
    };

    write_output(output, &markdown)
}

fn cmd_text(input: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let doc = parse_file(input)?;
    let response = render::to_response(&doc, &RenderOptions::default());
    write_output(output, &render::to_text(&response))
}

fn cmd_json(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = parse_file(input)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let response = render::to_response(&doc, &RenderOptions::default());
    let json = render::to_json(&response, format)?;

    write_output(output, &json)
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let doc = parse_file(input)?;

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Title".bold(), doc.title);
    println!("{}: {}", "ID".bold(), doc.document_id);
    if let Some(ref revision) = doc.revision_id {
        println!("{}: {}", "Revision".bold(), revision);
    }
    println!(
        "{}: {}",
        "Layout".bold(),
        if doc.has_tabs() { "tabbed" } else { "legacy" }
    );

    if doc.has_tabs() {
        println!();
        println!("{} ({})", "Tabs".cyan().bold(), doc.tab_count());
        println!("{}", "─".repeat(40).dimmed());
        print_tab_tree(&doc, &doc.tabs, 0);
    }

    let result = render::to_markdown_with_stats(&doc, &RenderOptions::default());
    let stats = &result.stats;

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Headings".bold(), stats.heading_count);
    println!("{}: {}", "Paragraphs".bold(), stats.paragraph_count);
    println!("{}: {}", "List items".bold(), stats.list_item_count);
    println!("{}: {}", "Tables".bold(), stats.table_count);
    println!("{}: {}", "Section breaks".bold(), stats.section_break_count);
    if stats.skipped_count > 0 {
        println!("{}: {}", "Skipped elements".bold(), stats.skipped_count);
    }
    println!("{}: {}", "Words".bold(), stats.word_count);
    println!("{}: {}", "Characters".bold(), stats.char_count);

    Ok(())
}

fn print_tab_tree(doc: &Document, tabs: &[Tab], depth: usize) {
    for tab in tabs {
        let title = if tab.title().is_empty() {
            doc.title.as_str()
        } else {
            tab.title()
        };
        println!(
            "{}{} {}",
            "  ".repeat(depth),
            title,
            format!("[{}]", tab.id()).dimmed()
        );
        print_tab_tree(doc, &tab.child_tabs, depth + 1);
    }
}

fn cmd_version() {
    println!("{} {}", "ungdoc".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Google Docs to Markdown conversion tool");
    println!();
    println!("License: MIT");
}

/// Concatenate tabs, marking where each one starts when there are several.
fn join_tabs(tabs: &[TabFragment]) -> String {
    if let [only] = tabs {
        return only.tab_markdown.clone();
    }

    let mut output = String::new();
    for tab in tabs {
        if !output.is_empty() && !output.ends_with("\n\n") {
            output.push('\n');
        }
        output.push_str(&format!("<!-- tab: {} -->\n\n", tab.tab_title));
        output.push_str(&tab.tab_markdown);
    }
    output
}

/// File name for a tab's Markdown, unique within one conversion.
fn tab_filename(index: usize, tab: &TabFragment) -> String {
    let slug: String = tab
        .tab_title
        .chars()
        .map(|c| {
            if c.is_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-");

    if slug.is_empty() {
        format!("{:02}-tab.md", index + 1)
    } else {
        format!("{:02}-{}.md", index + 1, slug)
    }
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_filename() {
        let tab = TabFragment::new("t.0", "Q3 Plan: Draft!", "");
        assert_eq!(tab_filename(0, &tab), "01-q3-plan-draft.md");

        let tab = TabFragment::new("t.1", "???", "");
        assert_eq!(tab_filename(9, &tab), "10-tab.md");
    }

    #[test]
    fn test_cmd_convert_writes_files() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("doc.json");
        fs::write(
            &input,
            r#"{"documentId": "d1", "title": "Doc", "tabs": [
                {"tabProperties": {"tabId": "t.0", "title": "First"},
                 "documentTab": {"body": {"content": [
                    {"paragraph": {"elements": [{"textRun": {"content": "hi\n"}}]}}
                 ]}}}
            ]}"#,
        )
        .unwrap();
        let out = dir.path().join("out");

        cmd_convert(&input, Some(&out)).unwrap();

        assert_eq!(fs::read_to_string(out.join("01-first.md")).unwrap(), "hi\n\n");
        let json = fs::read_to_string(out.join("content.json")).unwrap();
        assert!(json.contains("\"docId\": \"d1\""));
    }

    #[test]
    fn test_join_tabs() {
        let single = [TabFragment::new("t.0", "A", "a\n\n")];
        assert_eq!(join_tabs(&single), "a\n\n");

        let many = [
            TabFragment::new("t.0", "A", "- a\n"),
            TabFragment::new("t.1", "B", "b\n\n"),
        ];
        assert_eq!(
            join_tabs(&many),
            "<!-- tab: A -->\n\n- a\n\n<!-- tab: B -->\n\nb\n\n"
        );
    }
}
