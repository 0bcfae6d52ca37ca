//! undelta CLI - Quill delta rendering tool

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;

use undelta::{is_tag_name, AttributeOptions, DeltaRenderer, Format, ParseOptions, RenderOptions};

#[derive(Parser)]
#[command(name = "undelta")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Render Quill deltas to HTML and Markdown", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a delta to HTML
    Html {
        /// Input delta JSON file (stdin if not specified)
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Element wrapping plain paragraphs
        #[arg(long, value_name = "TAG")]
        block_element: Option<String>,

        #[command(flatten)]
        parse: ParseArgs,
    },

    /// Render a delta to Markdown
    #[command(alias = "md")]
    Markdown {
        /// Input delta JSON file (stdin if not specified)
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Prefix for plain paragraphs
        #[arg(long, value_name = "PREFIX")]
        block_element: Option<String>,

        /// Bullet list marker
        #[arg(long, default_value = "*")]
        list_marker: char,

        /// Maximum heading level (1-6)
        #[arg(long, default_value = "6")]
        max_heading: u8,

        #[command(flatten)]
        parse: ParseArgs,
    },

    /// Show delta statistics
    Info {
        /// Input delta JSON file (stdin if not specified)
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,

        /// Print statistics as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        parse: ParseArgs,
    },

    /// Show version information
    Version,
}

#[derive(clap::Args)]
struct ParseArgs {
    /// JSON file enabling or disabling individual attributes
    #[arg(long, value_name = "FILE", env = "UNDELTA_OPTIONS")]
    options: Option<PathBuf>,

    /// Fail on malformed ops instead of skipping them
    #[arg(long)]
    strict: bool,
}

impl ParseArgs {
    fn to_options(&self, format: Format) -> Result<ParseOptions, Box<dyn std::error::Error>> {
        let mut options = ParseOptions::for_format(format);

        if let Some(ref path) = self.options {
            options = options.with_attributes(AttributeOptions::from_file_for(format, path)?);
        }
        if self.strict {
            options = options.strict();
        }

        Ok(options)
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Html {
            input,
            output,
            block_element,
            parse,
        }) => cmd_html(input.as_deref(), output.as_deref(), block_element, &parse),
        Some(Commands::Markdown {
            input,
            output,
            block_element,
            list_marker,
            max_heading,
            parse,
        }) => cmd_markdown(
            input.as_deref(),
            output.as_deref(),
            block_element,
            list_marker,
            max_heading,
            &parse,
        ),
        Some(Commands::Info { input, json, parse }) => cmd_info(input.as_deref(), json, &parse),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            println!("{}", "Usage: undelta <html|markdown|info> [FILE]".yellow());
            println!("       undelta --help for more information");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

/// Read delta JSON from a file, or from stdin when no path is given.
fn read_input(input: Option<&Path>) -> io::Result<String> {
    match input {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn write_output(content: &str, output: Option<&Path>) -> io::Result<()> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        print!("{}", content);
    }
    Ok(())
}

fn cmd_html(
    input: Option<&Path>,
    output: Option<&Path>,
    block_element: Option<String>,
    parse: &ParseArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let json = read_input(input)?;
    let render_options = html_render_options(block_element)?;

    let html = DeltaRenderer::new(Format::Html)
        .with_parse_options(parse.to_options(Format::Html)?)
        .with_render_options(render_options)
        .render(&json)?;

    write_output(&html, output)?;
    Ok(())
}

fn html_render_options(
    block_element: Option<String>,
) -> Result<RenderOptions, Box<dyn std::error::Error>> {
    let mut options = RenderOptions::new();
    if let Some(element) = block_element {
        if !is_tag_name(&element) {
            return Err(format!("Invalid block element tag: {:?}", element).into());
        }
        options = options.with_block_element(element);
    }
    Ok(options)
}

fn cmd_markdown(
    input: Option<&Path>,
    output: Option<&Path>,
    block_element: Option<String>,
    list_marker: char,
    max_heading: u8,
    parse: &ParseArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let json = read_input(input)?;

    let mut render_options = RenderOptions::new()
        .with_list_marker(list_marker)
        .with_max_heading(max_heading);
    if let Some(prefix) = block_element {
        render_options = render_options.with_block_element(prefix);
    }

    let markdown = DeltaRenderer::new(Format::Markdown)
        .with_parse_options(parse.to_options(Format::Markdown)?)
        .with_render_options(render_options)
        .render(&json)?;

    write_output(&markdown, output)?;
    Ok(())
}

fn cmd_info(
    input: Option<&Path>,
    json: bool,
    parse: &ParseArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let source = read_input(input)?;

    let result = DeltaRenderer::new(Format::Html)
        .with_parse_options(parse.to_options(Format::Html)?)
        .render_with_stats(&source)?;
    let stats = &result.stats;

    if json {
        println!("{}", serde_json::to_string_pretty(stats)?);
        return Ok(());
    }

    println!("{}", "Delta Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    match input {
        Some(path) => println!("{}: {}", "File".bold(), path.display()),
        None => println!("{}: <stdin>", "File".bold()),
    }
    println!("{}: {}", "Paragraphs".bold(), stats.paragraph_count);
    println!("{}: {}", "Headers".bold(), stats.header_count);
    println!("{}: {}", "Lists".bold(), stats.list_count);
    println!("{}: {}", "List items".bold(), stats.list_item_count);
    println!("{}: {}", "Styled runs".bold(), stats.inline_run_count);
    println!("{}: {}", "Links".bold(), stats.link_count);

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "Words".bold(), stats.word_count);
    println!("{}: {}", "Characters".bold(), stats.char_count);

    if stats.skipped_op_count > 0 || stats.rejected_attribute_count > 0 {
        println!();
        println!(
            "{}: {}",
            "Skipped ops".yellow().bold(),
            stats.skipped_op_count
        );
        println!(
            "{}: {}",
            "Dropped attributes".yellow().bold(),
            stats.rejected_attribute_count
        );
    }

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "undelta".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Quill delta rendering tool");
    println!();
    println!("Repository: {}", "https://github.com/iyulab/undelta".dimmed());
    println!("License: MIT");
}
