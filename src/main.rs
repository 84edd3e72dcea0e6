//! folio - inspect tables of contents and try structural navigation

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use folio::navigation::{Direction, ElementKind, PresentationTable};
use folio::{MemoryDocument, NavigationOutcome, NavigationSession, PageContent, Section};

#[derive(Parser)]
#[command(name = "folio")]
#[command(version, about = "Table-of-contents and structural navigation tool", long_about = None)]
#[command(after_help = "EXAMPLES:
    folio toc outline.json                    Print the section tree
    folio toc outline.json --json             Print the section tree as JSON
    folio locate page.json --kind heading     Find the first heading
    folio locate page.json --kind link --from 120 --backward")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build the section tree from an outline file
    Toc {
        /// Outline JSON: {"title": ..., "pages": N, "outline": [[level, title, page], ...]}
        #[arg(value_name = "OUTLINE")]
        input: PathBuf,

        /// Override the page count from the file
        #[arg(long)]
        pages: Option<usize>,

        /// Override the document title
        #[arg(long)]
        title: Option<String>,

        /// Print JSON instead of an indented outline
        #[arg(long)]
        json: bool,
    },

    /// Find the next or previous element of a kind in a page file
    Locate {
        /// Page JSON: {"text": ..., "elements": [{"kind": ..., "range": {...}}]}
        #[arg(value_name = "PAGE")]
        input: PathBuf,

        /// Element kind to look for
        #[arg(short, long, value_enum)]
        kind: ElementKind,

        /// Cursor position (character offset)
        #[arg(short, long, default_value_t = 0)]
        from: usize,

        /// Search towards the start of the text
        #[arg(short, long)]
        backward: bool,

        /// Presentation overrides as JSON, keyed by kind
        #[arg(long, value_name = "FILE")]
        policy: Option<PathBuf>,

        /// Print JSON instead of the spoken message
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Toc {
            input,
            pages,
            title,
            json,
        } => show_toc(&input, pages, title, json),
        Command::Locate {
            input,
            kind,
            from,
            backward,
            policy,
            json,
        } => locate(&input, kind, from, backward, policy.as_deref(), json),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn show_toc(
    input: &std::path::Path,
    pages: Option<usize>,
    title: Option<String>,
    json: bool,
) -> folio::Result<()> {
    let mut doc = MemoryDocument::open(input)?;
    if let Some(pages) = pages {
        doc.page_count = pages;
    }
    if let Some(title) = title {
        doc.title = title;
    }

    let tree = folio::toc_tree(&doc);
    if json {
        println!("{}", serde_json::to_string_pretty(&tree)?);
        return Ok(());
    }

    print_tree(&tree);
    println!("Sections: {}", tree.len() - 1);
    Ok(())
}

fn print_tree(root: &Section) {
    for (id, depth, section) in root.iter() {
        println!(
            "{:>4} {}{} [{}-{}]",
            id.0,
            "  ".repeat(depth),
            section.title,
            section.pager.first() + 1,
            section.pager.last() + 1
        );
    }
}

fn locate(
    input: &std::path::Path,
    kind: ElementKind,
    from: usize,
    backward: bool,
    policy: Option<&std::path::Path>,
    json: bool,
) -> folio::Result<()> {
    let page = PageContent::open(input)?;
    let table = match policy {
        Some(path) => PresentationTable::from_json_str(&std::fs::read_to_string(path)?)?,
        None => PresentationTable::default(),
    };

    let mut session = NavigationSession::new();
    let outcome = folio::navigate(
        &mut session,
        &page.elements,
        &page.text,
        &table,
        kind,
        Direction::from_forward(!backward),
        from,
    )?;

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    match outcome {
        NavigationOutcome::Found(announcement) => {
            println!("{}", announcement.message);
            println!("Range: {}", announcement.hit.range);
            println!("Cursor: {}", announcement.cursor);
        }
        NavigationOutcome::NotFound { message } => println!("{message}"),
    }
    Ok(())
}
