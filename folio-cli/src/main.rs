//! # folio CLI
//!
//! Command-line interface for the folio book tooling.

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "folio")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "folio.yml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Report naked URLs in the manuscript
    Lint {
        /// Exit with an error when any naked URL is found
        #[arg(long)]
        deny: bool,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Render a Markdown file to HTML
    Render {
        /// Markdown source file
        file: PathBuf,

        /// Print the table of contents before the page
        #[arg(long)]
        toc: bool,

        /// Emit JSON (html, toc_html, headings)
        #[arg(long)]
        json: bool,
    },

    /// Print the anchor slug for a heading
    Slug {
        /// Heading text
        text: String,
    },

    /// Print a cross-reference link to a heading on another page
    Ref {
        /// Target page
        page: String,

        /// Heading title on that page
        title: String,
    },

    /// Build the prefilled issue URL for a selected passage
    FileIssue {
        /// URL of the page the text was selected on
        #[arg(long)]
        location: String,

        /// Id of the section containing the selection
        #[arg(long)]
        anchor_id: Option<String>,

        /// Issue tracker new-issue URL (overrides feedback.file_issue_url)
        #[arg(long)]
        base: Option<String>,

        /// Print the issue body instead of the URL
        #[arg(long)]
        body: bool,

        /// Selected text
        text: String,
    },

    /// Print the feedback link markup
    Widget,

    /// Rewrite manuscript chapters in place for Leanpub
    Leanpub,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let subscriber = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(if cli.verbose {
                tracing::Level::DEBUG.into()
            } else {
                tracing::Level::INFO.into()
            }),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Lint { deny, json } => commands::lint_manuscript(&cli.config, deny, json),
        Commands::Render { file, toc, json } => {
            commands::render_file(&cli.config, &file, toc, json)
        }
        Commands::Slug { text } => {
            println!("{}", folio_core::slugify(&text));
            Ok(())
        }
        Commands::Ref { page, title } => {
            println!("{}", folio_core::ref_link(&page, &title));
            Ok(())
        }
        Commands::FileIssue {
            location,
            anchor_id,
            base,
            body,
            text,
        } => {
            let opts = commands::FileIssueOptions {
                location,
                anchor_id,
                base,
                body,
            };
            commands::file_issue(&cli.config, &text, opts)
        }
        Commands::Widget => commands::print_widget(&cli.config),
        Commands::Leanpub => commands::leanpub(&cli.config),
    }
}
