use std::fs;
use std::path::PathBuf;
use std::process;

use anyhow::{bail, Context};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use layout_catalog::catalog::{self, Category, OptionKind};
use layout_catalog::{preview, LayoutOptions};

#[derive(Parser)]
#[command(name = "layouts", version)]
#[command(about = "Catalog of CSS grid, flexbox and modal layouts with code generation")]
struct Cli {
    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List templates in the catalog
    List {
        /// Only list templates of this category (grid, flexbox, modal)
        #[arg(long)]
        category: Option<Category>,

        /// Print the descriptors as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a template's description and options
    Show {
        /// Template id (e.g. holy-grail)
        id: String,
    },

    /// Generate CSS + HTML for a template
    Generate {
        /// Template id (e.g. holy-grail)
        id: String,

        /// Generator to use (default: the template's own category)
        #[arg(long)]
        category: Option<Category>,

        /// Option override, repeatable (e.g. --set gap=2rem --set wrap=true)
        #[arg(long = "set", value_name = "KEY=VALUE")]
        overrides: Vec<String>,

        /// JSON file with a flat options object; --set values win
        #[arg(long)]
        options: Option<PathBuf>,

        /// What to print
        #[arg(long, value_enum, default_value_t = OutputFormat::Css)]
        format: OutputFormat,

        /// Write output to file instead of stdout
        #[arg(short)]
        o: Option<PathBuf>,
    },

    /// Serve the gallery with live previews
    Serve {
        /// Interface to bind
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Server port
        #[arg(long, default_value_t = 3333)]
        port: u16,
    },
}

/// Output format for the generate command.
#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Container and children CSS (default)
    Css,
    /// Markup only
    Html,
    /// `{containerCSS, childrenCSS, html}` object
    Json,
    /// Standalone preview page
    Preview,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::List { category, json } => {
            let templates: Vec<_> = catalog::all()
                .iter()
                .filter(|t| category.map_or(true, |c| t.category == c))
                .collect();
            if json {
                println!("{}", serde_json::to_string_pretty(&templates)?);
                return Ok(());
            }
            for category in Category::ALL {
                let group: Vec<_> = templates.iter().filter(|t| t.category == category).collect();
                if group.is_empty() {
                    continue;
                }
                println!("{}", category.label());
                for t in group {
                    println!("  {:<22} {:<22} {}", t.id, t.name, t.description);
                }
            }
        }

        Commands::Show { id } => {
            let Some(t) = catalog::find(&id) else {
                bail!("unknown template: {id} (run `layouts list`)");
            };
            println!("{} ({})", t.name, t.id);
            println!("category: {}", t.category);
            println!("{}", t.description);
            if t.options.is_empty() {
                println!("\nno options");
            } else {
                println!("\noptions:");
                for o in t.options {
                    match o.kind {
                        OptionKind::Text => println!("  {:<18} text    default {}", o.key, o.default),
                        OptionKind::Flag => println!("  {:<18} flag    default false", o.key),
                        OptionKind::Choice => {
                            println!("  {:<18} choice  one of {}", o.key, o.choices.join(", "))
                        }
                    }
                }
            }
        }

        Commands::Generate {
            id,
            category,
            overrides,
            options,
            format,
            o,
        } => {
            let mut layout_options = match options {
                Some(path) => LayoutOptions::from_json_file(&path)?,
                None => LayoutOptions::new(),
            };
            layout_options.extend(LayoutOptions::from_overrides(&overrides)?);

            let category = match (category, catalog::find(&id)) {
                (Some(c), _) => c,
                (None, Some(t)) => t.category,
                (None, None) => bail!("unknown template: {id} (run `layouts list`)"),
            };
            let layout = layout_catalog::get_layout_code(&id, category, &layout_options);
            if layout.is_empty() {
                tracing::warn!(template = %id, %category, "generator has no template for this id");
            }

            let (output, kind) = match format {
                OutputFormat::Css => (layout.combined_css(), "CSS"),
                OutputFormat::Html => (layout.html.clone(), "HTML"),
                OutputFormat::Json => (serde_json::to_string_pretty(&layout)?, "JSON"),
                OutputFormat::Preview => (preview::preview_for(&layout), "preview"),
            };

            match o {
                Some(path) => {
                    fs::write(&path, &output)
                        .with_context(|| format!("cannot write '{}'", path.display()))?;
                    eprintln!("wrote {kind} to {} ({} bytes)", path.display(), output.len());
                }
                None => println!("{output}"),
            }
        }

        Commands::Serve { host, port } => {
            layout_catalog::server::run_server(&host, port)
                .map_err(|e| anyhow::anyhow!("gallery server failed: {e}"))?;
        }
    }

    Ok(())
}
