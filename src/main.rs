use clap::{Parser, Subcommand};
use franchise_site::contact::{FranchiseInquiry, Outbox, QuickConsult};
use franchise_site::store::ContentStore;
use franchise_site::{config, content, generate, output, script};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "franchise-site")]
#[command(about = "Single-page franchise marketing site builder")]
#[command(long_about = "\
Single-page franchise marketing site builder

All page content lives in one JSON document. Without --content the built-in
document is used. Edits are TOML scripts applied in memory before rendering;
the content file is never rewritten.

Layout:

  .
  ├── config.toml     # Site config (optional; colors, map bounds, contact)
  ├── content.json    # Content document (optional; see dump-content)
  └── edits.toml      # Edit script (optional)

Section order comes from the document's sectionOrder list. Unknown entries
render nothing; run 'franchise-site check' to list them.

Run 'franchise-site gen-config' to generate a documented config.toml.")]
#[command(version = VERSION)]
struct Cli {
    /// Directory holding config.toml
    #[arg(long, default_value = ".", global = true)]
    config_dir: PathBuf,

    /// Enable info-level logging (otherwise RUST_LOG applies)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

/// Where the document comes from and which edits run on it.
#[derive(clap::Args, Clone)]
struct ContentArgs {
    /// Content document (JSON). Defaults to the built-in document
    #[arg(long)]
    content: Option<PathBuf>,

    /// Edit script (TOML) applied before anything else
    #[arg(long)]
    edits: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Apply edits and render the page into the output directory
    Build {
        #[command(flatten)]
        content: ContentArgs,

        /// Output directory
        #[arg(long, default_value = "dist")]
        output: PathBuf,
    },
    /// Report section order problems and item counts without rendering
    Check {
        #[command(flatten)]
        content: ContentArgs,

        /// Exit non-zero when sectionOrder has unknown entries
        #[arg(long)]
        strict: bool,
    },
    /// Print the content document (after edits) as JSON
    DumpContent {
        #[command(flatten)]
        content: ContentArgs,
    },
    /// Print a stock config.toml with all options documented
    GenConfig,
    /// Compose a contact message and print its mailto URL
    Consult {
        #[command(subcommand)]
        form: ConsultForm,
    },
}

#[derive(Subcommand)]
enum ConsultForm {
    /// The sticky quick-consult bar
    Quick {
        /// Free text, e.g. "name / region / phone"
        #[arg(long, default_value = "")]
        message: String,

        /// Agree to the privacy policy
        #[arg(long)]
        agree: bool,
    },
    /// The franchise inquiry form
    Inquiry {
        #[arg(long, default_value = "")]
        name: String,

        #[arg(long, default_value = "")]
        phone: String,

        /// Preferred region
        #[arg(long, default_value = "")]
        location: String,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Build { content, output } => {
            let site_config = config::load_config(&cli.config_dir)?;
            let store = load_store(&content)?;
            println!("==> Generating HTML → {}", output.display());
            let report = generate::generate(store.content(), &site_config, &output)?;
            output::print_generate_output(&report);
        }
        Command::Check { content, strict } => {
            config::load_config(&cli.config_dir)?;
            let store = load_store(&content)?;
            output::print_check_output(store.content());
            if strict && output::has_unknown_sections(store.content()) {
                std::process::exit(1);
            }
        }
        Command::DumpContent { content } => {
            let store = load_store(&content)?;
            println!("{}", serde_json::to_string_pretty(store.content())?);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
        Command::Consult { form } => {
            let site_config = config::load_config(&cli.config_dir)?;
            let mut outbox = Outbox::default();
            let submission = match form {
                ConsultForm::Quick { message, agree } => QuickConsult {
                    message,
                    agree_privacy: agree,
                }
                .submit(&site_config.contact, &mut outbox),
                ConsultForm::Inquiry {
                    name,
                    phone,
                    location,
                } => FranchiseInquiry {
                    name,
                    phone,
                    email: String::new(),
                    location,
                }
                .submit(&site_config.contact, &mut outbox),
            };
            output::print_consult_output(&submission);
            if outbox.sent.is_empty() {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

/// Load the document, run the edit script against it, and report the steps.
fn load_store(args: &ContentArgs) -> Result<ContentStore, Box<dyn std::error::Error>> {
    let document = content::load_content(args.content.as_deref())?;
    let mut store = ContentStore::new(document);
    if let Some(path) = &args.edits {
        apply_edits(&mut store, path)?;
    }
    Ok(store)
}

fn apply_edits(store: &mut ContentStore, path: &Path) -> Result<(), script::ScriptError> {
    let edits = script::load_script(path)?;
    let applied = script::apply_script(store, &edits)?;
    // Edit output goes to stderr so dump-content stays valid JSON
    for line in output::format_edit_output(&applied) {
        eprintln!("{}", line);
    }
    Ok(())
}
