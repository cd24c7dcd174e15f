//! Portfolio command-line entry point.
//!
//! # Responsibility
//! - Resolve configuration from the environment.
//! - Translate subcommands into mutation API calls against the on-disk store.
//! - Write the rendered page for the page-layout collaborator.

use clap::{Parser, Subcommand, ValueEnum};
use log::info;
use portfolio_core::db::open_db;
use portfolio_core::{
    core_version, default_log_level, init_logging, render_page, submit_assessment_form, Category,
    ItemInput, PageSurfaces, PortfolioService, SqliteItemStore,
};
use std::path::PathBuf;
use std::process::ExitCode;

const DB_FILE_NAME: &str = "portfolio.sqlite3";

/// Environment-derived settings.
#[derive(Debug, Clone, PartialEq, Eq)]
struct CliConfig {
    db_path: PathBuf,
    log_dir: Option<String>,
    log_level: String,
}

impl CliConfig {
    fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        Self {
            db_path: non_empty("PORTFOLIO_DB_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| std::env::temp_dir().join(DB_FILE_NAME)),
            log_dir: non_empty("PORTFOLIO_LOG_DIR"),
            log_level: non_empty("PORTFOLIO_LOG_LEVEL")
                .unwrap_or_else(|| default_log_level().to_string()),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "portfolio")]
#[command(about = "Personal portfolio store and page renderer")]
#[command(
    after_help = "Environment:\n  PORTFOLIO_DB_PATH    Item store database file\n  PORTFOLIO_LOG_DIR    Absolute log directory (logging off when unset)\n  PORTFOLIO_LOG_LEVEL  trace|debug|info|warn|error"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, PartialEq, Eq, Subcommand)]
enum Commands {
    /// Append an item to a category.
    Add {
        #[arg(value_enum)]
        category: CategoryCli,
        title: String,
        #[arg(long)]
        link: Option<String>,
        #[arg(long)]
        image: Option<String>,
    },
    /// Remove the item at an index.
    Remove {
        /// Kept as text: unknown categories are ignored by the service, not rejected here.
        category: String,
        index: usize,
    },
    /// Print category contents with their indices.
    List {
        #[arg(value_enum)]
        category: Option<CategoryCli>,
    },
    /// Write the rendered page.
    Render {
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Submit the add-assessment form.
    Form {
        title: String,
        #[arg(default_value = "")]
        link: String,
    },
    Version,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum CategoryCli {
    Achievements,
    Projects,
    Assessments,
}

impl From<CategoryCli> for Category {
    fn from(value: CategoryCli) -> Self {
        match value {
            CategoryCli::Achievements => Category::Achievements,
            CategoryCli::Projects => Category::Projects,
            CategoryCli::Assessments => Category::Assessments,
        }
    }
}

/// Builds add input; blank link/image flags count as absent.
fn add_input(title: String, link: Option<String>, image: Option<String>) -> ItemInput {
    let non_blank = |value: Option<String>| value.filter(|value| !value.trim().is_empty());
    ItemInput {
        title,
        link: non_blank(link),
        image: non_blank(image),
    }
}

fn run(config: &CliConfig, command: Commands) -> Result<(), String> {
    if command == Commands::Version {
        println!("portfolio_core version={}", core_version());
        return Ok(());
    }

    let conn = open_db(&config.db_path)
        .map_err(|err| format!("failed to open `{}`: {err}", config.db_path.display()))?;
    let mut service =
        PortfolioService::start(SqliteItemStore::new(&conn), PageSurfaces::standard());

    match command {
        Commands::Add {
            category,
            title,
            link,
            image,
        } => {
            let outcome = service.add(category.into(), add_input(title, link, image));
            println!("{outcome}");
        }
        Commands::Remove { category, index } => {
            println!("{}", service.remove_by_name(&category, index));
        }
        Commands::List { category } => {
            let categories = match category {
                Some(category) => vec![Category::from(category)],
                None => Category::ALL.to_vec(),
            };
            for category in categories {
                println!("{category}:");
                for (index, item) in service.portfolio().items(category).iter().enumerate() {
                    let link = item.link.as_deref().unwrap_or("-");
                    println!("  [{index}] {} ({link})", item.title);
                }
            }
        }
        Commands::Render { out } => {
            let page = render_page(service.surfaces());
            match out {
                Some(path) => {
                    std::fs::write(&path, page)
                        .map_err(|err| format!("failed to write `{}`: {err}", path.display()))?;
                    info!(
                        "event=page_write module=cli status=ok path={}",
                        path.display()
                    );
                    println!("wrote {}", path.display());
                }
                None => print!("{page}"),
            }
        }
        Commands::Form { title, link } => {
            let feedback = submit_assessment_form(&mut service, &title, &link)
                .map_err(|err| err.to_string())?;
            println!("{}", feedback.message);
        }
        Commands::Version => {}
    }

    Ok(())
}

fn main() -> ExitCode {
    let config = CliConfig::from_env();
    if let Some(log_dir) = &config.log_dir {
        if let Err(err) = init_logging(&config.log_level, log_dir) {
            eprintln!("warning: logging disabled: {err}");
        }
    }

    let cli = Cli::parse();
    match run(&config, cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
