mod commands;
mod config;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::env;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use config::Config;
use smartcity::db::Database;
use smartcity::issues::IssueStore;
use smartcity::models::IssueStatus;
use smartcity::session::SessionStore;

#[derive(Parser)]
#[command(name = "smartcity")]
#[command(about = "SmartCity citizen-services portal")]
#[command(version)]
struct Cli {
    /// Data directory (defaults to the nearest .smartcity directory)
    #[arg(long, global = true, env = "SMARTCITY_DIR")]
    dir: Option<PathBuf>,

    /// Simulated login latency in milliseconds
    #[arg(long, global = true, env = "SMARTCITY_LOGIN_DELAY_MS", default_value_t = 0)]
    login_delay_ms: u64,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a portal in the current directory
    Init,

    /// Log in (any well-formed email, password of 6+ characters)
    Login {
        email: String,
        password: String,
    },

    /// Log out
    Logout,

    /// Show who is logged in
    Whoami,

    /// Welcome page with featured services
    Home,

    /// List all city services
    Services,

    /// Report an issue
    Report {
        /// Short title
        title: String,
        /// What is wrong
        description: String,
        /// Street, ward or GPS position
        #[arg(short, long, default_value = "")]
        location: String,
    },

    /// List reported issues
    List {
        /// Only show issues with this status
        #[arg(short, long)]
        status: Option<IssueStatus>,
    },

    /// Change the status of an issue
    SetStatus {
        /// Issue ID
        id: i64,
        /// open, in-progress or resolved
        status: IssueStatus,
    },

    /// Delete every reported issue
    Clear {
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },

    /// Export issues
    Export {
        #[arg(short, long, value_enum, default_value_t = ExportFormat::Json)]
        format: ExportFormat,
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ExportFormat {
    Json,
    Markdown,
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_env("SMARTCITY_LOG")
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn get_db(config: &Config) -> Result<Database> {
    Database::open(&config.db_path()).context("Failed to open database")
}

fn require_login(sessions: &SessionStore<'_>) -> Result<()> {
    if !sessions.is_authenticated()? {
        bail!("Not logged in. Run 'smartcity login' first.");
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    let cwd = env::current_dir()?;
    let dir = cli.dir.as_deref();
    let resolve_config = || Config::resolve(dir, &cwd, cli.login_delay_ms);

    match cli.command {
        Commands::Init => {
            let data_dir = dir
                .map(PathBuf::from)
                .unwrap_or_else(|| cwd.join(config::DATA_DIR_NAME));
            commands::init::run(&data_dir)
        }

        Commands::Login { email, password } => {
            let config = resolve_config()?;
            let db = get_db(&config)?;
            let sessions = SessionStore::new(&db).with_login_delay(config.login_delay);
            commands::session::login(&sessions, &email, &password)
        }

        Commands::Logout => {
            let db = get_db(&resolve_config()?)?;
            commands::session::logout(&SessionStore::new(&db))
        }

        Commands::Whoami => {
            let db = get_db(&resolve_config()?)?;
            commands::session::whoami(&SessionStore::new(&db))
        }

        Commands::Home => commands::services::home(),

        Commands::Services => commands::services::run(),

        Commands::Report {
            title,
            description,
            location,
        } => {
            let db = get_db(&resolve_config()?)?;
            require_login(&SessionStore::new(&db))?;
            commands::create::run(&IssueStore::new(&db), &title, &description, &location)
        }

        Commands::List { status } => {
            let db = get_db(&resolve_config()?)?;
            require_login(&SessionStore::new(&db))?;
            commands::list::run(&IssueStore::new(&db), status)
        }

        Commands::SetStatus { id, status } => {
            let db = get_db(&resolve_config()?)?;
            require_login(&SessionStore::new(&db))?;
            commands::status::run(&IssueStore::new(&db), id, status)
        }

        Commands::Clear { force } => {
            let db = get_db(&resolve_config()?)?;
            require_login(&SessionStore::new(&db))?;
            commands::clear::run(&IssueStore::new(&db), force)
        }

        Commands::Export { format, output } => {
            let db = get_db(&resolve_config()?)?;
            require_login(&SessionStore::new(&db))?;
            let issues = IssueStore::new(&db);
            match format {
                ExportFormat::Json => commands::export::run_json(&issues, output.as_deref()),
                ExportFormat::Markdown => {
                    commands::export::run_markdown(&issues, output.as_deref())
                }
            }
        }
    }
}
