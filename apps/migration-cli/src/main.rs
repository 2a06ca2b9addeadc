use clap::{Parser, ValueEnum};
use migration::{migrate, MigrationCommand};
use sea_orm::{ConnectOptions, Database};

const DEFAULT_DB_FILE: &str = "./articles.db";

#[derive(Clone, Copy, ValueEnum)]
enum Command {
    Up,
    Down,
    Fresh,
    Reset,
    Refresh,
    Status,
}

impl From<Command> for MigrationCommand {
    fn from(command: Command) -> Self {
        match command {
            Command::Up => MigrationCommand::Up,
            Command::Down => MigrationCommand::Down,
            Command::Fresh => MigrationCommand::Fresh,
            Command::Reset => MigrationCommand::Reset,
            Command::Refresh => MigrationCommand::Refresh,
            Command::Status => MigrationCommand::Status,
        }
    }
}

#[derive(Parser)]
#[command(name = "migration-cli")]
#[command(about = "Schema migrations for the articles SQLite store")]
struct Args {
    /// Migration command to run
    #[arg(value_enum)]
    command: Command,

    /// SQLite database file; created if missing
    #[arg(short, long, env = "ARTICLES_DB_FILE", default_value = DEFAULT_DB_FILE)]
    file: String,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stdout)
        .without_time()
        .with_target(false)
        .with_env_filter("migration=info,sqlx=warn")
        .init();

    let args = Args::parse();

    if args.file.trim().is_empty() {
        eprintln!("Database file path must not be empty");
        std::process::exit(2);
    }

    // In-memory stores vanish when the command exits, so only files are accepted.
    let url = format!("sqlite://{}?mode=rwc", args.file);
    let mut opts = ConnectOptions::new(url);
    opts.max_connections(1).sqlx_logging(false);

    let db = match Database::connect(opts).await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("Failed to open {}: {e}", args.file);
            std::process::exit(1);
        }
    };

    if let Err(e) = migrate(&db, args.command.into()).await {
        eprintln!("Migration failed: {e}");
        std::process::exit(1);
    }
}
