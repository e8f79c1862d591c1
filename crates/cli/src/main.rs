//! Paper Lantern CLI - Database migrations and management tools.
//!
//! # Usage
//!
//! ```bash
//! # Run database migrations
//! pl-cli migrate
//!
//! # Seed the catalog with demo data
//! pl-cli seed
//!
//! # Create (or promote) an admin account
//! pl-cli admin create -e admin@example.com -f Ada -l Lovelace
//! ```
//!
//! # Commands
//!
//! - `migrate` - Run database migrations
//! - `seed` - Seed the catalog with demo categories and products
//! - `admin create` - Create admin accounts

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "pl-cli")]
#[command(author, version, about = "Paper Lantern CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Seed the catalog with demo data
    Seed,
    /// Manage admin accounts
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
}

#[derive(Subcommand)]
enum AdminAction {
    /// Create a new admin account, or promote an existing one
    Create {
        /// Admin email address
        #[arg(short, long)]
        email: String,

        /// Admin first name
        #[arg(short, long)]
        first_name: String,

        /// Admin last name
        #[arg(short, long)]
        last_name: String,

        /// Password (generated and printed if omitted)
        #[arg(short, long)]
        password: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Migrate => commands::migrate::run().await?,
        Commands::Seed => commands::seed::run().await?,
        Commands::Admin { action } => match action {
            AdminAction::Create {
                email,
                first_name,
                last_name,
                password,
            } => {
                commands::admin::create_user(&email, &first_name, &last_name, password.as_deref())
                    .await?;
            }
        },
    }
    Ok(())
}
