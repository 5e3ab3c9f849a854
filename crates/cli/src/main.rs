//! Phone Dokan CLI - Account and catalog management tools.
//!
//! # Usage
//!
//! ```bash
//! # Create (or promote) an admin account
//! dokan-cli admin create -e admin@example.com -n "Admin Name" -p "a strong password"
//!
//! # Seed the catalog with sample products
//! dokan-cli seed
//! ```
//!
//! # Commands
//!
//! - `admin create` - Create an admin user, or promote an existing account
//! - `seed` - Insert sample products (skips ones already present)
//!
//! Connection settings come from `MONGODB_URI` and `MONGODB_DATABASE`,
//! loaded from the environment or a `.env` file.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "dokan-cli")]
#[command(author, version, about = "Phone Dokan CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage admin users
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
    /// Seed the catalog with sample products
    Seed,
}

#[derive(Subcommand)]
enum AdminAction {
    /// Create a new admin user, or promote an existing one
    Create {
        /// Admin email address
        #[arg(short, long)]
        email: String,

        /// Admin display name (username)
        #[arg(short, long)]
        name: String,

        /// Password for a newly created account (ignored when promoting)
        #[arg(short, long)]
        password: String,
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
        Commands::Admin { action } => match action {
            AdminAction::Create {
                email,
                name,
                password,
            } => {
                commands::admin::create_user(&email, &name, &password).await?;
            }
        },
        Commands::Seed => commands::seed::seed_products().await?,
    }
    Ok(())
}
