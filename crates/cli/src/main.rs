//! Breadbox CLI - Database migrations and catalog management tools.
//!
//! # Usage
//!
//! ```bash
//! # Run database migrations
//! breadbox migrate
//!
//! # Create a tenant
//! breadbox tenant create --slug blondies --color teal --hue 180 \
//!     --message "Homemade cakes and breakfasts" --phone 5491144444444
//!
//! # Seed the built-in demo catalog into a tenant
//! breadbox seed --tenant <tenant-id>
//!
//! # Seed a catalog export from a file
//! breadbox seed --tenant <tenant-id> --file catalog.json
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "breadbox")]
#[command(author, version, about = "Breadbox CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Manage tenants
    Tenant {
        #[command(subcommand)]
        action: TenantAction,
    },
    /// Seed a tenant's catalog
    Seed {
        /// Tenant id to seed into
        #[arg(short, long)]
        tenant: String,

        /// JSON catalog file (defaults to the built-in demo catalog)
        #[arg(short, long)]
        file: Option<String>,
    },
}

#[derive(Subcommand)]
enum TenantAction {
    /// Create a new tenant
    Create {
        /// Tenant id (generated when omitted)
        #[arg(long)]
        id: Option<String>,

        /// URL-safe storefront handle
        #[arg(short, long)]
        slug: String,

        /// Brand palette name
        #[arg(short, long, default_value = "teal")]
        color: String,

        /// Brand accent hue (0-360)
        #[arg(long, default_value_t = 180)]
        hue: i16,

        /// Storefront pitch message
        #[arg(short, long, default_value = "")]
        message: String,

        /// Contact phone
        #[arg(short, long, default_value = "")]
        phone: String,
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
        Commands::Tenant { action } => match action {
            TenantAction::Create {
                id,
                slug,
                color,
                hue,
                message,
                phone,
            } => {
                commands::tenant::create(id, slug, color, hue, message, phone).await?;
            }
        },
        Commands::Seed { tenant, file } => {
            commands::seed::run(&tenant, file.as_deref()).await?;
        }
    }
    Ok(())
}
