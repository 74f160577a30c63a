//! CLI administration tool for records-api.
//!
//! Provides database diagnostics, record counts and bulk purges without
//! going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Apply pending migrations
//! cargo run --bin admin -- db migrate
//!
//! # Show record counts per resource
//! cargo run --bin admin -- stats
//!
//! # Delete every book (asks for confirmation unless -y is given)
//! cargo run --bin admin -- purge books
//! ```
//!
//! # Environment Variables
//!
//! Uses the same database settings as the server: `DATABASE_URL`, or
//! `DB_HOST`, `DB_PORT`, `DB_USER`, `DB_PASSWORD` and `DB_NAME`.

use records_api::{config, server};

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;

/// CLI tool for managing records-api.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Show record counts
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },

    /// Delete every record of a resource
    Purge {
        resource: ResourceKind,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,

    /// Apply pending migrations
    Migrate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ResourceKind {
    Books,
    Menus,
    /// Orders, served under `/api/v1/staffs`
    Staffs,
    Students,
    #[value(name = "student_information")]
    StudentInformation,
}

impl ResourceKind {
    const ALL: [ResourceKind; 5] = [
        ResourceKind::Books,
        ResourceKind::Menus,
        ResourceKind::Staffs,
        ResourceKind::Students,
        ResourceKind::StudentInformation,
    ];

    fn table(self) -> &'static str {
        match self {
            ResourceKind::Books => "books",
            ResourceKind::Menus => "menus",
            ResourceKind::Staffs => "orders",
            ResourceKind::Students => "students",
            ResourceKind::StudentInformation => "student_information",
        }
    }

    fn label(self) -> &'static str {
        match self {
            ResourceKind::Books => "Books",
            ResourceKind::Menus => "Menus",
            ResourceKind::Staffs => "Orders",
            ResourceKind::Students => "Students",
            ResourceKind::StudentInformation => "Student information",
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    let pool = server::connect(&config).await?;

    match cli.command {
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
        Commands::Purge { resource, yes } => purge(resource, yes, &pool).await?,
    }

    Ok(())
}

/// Displays the number of stored records for every resource.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    for kind in ResourceKind::ALL {
        let count = count_rows(pool, kind).await?;
        println!(
            "  {:<21} {}",
            format!("{}:", kind.label()),
            count.to_string().bright_green().bold()
        );
    }
    println!();

    Ok(())
}

async fn count_rows(pool: &PgPool, kind: ResourceKind) -> Result<i64> {
    let sql = format!("SELECT COUNT(*) FROM {}", kind.table());
    let count: i64 = sqlx::query_scalar(&sql).fetch_one(pool).await?;
    Ok(count)
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
        DbAction::Migrate => {
            println!("{}", "🚚 Applying migrations...".bright_blue());

            server::migrate(pool).await?;

            println!("{}", "✅ Migrations applied".green().bold());
        }
    }

    Ok(())
}

/// Deletes every row of one resource after confirmation.
///
/// Requires confirmation (default: No) unless `--yes` is passed.
async fn purge(kind: ResourceKind, skip_confirm: bool, pool: &PgPool) -> Result<()> {
    println!("{}", "🗑️  Purge Records".bright_blue().bold());
    println!();

    let count = count_rows(pool, kind).await?;
    if count == 0 {
        println!("{}", format!("  No {} to delete", kind.table()).yellow());
        return Ok(());
    }

    println!("  Resource: {}", kind.label().cyan());
    println!("  Records:  {}", count.to_string().bright_yellow().bold());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete all {count} records?"))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let sql = format!("DELETE FROM {}", kind.table());
    let result = sqlx::query(&sql).execute(pool).await?;

    println!();
    println!(
        "{}",
        format!("✅ Deleted {} records", result.rows_affected())
            .green()
            .bold()
    );
    println!();

    Ok(())
}
