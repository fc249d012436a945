use clap::{Parser, Subcommand};
use dialoguer::Password;
use dotenvy::dotenv;

use complaintdesk_cli::{init_database, set_admin_password};
use complaintdesk_config::{AdminSeedConfig, DatabaseConfig};
use complaintdesk_db::init_db_pool;

#[derive(Parser)]
#[command(name = "complaintdesk-cli")]
#[command(about = "Complaint Desk CLI - Database and admin account tools", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the database file, apply migrations and seed the default admin
    InitDb,
    /// Replace the password of an existing admin account
    SetAdminPassword {
        /// Username of the admin
        #[arg(short = 'u', long, default_value = "admin")]
        username: String,

        /// New password (will be prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    let cli = Cli::parse();
    let database = DatabaseConfig::from_env();

    let pool = match init_db_pool(&database).await {
        Ok(pool) => pool,
        Err(e) => {
            eprintln!("❌ Failed to open database {}: {}", database.url, e);
            std::process::exit(1);
        }
    };

    match cli.command {
        Commands::InitDb => handle_init_db(&pool).await,
        Commands::SetAdminPassword { username, password } => {
            handle_set_admin_password(&pool, &username, password).await
        }
    }
}

async fn handle_init_db(pool: &sqlx::SqlitePool) {
    let seed = AdminSeedConfig::from_env();

    match init_database(pool, &seed).await {
        Ok(true) => {
            println!("✅ Database initialized");
            println!("   Default admin created: {}", seed.username);
        }
        Ok(false) => {
            println!("✅ Database initialized");
            println!("   Admin {} already exists", seed.username);
        }
        Err(e) => {
            eprintln!("❌ Error initializing database: {}", e);
            std::process::exit(1);
        }
    }
}

async fn handle_set_admin_password(
    pool: &sqlx::SqlitePool,
    username: &str,
    password: Option<String>,
) {
    let password = match password {
        Some(password) => password,
        None => match Password::new()
            .with_prompt("New password")
            .with_confirmation("Confirm password", "Passwords don't match")
            .interact()
        {
            Ok(password) => password,
            Err(e) => {
                eprintln!("❌ Failed to read password: {}", e);
                std::process::exit(1);
            }
        },
    };

    match set_admin_password(pool, username, &password).await {
        Ok(()) => println!("✅ Password updated for admin {}", username),
        Err(e) => {
            eprintln!("❌ Error updating password: {}", e);
            std::process::exit(1);
        }
    }
}
