use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use admincenter::auth::{self, DynUserStore};
use admincenter::config::{Cli, Command, Config};
use admincenter::db::SqlxPool;
use admincenter::server;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::from_cli(&cli)?;

    let pool = SqlxPool::connect(&config.database_uri).await?;
    let users = auth::open(&pool);

    match cli.command {
        Some(command) => run_command(command, &users).await?,
        None => server::run(&config, pool).await?,
    }

    Ok(())
}

async fn run_command(command: Command, users: &DynUserStore) -> Result<()> {
    match command {
        Command::AddUser { username, password } => {
            users.add_user(&username, &password).await?;
            tracing::info!(%username, "user created");
        }
        Command::SetPassword { username, password } => {
            users.update_password(&username, &password).await?;
            tracing::info!(%username, "password updated");
        }
        Command::RemoveUser { username } => {
            users.remove_user(&username).await?;
            tracing::info!(%username, "user removed");
        }
        Command::ListUsers => {
            for user in users.list_users().await? {
                println!("{}\t{}", user.id, user.username);
            }
        }
    }
    Ok(())
}
