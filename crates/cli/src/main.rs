//! Rocket Cart CLI - drive the cart store from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Show the cart
//! rc-cli show
//!
//! # Add one unit of product 1
//! rc-cli add 1
//!
//! # Set the amount of product 1 to 3
//! rc-cli update 1 3
//!
//! # Remove product 1
//! rc-cli remove 1
//! ```
//!
//! Configuration comes from the environment (see `rocket_cart::config`).
//! Rejected operations are reported as warnings on stderr; the cart is
//! printed after every command.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use rocket_cart_core::ProductId;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "rc-cli")]
#[command(author, version, about = "Rocket Cart CLI")]
struct Cli {
    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the cart
    Show,
    /// Add one unit of a product
    Add {
        /// Product ID
        id: ProductId,
    },
    /// Remove a product from the cart
    Remove {
        /// Product ID
        id: ProductId,
    },
    /// Set the amount of a product already in the cart
    Update {
        /// Product ID
        id: ProductId,

        /// New amount (zero or negative is ignored)
        #[arg(allow_negative_numbers = true)]
        amount: i64,
    },
}

#[tokio::main]
async fn main() {
    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "rocket_cart=info,rc_cli=info".into());

    let cli = Cli::parse();

    let json = cli.log_json.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
    });
    let pretty = (!cli.log_json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json)
        .with(pretty)
        .init();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = commands::cart::open_store()?;

    match cli.command {
        Commands::Show => {}
        Commands::Add { id } => store.add_product(id).await,
        Commands::Remove { id } => store.remove_product(id),
        Commands::Update { id, amount } => {
            store
                .update_product_amount(rocket_cart::UpdateProductAmount {
                    product_id: id,
                    amount,
                })
                .await;
        }
    }

    commands::cart::print(store.cart());
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_update_accepts_negative_amount() {
        let cli = Cli::try_parse_from(["rc-cli", "update", "3", "-2"]).unwrap_or_else(|e| panic!("{e}"));
        assert!(matches!(
            cli.command,
            Commands::Update { id, amount: -2 } if id == ProductId::new(3)
        ));
    }

    #[test]
    fn test_log_json_flag_after_subcommand() {
        let cli = Cli::try_parse_from(["rc-cli", "show", "--log-json"]).unwrap_or_else(|e| panic!("{e}"));
        assert!(cli.log_json);
        assert!(matches!(cli.command, Commands::Show));
    }

    #[test]
    fn test_rejects_non_numeric_id() {
        assert!(Cli::try_parse_from(["rc-cli", "add", "sneakers"]).is_err());
    }
}
