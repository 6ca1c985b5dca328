mod menu;
mod messages;

pub use menu::*;
pub use messages::*;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::io::{BufReader, stdin, stdout};
use tracing::{Level, info};

use crate::application::AccountService;
use crate::domain::{Amount, format_amount, parse_amount};

/// CLI Bank - Interactive Account Simulator
#[derive(Parser)]
#[command(name = "cli-bank")]
#[command(about = "An interactive bank account simulator with overdraft support")]
#[command(version)]
pub struct Cli {
    /// Opening balance (e.g., "200.00" or "200,00")
    #[arg(long, default_value = "200.00", value_parser = parse_amount, allow_hyphen_values = true)]
    pub opening_balance: Amount,

    /// Overdraft limit, must be positive
    #[arg(long, default_value = "1000.00", value_parser = parse_amount)]
    pub overdraft_limit: Amount,

    /// Language for the menu and messages
    #[arg(short, long, value_enum, default_value_t = Locale::En)]
    pub lang: Locale,

    /// Currency symbol shown before amounts
    #[arg(short, long, default_value = "R$")]
    pub currency: String,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Log to stderr so diagnostics never interleave with the menu.
    fn init_logging(&self) {
        let level = if self.verbose { Level::DEBUG } else { Level::WARN };
        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    }

    /// Build the account service from the command-line options.
    pub fn service(&self) -> Result<AccountService> {
        AccountService::open(self.opening_balance, self.overdraft_limit)
            .context("Invalid account configuration")
    }

    pub async fn run(self) -> Result<()> {
        self.init_logging();

        let service = self.service()?;
        info!(
            opening_balance = %format_amount(self.opening_balance),
            overdraft_limit = %format_amount(self.overdraft_limit),
            lang = ?self.lang,
            "account opened"
        );

        let mut menu = Menu::new(
            &service,
            BufReader::new(stdin()),
            stdout(),
            self.lang,
            self.currency,
        );
        menu.run().await.context("Console I/O failed")?;

        let balance = service.balance().await;
        info!(balance = %format_amount(balance), "session closed");
        Ok(())
    }
}
