// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use std::str::FromStr;

use anyhow::Result;
use cli_bank::application::AccountService;
use cli_bank::cli::{Locale, Menu};
use cli_bank::domain::Amount;

/// Helper to build an exact amount from a literal like "50.00"
pub fn amount(text: &str) -> Amount {
    Amount::from_str(text).unwrap()
}

/// Helper to create a service with the default opening position (200.00 / 1000.00)
pub fn test_service() -> AccountService {
    AccountService::default()
}

/// Helper to create a service starting at the given balance with the default limit
pub fn service_at(balance: &str) -> Result<AccountService> {
    Ok(AccountService::open(amount(balance), amount("1000.00"))?)
}

/// Run a scripted console session and return everything it printed.
pub async fn run_session(service: &AccountService, locale: Locale, script: &str) -> Result<String> {
    let mut menu = Menu::new(service, script.as_bytes(), Vec::new(), locale, "R$");
    menu.run().await?;
    Ok(String::from_utf8(menu.into_output())?)
}
