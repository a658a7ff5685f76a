use anyhow::Result;
use clap::Args;
use codetype_lib::portfolio::DEFAULT_USER_ID;
use codetype_lib::{Client, Portfolio};

use crate::output::{print_profile, OutputFormat};

#[derive(Args)]
pub struct PortfolioArgs {
    /// Portfolio owner
    #[arg(long, default_value_t = DEFAULT_USER_ID)]
    pub user_id: i64,
}

impl Default for PortfolioArgs {
    fn default() -> Self {
        Self {
            user_id: DEFAULT_USER_ID,
        }
    }
}

pub async fn run(args: &PortfolioArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let mut portfolio = Portfolio::new(args.user_id);
    portfolio.load(client).await;

    if let Some(message) = portfolio.error_message() {
        eprintln!("{}", message);
    }
    match portfolio.view() {
        Some(view) => print_profile(&view, format),
        None => {
            if let Some(message) = portfolio.empty_message() {
                eprintln!("{}", message);
            }
            Ok(())
        }
    }
}
