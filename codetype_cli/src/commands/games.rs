use anyhow::Result;
use clap::Args;
use codetype_lib::games::{NO_CLOSED_MESSAGE, NO_OPEN_MESSAGE};
use codetype_lib::validation;
use codetype_lib::{Client, GameBoard, StatusFilter};

use crate::output::{print_games, OutputFormat};

#[derive(Args, Default)]
pub struct GamesArgs {
    /// Status filter: all, open, closed [default: all]
    #[arg(long)]
    pub status: Option<String>,

    /// Page number [default: 1]
    #[arg(long)]
    pub page: Option<i64>,

    /// Servers per page (server default when omitted)
    #[arg(long)]
    pub limit: Option<i64>,
}

pub async fn run(args: &GamesArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let mut board = GameBoard::new();
    if let Some(limit) = args.limit {
        board = board.with_limit(validation::validate_page_size(limit)?);
    }
    if let Some(status) = &args.status {
        board.set_status_filter(validation::validate_status(status)?);
    }
    if let Some(page) = args.page {
        board.go_to_page(validation::validate_page(page)?);
    }

    board.refresh(client).await;

    eprintln!("{}", board.summary());
    if let Some(message) = board.error_message() {
        eprintln!("{}", message);
        return Ok(());
    }

    let status = board.status_filter();
    if matches!(status, StatusFilter::All | StatusFilter::Open) && board.open_games().is_empty() {
        eprintln!("{}", NO_OPEN_MESSAGE);
    }
    if matches!(status, StatusFilter::All | StatusFilter::Closed)
        && board.closed_games().is_empty()
    {
        eprintln!("{}", NO_CLOSED_MESSAGE);
    }

    print_games(&board.visible(), format)
}
