use anyhow::{bail, Result};
use clap::Args;
use codetype_lib::catalog::DETAIL_ERROR_MESSAGE;
use codetype_lib::validation;
use codetype_lib::{AlcoholFilter, Client, CodeTypeError, RecipeCatalog, RecipeSort};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use crate::output::{print_recipe_detail, print_recipes, OutputFormat};

#[derive(Args, Default)]
pub struct BarArgs {
    /// Show a single recipe by ID
    #[arg(long)]
    pub id: Option<i64>,

    /// Filter by base spirit ID (see the bases listed on stderr)
    #[arg(long)]
    pub base: Option<i64>,

    /// Alcohol filter: all, alcoholic, non-alcohol [default: all]
    #[arg(long)]
    pub alcohol: Option<String>,

    /// Sort: newest, name, abv, abv-desc, prep-time (or -created_at, -abv, ...) [default: newest]
    #[arg(long)]
    pub sort: Option<String>,

    /// Search recipe names and ingredients
    #[arg(long)]
    pub search: Option<String>,

    /// Page number [default: 1]
    #[arg(long)]
    pub page: Option<i64>,

    /// Recipes per page [default: 12]
    #[arg(long)]
    pub page_size: Option<i64>,

    /// Read commands from stdin and re-render after each one
    #[arg(long)]
    pub interactive: bool,
}

/// One line typed in interactive mode.
#[derive(Debug, PartialEq)]
pub enum Action {
    Next,
    Previous,
    Page(i64),
    Base(Option<i64>),
    Alcohol(AlcoholFilter),
    Sort(RecipeSort),
    Search(String),
    Clear,
    Open(i64),
    Close,
    Help,
    Quit,
}

pub const HELP: &str = "commands: next | prev | page N | base ID|all | alcohol all|alcoholic|non-alcohol \
| sort KEY | search TEXT | clear | open ID | close | help | quit";

/// Parses an interactive command. Blank lines yield `None`.
pub fn parse_action(line: &str) -> Result<Option<Action>, CodeTypeError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (verb, rest) = line
        .split_once(char::is_whitespace)
        .map(|(verb, rest)| (verb, rest.trim()))
        .unwrap_or((line, ""));
    let action = match verb.to_lowercase().as_str() {
        "next" | "n" => Action::Next,
        "prev" | "previous" | "p" => Action::Previous,
        "page" => Action::Page(validation::validate_page(parse_number(rest)?)?),
        "base" if rest.eq_ignore_ascii_case("all") || rest.is_empty() => Action::Base(None),
        "base" => Action::Base(Some(validation::validate_id(rest)?)),
        "alcohol" => Action::Alcohol(validation::validate_alcohol(rest)?),
        "sort" => Action::Sort(validation::validate_sort(rest)?),
        "search" | "s" => Action::Search(validation::sanitize_search(rest)?),
        "clear" => Action::Clear,
        "open" => Action::Open(validation::validate_id(rest)?),
        "close" => Action::Close,
        "help" | "?" => Action::Help,
        "quit" | "exit" | "q" => Action::Quit,
        other => {
            return Err(CodeTypeError::InvalidInput(format!(
                "unknown command '{}'",
                other
            )))
        }
    };
    Ok(Some(action))
}

fn parse_number(input: &str) -> Result<i64, CodeTypeError> {
    input
        .parse::<i64>()
        .map_err(|_| CodeTypeError::InvalidInput(format!("'{}' is not a number", input)))
}

pub async fn run(args: &BarArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let page_size = validation::validate_page_size(args.page_size.unwrap_or(12))?;
    let mut catalog = RecipeCatalog::new().with_page_size(page_size);
    catalog.load_bases(client).await;

    if let Some(id) = args.id {
        catalog.open_detail(client, id).await;
        return match catalog.detail() {
            Some(recipe) => print_recipe_detail(recipe, format),
            None => bail!(
                "{} ({})",
                DETAIL_ERROR_MESSAGE,
                catalog
                    .detail_error()
                    .map(|e| e.to_string())
                    .unwrap_or_default()
            ),
        };
    }

    catalog.select_base(args.base);
    if let Some(alcohol) = &args.alcohol {
        catalog.set_alcohol_filter(validation::validate_alcohol(alcohol)?);
    }
    if let Some(sort) = &args.sort {
        catalog.set_sort(validation::validate_sort(sort)?);
    }
    if let Some(search) = &args.search {
        catalog.set_search_input(&validation::sanitize_search(search)?);
        catalog.submit_search();
    }
    if let Some(page) = args.page {
        catalog.go_to_page(validation::validate_page(page)?);
    }

    catalog.refresh(client).await;
    render(&catalog, format)?;

    if args.interactive {
        interact(&mut catalog, client, format).await?;
    }
    Ok(())
}

fn render(catalog: &RecipeCatalog, format: &OutputFormat) -> Result<()> {
    let bases: Vec<String> = catalog
        .base_options()
        .into_iter()
        .map(|(id, label)| match id {
            Some(id) => format!("{} ({})", label, id),
            None => label,
        })
        .collect();
    eprintln!("Bases: {}", bases.join(", "));
    let criteria = catalog.criteria();
    eprintln!(
        "Filters: {} · {} · {}{}",
        criteria
            .base_id
            .map(|id| format!("base {}", id))
            .unwrap_or_else(|| "All bases".to_string()),
        criteria.alcohol.label(),
        criteria.sort.label(),
        if criteria.search.is_empty() {
            String::new()
        } else {
            format!(" · \"{}\"", criteria.search)
        }
    );
    eprintln!("{}", catalog.summary());
    if let Some(message) = catalog.error_message() {
        eprintln!("{}", message);
    }
    if let Some(message) = catalog.empty_message() {
        eprintln!("{}", message);
        return Ok(());
    }
    print_recipes(catalog.recipes(), format)
}

async fn interact(
    catalog: &mut RecipeCatalog,
    client: &Client,
    format: &OutputFormat,
) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stderr = tokio::io::stderr();
    eprintln!("{}", HELP);
    loop {
        stderr.write_all(b"bar> ").await?;
        stderr.flush().await?;
        let Some(line) = lines.next_line().await? else {
            break;
        };
        let action = match parse_action(&line) {
            Ok(Some(action)) => action,
            Ok(None) => continue,
            Err(e) => {
                eprintln!("{}", e);
                continue;
            }
        };
        let refetch = match action {
            Action::Quit => break,
            Action::Help => {
                eprintln!("{}", HELP);
                false
            }
            Action::Next => {
                let moved = catalog.next_page();
                if !moved {
                    eprintln!("Already on the last page.");
                }
                moved
            }
            Action::Previous => {
                let moved = catalog.previous_page();
                if !moved {
                    eprintln!("Already on the first page.");
                }
                moved
            }
            Action::Page(page) => {
                catalog.go_to_page(page);
                true
            }
            Action::Base(base) => {
                catalog.select_base(base);
                true
            }
            Action::Alcohol(alcohol) => {
                catalog.set_alcohol_filter(alcohol);
                true
            }
            Action::Sort(sort) => {
                catalog.set_sort(sort);
                true
            }
            Action::Search(text) => {
                catalog.set_search_input(&text);
                catalog.submit_search();
                true
            }
            Action::Clear => {
                catalog.clear_filters();
                true
            }
            Action::Open(id) => {
                catalog.open_detail(client, id).await;
                match catalog.detail() {
                    Some(recipe) => print_recipe_detail(recipe, format)?,
                    None => eprintln!("{}", DETAIL_ERROR_MESSAGE),
                }
                false
            }
            Action::Close => {
                catalog.close_detail();
                render(catalog, format)?;
                false
            }
        };
        if refetch {
            catalog.refresh(client).await;
            render(catalog, format)?;
        }
    }
    Ok(())
}
