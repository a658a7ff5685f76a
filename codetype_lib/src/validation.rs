use codetype_api::{AlcoholFilter, RecipeSort};

use crate::error::CodeTypeError;
use crate::games::StatusFilter;
use crate::routes::Route;

pub const MAX_SEARCH_LENGTH: usize = 100;
pub const MAX_PAGE_SIZE: i64 = 100;

/// Friendly names accepted alongside the wire tokens.
pub const SORT_ALIASES: &[(&str, RecipeSort)] = &[
    ("newest", RecipeSort::Newest),
    ("name", RecipeSort::Name),
    ("abv", RecipeSort::AbvAsc),
    ("abv-asc", RecipeSort::AbvAsc),
    ("abv-desc", RecipeSort::AbvDesc),
    ("prep-time", RecipeSort::PrepTime),
];

/// Strip ASCII control characters (0x00-0x1F except space 0x20), trim whitespace,
/// and enforce a byte-length limit. An empty result is allowed: it clears the search.
pub fn sanitize_search(input: &str) -> Result<String, CodeTypeError> {
    if input.len() > MAX_SEARCH_LENGTH {
        return Err(CodeTypeError::InvalidInput(format!(
            "search exceeds maximum length of {} bytes",
            MAX_SEARCH_LENGTH
        )));
    }
    Ok(input
        .chars()
        .filter(|c| !c.is_ascii_control() || *c == ' ')
        .collect::<String>()
        .trim()
        .to_string())
}

/// Validate a sort: either the wire token (`-abv`) or a friendly alias (`abv-desc`).
pub fn validate_sort(input: &str) -> Result<RecipeSort, CodeTypeError> {
    let lower = input.trim().to_lowercase();
    if let Some((_, sort)) = SORT_ALIASES.iter().find(|(alias, _)| *alias == lower) {
        return Ok(*sort);
    }
    lower.parse::<RecipeSort>().map_err(|_| {
        let aliases: Vec<&str> = SORT_ALIASES.iter().map(|(alias, _)| *alias).collect();
        CodeTypeError::InvalidInput(format!(
            "unknown sort '{}'. Valid values: {}",
            input,
            aliases.join(", ")
        ))
    })
}

pub fn validate_alcohol(input: &str) -> Result<AlcoholFilter, CodeTypeError> {
    input
        .trim()
        .parse::<AlcoholFilter>()
        .map_err(CodeTypeError::InvalidInput)
}

pub fn validate_status(input: &str) -> Result<StatusFilter, CodeTypeError> {
    input
        .trim()
        .parse::<StatusFilter>()
        .map_err(CodeTypeError::InvalidInput)
}

pub fn validate_route(input: &str) -> Result<Route, CodeTypeError> {
    input.trim().parse::<Route>()
}

/// Validate a numeric ID typed by the user (base or recipe).
pub fn validate_id(input: &str) -> Result<i64, CodeTypeError> {
    match input.trim().parse::<i64>() {
        Ok(id) if id >= 1 => Ok(id),
        _ => Err(CodeTypeError::InvalidInput(format!(
            "'{}' is not a valid ID (positive integer expected)",
            input
        ))),
    }
}

/// Validate page number (must be >= 1).
pub fn validate_page(page: i64) -> Result<i64, CodeTypeError> {
    if page < 1 {
        return Err(CodeTypeError::InvalidInput(
            "page must be >= 1".to_string(),
        ));
    }
    Ok(page)
}

/// Validate page size (must be 1..=100).
pub fn validate_page_size(page_size: i64) -> Result<i64, CodeTypeError> {
    if !(1..=MAX_PAGE_SIZE).contains(&page_size) {
        return Err(CodeTypeError::InvalidInput(format!(
            "page_size must be between 1 and {}",
            MAX_PAGE_SIZE
        )));
    }
    Ok(page_size)
}
