//! Portfolio (profile) view: one aggregate fetch, then pure transforms for
//! display. Nothing here is written back to the API.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate};
use codetype_api::types::{Education, Experience, Profile, Project, Skill};
use codetype_api::{Client, Error};

use crate::fetch::FetchState;

pub const DEFAULT_USER_ID: i64 = 1;
pub const DEFAULT_INITIALS: &str = "EJ";
pub const OTHER_CATEGORY: &str = "Other";
pub const ERROR_MESSAGE: &str = "Failed to load portfolio data. Please check the API.";
pub const EMPTY_MESSAGE: &str = "No portfolio data available.";

/// Records with a start date.
pub trait Dated {
    fn start_date(&self) -> Option<&str>;
}

impl Dated for Experience {
    fn start_date(&self) -> Option<&str> {
        self.start_date.as_deref()
    }
}

impl Dated for Project {
    fn start_date(&self) -> Option<&str> {
        self.start_date.as_deref()
    }
}

/// Parses `YYYY-MM-DD` or an RFC 3339 timestamp.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|dt| dt.date_naive())
        })
        .or_else(|| {
            value
                .get(..10)
                .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
        })
}

/// Newest start date first. Missing or unparseable dates go last, otherwise
/// the server order is kept.
pub fn sort_by_start_desc<T: Dated>(records: &[T]) -> Vec<&T> {
    let mut sorted: Vec<&T> = records.iter().collect();
    sorted.sort_by_key(|record| std::cmp::Reverse(record.start_date().and_then(parse_date)));
    sorted
}

/// Groups skills by category; blank or missing categories land in "Other".
pub fn group_skills_by_category(skills: &[Skill]) -> BTreeMap<String, Vec<&Skill>> {
    let mut groups: BTreeMap<String, Vec<&Skill>> = BTreeMap::new();
    for skill in skills {
        let category = skill
            .category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(OTHER_CATEGORY);
        groups.entry(category.to_string()).or_default().push(skill);
    }
    groups
}

/// First letters of the first and last words of `name`, uppercased.
pub fn initials(name: Option<&str>) -> String {
    let words: Vec<&str> = name.unwrap_or_default().split_whitespace().collect();
    match (words.first(), words.last()) {
        (Some(first), Some(last)) => first
            .chars()
            .take(1)
            .chain(last.chars().take(1))
            .flat_map(char::to_uppercase)
            .collect(),
        _ => DEFAULT_INITIALS.to_string(),
    }
}

/// "Mar 2021". Unparseable input is returned as given.
pub fn format_month(value: &str) -> String {
    if value.trim().is_empty() {
        return String::new();
    }
    match parse_date(value) {
        Some(date) => date.format("%b %Y").to_string(),
        None => value.to_string(),
    }
}

/// "Mar 2021 – Present" for current or open-ended records.
pub fn format_date_range(start: Option<&str>, end: Option<&str>, is_current: bool) -> String {
    let start = format_month(start.unwrap_or_default());
    match end.filter(|e| !e.trim().is_empty()) {
        Some(end) if !is_current => format!("{} – {}", start, format_month(end)),
        _ => format!("{} – Present", start),
    }
}

/// Display-ready projection of a [`Profile`].
#[derive(Debug)]
pub struct ProfileView<'a> {
    pub profile: &'a Profile,
    pub initials: String,
    pub experiences: Vec<&'a Experience>,
    pub projects: Vec<&'a Project>,
    pub education: &'a [Education],
    pub skills_by_category: BTreeMap<String, Vec<&'a Skill>>,
}

impl<'a> ProfileView<'a> {
    pub fn new(profile: &'a Profile) -> Self {
        Self {
            profile,
            initials: initials(profile.name.as_deref()),
            experiences: sort_by_start_desc(&profile.experiences),
            projects: sort_by_start_desc(&profile.projects),
            education: &profile.education,
            skills_by_category: group_skills_by_category(&profile.skills),
        }
    }
}

/// State container for the portfolio view.
#[derive(Debug)]
pub struct Portfolio {
    user_id: i64,
    profile: Option<Profile>,
    fetch: FetchState,
}

impl Default for Portfolio {
    fn default() -> Self {
        Self::new(DEFAULT_USER_ID)
    }
}

impl Portfolio {
    pub fn new(user_id: i64) -> Self {
        Self {
            user_id,
            profile: None,
            fetch: FetchState::new(),
        }
    }

    pub fn user_id(&self) -> i64 {
        self.user_id
    }

    pub fn loading(&self) -> bool {
        self.fetch.loading()
    }

    pub fn error(&self) -> Option<&Error> {
        self.fetch.error()
    }

    pub fn error_message(&self) -> Option<&'static str> {
        self.fetch.error().map(|_| ERROR_MESSAGE)
    }

    pub fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    pub fn view(&self) -> Option<ProfileView<'_>> {
        self.profile.as_ref().map(ProfileView::new)
    }

    /// Message for the "nothing to show" state.
    pub fn empty_message(&self) -> Option<&'static str> {
        (self.profile.is_none() && !self.loading()).then_some(EMPTY_MESSAGE)
    }

    /// Fetches the profile. A failure leaves no profile behind.
    pub async fn load(&mut self, client: &Client) {
        let ticket = self.fetch.begin();
        let result = client.get_portfolio(self.user_id).await;
        if !self.fetch.settle(ticket, &result) {
            return;
        }
        match result {
            Ok(resp) => self.profile = Some(resp.data),
            Err(e) => {
                tracing::error!("Failed to load portfolio {}: {}", self.user_id, e);
                self.profile = None;
            }
        }
    }
}
