//! Recipe catalog: base-spirit / alcohol / sort / search filters over a
//! paginated recipe grid, plus an independent detail lookup.
//!
//! Filter changes only mutate criteria; the caller decides when to
//! [`refresh`](RecipeCatalog::refresh). Every criteria change that can alter
//! the result set moves back to page 1.

use codetype_api::types::{Base, BaseID, ListResponse, Pagination, Recipe, RecipeID};
use codetype_api::{
    AlcoholFilter, Client, Error, Query, RecipeQuery, RecipeSort, RequestDescriptor,
};

use crate::fetch::{FetchState, RequestKey, Ticket};
use crate::list::{ListPhase, ListState};

pub const DEFAULT_PAGE_SIZE: i64 = 12;
pub const RECIPES_PATH: &str = "/bar/recipes";

pub const ALL_BASES_LABEL: &str = "All bases";
pub const LIST_ERROR_MESSAGE: &str = "Failed to load recipes. Check the API or try again.";
pub const DETAIL_ERROR_MESSAGE: &str = "Failed to load recipe details.";
pub const EMPTY_MESSAGE: &str = "No recipes found with the current filters.";

/// Client-held filter, sort and paging criteria.
#[derive(Clone, Debug, PartialEq)]
pub struct Criteria {
    pub base_id: Option<BaseID>,
    pub alcohol: AlcoholFilter,
    /// Committed (trimmed) search term; empty means no search.
    pub search: String,
    pub sort: RecipeSort,
    pub page: i64,
    pub page_size: i64,
}

impl Default for Criteria {
    fn default() -> Self {
        Self {
            base_id: None,
            alcohol: AlcoholFilter::All,
            search: String::new(),
            sort: RecipeSort::default(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Criteria {
    pub fn to_query(&self) -> RecipeQuery {
        RecipeQuery {
            base_id: self.base_id,
            search: Some(self.search.clone()),
            alcohol: self.alcohol,
            sort: self.sort,
            ..RecipeQuery::default()
        }
        .with_page(self.page)
        .with_limit(self.page_size)
    }

    fn request_key(&self) -> RequestKey {
        RequestKey::new(
            &RequestDescriptor::get(RECIPES_PATH).with_query(self.to_query().to_params()),
        )
    }
}

/// A request the catalog has started and expects back through
/// [`RecipeCatalog::apply_recipes`].
#[derive(Clone, Debug)]
pub struct PendingRequest {
    pub ticket: Ticket,
    pub query: RecipeQuery,
}

/// Detail slot, independent of the list's own fetch state.
#[derive(Debug, Default)]
struct DetailState {
    recipe: Option<Recipe>,
    fetch: FetchState,
}

/// State container for the recipe catalog view. Constructed fresh per mount.
#[derive(Debug, Default)]
pub struct RecipeCatalog {
    criteria: Criteria,
    search_input: String,
    bases: Vec<Base>,
    list: ListState<Recipe>,
    detail: DetailState,
}

impl RecipeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page_size(mut self, page_size: i64) -> Self {
        self.criteria.page_size = page_size.max(1);
        self
    }

    pub fn criteria(&self) -> &Criteria {
        &self.criteria
    }

    pub fn search_input(&self) -> &str {
        &self.search_input
    }

    pub fn bases(&self) -> &[Base] {
        &self.bases
    }

    pub fn recipes(&self) -> &[Recipe] {
        self.list.items()
    }

    pub fn pagination(&self) -> Option<&Pagination> {
        self.list.pagination()
    }

    pub fn phase(&self) -> ListPhase {
        self.list.phase()
    }

    pub fn loading(&self) -> bool {
        self.list.loading()
    }

    pub fn error(&self) -> Option<&Error> {
        self.list.error()
    }

    /// Banner text for a failed list, if any.
    pub fn error_message(&self) -> Option<&'static str> {
        self.list.error().map(|_| LIST_ERROR_MESSAGE)
    }

    /// Message to show instead of an empty grid, once a fetch came back empty.
    pub fn empty_message(&self) -> Option<&'static str> {
        (self.phase() == ListPhase::Empty).then_some(EMPTY_MESSAGE)
    }

    /// Base filter options, always led by "All bases".
    pub fn base_options(&self) -> Vec<(Option<BaseID>, String)> {
        std::iter::once((None, ALL_BASES_LABEL.to_string()))
            .chain(
                self.bases
                    .iter()
                    .map(|base| (Some(base.id), base.name.clone())),
            )
            .collect()
    }

    /// "Page 2 of 4 · 37 recipes total", or a neutral title before any page loaded.
    pub fn summary(&self) -> String {
        match self.pagination() {
            Some(p) => format!(
                "Page {} of {} · {} recipes total",
                p.page, p.total_pages, p.total_items
            ),
            None => "Recipe list".to_string(),
        }
    }

    fn restart(&mut self) {
        self.criteria.page = 1;
        self.list.clear_error();
    }

    pub fn select_base(&mut self, base_id: Option<BaseID>) {
        self.criteria.base_id = base_id;
        self.restart();
    }

    pub fn set_alcohol_filter(&mut self, alcohol: AlcoholFilter) {
        self.criteria.alcohol = alcohol;
        self.restart();
    }

    pub fn set_sort(&mut self, sort: RecipeSort) {
        self.criteria.sort = sort;
        self.restart();
    }

    /// Live typing. Never triggers a fetch on its own.
    pub fn set_search_input(&mut self, text: &str) {
        self.search_input = text.to_string();
    }

    /// Commits the trimmed input as the active search term.
    pub fn submit_search(&mut self) {
        self.criteria.search = self.search_input.trim().to_string();
        self.restart();
    }

    /// Back to defaults, keeping the configured page size.
    pub fn clear_filters(&mut self) {
        self.criteria = Criteria {
            page_size: self.criteria.page_size,
            ..Criteria::default()
        };
        self.search_input.clear();
        self.list.clear_error();
    }

    /// Moves to the next page when "Next" is enabled. Returns whether the page changed.
    pub fn next_page(&mut self) -> bool {
        match self.list.next_target(self.criteria.page) {
            Some(page) => self.set_page(page),
            None => false,
        }
    }

    /// Moves to the previous page when "Previous" is enabled. Returns whether the page changed.
    pub fn previous_page(&mut self) -> bool {
        match self.list.previous_target(self.criteria.page) {
            Some(page) => self.set_page(page),
            None => false,
        }
    }

    /// Jumps to `page`, clamped into the known page range.
    pub fn go_to_page(&mut self, page: i64) -> bool {
        let page = self.list.clamp_page(page);
        self.set_page(page)
    }

    fn set_page(&mut self, page: i64) -> bool {
        let changed = page != self.criteria.page;
        self.criteria.page = page;
        changed
    }

    /// Loads the base filter options. Failures are logged and swallowed so the
    /// catalog keeps working with only "All bases".
    pub async fn load_bases(&mut self, client: &Client) {
        match client.get_bases().await {
            Ok(resp) => self.bases = resp.data.items,
            Err(e) => {
                tracing::warn!("Could not load base spirits, continuing without: {}", e);
                self.bases.clear();
            }
        }
    }

    /// Starts a list request for the current criteria. Returns `None` when an
    /// identical request is already in flight.
    pub fn begin_refresh(&mut self) -> Option<PendingRequest> {
        let key = self.criteria.request_key();
        if self.list.is_in_flight(&key) {
            tracing::debug!("Skipping duplicate request {}", key.as_str());
            return None;
        }
        Some(self.start(key))
    }

    fn start(&mut self, key: RequestKey) -> PendingRequest {
        PendingRequest {
            ticket: self.list.begin(key),
            query: self.criteria.to_query(),
        }
    }

    /// Applies a list result. Returns `false` for a stale result.
    pub fn apply_recipes(
        &mut self,
        pending: &PendingRequest,
        result: Result<ListResponse<Recipe>, Error>,
    ) -> bool {
        if let Err(e) = &result {
            tracing::error!("Failed to load recipes: {}", e);
        }
        self.list.apply(
            pending.ticket,
            result,
            pending.query.common.page,
            pending.query.common.limit.unwrap_or(self.criteria.page_size),
        )
    }

    /// Fetches the page described by the current criteria. Always issues a
    /// request: `&mut self` rules out a concurrent refresh, and a refresh
    /// dropped mid-flight must not block the next one.
    pub async fn refresh(&mut self, client: &Client) {
        let pending = self.start(self.criteria.request_key());
        let result = client.get_recipes(&pending.query).await;
        self.apply_recipes(&pending, result);
    }

    pub fn detail(&self) -> Option<&Recipe> {
        self.detail.recipe.as_ref()
    }

    pub fn detail_loading(&self) -> bool {
        self.detail.fetch.loading()
    }

    pub fn detail_error(&self) -> Option<&Error> {
        self.detail.fetch.error()
    }

    /// Fetches one recipe into the detail slot. The list is not touched.
    pub async fn open_detail(&mut self, client: &Client, recipe_id: RecipeID) {
        let ticket = self.detail.fetch.begin();
        self.detail.recipe = None;
        let result = client.get_recipe(recipe_id).await;
        if !self.detail.fetch.settle(ticket, &result) {
            return;
        }
        match result {
            Ok(resp) => self.detail.recipe = Some(resp.data),
            Err(e) => tracing::error!("Failed to load recipe {}: {}", recipe_id, e),
        }
    }

    /// Clears the detail payload and its error, leaving the list as is.
    pub fn close_detail(&mut self) {
        self.detail.recipe = None;
        self.detail.fetch.reset();
    }
}

#[cfg(test)]
mod tests {
    use codetype_api::types::ListData;

    use super::*;

    fn recipe(id: i64) -> Recipe {
        Recipe {
            id,
            name: format!("Recipe {}", id),
            description: None,
            abv: None,
            is_alcoholic: Some(true),
            glass_type: None,
            garnish: None,
            ingredients: None,
            instructions: None,
            prep_time: None,
            base_id: None,
            base: None,
            created_at: None,
        }
    }

    fn page_of(count: i64, n: usize) -> ListResponse<Recipe> {
        ListResponse {
            data: ListData {
                items: (0..n as i64).map(recipe).collect(),
                pagination: None,
                count: Some(count),
            },
        }
    }

    fn load(catalog: &mut RecipeCatalog, count: i64, n: usize) {
        let pending = catalog.begin_refresh().unwrap();
        assert!(catalog.apply_recipes(&pending, Ok(page_of(count, n))));
    }

    #[test]
    fn defaults() {
        let catalog = RecipeCatalog::new();
        assert_eq!(catalog.criteria().page, 1);
        assert_eq!(catalog.criteria().page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(catalog.phase(), ListPhase::Idle);
        assert_eq!(catalog.summary(), "Recipe list");
    }

    #[test]
    fn submit_search_trims_and_resets_page() {
        let mut catalog = RecipeCatalog::new();
        load(&mut catalog, 37, 12);
        catalog.go_to_page(3);
        assert_eq!(catalog.criteria().page, 3);

        catalog.set_search_input("  mojito  ");
        assert_eq!(catalog.criteria().search, "");
        assert_eq!(catalog.criteria().page, 3);

        catalog.submit_search();
        assert_eq!(catalog.criteria().search, "mojito");
        assert_eq!(catalog.criteria().page, 1);
        assert_eq!(catalog.search_input(), "  mojito  ");
    }

    #[test]
    fn base_change_resets_page_before_fetch() {
        let mut catalog = RecipeCatalog::new();
        load(&mut catalog, 37, 12);
        catalog.go_to_page(3);

        catalog.select_base(Some(2));
        assert_eq!(catalog.criteria().page, 1);

        let pending = catalog.begin_refresh().unwrap();
        assert_eq!(pending.query.common.page, 1);
        assert_eq!(pending.query.base_id, Some(2));
    }

    #[test]
    fn filter_change_clears_error() {
        let mut catalog = RecipeCatalog::new();
        let pending = catalog.begin_refresh().unwrap();
        catalog.apply_recipes(&pending, Err(Error::Network("refused".into())));
        assert_eq!(catalog.error_message(), Some(LIST_ERROR_MESSAGE));
        assert_eq!(catalog.phase(), ListPhase::Failed);

        catalog.set_alcohol_filter(AlcoholFilter::NonAlcoholic);
        assert!(catalog.error().is_none());
    }

    #[test]
    fn pagination_buttons_follow_flags() {
        let mut catalog = RecipeCatalog::new();
        assert!(!catalog.next_page());

        load(&mut catalog, 37, 12);
        assert!(!catalog.previous_page());
        assert!(catalog.next_page());
        assert_eq!(catalog.criteria().page, 2);

        load(&mut catalog, 37, 12);
        assert!(catalog.previous_page());
        assert_eq!(catalog.criteria().page, 1);
    }

    #[test]
    fn go_to_page_clamps() {
        let mut catalog = RecipeCatalog::new();
        load(&mut catalog, 37, 12);
        catalog.go_to_page(99);
        assert_eq!(catalog.criteria().page, 4);
        catalog.go_to_page(0);
        assert_eq!(catalog.criteria().page, 1);
    }

    #[test]
    fn empty_result_message() {
        let mut catalog = RecipeCatalog::new();
        assert_eq!(catalog.empty_message(), None);

        let pending = catalog.begin_refresh().unwrap();
        catalog.apply_recipes(&pending, Err(Error::Network("refused".into())));
        catalog.select_base(Some(3));
        assert_eq!(catalog.phase(), ListPhase::Idle);
        assert_eq!(catalog.empty_message(), None);

        load(&mut catalog, 0, 0);
        assert_eq!(catalog.phase(), ListPhase::Empty);
        assert_eq!(catalog.empty_message(), Some(EMPTY_MESSAGE));
    }

    #[test]
    fn clear_filters_restores_defaults() {
        let mut catalog = RecipeCatalog::new().with_page_size(6);
        catalog.select_base(Some(1));
        catalog.set_sort(RecipeSort::AbvDesc);
        catalog.set_search_input("sour");
        catalog.submit_search();

        catalog.clear_filters();
        assert_eq!(
            catalog.criteria(),
            &Criteria {
                page_size: 6,
                ..Criteria::default()
            }
        );
        assert_eq!(catalog.search_input(), "");
    }

    #[test]
    fn duplicate_in_flight_request_is_skipped() {
        let mut catalog = RecipeCatalog::new();
        let first = catalog.begin_refresh();
        assert!(first.is_some());
        assert!(catalog.begin_refresh().is_none());

        catalog.select_base(Some(4));
        assert!(catalog.begin_refresh().is_some());
    }

    #[test]
    fn superseded_response_is_ignored() {
        let mut catalog = RecipeCatalog::new();
        let stale = catalog.begin_refresh().unwrap();
        catalog.select_base(Some(4));
        let fresh = catalog.begin_refresh().unwrap();

        assert!(catalog.apply_recipes(&fresh, Ok(page_of(1, 1))));
        assert!(!catalog.apply_recipes(&stale, Ok(page_of(37, 12))));
        assert_eq!(catalog.recipes().len(), 1);
        assert_eq!(catalog.summary(), "Page 1 of 1 · 1 recipes total");
    }

    #[test]
    fn base_options_start_with_all() {
        let catalog = RecipeCatalog::new();
        assert_eq!(
            catalog.base_options(),
            vec![(None, ALL_BASES_LABEL.to_string())]
        );
    }
}
