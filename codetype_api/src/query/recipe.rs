use std::str::FromStr;

use crate::types::BaseID;

use super::{common::QueryCommon, Query, QueryParams};

/// Query for `GET /bar/recipes`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecipeQuery {
    pub common: QueryCommon,
    pub base_id: Option<BaseID>,
    pub search: Option<String>,
    pub alcohol: AlcoholFilter,
    pub sort: RecipeSort,
}

impl Query for RecipeQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }

    fn to_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        self.common.append_to(&mut params);
        params.insert("sort", self.sort.to_string());
        params.insert("base_id", self.base_id);
        params.insert("q", self.search.as_deref());
        params.insert("is_alcoholic", self.alcohol.as_param());
        params
    }
}

impl RecipeQuery {
    pub fn with_base_id(mut self, base_id: BaseID) -> Self {
        self.base_id = Some(base_id);
        self
    }

    pub fn with_search(mut self, search: &str) -> Self {
        self.search = Some(search.to_string());
        self
    }

    pub fn with_alcohol(mut self, alcohol: AlcoholFilter) -> Self {
        self.alcohol = alcohol;
        self
    }

    pub fn with_sort(mut self, sort: RecipeSort) -> Self {
        self.sort = sort;
        self
    }
}

/// Sort orders the recipe endpoint understands. A leading `-` on the wire
/// token means descending.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RecipeSort {
    #[default]
    Newest,
    Name,
    AbvAsc,
    AbvDesc,
    PrepTime,
}

impl RecipeSort {
    pub const ALL: [RecipeSort; 5] = [
        RecipeSort::Newest,
        RecipeSort::Name,
        RecipeSort::AbvAsc,
        RecipeSort::AbvDesc,
        RecipeSort::PrepTime,
    ];

    pub fn token(&self) -> &'static str {
        match self {
            RecipeSort::Newest => "-created_at",
            RecipeSort::Name => "name",
            RecipeSort::AbvAsc => "abv",
            RecipeSort::AbvDesc => "-abv",
            RecipeSort::PrepTime => "prep_time",
        }
    }

    /// Human label for option lists.
    pub fn label(&self) -> &'static str {
        match self {
            RecipeSort::Newest => "Newest first",
            RecipeSort::Name => "Name (A-Z)",
            RecipeSort::AbvAsc => "ABV (low to high)",
            RecipeSort::AbvDesc => "ABV (high to low)",
            RecipeSort::PrepTime => "Prep time",
        }
    }
}

impl std::fmt::Display for RecipeSort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for RecipeSort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RecipeSort::ALL
            .iter()
            .find(|sort| sort.token() == s)
            .copied()
            .ok_or_else(|| {
                format!(
                    "unknown sort '{}', expected one of: {}",
                    s,
                    RecipeSort::ALL.map(|sort| sort.token()).join(", ")
                )
            })
    }
}

/// Alcoholic / non-alcoholic filter. `All` sends nothing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AlcoholFilter {
    #[default]
    All,
    Alcoholic,
    NonAlcoholic,
}

impl AlcoholFilter {
    pub fn as_param(&self) -> Option<bool> {
        match self {
            AlcoholFilter::All => None,
            AlcoholFilter::Alcoholic => Some(true),
            AlcoholFilter::NonAlcoholic => Some(false),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AlcoholFilter::All => "All drinks",
            AlcoholFilter::Alcoholic => "Alcoholic only",
            AlcoholFilter::NonAlcoholic => "Non-alcohol only",
        }
    }
}

impl FromStr for AlcoholFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(AlcoholFilter::All),
            "alcoholic" => Ok(AlcoholFilter::Alcoholic),
            "non-alcohol" | "non-alcoholic" => Ok(AlcoholFilter::NonAlcoholic),
            _ => Err(format!(
                "unknown alcohol filter '{}', expected all, alcoholic or non-alcohol",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use url::Url;

    use crate::query::{AlcoholFilter, Query, RecipeQuery, RecipeSort};

    #[test]
    fn test_recipe_query() {
        let url = Url::parse("https://example.com/bar/recipes").unwrap();

        insta::assert_snapshot!(
            RecipeQuery::default().add_to_url(&url).to_string(),
            @"https://example.com/bar/recipes?page=1&sort=-created_at"
        );

        insta::assert_snapshot!(
            RecipeQuery::default()
                .with_page(3)
                .with_limit(12)
                .with_base_id(4)
                .with_search("mojito")
                .with_alcohol(AlcoholFilter::NonAlcoholic)
                .with_sort(RecipeSort::AbvDesc)
                .add_to_url(&url)
                .to_string(),
            @"https://example.com/bar/recipes?page=3&limit=12&sort=-abv&base_id=4&q=mojito&is_alcoholic=false"
        );
    }

    #[test]
    fn empty_search_is_not_sent() {
        let url = Url::parse("https://example.com/bar/recipes").unwrap();
        let url = RecipeQuery::default().with_search("").add_to_url(&url);
        assert!(!url.query().unwrap().contains("q="));
    }

    #[test]
    fn sort_tokens_round_trip() {
        for sort in RecipeSort::ALL {
            assert_eq!(sort.token().parse::<RecipeSort>().unwrap(), sort);
        }
        assert!("price".parse::<RecipeSort>().is_err());
    }

    #[test]
    fn alcohol_filter_parsing() {
        assert_eq!("ALL".parse::<AlcoholFilter>().unwrap(), AlcoholFilter::All);
        assert_eq!(
            "non-alcohol".parse::<AlcoholFilter>().unwrap(),
            AlcoholFilter::NonAlcoholic
        );
        assert!("sober".parse::<AlcoholFilter>().is_err());
    }
}
