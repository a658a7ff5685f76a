use codetype_api::{AlcoholFilter, GameQuery, Query, RecipeQuery, RecipeSort};
use url::Url;

fn base_url() -> Url {
    Url::parse("https://example.com/bar/recipes").unwrap()
}

#[test]
fn recipe_query_defaults() {
    let url = RecipeQuery::default().add_to_url(&base_url());
    let query = url.query().unwrap();
    assert!(query.contains("page=1"));
    assert!(query.contains("sort=-created_at"));
    assert!(!query.contains("limit="));
    assert!(!query.contains("is_alcoholic="));
}

#[test]
fn recipe_query_all_sort_tokens() {
    for (sort, token) in [
        (RecipeSort::Newest, "sort=-created_at"),
        (RecipeSort::Name, "sort=name"),
        (RecipeSort::AbvAsc, "sort=abv"),
        (RecipeSort::AbvDesc, "sort=-abv"),
        (RecipeSort::PrepTime, "sort=prep_time"),
    ] {
        let url = RecipeQuery::default().with_sort(sort).add_to_url(&base_url());
        assert!(url.query().unwrap().contains(token), "{token}");
    }
}

#[test]
fn recipe_query_search_is_encoded() {
    let url = RecipeQuery::default()
        .with_search("gin & tonic")
        .add_to_url(&base_url());
    assert!(url.query().unwrap().contains("q=gin+%26+tonic"));
}

#[test]
fn recipe_query_alcohol_filter() {
    let url = RecipeQuery::default()
        .with_alcohol(AlcoholFilter::Alcoholic)
        .add_to_url(&base_url());
    assert!(url.query().unwrap().contains("is_alcoholic=true"));
}

#[test]
fn game_query_paging() {
    let url = GameQuery::default()
        .with_page(3)
        .with_limit(9)
        .add_to_url(&Url::parse("https://example.com/games").unwrap());
    assert_eq!(url.query(), Some("page=3&limit=9"));
}
