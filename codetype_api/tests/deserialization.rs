use codetype_api::types::{Base, Game, ListResponse, Profile, Recipe, Response};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[test]
fn deserialize_recipes_full() {
    let json = load_fixture("recipes.json");
    let resp: ListResponse<Recipe> = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.data.items.len(), 2);

    let mojito = &resp.data.items[0];
    assert_eq!(mojito.id, 7);
    assert_eq!(mojito.abv, Some(13.5));
    assert_eq!(mojito.base_name(), "Rum");
    assert_eq!(mojito.abv_label(), "13.5% ABV");
    assert_eq!(mojito.alcohol_label(), "Alcoholic");
    assert!(mojito.created_at.is_some());

    let colada = &resp.data.items[1];
    assert_eq!(colada.base_name(), "Unknown base");
    assert_eq!(colada.abv_label(), "N/A");
    assert_eq!(colada.alcohol_label(), "Non-alcohol");

    let paging = resp.data.pagination.as_ref().unwrap();
    assert_eq!(paging.page, 1);
    assert_eq!(paging.limit, 12);
    assert_eq!(paging.total_items, 26);
    assert!(paging.has_next_page);
}

#[test]
fn deserialize_recipes_without_pagination() {
    let json = load_fixture("recipes_count_only.json");
    let resp: ListResponse<Recipe> = serde_json::from_str(&json).unwrap();
    assert!(resp.data.pagination.is_none());
    assert_eq!(resp.data.count, Some(37));

    let derived = resp.data.pagination_or_derive(1, 12);
    assert_eq!(derived.total_pages, 4);
    assert!(derived.has_next_page);
    assert!(!derived.has_previous_page);
    assert!(resp.data.pagination_or_derive(2, 12).has_previous_page);
}

#[test]
fn deserialize_recipe_detail() {
    let json = load_fixture("recipe_detail.json");
    let resp: Response<Recipe> = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.data.name, "Mojito");
    assert_eq!(resp.data.prep_time, Some(5));
}

#[test]
fn deserialize_bases() {
    let json = load_fixture("bases.json");
    let resp: ListResponse<Base> = serde_json::from_str(&json).unwrap();
    let names: Vec<&str> = resp.data.items.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, ["Gin", "Rum", "Whiskey"]);
}

#[test]
fn deserialize_games() {
    let json = load_fixture("games.json");
    let resp: ListResponse<Game> = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.data.items.len(), 4);
    assert_eq!(resp.data.items[0].port, Some(25565));
    assert!(resp.data.items[2].status.is_none());
}

#[test]
fn deserialize_portfolio() {
    let json = load_fixture("portfolio.json");
    let resp: Response<Profile> = serde_json::from_str(&json).unwrap();
    let profile = resp.data;
    assert_eq!(profile.name.as_deref(), Some("Eun Jung Park"));
    assert_eq!(profile.experiences.len(), 3);
    assert_eq!(profile.education.len(), 1);
    assert_eq!(profile.projects.len(), 2);
    assert_eq!(profile.skills.len(), 4);
    assert!(profile.linkedin_url.is_none());
}

#[test]
fn portfolio_collections_default_to_empty() {
    let resp: Response<Profile> =
        serde_json::from_str(r#"{"data":{"id":2,"name":null}}"#).unwrap();
    assert!(resp.data.experiences.is_empty());
    assert!(resp.data.skills.is_empty());
}

#[test]
fn deserialize_missing_required_fields_returns_error() {
    let json = r#"{"data": {"pagination": null}}"#;
    let result = serde_json::from_str::<ListResponse<Recipe>>(json);
    assert!(result.is_err());
}
