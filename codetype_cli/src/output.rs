use anyhow::Result;
use codetype_lib::portfolio::{format_date_range, ProfileView};
use codetype_lib::types::{Game, Recipe, Skill};
use codetype_lib::{InfoPage, Route, ROUTES};
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

#[derive(Tabled, Serialize)]
struct RecipeRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Base")]
    #[serde(rename = "Base")]
    base: String,
    #[tabled(rename = "ABV")]
    #[serde(rename = "ABV")]
    abv: String,
    #[tabled(rename = "Type")]
    #[serde(rename = "Type")]
    kind: String,
    #[tabled(rename = "Prep")]
    #[serde(rename = "Prep")]
    prep: String,
}

#[derive(Tabled, Serialize)]
struct FieldRow {
    #[tabled(rename = "Field")]
    #[serde(rename = "Field")]
    field: String,
    #[tabled(rename = "Value")]
    #[serde(rename = "Value")]
    value: String,
}

#[derive(Tabled, Serialize)]
struct GameRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Status")]
    #[serde(rename = "Status")]
    status: String,
    #[tabled(rename = "Port")]
    #[serde(rename = "Port")]
    port: String,
    #[tabled(rename = "Description")]
    #[serde(rename = "Description")]
    description: String,
}

#[derive(Tabled, Serialize)]
struct TimelineRow {
    #[tabled(rename = "Period")]
    #[serde(rename = "Period")]
    period: String,
    #[tabled(rename = "Title")]
    #[serde(rename = "Title")]
    title: String,
    #[tabled(rename = "Where")]
    #[serde(rename = "Where")]
    place: String,
    #[tabled(rename = "Details")]
    #[serde(rename = "Details")]
    details: String,
}

#[derive(Tabled, Serialize)]
struct SkillRow {
    #[tabled(rename = "Category")]
    #[serde(rename = "Category")]
    category: String,
    #[tabled(rename = "Skills")]
    #[serde(rename = "Skills")]
    skills: String,
}

#[derive(Tabled, Serialize)]
struct CardRow {
    #[tabled(rename = "Card")]
    #[serde(rename = "Card")]
    title: String,
    #[tabled(rename = "Status")]
    #[serde(rename = "Status")]
    badge: String,
    #[tabled(rename = "Summary")]
    #[serde(rename = "Summary")]
    summary: String,
    #[tabled(rename = "Link")]
    #[serde(rename = "Link")]
    link: String,
}

#[derive(Tabled, Serialize)]
struct RouteRow {
    #[tabled(rename = "Path")]
    #[serde(rename = "Path")]
    path: String,
    #[tabled(rename = "View")]
    #[serde(rename = "View")]
    view: String,
    #[tabled(rename = "Fetches")]
    #[serde(rename = "Fetches")]
    fetches: bool,
}

// -- Row builders --

fn build_recipe_rows(recipes: &[Recipe]) -> Vec<RecipeRow> {
    recipes
        .iter()
        .map(|r| RecipeRow {
            id: r.id,
            name: r.name.clone(),
            base: r.base_name().to_string(),
            abv: r.abv_label(),
            kind: r.alcohol_label().to_string(),
            prep: r
                .prep_time
                .map(|minutes| format!("{} min", minutes))
                .unwrap_or_default(),
        })
        .collect()
}

fn build_recipe_detail_rows(recipe: &Recipe) -> Vec<FieldRow> {
    let field = |name: &str, value: String| FieldRow {
        field: name.to_string(),
        value,
    };
    let text = |value: &Option<String>| value.clone().unwrap_or_default();
    vec![
        field("Name", recipe.name.clone()),
        field("Base", recipe.base_name().to_string()),
        field("Type", recipe.alcohol_label().to_string()),
        field("ABV", recipe.abv_label()),
        field("Glass", text(&recipe.glass_type)),
        field("Garnish", text(&recipe.garnish)),
        field(
            "Prep time",
            recipe
                .prep_time
                .map(|minutes| format!("{} min", minutes))
                .unwrap_or_default(),
        ),
        field("Description", text(&recipe.description)),
        field("Ingredients", text(&recipe.ingredients)),
        field("Instructions", text(&recipe.instructions)),
    ]
}

fn build_game_rows(games: &[&Game]) -> Vec<GameRow> {
    games
        .iter()
        .map(|g| GameRow {
            id: g.id,
            name: g.name.clone(),
            status: g.status_label(),
            port: g.port.map(|port| port.to_string()).unwrap_or_default(),
            description: g.description.clone().unwrap_or_default(),
        })
        .collect()
}

fn build_experience_rows(view: &ProfileView<'_>) -> Vec<TimelineRow> {
    view.experiences
        .iter()
        .map(|e| TimelineRow {
            period: format_date_range(
                e.start_date.as_deref(),
                e.end_date.as_deref(),
                e.is_current.unwrap_or(false),
            ),
            title: e.title.clone(),
            place: join_present(&[Some(e.company_name.as_str()), e.location.as_deref()]),
            details: join_present(&[e.employment_type.as_deref(), e.description.as_deref()]),
        })
        .collect()
}

fn build_project_rows(view: &ProfileView<'_>) -> Vec<TimelineRow> {
    view.projects
        .iter()
        .map(|p| TimelineRow {
            period: format_date_range(
                p.start_date.as_deref(),
                p.end_date.as_deref(),
                p.is_current.unwrap_or(false),
            ),
            title: p.name.clone(),
            place: p.link_url.clone().unwrap_or_default(),
            details: join_present(&[p.tech_stack.as_deref(), p.description.as_deref()]),
        })
        .collect()
}

fn build_education_rows(view: &ProfileView<'_>) -> Vec<TimelineRow> {
    view.education
        .iter()
        .map(|e| TimelineRow {
            period: format_date_range(
                e.start_date.as_deref(),
                e.end_date.as_deref(),
                e.is_current.unwrap_or(false),
            ),
            title: join_present(&[e.degree.as_deref(), e.field_of_study.as_deref()]),
            place: e.school_name.clone(),
            details: e
                .grade
                .as_deref()
                .map(|grade| format!("Grade {}", grade))
                .unwrap_or_default(),
        })
        .collect()
}

fn build_skill_rows(view: &ProfileView<'_>) -> Vec<SkillRow> {
    view.skills_by_category
        .iter()
        .map(|(category, skills)| SkillRow {
            category: category.clone(),
            skills: skills
                .iter()
                .map(|s: &&Skill| match s.level.as_deref() {
                    Some(level) => format!("{} ({})", s.name, level),
                    None => s.name.clone(),
                })
                .collect::<Vec<_>>()
                .join(", "),
        })
        .collect()
}

fn build_card_rows(page: &InfoPage) -> Vec<CardRow> {
    page.cards
        .iter()
        .map(|c| CardRow {
            title: c.title.to_string(),
            badge: c.badge.unwrap_or_default().to_string(),
            summary: c.summary.to_string(),
            link: c
                .link
                .map(|l| format!("{} ({})", l.label, l.target))
                .unwrap_or_default(),
        })
        .collect()
}

fn build_route_rows() -> Vec<RouteRow> {
    ROUTES
        .iter()
        .map(|(path, route)| RouteRow {
            path: path.to_string(),
            view: route.title().to_string(),
            fetches: route.fetches(),
        })
        .collect()
}

/// Field/value rows for an arbitrary JSON body. A `data` envelope holding an
/// object is unwrapped first; scalars and arrays become a single `value` row.
fn build_value_rows(value: &serde_json::Value) -> Vec<FieldRow> {
    let value = match value.get("data") {
        Some(inner) if inner.is_object() => inner,
        _ => value,
    };
    let cell = |v: &serde_json::Value| match v {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    };
    match value.as_object() {
        Some(map) => map
            .iter()
            .map(|(key, v)| FieldRow {
                field: key.clone(),
                value: cell(v),
            })
            .collect(),
        None => vec![FieldRow {
            field: "value".to_string(),
            value: cell(value),
        }],
    }
}

fn join_present(parts: &[Option<&str>]) -> String {
    parts
        .iter()
        .flatten()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" · ")
}

// -- Generic rendering --

fn render_rows<T: Tabled + Serialize>(rows: &[T], format: &OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Table => Table::new(rows).to_string(),
        OutputFormat::Markdown => {
            let mut table = Table::new(rows);
            table.with(Style::markdown());
            table.to_string()
        }
        OutputFormat::Csv => {
            let mut buf = Vec::new();
            {
                let mut wtr = csv::Writer::from_writer(&mut buf);
                for row in rows {
                    wtr.serialize(row)?;
                }
                wtr.flush()?;
            }
            String::from_utf8(buf)?
        }
        OutputFormat::Json => serde_json::to_string_pretty(rows)?,
    })
}

fn print_rows<T: Tabled + Serialize>(rows: &[T], format: &OutputFormat) -> Result<()> {
    let rendered = render_rows(rows, format)?;
    println!("{}", rendered.trim_end());
    Ok(())
}

/// Section heading for multi-table output. CSV and JSON get none.
fn print_heading(title: &str, format: &OutputFormat) {
    match format {
        OutputFormat::Table => println!("\n{}", title),
        OutputFormat::Markdown => println!("\n## {}\n", title),
        OutputFormat::Csv | OutputFormat::Json => {}
    }
}

// -- Views --

pub fn print_recipes(recipes: &[Recipe], format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(&recipes),
        _ => print_rows(&build_recipe_rows(recipes), format)?,
    }
    Ok(())
}

pub fn print_recipe_detail(recipe: &Recipe, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(recipe),
        _ => print_rows(&build_recipe_detail_rows(recipe), format)?,
    }
    Ok(())
}

pub fn print_games(games: &[&Game], format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(&games),
        _ => print_rows(&build_game_rows(games), format)?,
    }
    Ok(())
}

pub fn print_profile(view: &ProfileView<'_>, format: &OutputFormat) -> Result<()> {
    if *format == OutputFormat::Json {
        print_json(view.profile);
        return Ok(());
    }
    let profile = view.profile;
    if *format != OutputFormat::Csv {
        println!(
            "[{}] {}",
            view.initials,
            profile.name.as_deref().unwrap_or_default()
        );
        for line in [
            profile.headline.as_deref(),
            profile.location.as_deref(),
            profile.summary.as_deref(),
            profile.website_url.as_deref(),
            profile.github_url.as_deref(),
            profile.linkedin_url.as_deref(),
        ]
        .into_iter()
        .flatten()
        {
            println!("{}", line);
        }
    }
    let sections = [
        ("Experience", build_experience_rows(view)),
        ("Projects", build_project_rows(view)),
        ("Education", build_education_rows(view)),
    ];
    for (title, rows) in sections {
        if rows.is_empty() {
            continue;
        }
        print_heading(title, format);
        print_rows(&rows, format)?;
    }
    let skills = build_skill_rows(view);
    if !skills.is_empty() {
        print_heading("Skills", format);
        print_rows(&skills, format)?;
    }
    Ok(())
}

pub fn print_info_page(page: &InfoPage, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(page),
        OutputFormat::Csv => print_rows(&build_card_rows(page), format)?,
        OutputFormat::Table | OutputFormat::Markdown => {
            let heading = if *format == OutputFormat::Markdown { "# " } else { "" };
            println!("{}{}", heading, page.title);
            if !page.badges.is_empty() {
                println!("[{}]", page.badges.join("] ["));
            }
            println!("\n{}\n", page.description);
            for action in page.actions {
                println!("-> {}: {}", action.label, action.target);
            }
            print_rows(&build_card_rows(page), format)?;
            for card in page.cards {
                if card.notes.is_empty() {
                    continue;
                }
                print_heading(card.title, format);
                for note in card.notes {
                    println!("  - {}", note);
                }
            }
            if let Some(footer) = page.footer {
                println!("\n{}", footer);
            }
        }
    }
    Ok(())
}

pub fn print_value(value: &serde_json::Value, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(value),
        _ => print_rows(&build_value_rows(value), format)?,
    }
    Ok(())
}

pub fn print_routes(format: &OutputFormat) -> Result<()> {
    print_rows(&build_route_rows(), format)
}

/// Title line for a route, printed to stderr like the other status lines.
pub fn print_route_banner(route: Route) {
    eprintln!("CodeType Web · {} ({})", route.title(), route.path());
}

// -- JSON output --

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use codetype_lib::pages;
    use codetype_lib::types::{ListResponse, Profile, Response};

    use super::*;

    fn load_recipes_fixture() -> Vec<Recipe> {
        let json_str = include_str!("../../codetype_api/tests/fixtures/recipes.json");
        let resp: ListResponse<Recipe> = serde_json::from_str(json_str).unwrap();
        resp.data.items
    }

    fn load_games_fixture() -> Vec<Game> {
        let json_str = include_str!("../../codetype_api/tests/fixtures/games.json");
        let resp: ListResponse<Game> = serde_json::from_str(json_str).unwrap();
        resp.data.items
    }

    fn load_profile_fixture() -> Profile {
        let json_str = include_str!("../../codetype_api/tests/fixtures/portfolio.json");
        let resp: Response<Profile> = serde_json::from_str(json_str).unwrap();
        resp.data
    }

    // -- Row builder tests --

    #[test]
    fn test_build_recipe_rows_mapping() {
        let recipes = load_recipes_fixture();
        let rows = build_recipe_rows(&recipes);
        assert_eq!(rows.len(), 2);

        let row = &rows[0];
        assert_eq!(row.id, 7);
        assert_eq!(row.name, "Mojito");
        assert_eq!(row.base, "Rum");
        assert_eq!(row.kind, "Alcoholic");
    }

    #[test]
    fn test_build_recipe_rows_empty() {
        assert!(build_recipe_rows(&[]).is_empty());
    }

    #[test]
    fn test_recipe_detail_lists_fields_in_order() {
        let recipes = load_recipes_fixture();
        let rows = build_recipe_detail_rows(&recipes[0]);
        let fields: Vec<&str> = rows.iter().map(|r| r.field.as_str()).collect();
        assert_eq!(fields[..4], ["Name", "Base", "Type", "ABV"]);
        assert_eq!(rows[0].value, "Mojito");
    }

    #[test]
    fn test_build_game_rows_labels() {
        let games = load_games_fixture();
        let refs: Vec<&Game> = games.iter().collect();
        let rows = build_game_rows(&refs);
        let statuses: Vec<&str> = rows.iter().map(|r| r.status.as_str()).collect();
        assert_eq!(statuses, ["Open", "Closed", "Unknown", "Open"]);
        assert_eq!(rows[0].port, "25565");
        assert_eq!(rows[2].port, "");
    }

    #[test]
    fn test_profile_sections() {
        let profile = load_profile_fixture();
        let view = ProfileView::new(&profile);

        let experience = build_experience_rows(&view);
        assert_eq!(experience[0].title, "Lead Engineer");
        assert_eq!(experience[0].period, "Jul 2021 – Present");
        assert_eq!(experience[0].place, "Beta");

        let skills = build_skill_rows(&view);
        let categories: Vec<&str> = skills.iter().map(|s| s.category.as_str()).collect();
        assert_eq!(categories, ["Languages", "Other", "Tooling"]);
        assert_eq!(skills[0].skills, "Go, Rust (intermediate)");

        let education = build_education_rows(&view);
        assert_eq!(education[0].place, "Hanyang University");
        assert_eq!(education[0].details, "Grade 3.8");
    }

    #[test]
    fn test_join_present_skips_blanks() {
        assert_eq!(
            join_present(&[Some("Alpha"), None, Some(" "), Some("Seoul")]),
            "Alpha · Seoul"
        );
        assert_eq!(join_present(&[None, None]), "");
    }

    #[test]
    fn test_value_rows_unwrap_data_envelope() {
        let value = serde_json::json!({
            "data": { "id": 3, "name": "Ark", "status": null, "tags": ["pve"] }
        });
        let rows = build_value_rows(&value);
        let pairs: Vec<(&str, &str)> = rows
            .iter()
            .map(|r| (r.field.as_str(), r.value.as_str()))
            .collect();
        assert_eq!(
            pairs,
            [("id", "3"), ("name", "Ark"), ("status", ""), ("tags", "[\"pve\"]")]
        );
    }

    #[test]
    fn test_value_rows_for_scalar_body() {
        let rows = build_value_rows(&serde_json::json!([1, 2]));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].field, "value");
        assert_eq!(rows[0].value, "[1,2]");
    }

    #[test]
    fn test_card_rows_for_access_info() {
        let rows = build_card_rows(&pages::ACCESS_INFO);
        let badges: Vec<&str> = rows.iter().map(|r| r.badge.as_str()).collect();
        assert_eq!(badges, ["Not in use", "Active", "Active"]);
    }

    #[test]
    fn test_route_rows_cover_table() {
        let rows = build_route_rows();
        assert_eq!(rows.len(), ROUTES.len());
        assert_eq!(rows[1].path, "/codetype-bar");
        assert!(rows[1].fetches);
        assert!(!rows[0].fetches);
    }

    // -- CSV output tests --

    #[test]
    fn test_csv_recipe_headers() {
        let recipes = load_recipes_fixture();
        let csv = render_rows(&build_recipe_rows(&recipes), &OutputFormat::Csv).unwrap();
        let header = csv.lines().next().unwrap();
        assert_eq!(header, "ID,Name,Base,ABV,Type,Prep");
        assert_eq!(csv.lines().count(), 3);
    }

    #[test]
    fn test_csv_escapes_commas() {
        let rows = vec![FieldRow {
            field: "Ingredients".into(),
            value: "mint, lime, rum".into(),
        }];
        let csv = render_rows(&rows, &OutputFormat::Csv).unwrap();
        assert!(csv.contains("\"mint, lime, rum\""));
    }

    // -- Markdown output tests --

    #[test]
    fn test_markdown_game_headers() {
        let games = load_games_fixture();
        let refs: Vec<&Game> = games.iter().collect();
        let md = render_rows(&build_game_rows(&refs), &OutputFormat::Markdown).unwrap();

        let header_line = md.lines().next().unwrap();
        assert!(header_line.contains("Name"));
        assert!(header_line.contains("Status"));
        assert!(md.contains("---"));
    }

    #[test]
    fn test_markdown_empty_produces_headers_only() {
        let rows = build_recipe_rows(&[]);
        let md = render_rows(&rows, &OutputFormat::Markdown).unwrap();
        let lines: Vec<&str> = md.lines().collect();
        assert!(lines.len() <= 2, "expected at most 2 lines for empty table, got {}", lines.len());
    }
}
