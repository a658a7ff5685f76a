//! Portfolio aggregate returned by `/portfolio/user/:id`.
//!
//! Dates are kept as the strings the API sends; the library layer parses them
//! when sorting and formatting.

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Profile {
    pub id: i64,
    pub name: Option<String>,
    pub headline: Option<String>,
    pub nickname: Option<String>,
    pub location: Option<String>,
    pub summary: Option<String>,
    pub website_url: Option<String>,
    pub github_url: Option<String>,
    pub linkedin_url: Option<String>,

    #[serde(rename = "Experiences", default)]
    pub experiences: Vec<Experience>,

    #[serde(rename = "Education", default)]
    pub education: Vec<Education>,

    #[serde(rename = "Projects", default)]
    pub projects: Vec<Project>,

    #[serde(rename = "Skills", default)]
    pub skills: Vec<Skill>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Experience {
    pub id: i64,
    pub title: String,
    pub company_name: String,
    pub location: Option<String>,
    pub employment_type: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub is_current: Option<bool>,
    pub description: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Education {
    pub id: i64,
    pub school_name: String,
    pub degree: Option<String>,
    pub field_of_study: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub is_current: Option<bool>,
    pub grade: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub tech_stack: Option<String>,
    pub link_url: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub is_current: Option<bool>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Skill {
    pub id: i64,
    pub name: String,
    pub category: Option<String>,
    pub level: Option<String>,
}
