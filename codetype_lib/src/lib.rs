//! Library layer for CodeType Web: configuration, request state tracking,
//! and the per-view state containers behind each route.
//!
//! Wraps the `codetype_api` crate. Views never talk to each other; each one
//! owns its own fetch state and is built fresh when its route is entered.

pub mod catalog;
pub mod config;
pub mod error;
pub mod fetch;
pub mod games;
pub mod list;
pub mod pages;
pub mod portfolio;
pub mod routes;
pub mod validation;

pub use codetype_api;
pub use codetype_api::types;
pub use codetype_api::{
    AlcoholFilter, Client, GameQuery, Method, Payload, Query, QueryParams, RecipeQuery,
    RecipeSort, RequestDescriptor, RequestOptions,
};

pub use catalog::RecipeCatalog;
pub use config::Config;
pub use error::CodeTypeError;
pub use fetch::{Api, FetchState, Ticket};
pub use games::{GameBoard, StatusFilter};
pub use list::{ListPhase, ListState};
pub use pages::{InfoCard, InfoPage, Link};
pub use portfolio::{Portfolio, ProfileView};
pub use routes::{Route, ROUTES};
