mod client;
mod errors;
mod query;
mod request;
pub mod types;
pub use self::client::{base_target, Client, DEFAULT_BASE_URL};
pub use self::errors::Error;
pub use self::query::{
    AlcoholFilter, GameQuery, Query, QueryCommon, QueryParams, QueryValue, RecipeQuery,
    RecipeSort,
};
pub use self::request::{Method, Payload, RequestDescriptor, RequestOptions};
