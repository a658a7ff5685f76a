mod common;
pub use self::common::{Query, QueryCommon, QueryParams, QueryValue};

mod recipe;
pub use self::recipe::{AlcoholFilter, RecipeQuery, RecipeSort};

mod game;
pub use self::game::GameQuery;
