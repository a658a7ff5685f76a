mod meta;
pub use self::meta::{ListData, ListResponse, Pagination, Response};

mod recipe;
pub use self::recipe::{Base, BaseID, Recipe, RecipeID};

mod game;
pub use self::game::Game;

mod portfolio;
pub use self::portfolio::{Education, Experience, Profile, Project, Skill};
