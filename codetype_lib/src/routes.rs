//! Fixed path-to-view table.

use std::fmt;
use std::str::FromStr;

use crate::error::CodeTypeError;
use crate::pages::{self, InfoPage};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    CodeTypeBar,
    Streaming,
    Portfolio,
    GameServer,
    AccessInfo,
}

/// Every route with its path, in navigation order.
pub const ROUTES: &[(&str, Route)] = &[
    ("/", Route::Home),
    ("/codetype-bar", Route::CodeTypeBar),
    ("/streaming", Route::Streaming),
    ("/portfolio", Route::Portfolio),
    ("/game-server", Route::GameServer),
    ("/access-info", Route::AccessInfo),
];

impl Route {
    pub fn path(&self) -> &'static str {
        ROUTES
            .iter()
            .find(|(_, route)| route == self)
            .map(|(path, _)| *path)
            .unwrap_or("/")
    }

    /// Navigation label.
    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "CodeType Web",
            Route::CodeTypeBar => "CodeType Bar",
            Route::Streaming => "Streaming / Plex",
            Route::Portfolio => "Portfolio",
            Route::GameServer => "Game Server",
            Route::AccessInfo => "Access Info",
        }
    }

    /// Whether mounting this route issues API requests.
    pub fn fetches(&self) -> bool {
        matches!(
            self,
            Route::CodeTypeBar | Route::Portfolio | Route::GameServer
        )
    }

    /// Static content for informational routes.
    pub fn info_page(&self) -> Option<&'static InfoPage> {
        match self {
            Route::Home => Some(&pages::HOME),
            Route::Streaming => Some(&pages::STREAMING),
            Route::AccessInfo => Some(&pages::ACCESS_INFO),
            _ => None,
        }
    }

    /// Looks up a path. Query strings, fragments and a trailing slash are ignored.
    pub fn from_path(path: &str) -> Option<Route> {
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .trim();
        let path = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };
        ROUTES
            .iter()
            .find(|(candidate, _)| *candidate == path)
            .map(|(_, route)| *route)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for Route {
    type Err = CodeTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Route::from_path(s)
            .ok_or_else(|| CodeTypeError::InvalidInput(format!("no route for '{}'", s)))
    }
}
