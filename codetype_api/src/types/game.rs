//! Game server records returned by `/games`.

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Game {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    /// `open`, `closed`, or anything else the operators typed in.
    pub status: Option<String>,
    pub port: Option<u32>,
    pub img_src: Option<String>,
}

impl Game {
    pub fn is_open(&self) -> bool {
        self.status
            .as_deref()
            .is_some_and(|status| status.eq_ignore_ascii_case("open"))
    }

    /// Servers without any status count as closed.
    pub fn is_closed(&self) -> bool {
        match self.status.as_deref() {
            None | Some("") => true,
            Some(status) => status.eq_ignore_ascii_case("closed"),
        }
    }

    pub fn status_label(&self) -> String {
        match self.status.as_deref() {
            None | Some("") => "Unknown".to_string(),
            Some(status) if status.eq_ignore_ascii_case("open") => "Open".to_string(),
            Some(status) if status.eq_ignore_ascii_case("closed") => "Closed".to_string(),
            Some(status) => status.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(status: Option<&str>) -> Game {
        Game {
            id: 1,
            name: "Minecraft".into(),
            description: None,
            status: status.map(String::from),
            port: None,
            img_src: None,
        }
    }

    #[test]
    fn status_is_case_insensitive() {
        assert!(game(Some("OPEN")).is_open());
        assert!(game(Some("Closed")).is_closed());
        assert_eq!(game(Some("oPeN")).status_label(), "Open");
    }

    #[test]
    fn missing_status_is_closed_and_unknown() {
        let g = game(None);
        assert!(g.is_closed());
        assert!(!g.is_open());
        assert_eq!(g.status_label(), "Unknown");
    }

    #[test]
    fn other_status_is_neither() {
        let g = game(Some("maintenance"));
        assert!(!g.is_open());
        assert!(!g.is_closed());
        assert_eq!(g.status_label(), "maintenance");
    }
}
