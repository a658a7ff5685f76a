//! Static informational pages. No network calls; the content is fixed.

use serde::Serialize;

/// A call-to-action pointing at another route or an external site.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Link {
    pub label: &'static str,
    pub target: &'static str,
}

/// One content card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct InfoCard {
    pub title: &'static str,
    pub badge: Option<&'static str>,
    pub summary: &'static str,
    pub notes: &'static [&'static str],
    pub link: Option<Link>,
}

/// Hero section plus cards, the composition every informational page shares.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct InfoPage {
    pub title: &'static str,
    pub badges: &'static [&'static str],
    pub description: &'static str,
    pub actions: &'static [Link],
    pub cards: &'static [InfoCard],
    pub footer: Option<&'static str>,
}

pub const HOME: InfoPage = InfoPage {
    title: "CodeType Platform",
    badges: &["CodeType", "Platform"],
    description: "A unified platform for streaming, cocktail recipes, private game servers, \
                  engineering projects, and access tools designed for quick, secure access.",
    actions: &[
        Link {
            label: "Go to Streaming",
            target: "/streaming",
        },
        Link {
            label: "Explore CodeType Bar",
            target: "/codetype-bar",
        },
    ],
    cards: &[
        InfoCard {
            title: "CodeType Bar",
            badge: None,
            summary: "A curated cocktail recipe library with modern filtering options.",
            notes: &[],
            link: Some(Link {
                label: "View cocktail recipes",
                target: "/codetype-bar",
            }),
        },
        InfoCard {
            title: "Streaming",
            badge: None,
            summary: "Private media streaming with browser guidance and multi-device support.",
            notes: &[],
            link: Some(Link {
                label: "Open streaming info",
                target: "/streaming",
            }),
        },
        InfoCard {
            title: "Game Servers",
            badge: None,
            summary: "Status overview for Minecraft, Palworld, Ark, RLcraft, and more.",
            notes: &[],
            link: Some(Link {
                label: "View game servers",
                target: "/game-server",
            }),
        },
        InfoCard {
            title: "Portfolio",
            badge: None,
            summary: "Engineering work, side projects, and technical creativity.",
            notes: &[],
            link: Some(Link {
                label: "Browse portfolio",
                target: "/portfolio",
            }),
        },
        InfoCard {
            title: "Access Info",
            badge: None,
            summary: "Overview of RDP, SSH, and FTP/SFTP access methods managed by CodeType.",
            notes: &[],
            link: Some(Link {
                label: "Open access overview",
                target: "/access-info",
            }),
        },
    ],
    footer: Some(
        "One place for all things CodeType. From cocktails to game servers, \
         this platform brings the entire CodeType ecosystem together.",
    ),
};

pub const STREAMING: InfoPage = InfoPage {
    title: "Streaming / Plex",
    badges: &["Plex", "Private Streaming"],
    description: "Access your curated library of movies, shows, and more through a private \
                  Plex server. Optimized for browsers, mobile apps, smart TVs, and streaming \
                  devices without layout issues.",
    actions: &[Link {
        label: "Go to CodeType Plex",
        target: "https://video.codetypeweb.com",
    }],
    cards: &[
        InfoCard {
            title: "How it works",
            badge: None,
            summary: "Plex acts as a personal media hub, letting you stream your content \
                      wherever you are.",
            notes: &[
                "Access is limited to users with a registered account and granted permissions.",
                "Compatible with web browsers, mobile apps, smart TVs, and streaming devices.",
                "Transcoding and bandwidth are managed server-side for a smooth experience.",
            ],
            link: None,
        },
        InfoCard {
            title: "If you see \"Your connection is not private\"",
            badge: Some("Warning"),
            summary: "Some browsers may show a certificate warning when connecting. Proceed \
                      only from networks and devices you trust.",
            notes: &[
                "On the warning page, click Advanced.",
                "Click Proceed to codetypeweb.com (unsafe).",
                "If you are using Edge or Safari, refresh the page once after proceeding.",
            ],
            link: None,
        },
    ],
    footer: Some(
        "All access permissions, accounts, and endpoints for the Plex server are managed by \
         CodeType. Account details are shared only through secure private channels.",
    ),
};

pub const ACCESS_INFO: InfoPage = InfoPage {
    title: "Access Information",
    badges: &["Access", "Secure Channels"],
    description: "Review which remote access methods are active, see usage guidance, and \
                  confirm that credentials are always distributed through secure private \
                  channels.",
    actions: &[],
    cards: &[
        InfoCard {
            title: "RDP",
            badge: Some("Not in use"),
            summary: "Remote Desktop Protocol access for Windows environments.",
            notes: &[
                "This access method is currently disabled and not available for use.",
                "Any previous RDP endpoints should be treated as inactive.",
            ],
            link: None,
        },
        InfoCard {
            title: "SSH",
            badge: Some("Active"),
            summary: "Secure shell access to Linux and server environments.",
            notes: &[
                "Key-based authentication is recommended.",
                "Ideal for server management, deployment, and CLI tasks.",
                "Ports and user accounts are provisioned and controlled by CodeType.",
            ],
            link: None,
        },
        InfoCard {
            title: "FTP / SFTP",
            badge: Some("Active"),
            summary: "File transfer access for uploads and downloads.",
            notes: &[
                "Prefer SFTP over plain FTP whenever possible.",
                "Intended for media, backups, and project file transfers.",
                "Accounts and permissions are granted on request.",
            ],
            link: None,
        },
    ],
    footer: Some(
        "All access methods, accounts, and endpoints are fully managed by CodeType. Actual \
         hostnames, ports, and credentials are shared only through secure private channels.",
    ),
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::Route;

    #[test]
    fn home_links_point_at_known_routes() {
        for card in HOME.cards {
            let link = card.link.unwrap();
            assert!(Route::from_path(link.target).is_some(), "{}", link.target);
        }
    }

    #[test]
    fn access_info_lists_three_methods() {
        let titles: Vec<&str> = ACCESS_INFO.cards.iter().map(|c| c.title).collect();
        assert_eq!(titles, ["RDP", "SSH", "FTP / SFTP"]);
    }
}
