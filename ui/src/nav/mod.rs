//! Navigation entries shown by the site navbar.
//!
//! The rendered list is always the hardcoded seed (`default_items`)
//! followed by whatever the remote endpoint delivered, see [`merge_items`].

pub mod config;
pub mod fetch;
pub mod state;

pub use config::NavConfig;
pub use fetch::{fetch_nav_items, load_remote_items, parse_nav_body, NavError};
pub use state::MenuState;

use serde::{Deserialize, Serialize};

/// Icons an entry may carry. Names arrive lowercase on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavIcon {
    Home,
    #[serde(other)]
    Generic,
}

/// A link inside a group's dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubNavItem {
    pub name: String,
    pub href: String,
}

/// A top-level navigation entry: either a direct link (`href`) or a group
/// of sub-links (`submenu`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<NavIcon>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submenu: Option<Vec<SubNavItem>>,
}

impl NavItem {
    pub fn link<N: Into<String>, H: Into<String>>(name: N, href: H) -> Self {
        Self {
            name: name.into(),
            href: Some(href.into()),
            icon: None,
            submenu: None,
        }
    }

    pub fn group<N: Into<String>>(name: N, submenu: Vec<SubNavItem>) -> Self {
        Self {
            name: name.into(),
            href: None,
            icon: None,
            submenu: Some(submenu),
        }
    }

    pub fn with_icon(mut self, icon: NavIcon) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Link target, if the entry is a direct link. Blank hrefs count as
    /// absent, so such entries render as groups.
    pub fn link_href(&self) -> Option<&str> {
        self.href.as_deref().filter(|href| !href.trim().is_empty())
    }

    /// Sub-links, empty when the entry has none.
    pub fn submenu_items(&self) -> &[SubNavItem] {
        self.submenu.as_deref().unwrap_or_default()
    }

    pub fn has_dropdown(&self) -> bool {
        !self.submenu_items().is_empty()
    }

    /// Upper-cased first letter, used as the badge of groups in the sidebar.
    pub fn initial(&self) -> Option<String> {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
    }
}

impl SubNavItem {
    pub fn new<N: Into<String>, H: Into<String>>(name: N, href: H) -> Self {
        Self {
            name: name.into(),
            href: href.into(),
        }
    }
}

/// The single hardcoded entry every render starts with.
pub fn default_items() -> Vec<NavItem> {
    crate::i18n::init();
    vec![NavItem::link(crate::t!("nav-home"), "/").with_icon(NavIcon::Home)]
}

/// Seed entries followed by the remote ones, order preserved.
pub fn merge_items(remote: Vec<NavItem>) -> Vec<NavItem> {
    let mut items = default_items();
    items.extend(remote);
    items
}
