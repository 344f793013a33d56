//! Shared UI crate for the madrasah site: navigation model, remote nav
//! loading, and the responsive navbar component.

pub mod i18n;
pub mod nav;
pub mod views;

pub mod components {
    // Inline SVG icons (components/icons.rs)
    pub mod icons;

    // Responsive site navbar (components/site_navbar.rs)
    pub mod site_navbar;
    pub use site_navbar::register_link;
    pub use site_navbar::LinkRenderer;
    pub use site_navbar::SiteNavbar;
    pub use site_navbar::{DesktopMenu, MobileSidebar};
}
