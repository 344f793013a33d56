use crate::components::icons::{
    ChevronDownIcon, ChevronRightIcon, CloseIcon, MenuIcon, NavIconView,
};
use crate::i18n;
use crate::nav::{load_remote_items, merge_items, MenuState, NavConfig, NavIcon, NavItem};
use crate::t;
use dioxus::prelude::*;
use once_cell::sync::OnceCell;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Renders one navigation link.
///
/// Arguments: target href, CSS class, handler to run when the link is
/// followed, and the link's children. Platforms with a router register one
/// via [`register_link`] so internal hrefs go through the router; without a
/// registration links render as plain anchors.
///
/// ```ignore
/// fn route_link(href: String, class: &'static str, on_follow: EventHandler, children: Element) -> Element {
///     rsx!(Link { class, to: href, onclick: move |_| on_follow.call(()), {children} })
/// }
/// ui::components::register_link(route_link);
/// ```
pub type LinkRenderer =
    fn(href: String, class: &'static str, on_follow: EventHandler, children: Element) -> Element;

static LINK_RENDERER: OnceCell<LinkRenderer> = OnceCell::new();

pub fn register_link(renderer: LinkRenderer) {
    let _ = LINK_RENDERER.set(renderer);
}

fn render_link(
    href: String,
    class: &'static str,
    on_follow: EventHandler,
    children: Element,
) -> Element {
    match LINK_RENDERER.get() {
        Some(renderer) => renderer(href, class, on_follow, children),
        None => rsx! {
            a { class, href, onclick: move |_| on_follow.call(()), {children} }
        },
    }
}

/// Site navigation bar: horizontal menu on wide screens, slide-in sidebar
/// behind a toggle on narrow ones.
///
/// The remote entries are fetched once per mount. Until (or unless) that
/// succeeds only the seeded "Home" entry is shown.
#[component]
pub fn SiteNavbar() -> Element {
    i18n::init();

    let mut remote = use_signal(Vec::<NavItem>::new);
    let mut menu = use_signal(MenuState::default);

    use_future(move || async move {
        let config = NavConfig::from_env();
        remote.set(load_remote_items(&config).await);
    });

    let items = merge_items(remote());
    let open_label = t!("nav-open-menu");

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        nav { id: "site-nav", class: "site-nav",
            div { class: "site-nav__inner",
                div { class: "site-nav__bar",
                    // Brand slot stays empty; it keeps the menu right-aligned.
                    div { class: "site-nav__brand" }

                    DesktopMenu { items: items.clone(), menu }

                    div { class: "site-nav__toggle-slot",
                        button {
                            r#type: "button",
                            class: "site-nav__toggle",
                            aria_label: "{open_label}",
                            aria_expanded: "{menu().open}",
                            onclick: move |_| menu.write().toggle(),
                            MenuIcon {}
                        }
                    }
                }
            }

            MobileSidebar { items, menu }
        }
    }
}

/// Horizontal menu. Dropdowns open on hover (CSS only).
#[component]
pub fn DesktopMenu(items: Vec<NavItem>, menu: Signal<MenuState>) -> Element {
    rsx! {
        div { class: "site-nav__desktop",
            for (index, item) in items.into_iter().enumerate() {
                {render_desktop_item(index, item, menu)}
            }
        }
    }
}

fn render_desktop_item(index: usize, item: NavItem, mut menu: Signal<MenuState>) -> Element {
    let follow: EventHandler = EventHandler::new(move |()| menu.write().follow_link());
    let has_dropdown = item.has_dropdown();
    let href = item.link_href().map(str::to_string);
    let NavItem { name, submenu, .. } = item;

    let head = match href {
        Some(href) => render_link(href, "site-nav__link", follow, rsx! { "{name}" }),
        None => rsx! {
            button { r#type: "button", class: "site-nav__trigger",
                "{name}"
                ChevronDownIcon {}
            }
        },
    };

    rsx! {
        div { key: "{index}", class: "site-nav__item",
            {head}
            if has_dropdown {
                div { class: "site-nav__dropdown",
                    div { class: "site-nav__dropdown-panel",
                        for sub in submenu.unwrap_or_default() {
                            {render_link(sub.href, "site-nav__dropdown-link", follow, rsx! { "{sub.name}" })}
                        }
                    }
                }
            }
        }
    }
}

/// Off-canvas sidebar. Renders nothing while closed.
#[component]
pub fn MobileSidebar(items: Vec<NavItem>, menu: Signal<MenuState>) -> Element {
    let mut menu = menu;
    let state = menu();
    if !state.open {
        return rsx! {};
    }

    let title = t!("nav-menu-title");
    let close_label = t!("nav-close-menu");
    let footer = t!("nav-footer");

    rsx! {
        div {
            class: "site-nav__overlay",
            onclick: move |_| menu.write().close(),
        }

        aside { class: "site-nav__sidebar",
            div { class: "site-nav__sidebar-header",
                span { class: "site-nav__sidebar-title", "{title}" }
                button {
                    r#type: "button",
                    class: "site-nav__close",
                    aria_label: "{close_label}",
                    onclick: move |_| menu.write().close(),
                    CloseIcon {}
                }
            }

            div { class: "site-nav__sidebar-body",
                for (index, item) in items.into_iter().enumerate() {
                    {render_mobile_item(index, item, state.is_expanded(index), menu)}
                }
            }

            div { class: "site-nav__sidebar-footer",
                p { "{footer}" }
            }
        }
    }
}

fn render_mobile_item(
    index: usize,
    item: NavItem,
    expanded: bool,
    mut menu: Signal<MenuState>,
) -> Element {
    let follow: EventHandler = EventHandler::new(move |()| menu.write().follow_link());
    let initial = item.initial().unwrap_or_default();
    let href = item.link_href().map(str::to_string);
    let NavItem {
        name,
        icon,
        submenu,
        ..
    } = item;

    if let Some(href) = href {
        let icon = icon.unwrap_or(NavIcon::Home);
        let body = rsx! {
            span { class: "site-nav__badge site-nav__badge--icon",
                NavIconView { icon }
            }
            "{name}"
        };
        return rsx! {
            div { key: "{index}", class: "site-nav__mobile-item",
                {render_link(href, "site-nav__mobile-link", follow, body)}
            }
        };
    }

    let trigger_class = if expanded {
        "site-nav__mobile-trigger site-nav__mobile-trigger--expanded"
    } else {
        "site-nav__mobile-trigger"
    };

    rsx! {
        div { key: "{index}", class: "site-nav__mobile-item",
            button {
                r#type: "button",
                class: trigger_class,
                aria_expanded: "{expanded}",
                onclick: move |_| menu.write().toggle_submenu(index),
                span { class: "site-nav__mobile-label",
                    span { class: "site-nav__badge site-nav__badge--initial", "{initial}" }
                    "{name}"
                }
                ChevronRightIcon { rotated: expanded }
            }
            if expanded {
                div { class: "site-nav__submenu",
                    for sub in submenu.unwrap_or_default() {
                        {render_link(sub.href, "site-nav__submenu-link", follow, rsx! { "{sub.name}" })}
                    }
                }
            }
        }
    }
}
