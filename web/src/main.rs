use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use ui::components::{register_link, SiteNavbar};
use ui::views::{Home, SitePage};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebLayout)]
    #[route("/")]
    Home {},
    #[route("/:..segments")]
    SitePage { segments: Vec<String> },
}

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Navbar links go through the router; external hrefs fall through to the
/// browser.
fn route_link(
    href: String,
    class: &'static str,
    on_follow: EventHandler,
    children: Element,
) -> Element {
    rsx!(Link {
        class,
        to: href,
        onclick: move |_| on_follow.call(()),
        {children}
    })
}

fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("logger already initialized: {err}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();
    register_link(route_link);

    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

/// Shared navbar above every routed page.
#[component]
fn WebLayout() -> Element {
    rsx! {
        SiteNavbar {}
        main { Outlet::<Route> {} }
    }
}
