use dioxus::prelude::*;

/// Landing spot for hrefs delivered by the navigation endpoint. The path
/// segments are shown as the page heading.
#[component]
pub fn SitePage(segments: Vec<String>) -> Element {
    let heading = if segments.is_empty() {
        crate::t!("page-title")
    } else {
        segments.join(" / ")
    };

    rsx! {
        section { class: "page page-site",
            h1 { "{heading}" }
            p { {crate::t!("page-body")} }
        }
    }
}
