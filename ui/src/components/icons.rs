//! Inline stroke icons (24x24 grid).

use dioxus::prelude::*;

use crate::nav::NavIcon;

#[component]
fn StrokeIcon(size: u32, #[props(into)] class: String, children: Element) -> Element {
    rsx! {
        svg {
            class,
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            {children}
        }
    }
}

#[component]
pub fn HomeIcon(#[props(default = 18)] size: u32) -> Element {
    rsx! {
        StrokeIcon { size, class: "icon icon--home",
            path { d: "m3 9 9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z" }
            polyline { points: "9 22 9 12 15 12 15 22" }
        }
    }
}

#[component]
pub fn MenuIcon(#[props(default = 24)] size: u32) -> Element {
    rsx! {
        StrokeIcon { size, class: "icon icon--menu",
            line { x1: "4", x2: "20", y1: "6", y2: "6" }
            line { x1: "4", x2: "20", y1: "12", y2: "12" }
            line { x1: "4", x2: "20", y1: "18", y2: "18" }
        }
    }
}

#[component]
pub fn CloseIcon(#[props(default = 20)] size: u32) -> Element {
    rsx! {
        StrokeIcon { size, class: "icon icon--close",
            path { d: "M18 6 6 18" }
            path { d: "m6 6 12 12" }
        }
    }
}

#[component]
pub fn ChevronDownIcon(#[props(default = 14)] size: u32) -> Element {
    rsx! {
        StrokeIcon { size, class: "icon icon--chevron-down",
            path { d: "m6 9 6 6 6-6" }
        }
    }
}

#[component]
pub fn ChevronRightIcon(#[props(default = 18)] size: u32, rotated: bool) -> Element {
    let class = if rotated {
        "icon icon--chevron-right icon--rotated"
    } else {
        "icon icon--chevron-right"
    };
    rsx! {
        StrokeIcon { size, class,
            path { d: "m9 18 6-6-6-6" }
        }
    }
}

/// SVG for an entry's icon. Generic icons reuse the home glyph.
#[component]
pub fn NavIconView(icon: NavIcon, #[props(default = 18)] size: u32) -> Element {
    match icon {
        NavIcon::Home | NavIcon::Generic => rsx! { HomeIcon { size } },
    }
}
