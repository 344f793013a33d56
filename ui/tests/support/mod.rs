//! Helpers shared by the integration tests: SSR rendering of the menus and
//! a one-shot HTTP server standing in for the navigation endpoint.
#![allow(dead_code)]

use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

use dioxus::prelude::*;
use ui::components::{DesktopMenu, MobileSidebar};
use ui::nav::{MenuState, NavItem};

#[derive(Props, Clone, PartialEq)]
struct MenuHarnessProps {
    items: Vec<NavItem>,
    state: MenuState,
}

#[allow(non_snake_case)]
fn DesktopHarness(props: MenuHarnessProps) -> Element {
    let menu = use_signal(|| props.state);
    rsx! { DesktopMenu { items: props.items.clone(), menu } }
}

#[allow(non_snake_case)]
fn MobileHarness(props: MenuHarnessProps) -> Element {
    let menu = use_signal(|| props.state);
    rsx! { MobileSidebar { items: props.items.clone(), menu } }
}

/// Selects the fallback locale so assertions on fixed labels ("Home",
/// "MENU") do not depend on the host's locale. Call before building items.
pub fn pin_english() {
    ui::i18n::init();
    ui::i18n::set_language("en-US").expect("select en-US");
}

pub fn render_desktop(items: Vec<NavItem>) -> String {
    let mut dom = VirtualDom::new_with_props(
        DesktopHarness,
        MenuHarnessProps {
            items,
            state: MenuState::default(),
        },
    );
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

pub fn render_mobile(items: Vec<NavItem>, state: MenuState) -> String {
    let mut dom = VirtualDom::new_with_props(MobileHarness, MenuHarnessProps { items, state });
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

/// Byte offsets of each needle in `haystack`; panics when one is missing.
pub fn positions(haystack: &str, needles: &[&str]) -> Vec<usize> {
    needles
        .iter()
        .map(|needle| {
            haystack
                .find(needle)
                .unwrap_or_else(|| panic!("`{needle}` missing from:\n{haystack}"))
        })
        .collect()
}

pub fn assert_in_order(haystack: &str, needles: &[&str]) {
    let found = positions(haystack, needles);
    assert!(
        found.windows(2).all(|w| w[0] < w[1]),
        "expected {needles:?} in order, got offsets {found:?} in:\n{haystack}"
    );
}

/// Request line seen by a [`serve_once`] server.
pub struct Served {
    pub base_url: String,
    handle: JoinHandle<String>,
}

impl Served {
    pub fn request_line(self) -> String {
        self.handle.join().expect("server thread panicked")
    }
}

/// Answers exactly one request with `status` and a JSON `body`.
pub fn serve_once(status: &str, body: &str) -> Served {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind test listener");
    let addr = listener.local_addr().expect("listener address");
    let response = format!(
        "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("accept connection");
        let mut reader = BufReader::new(stream.try_clone().expect("clone stream"));

        let mut request_line = String::new();
        reader.read_line(&mut request_line).expect("read request line");
        loop {
            let mut header = String::new();
            let read = reader.read_line(&mut header).expect("read header");
            if read == 0 || header == "\r\n" {
                break;
            }
        }

        stream
            .write_all(response.as_bytes())
            .expect("write response");
        stream.flush().expect("flush response");
        request_line.trim_end().to_string()
    });

    Served {
        base_url: format!("http://{addr}"),
        handle,
    }
}

/// Base URL of a port nothing listens on.
pub fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind probe listener");
    let addr = listener.local_addr().expect("probe address");
    drop(listener);
    format!("http://{addr}")
}
