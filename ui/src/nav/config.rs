//! Where the remote navigation list comes from.

/// Environment variable holding the API base address.
pub const BASE_URL_VAR: &str = "SITE_API_BASE_URL";

/// Path of the navigation endpoint relative to the base address.
pub const NAV_PATH: &str = "/navbar/get-nav";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavConfig {
    pub base_url: Option<String>,
}

impl NavConfig {
    pub fn new<S: Into<String>>(base_url: Option<S>) -> Self {
        Self {
            base_url: base_url.map(Into::into).and_then(normalize),
        }
    }

    /// Base address baked in at build time; native builds let the process
    /// environment override it.
    pub fn from_env() -> Self {
        let compiled = option_env!("SITE_API_BASE_URL").map(str::to_string);

        #[cfg(not(target_arch = "wasm32"))]
        let runtime = std::env::var(BASE_URL_VAR).ok().and_then(normalize);
        #[cfg(target_arch = "wasm32")]
        let runtime: Option<String> = None;

        Self::new(runtime.or(compiled))
    }

    /// Full endpoint URL, or `None` when no base address is configured.
    pub fn endpoint(&self) -> Option<String> {
        self.base_url
            .as_deref()
            .map(|base| format!("{base}{NAV_PATH}"))
    }
}

fn normalize(raw: String) -> Option<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
