/// Runtime settings read from the page the widget is mounted in.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClientConfig {
    /// Prefix for API paths. Empty means relative to the page.
    pub api_base: String,
}

/// Attribute on the mount element that overrides the API location.
const API_BASE_ATTR: &str = "data-api-base";

impl ClientConfig {
    pub fn from_mount(mount: Option<&web_sys::Element>) -> Self {
        let raw = mount
            .and_then(|el| el.get_attribute(API_BASE_ATTR))
            .unwrap_or_default();
        Self {
            api_base: normalize_base(&raw),
        }
    }

    /// URL of an API path such as `chemicals` or `poundsReleased`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path.trim_start_matches('/'))
    }
}

fn normalize_base(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{trimmed}/")
    }
}
