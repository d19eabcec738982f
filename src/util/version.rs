use std::sync::OnceLock;

pub const APP_NAME: &str = "Freight Dispatch";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const GIT_TAG: Option<&str> = option_env!("GIT_TAG");

/// Release tag when built from a tagged checkout, otherwise the crate version.
pub fn version_label() -> &'static str {
    static LABEL: OnceLock<String> = OnceLock::new();
    LABEL.get_or_init(|| match GIT_TAG {
        Some(tag) => tag.to_string(),
        None => format!("v{}", APP_VERSION),
    })
}

/// Banner line shown by `init`.
pub fn banner() -> String {
    format!("{APP_NAME} {}", version_label())
}
