use uuid::Uuid;

pub mod config;
pub mod version;

/// Prefixed random identifier such as `order-3f2c…`.
pub fn generate_id(prefix: &str) -> String {
    format!("{prefix}-{}", Uuid::new_v4().simple())
}

/// Last six characters of an id, as shown in user-facing messages.
pub fn short_id(id: &str) -> &str {
    let start = id
        .char_indices()
        .rev()
        .nth(5)
        .map(|(index, _)| index)
        .unwrap_or(0);
    &id[start..]
}
