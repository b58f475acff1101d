//! Build-time storefront configuration.
use storefront_core::StorefrontConfig;

/// Load the embedded config, falling back to the defaults if it does not parse.
#[must_use]
pub fn load_from_static() -> StorefrontConfig {
    parse_or_default(include_str!("../static/config/storefront.json"))
}

fn parse_or_default(json: &str) -> StorefrontConfig {
    StorefrontConfig::from_json(json).unwrap_or_else(|err| {
        log::warn!("storefront config rejected, using defaults: {err}");
        StorefrontConfig::default_config()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::{DEFAULT_CATALOG_URL, PAGE_SIZE};

    #[test]
    fn embedded_config_points_at_the_listing_endpoint() {
        let cfg = load_from_static();
        assert_eq!(cfg.catalog_url, DEFAULT_CATALOG_URL);
        assert_eq!(cfg.page_size, PAGE_SIZE);
    }

    #[test]
    fn broken_config_falls_back_to_defaults() {
        assert_eq!(parse_or_default("{"), StorefrontConfig::default_config());
    }
}
