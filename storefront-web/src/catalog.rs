//! One-shot catalog request against the configured listing endpoint.
use crate::dom;
use storefront_core::Product;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogLoadError {
    #[error("Request failed: {0}")]
    Request(String),
    #[error("JSON parsing error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Fetch the product list with a single unparameterized GET.
///
/// # Errors
///
/// Returns an error on transport failure, a non-success status, a body read
/// that is rejected mid-stream, or a body that is not a JSON array of products.
#[allow(clippy::future_not_send)]
pub async fn fetch_catalog(url: &str) -> Result<Vec<Product>, CatalogLoadError> {
    let response = dom::fetch_response(url)
        .await
        .map_err(|err| CatalogLoadError::Request(dom::js_error_message(&err)))?;

    if !response.ok() {
        return Err(CatalogLoadError::Request(format!(
            "HTTP {status}: {status_text}",
            status = response.status(),
            status_text = response.status_text()
        )));
    }

    let text = dom::response_text(&response)
        .await
        .map_err(|err| body_read_error(&dom::js_error_message(&err)))?;
    parse_catalog(&text)
}

/// A rejected body read is a transport failure; the browser decodes text lossily.
fn body_read_error(message: &str) -> CatalogLoadError {
    CatalogLoadError::Request(format!("reading response body: {message}"))
}

pub(crate) fn parse_catalog(text: &str) -> Result<Vec<Product>, CatalogLoadError> {
    Ok(serde_json::from_str(text)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_catalog_reads_product_arrays() {
        let products = parse_catalog(r#"[{"id": 3, "title": "Mug", "price": 4}]"#)
            .expect("catalog parses");
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].title, "Mug");
    }

    #[test]
    fn parse_errors_render_a_readable_message() {
        let err = parse_catalog("not json").expect_err("should fail");
        assert!(err.to_string().starts_with("JSON parsing error"));
        let request = CatalogLoadError::Request("HTTP 404: Not Found".to_string());
        assert_eq!(request.to_string(), "Request failed: HTTP 404: Not Found");
    }

    #[test]
    fn body_read_failures_are_reported_as_request_errors() {
        let err = body_read_error("TypeError: network error");
        assert!(matches!(err, CatalogLoadError::Request(_)));
        assert_eq!(
            err.to_string(),
            "Request failed: reading response body: TypeError: network error"
        );
    }
}
