use crate::domain::content::CustomOrderForm;
use crate::domain::error::{AppError, Result};
use crate::infrastructure::sheets::SheetFetcher;

/// Posts an order form as JSON to the configured endpoint.
///
/// The endpoint answers opaquely, so a completed request counts as
/// success; only transport failures and a missing endpoint are errors.
pub async fn submit_custom_order(
    fetcher: &SheetFetcher,
    script_url: &str,
    form: &CustomOrderForm,
) -> Result<()> {
    let url = script_url.trim();
    if url.is_empty() {
        return Err(AppError::ConfigError(
            "No order submission endpoint configured".to_string(),
        ));
    }

    tracing::info!("Submitting custom order form");
    fetcher.post_json_opaque(url, form).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_endpoint_is_config_error() {
        let fetcher = SheetFetcher::new().unwrap();
        let form = CustomOrderForm::default();
        match submit_custom_order(&fetcher, "  ", &form).await {
            Err(AppError::ConfigError(_)) => {}
            other => panic!("expected config error, got {:?}", other),
        }
    }

    #[test]
    fn test_form_serializes_with_camel_case_keys() {
        let form = CustomOrderForm {
            name: "Ada".to_string(),
            order_type: "Wedding Cake".to_string(),
            delivery_date: "2026-09-01".to_string(),
            ..CustomOrderForm::default()
        };
        let json = serde_json::to_value(&form).unwrap();
        assert_eq!(json["name"], "Ada");
        assert_eq!(json["orderType"], "Wedding Cake");
        assert_eq!(json["deliveryDate"], "2026-09-01");
        assert!(json.get("order_type").is_none());
    }
}
