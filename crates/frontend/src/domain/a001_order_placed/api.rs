//! Order-group data source: GraphQL query against the storefront API.

use super::model::FetchResult;
use crate::shared::api_utils::api_url;
use contracts::domain::a001_order_group::aggregate::OrderGroupDto;
use contracts::domain::a001_order_group::query::{OrderGroupQueryData, OrderGroupVariables};
use contracts::shared::graphql::{GraphQlRequest, GraphQlResponse};
use gloo_net::http::Request;
use web_sys::RequestCredentials;

pub const GET_ORDER_GROUP_QUERY: &str = r#"
query getOrderGroup($orderGroup: String) {
  orderGroup(orderGroup: $orderGroup) {
    orderGroup
    analyticsData
    orders {
      orderId
      status
      creationDate
      value
      clientProfileData { email firstName lastName phone }
      storePreferencesData { currencyCode }
      items { id name quantity sellingPrice imageUrl }
      totals { id name value }
    }
  }
}
"#;

/// Fetches the order group. Every outcome, transport errors included, is
/// reported as a settled [`FetchResult`].
pub async fn fetch_order_group(order_group: Option<String>) -> FetchResult<OrderGroupDto> {
    match send_query(order_group).await {
        Ok((status, body)) => classify_response(status, &body),
        Err(message) => FetchResult::Failed { message },
    }
}

async fn send_query(order_group: Option<String>) -> Result<(u16, String), String> {
    let request = GraphQlRequest {
        query: GET_ORDER_GROUP_QUERY,
        variables: OrderGroupVariables { order_group },
    };

    let response = Request::post(&api_url("/graphql"))
        .credentials(RequestCredentials::Include)
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))?;
    Ok((status, body))
}

/// Maps an HTTP status and response body to a fetch result.
///
/// A group that is present but does not match the expected shape is reported
/// as a successful fetch without data.
pub fn classify_response(status: u16, body: &str) -> FetchResult<OrderGroupDto> {
    if !(200..300).contains(&status) {
        return FetchResult::Failed {
            message: format!("Request failed with status code {}", status),
        };
    }

    let response: GraphQlResponse<OrderGroupQueryData> = match serde_json::from_str(body) {
        Ok(response) => response,
        Err(e) => {
            return FetchResult::Failed {
                message: format!("Failed to parse response: {}", e),
            }
        }
    };

    if let Some(message) = response.error_message() {
        return FetchResult::Failed { message };
    }

    let data = match response.data.unwrap_or_default().decode() {
        Ok(data) => data,
        Err(e) => {
            log::warn!("order group payload rejected: {}", e);
            None
        }
    };
    FetchResult::Succeeded { data }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_order_placed::model::{resolve_view, OrderPlacedView};
    use crate::shared::currency::CurrencyCode;
    use crate::shared::i18n::{message, Locale};
    use serde_json::json;

    fn body(value: serde_json::Value) -> String {
        value.to_string()
    }

    #[test]
    fn test_forbidden_status_carries_code() {
        let result = classify_response(403, "Forbidden");
        assert_eq!(
            result,
            FetchResult::Failed {
                message: "Request failed with status code 403".to_string()
            }
        );
    }

    #[test]
    fn test_unparsable_body_fails() {
        match classify_response(200, "<html>") {
            FetchResult::Failed { message } => {
                assert!(message.starts_with("Failed to parse response"))
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_graphql_errors_fail() {
        let result = classify_response(
            200,
            &body(json!({ "data": null, "errors": [{ "message": "GraphQL error: 403" }] })),
        );
        assert_eq!(
            result,
            FetchResult::Failed {
                message: "GraphQL error: 403".to_string()
            }
        );
    }

    #[test]
    fn test_null_group_succeeds_without_data() {
        let result = classify_response(200, &body(json!({ "data": { "orderGroup": null } })));
        assert_eq!(result, FetchResult::Succeeded { data: None });

        let result = classify_response(200, &body(json!({ "data": null })));
        assert_eq!(result, FetchResult::Succeeded { data: None });
    }

    #[test]
    fn test_malformed_group_succeeds_without_data() {
        let result = classify_response(
            200,
            &body(json!({ "data": { "orderGroup": { "orders": [{ "orderId": 1 }] } } })),
        );
        assert_eq!(result, FetchResult::Succeeded { data: None });
    }

    #[test]
    fn test_valid_group() {
        let result = classify_response(
            200,
            &body(json!({ "data": { "orderGroup": {
                "orderGroup": "abc123",
                "analyticsData": [],
                "orders": [{
                    "orderId": "X1",
                    "clientProfileData": { "firstName": "Ana" },
                    "storePreferencesData": { "currencyCode": "USD" }
                }]
            } } })),
        );

        let FetchResult::Succeeded { data: Some(group) } = result else {
            panic!("expected a group");
        };
        assert_eq!(group.orders.unwrap()[0].order_id, "X1");
    }

    #[test]
    fn test_forbidden_response_renders_unauthorized() {
        let view = resolve_view(&classify_response(403, ""));
        assert_eq!(view, OrderPlacedView::Unauthorized);
        assert_eq!(view.error_id(), Some("order.not-logged-in"));
    }

    #[test]
    fn test_server_error_renders_invalid() {
        let view = resolve_view(&classify_response(500, ""));
        assert_eq!(view.error_id(), Some("order.invalid"));
    }

    #[test]
    fn test_successful_response_renders_content() {
        let result = classify_response(
            200,
            &body(json!({ "data": { "orderGroup": {
                "analyticsData": [],
                "orders": [{
                    "orderId": "X1",
                    "clientProfileData": { "firstName": "Ana" },
                    "storePreferencesData": { "currencyCode": "USD" }
                }]
            } } })),
        );

        let OrderPlacedView::Content(group) = resolve_view(&result) else {
            panic!("expected content view");
        };
        assert_eq!(group.currency(), CurrencyCode::new("USD"));
        assert_eq!(group.orders().len(), 1);
        assert_eq!(group.orders()[0].order_id, "X1");
        assert!(group.analytics_data().is_empty());
        assert_eq!(message(Locale::En, "page.title"), "Order placed");
    }

    #[test]
    fn test_null_optional_fields_still_render_content() {
        let result = classify_response(
            200,
            &body(json!({ "data": { "orderGroup": {
                "analyticsData": null,
                "orders": [
                    {
                        "orderId": "X1",
                        "clientProfileData": { "firstName": "Ana" },
                        "storePreferencesData": { "currencyCode": "USD" }
                    },
                    {
                        "orderId": "X2",
                        "clientProfileData": null,
                        "storePreferencesData": { "currencyCode": "USD" },
                        "items": null,
                        "totals": null
                    }
                ]
            } } })),
        );

        let view = resolve_view(&result);
        assert_eq!(view.name(), "content");
        let OrderPlacedView::Content(group) = view else {
            unreachable!();
        };
        assert_eq!(group.orders()[1].order_id, "X2");
        assert!(group.orders()[1].items.is_empty());
        assert!(group.analytics_data().is_empty());
    }
}
