//! View-state model of the order confirmation page.
//!
//! A [`FetchResult`] delivered by the data source is mapped by [`resolve_view`] to
//! exactly one [`OrderPlacedView`]. The mapping is a pure function and is
//! re-evaluated on every new result.

use crate::shared::currency::CurrencyCode;
use contracts::domain::a001_order_group::aggregate::{OrderDto, OrderGroupDto};

/// Message key of the banner shown when the shopper is not allowed to see the order.
pub const ERROR_NOT_LOGGED_IN: &str = "order.not-logged-in";
/// Message key of the banner shown for a missing or unusable order group.
pub const ERROR_INVALID: &str = "order.invalid";

/// Marker the data source leaves in failure messages for HTTP 403 responses.
const FORBIDDEN_MARKER: &str = "403";

/// State of one order-group fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchResult<T> {
    Pending,
    Failed { message: String },
    Succeeded { data: Option<T> },
}

/// Order group that passed validation: the order list is present and non-empty.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedOrderGroup {
    payload: OrderGroupDto,
}

impl PlacedOrderGroup {
    pub fn new(payload: OrderGroupDto) -> Option<Self> {
        let has_orders = matches!(payload.orders.as_deref(), Some([_, ..]));
        has_orders.then(|| Self { payload })
    }

    pub fn payload(&self) -> &OrderGroupDto {
        &self.payload
    }

    pub fn orders(&self) -> &[OrderDto] {
        self.payload.orders.as_deref().unwrap_or_default()
    }

    pub fn first_order(&self) -> &OrderDto {
        // non-empty, checked in `new`
        &self.orders()[0]
    }

    pub fn analytics_data(&self) -> &[serde_json::Value] {
        &self.payload.analytics_data
    }

    /// Currency of the whole group, taken from the first order.
    pub fn currency(&self) -> CurrencyCode {
        CurrencyCode::new(
            self.first_order()
                .store_preferences_data
                .currency_code
                .clone(),
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum OrderPlacedView {
    Loading,
    Unauthorized,
    Invalid,
    Content(PlacedOrderGroup),
}

impl OrderPlacedView {
    /// Message key of the error banner for error variants.
    pub fn error_id(&self) -> Option<&'static str> {
        match self {
            OrderPlacedView::Unauthorized => Some(ERROR_NOT_LOGGED_IN),
            OrderPlacedView::Invalid => Some(ERROR_INVALID),
            OrderPlacedView::Loading | OrderPlacedView::Content(_) => None,
        }
    }

    /// Short variant name used in DOM attributes and logs.
    pub fn name(&self) -> &'static str {
        match self {
            OrderPlacedView::Loading => "loading",
            OrderPlacedView::Unauthorized => "unauthorized",
            OrderPlacedView::Invalid => "invalid",
            OrderPlacedView::Content(_) => "content",
        }
    }

    /// Analytics events to push for this view. Only the content view has any.
    pub fn analytics_events(&self) -> Vec<serde_json::Value> {
        match self {
            OrderPlacedView::Content(group) => group.analytics_data().to_vec(),
            _ => Vec::new(),
        }
    }
}

/// Selects the view for a fetch result. First matching arm wins:
///
/// 1. pending → `Loading`
/// 2. failed with a `403` message → `Unauthorized`
/// 3. any other failure → `Invalid`
/// 4. succeeded without a group, or with a missing or empty order list → `Invalid`
/// 5. otherwise → `Content`
pub fn resolve_view(result: &FetchResult<OrderGroupDto>) -> OrderPlacedView {
    match result {
        FetchResult::Pending => OrderPlacedView::Loading,
        FetchResult::Failed { message } if message.contains(FORBIDDEN_MARKER) => {
            OrderPlacedView::Unauthorized
        }
        FetchResult::Failed { .. } => OrderPlacedView::Invalid,
        FetchResult::Succeeded { data } => data
            .clone()
            .and_then(PlacedOrderGroup::new)
            .map(OrderPlacedView::Content)
            .unwrap_or(OrderPlacedView::Invalid),
    }
}
