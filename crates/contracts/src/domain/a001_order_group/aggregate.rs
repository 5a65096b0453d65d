use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Treats an explicit JSON `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Orders placed together in one checkout, as returned by the order-group query.
///
/// `orders` stays optional: the data source may hand back a group without an
/// order list and the page has to tell that apart from a valid one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderGroupDto {
    #[serde(default)]
    pub order_group: Option<String>,
    #[serde(default)]
    pub orders: Option<Vec<OrderDto>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub analytics_data: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDto {
    pub order_id: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub creation_date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub client_profile_data: ClientProfileDataDto,
    pub store_preferences_data: StorePreferencesDataDto,
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<OrderItemDto>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub totals: Vec<OrderTotalDto>,
    /// Order value in minor currency units.
    #[serde(default, deserialize_with = "null_as_default")]
    pub value: i64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientProfileDataDto {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorePreferencesDataDto {
    pub currency_code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemDto {
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub quantity: i64,
    /// Unit price in minor currency units.
    #[serde(default, deserialize_with = "null_as_default")]
    pub selling_price: i64,
    #[serde(default)]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderTotalDto {
    pub id: String,
    pub name: String,
    pub value: i64,
}
