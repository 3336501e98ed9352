//! Pantry models

use serde::{Deserialize, Serialize};

use crate::request::QueryParams;

/// One ingredient the user has on hand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PantryItem {
    /// Item id.
    pub id: i64,
    /// Ingredient name.
    #[serde(alias = "name")]
    pub item_name: String,
    /// Amount on hand.
    #[serde(default)]
    pub quantity: f64,
    /// Unit of `quantity`.
    #[serde(default)]
    pub unit: String,
    /// Expiry date, `YYYY-MM-DD`.
    #[serde(default, alias = "expiry_date")]
    pub expiration_date: Option<String>,
    /// Purchase date, `YYYY-MM-DD`.
    #[serde(default)]
    pub purchase_date: Option<String>,
    /// Calories per unit.
    #[serde(default)]
    pub calories_per_unit: Option<f64>,
    /// Owner.
    #[serde(default)]
    pub user_id: Option<i64>,
    /// When the item was added.
    #[serde(default, alias = "created_at")]
    pub added_at: Option<String>,
}

/// Body of `POST /api/v1/pantry/items`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PantryItemCreate {
    /// Ingredient name.
    pub item_name: String,
    /// Amount on hand.
    pub quantity: f64,
    /// Unit of `quantity`.
    pub unit: String,
    /// Expiry date, `YYYY-MM-DD`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<String>,
    /// Purchase date, `YYYY-MM-DD`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_date: Option<String>,
    /// Calories per unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories_per_unit: Option<f64>,
}

/// Body of `PUT /api/v1/pantry/items/{id}`. Absent fields are left unchanged.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PantryItemUpdate {
    /// New name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_name: Option<String>,
    /// New quantity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    /// New unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// New expiry date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<String>,
    /// New purchase date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_date: Option<String>,
    /// New calories per unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories_per_unit: Option<f64>,
}

impl PantryItemUpdate {
    /// Returns true if no field would change.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.item_name.is_none()
            && self.quantity.is_none()
            && self.unit.is_none()
            && self.expiration_date.is_none()
            && self.purchase_date.is_none()
            && self.calories_per_unit.is_none()
    }
}

/// Sort direction for list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Ascending.
    #[default]
    Asc,
    /// Descending.
    Desc,
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Asc => write!(f, "asc"),
            Self::Desc => write!(f, "desc"),
        }
    }
}

impl std::str::FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(format!("unknown sort order: {other}")),
        }
    }
}

/// Filters for `GET /api/v1/pantry/items`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PantryQuery {
    /// Items to skip.
    pub skip: Option<u32>,
    /// Page size.
    pub limit: Option<u32>,
    /// Only items expiring soon.
    pub expiring_soon: Option<bool>,
    /// Field to sort by.
    pub sort_by: Option<String>,
    /// Sort direction.
    pub sort_order: Option<SortOrder>,
}

impl PantryQuery {
    /// Encodes the filters, omitting absent ones.
    #[must_use]
    pub fn to_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.push_opt("skip", self.skip);
        params.push_opt("limit", self.limit);
        params.push_opt("expiring_soon", self.expiring_soon);
        params.push_opt("sort_by", self.sort_by.as_deref());
        params.push_opt("sort_order", self.sort_order);
        params
    }
}
