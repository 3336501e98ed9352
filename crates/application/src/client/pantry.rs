//! Pantry endpoints

use planeats_domain::models::{PantryItem, PantryItemCreate, PantryItemUpdate, PantryQuery};
use planeats_domain::{ApiRequest, ApiResponse};

use super::{API_PREFIX, ApiClient};

impl ApiClient {
    /// `GET /api/v1/pantry/items`, with the query's filters.
    pub async fn list_pantry_items(&self, query: &PantryQuery) -> ApiResponse<Vec<PantryItem>> {
        let endpoint = query.to_params().append_to(&format!("{API_PREFIX}/pantry/items"));
        self.request(ApiRequest::get(endpoint)).await
    }

    /// `GET /api/v1/pantry/items/{id}`.
    pub async fn get_pantry_item(&self, id: i64) -> ApiResponse<PantryItem> {
        self.request(ApiRequest::get(format!("{API_PREFIX}/pantry/items/{id}")))
            .await
    }

    /// `POST /api/v1/pantry/items`.
    pub async fn add_pantry_item(&self, item: &PantryItemCreate) -> ApiResponse<PantryItem> {
        self.request(ApiRequest::post(format!("{API_PREFIX}/pantry/items")).json(item))
            .await
    }

    /// `PUT /api/v1/pantry/items/{id}`.
    pub async fn update_pantry_item(
        &self,
        id: i64,
        update: &PantryItemUpdate,
    ) -> ApiResponse<PantryItem> {
        self.request(ApiRequest::put(format!("{API_PREFIX}/pantry/items/{id}")).json(update))
            .await
    }

    /// `DELETE /api/v1/pantry/items/{id}`.
    ///
    /// The payload is whatever the backend answers, usually the deleted item.
    pub async fn delete_pantry_item(&self, id: i64) -> ApiResponse<serde_json::Value> {
        self.request(ApiRequest::delete(format!("{API_PREFIX}/pantry/items/{id}")))
            .await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::test_support::{ScriptedHttpClient, json_response};
    use planeats_domain::HttpMethod;
    use planeats_domain::models::SortOrder;
    use pretty_assertions::assert_eq;

    const ITEM: &str = r#"{"id":3,"item_name":"Milk","quantity":1.5,"unit":"l","user_id":9}"#;

    #[tokio::test]
    async fn test_list_builds_query_string() {
        let http = ScriptedHttpClient::new(vec![
            Ok(json_response(200, &format!("[{ITEM}]"))),
            Ok(json_response(200, "[]")),
        ]);
        let api = ApiClient::new(http.clone(), "http://api.test");

        let query = PantryQuery {
            limit: Some(20),
            expiring_soon: Some(true),
            sort_order: Some(SortOrder::Desc),
            ..PantryQuery::default()
        };
        let items = api.list_pantry_items(&query).await.into_result().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].item_name, "Milk");

        let _ = api.list_pantry_items(&PantryQuery::default()).await;

        let sent = http.requests();
        assert_eq!(
            sent[0].url,
            "http://api.test/api/v1/pantry/items?limit=20&expiring_soon=true&sort_order=desc"
        );
        assert_eq!(sent[1].url, "http://api.test/api/v1/pantry/items");
    }

    #[tokio::test]
    async fn test_update_and_delete_paths() {
        let http = ScriptedHttpClient::new(vec![
            Ok(json_response(200, ITEM)),
            Ok(json_response(200, ITEM)),
        ]);
        let api = ApiClient::new(http.clone(), "http://api.test");

        let update = PantryItemUpdate {
            quantity: Some(2.0),
            ..PantryItemUpdate::default()
        };
        let updated = api.update_pantry_item(3, &update).await;
        assert!(updated.is_data());
        let deleted = api.delete_pantry_item(3).await;
        assert_eq!(deleted.data_ref().and_then(|v| v.get("id")), Some(&serde_json::json!(3)));

        let sent = http.requests();
        assert_eq!(sent[0].method, HttpMethod::Put);
        assert_eq!(sent[0].body.as_deref(), Some(r#"{"quantity":2.0}"#));
        assert_eq!(sent[1].method, HttpMethod::Delete);
        assert_eq!(sent[1].url, "http://api.test/api/v1/pantry/items/3");
    }
}
