use crate::models::DriverRecord;
use crate::services::store::{CandidateStore, StoreError};
use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;

/// Firestore REST client
///
/// Implements the spatial candidate store over the `documents:runQuery`
/// endpoint. The client is constructed once and injected into the engine;
/// there is no process-wide singleton connection.
pub struct FirestoreClient {
    endpoint: String,
    project_id: String,
    database_id: String,
    auth_token: String,
    drivers_collection: String,
    client: Client,
}

impl FirestoreClient {
    pub fn new(
        endpoint: String,
        project_id: String,
        database_id: String,
        auth_token: String,
        drivers_collection: String,
    ) -> Result<Self, StoreError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            endpoint,
            project_id,
            database_id,
            auth_token,
            drivers_collection,
            client,
        })
    }

    fn run_query_url(&self) -> String {
        format!(
            "{}/projects/{}/databases/{}/documents:runQuery",
            self.endpoint.trim_end_matches('/'),
            self.project_id,
            self.database_id
        )
    }

    /// Build the structured query for a latitude range over the drivers
    /// collection. Latitude is the single range field the store filters
    /// on; longitude and radius filtering happen engine-side.
    fn latitude_range_query(&self, min_lat: f64, max_lat: f64) -> Value {
        json!({
            "structuredQuery": {
                "from": [{ "collectionId": self.drivers_collection }],
                "where": {
                    "compositeFilter": {
                        "op": "AND",
                        "filters": [
                            {
                                "fieldFilter": {
                                    "field": { "fieldPath": "lat" },
                                    "op": "GREATER_THAN_OR_EQUAL",
                                    "value": { "doubleValue": min_lat }
                                }
                            },
                            {
                                "fieldFilter": {
                                    "field": { "fieldPath": "lat" },
                                    "op": "LESS_THAN_OR_EQUAL",
                                    "value": { "doubleValue": max_lat }
                                }
                            }
                        ]
                    }
                }
            }
        })
    }
}

impl CandidateStore for FirestoreClient {
    async fn query_by_latitude_range(
        &self,
        min_lat: f64,
        max_lat: f64,
    ) -> Result<Vec<DriverRecord>, StoreError> {
        let url = self.run_query_url();
        let body = self.latitude_range_query(min_lat, max_lat);

        tracing::debug!("Querying drivers with lat in [{}, {}]", min_lat, max_lat);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.auth_token)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let detail = response
                .text()
                .await
                .unwrap_or_else(|_| "unable to read body".to_string());
            return Err(StoreError::Api(format!(
                "runQuery failed with {}: {}",
                status, detail
            )));
        }

        let results: Value = response.json().await?;
        let rows = results
            .as_array()
            .ok_or_else(|| StoreError::InvalidResponse("expected a result array".into()))?;

        // Each row wraps either a document or a bare readTime; rows
        // without a document carry no data and are skipped.
        let records: Vec<DriverRecord> = rows
            .iter()
            .filter_map(|row| parse_document(row.get("document")?))
            .collect();

        tracing::debug!("Fetched {} driver records", records.len());

        Ok(records)
    }
}

/// Parse one Firestore document into a raw driver record.
///
/// Missing or mistyped fields become `None` rather than errors; the store
/// is not trusted to validate its own data. Returns `None` only when the
/// document has no usable id.
fn parse_document(document: &Value) -> Option<DriverRecord> {
    let id = document
        .get("name")
        .and_then(Value::as_str)
        .and_then(|name| name.rsplit('/').next())
        .filter(|id| !id.is_empty())?
        .to_string();

    let fields = document.get("fields").unwrap_or(&Value::Null);

    Some(DriverRecord {
        id,
        name: string_field(fields, "name"),
        lat: numeric_field(fields, "lat"),
        lng: numeric_field(fields, "lng"),
        duty_state: string_field(fields, "duty_state"),
        having_task: bool_field(fields, "havingtask"),
        is_online: bool_field(fields, "isOnline"),
    })
}

fn string_field(fields: &Value, key: &str) -> Option<String> {
    fields
        .get(key)?
        .get("stringValue")
        .and_then(Value::as_str)
        .map(str::to_string)
}

/// Firestore encodes numbers as either `doubleValue` or a string-wrapped
/// `integerValue`; accept both.
fn numeric_field(fields: &Value, key: &str) -> Option<f64> {
    let value = fields.get(key)?;
    if let Some(d) = value.get("doubleValue").and_then(Value::as_f64) {
        return Some(d);
    }
    value
        .get("integerValue")
        .and_then(Value::as_str)
        .and_then(|s| s.parse().ok())
}

fn bool_field(fields: &Value, key: &str) -> Option<bool> {
    fields.get(key)?.get("booleanValue").and_then(Value::as_bool)
}
