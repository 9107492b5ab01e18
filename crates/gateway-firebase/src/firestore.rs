//! Minimal Firestore REST client.
//!
//! Documents cross the wire in Firestore's typed-value encoding
//! (`stringValue`, `integerValue`, `mapValue`, ...). The codec below maps
//! that encoding to and from plain JSON objects so the repositories can
//! stay in `serde_json::Value` and let serde do the model mapping.

use std::sync::Arc;

use log::debug;
use serde_json::{json, Map, Value};

use loanbridge_core::errors::{Error, Result};

use crate::auth::FirebaseAuthGateway;
use crate::config::FirebaseConfig;

pub struct FirestoreClient {
    http: reqwest::Client,
    config: FirebaseConfig,
    auth: Arc<FirebaseAuthGateway>,
}

impl FirestoreClient {
    pub fn new(
        http: reqwest::Client,
        config: FirebaseConfig,
        auth: Arc<FirebaseAuthGateway>,
    ) -> Self {
        FirestoreClient { http, config, auth }
    }

    fn document_url(&self, collection: &str, id: &str) -> String {
        format!("{}/{collection}/{id}", self.config.firestore_base())
    }

    fn authorized(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.auth.id_token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Creates a document with a store-generated id and returns it decoded.
    pub async fn create(&self, collection: &str, document: Value) -> Result<Value> {
        let url = format!("{}/{collection}", self.config.firestore_base());
        let body = json!({ "fields": encode_fields(&document)? });
        let response = self
            .authorized(self.http.post(&url).json(&body))
            .send()
            .await
            .map_err(|e| Error::Persistence(e.to_string()))?;
        decode_document(&read_success(response).await?)
    }

    /// Creates a document under a caller-supplied id.
    pub async fn put(&self, collection: &str, id: &str, document: Value) -> Result<Value> {
        let url = format!(
            "{}/{collection}?documentId={}",
            self.config.firestore_base(),
            urlencoding::encode(id)
        );
        let body = json!({ "fields": encode_fields(&document)? });
        let response = self
            .authorized(self.http.post(&url).json(&body))
            .send()
            .await
            .map_err(|e| Error::Persistence(e.to_string()))?;
        decode_document(&read_success(response).await?)
    }

    pub async fn get(&self, collection: &str, id: &str) -> Result<Option<Value>> {
        let response = self
            .authorized(self.http.get(self.document_url(collection, id)))
            .send()
            .await
            .map_err(|e| Error::Persistence(e.to_string()))?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        decode_document(&read_success(response).await?).map(Some)
    }

    /// The full collection. Pagination is not requested; the collections
    /// this client serves stay small.
    pub async fn list(&self, collection: &str) -> Result<Vec<Value>> {
        let url = format!("{}/{collection}", self.config.firestore_base());
        let response = self
            .authorized(self.http.get(&url))
            .send()
            .await
            .map_err(|e| Error::Persistence(e.to_string()))?;
        let body = read_success(response).await?;
        body["documents"]
            .as_array()
            .unwrap_or(&Vec::new())
            .iter()
            .map(decode_document)
            .collect()
    }

    /// Documents whose `field` equals the given string.
    pub async fn query_eq(&self, collection: &str, field: &str, value: &str) -> Result<Vec<Value>> {
        let url = format!("{}:runQuery", self.config.firestore_base());
        let body = json!({
            "structuredQuery": {
                "from": [{ "collectionId": collection }],
                "where": {
                    "fieldFilter": {
                        "field": { "fieldPath": field },
                        "op": "EQUAL",
                        "value": { "stringValue": value },
                    }
                }
            }
        });
        let response = self
            .authorized(self.http.post(&url).json(&body))
            .send()
            .await
            .map_err(|e| Error::Persistence(e.to_string()))?;
        let rows = read_success(response).await?;
        debug!("query {collection}.{field} returned");
        rows.as_array()
            .unwrap_or(&Vec::new())
            .iter()
            .filter(|row| row.get("document").is_some())
            .map(|row| decode_document(&row["document"]))
            .collect()
    }

    /// Merges the given top-level fields into the document and returns the
    /// updated document.
    pub async fn update(&self, collection: &str, id: &str, patch: Value) -> Result<Value> {
        let fields = encode_fields(&patch)?;
        let mask: Vec<String> = fields
            .keys()
            .map(|key| format!("updateMask.fieldPaths={}", urlencoding::encode(key)))
            .collect();
        let url = format!("{}?{}", self.document_url(collection, id), mask.join("&"));
        let response = self
            .authorized(self.http.patch(&url).json(&json!({ "fields": fields })))
            .send()
            .await
            .map_err(|e| Error::Persistence(e.to_string()))?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(Error::NotFound(format!("{collection}/{id}")));
        }
        decode_document(&read_success(response).await?)
    }
}

async fn read_success(response: reqwest::Response) -> Result<Value> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(Error::Persistence(format!("firestore {status}: {body}")));
    }
    response
        .json::<Value>()
        .await
        .map_err(|e| Error::Persistence(e.to_string()))
}

/// Encodes a flat JSON object as Firestore `fields`. The `id` key is the
/// document name and never travels in the body.
pub(crate) fn encode_fields(document: &Value) -> Result<Map<String, Value>> {
    let object = document
        .as_object()
        .ok_or_else(|| Error::Persistence("document is not an object".to_string()))?;
    Ok(object
        .iter()
        .filter(|(key, _)| key.as_str() != "id")
        .map(|(key, value)| (key.clone(), encode_value(value)))
        .collect())
}

fn encode_value(value: &Value) -> Value {
    match value {
        Value::Null => json!({ "nullValue": null }),
        Value::Bool(b) => json!({ "booleanValue": b }),
        Value::Number(n) => match n.as_i64() {
            Some(i) => json!({ "integerValue": i.to_string() }),
            None => json!({ "doubleValue": n }),
        },
        Value::String(s) => json!({ "stringValue": s }),
        Value::Array(items) => json!({
            "arrayValue": { "values": items.iter().map(encode_value).collect::<Vec<_>>() }
        }),
        Value::Object(fields) => json!({
            "mapValue": {
                "fields": fields
                    .iter()
                    .map(|(key, value)| (key.clone(), encode_value(value)))
                    .collect::<Map<_, _>>()
            }
        }),
    }
}

/// Decodes a Firestore document into a flat JSON object, with the last
/// segment of the document name exposed as `id`.
pub(crate) fn decode_document(document: &Value) -> Result<Value> {
    let mut object = Map::new();
    if let Some(name) = document["name"].as_str() {
        if let Some(id) = name.rsplit('/').next() {
            object.insert("id".to_string(), json!(id));
        }
    }
    if let Some(fields) = document["fields"].as_object() {
        for (key, value) in fields {
            object.insert(key.clone(), decode_value(value)?);
        }
    }
    Ok(Value::Object(object))
}

fn decode_value(value: &Value) -> Result<Value> {
    let object = value
        .as_object()
        .ok_or_else(|| Error::Persistence("malformed typed value".to_string()))?;
    let (kind, inner) = object
        .iter()
        .next()
        .ok_or_else(|| Error::Persistence("empty typed value".to_string()))?;
    match kind.as_str() {
        "nullValue" => Ok(Value::Null),
        "booleanValue" | "doubleValue" | "stringValue" | "timestampValue" => Ok(inner.clone()),
        "integerValue" => {
            let raw = inner
                .as_str()
                .ok_or_else(|| Error::Persistence("integerValue is not a string".to_string()))?;
            let parsed: i64 = raw
                .parse()
                .map_err(|_| Error::Persistence(format!("bad integerValue: {raw}")))?;
            Ok(json!(parsed))
        }
        "arrayValue" => inner["values"]
            .as_array()
            .unwrap_or(&Vec::new())
            .iter()
            .map(decode_value)
            .collect::<Result<Vec<_>>>()
            .map(Value::Array),
        "mapValue" => {
            let mut fields = Map::new();
            if let Some(inner_fields) = inner["fields"].as_object() {
                for (key, value) in inner_fields {
                    fields.insert(key.clone(), decode_value(value)?);
                }
            }
            Ok(Value::Object(fields))
        }
        other => Err(Error::Persistence(format!("unknown typed value: {other}"))),
    }
}
