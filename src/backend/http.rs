// src/backend/http.rs
use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder, Response};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Backend;
use crate::error::{ReportError, Result};
use crate::specs::comparacion::{ComparisonRecord, ReconciliationRow};
use crate::specs::dias_disponibles::InventoryRecord;

const LOGIN_PATH: &str = "/api/v1/auth/login";
const INVENTORY_PATH: &str = "/api/v1/available/";
const INVENTORY_BULK_PATH: &str = "/api/v1/available/bulk";
const COMPARISONS_PATH: &str = "/api/v1/comparisons/";
const COMPARISON_DATES_PATH: &str = "/api/v1/comparisons/dates";

const TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Deserialize)]
struct LoginResponse {
    access_token: String,
}

#[derive(Serialize)]
struct ComparisonPayload<'a> {
    fecha: &'a str,
    rows: &'a [ReconciliationRow],
}

/// Bearer-token JSON client for the dashboard API.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    base_url: String,
    token: Option<String>,
    client: Client,
}

fn build_client() -> Result<Client> {
    Ok(Client::builder().timeout(TIMEOUT).build()?)
}

impl HttpBackend {
    pub fn new(base_url: &str, token: Option<String>) -> Result<Self> {
        Ok(Self {
            base_url: crate::config::settings::normalize_url(base_url),
            token,
            client: build_client()?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Exchange credentials for an access token (form-encoded, as the API expects).
    pub fn login(base_url: &str, username: &str, password: &str) -> Result<String> {
        let url = join!(&crate::config::settings::normalize_url(base_url), LOGIN_PATH);
        let resp = build_client()?
            .post(&url)
            .form(&[("username", username), ("password", password)])
            .send()?;
        let body: LoginResponse = check(resp)?.json()?;
        logf!("Backend: logged in as {username}");
        Ok(body.access_token)
    }

    fn url(&self, path: &str) -> String {
        join!(&self.base_url, path)
    }

    fn authed(&self, rb: RequestBuilder) -> Result<RequestBuilder> {
        let token = self.token.as_deref().ok_or(ReportError::NotAuthenticated)?;
        Ok(rb.bearer_auth(token))
    }

    fn send(&self, rb: RequestBuilder) -> Result<Response> {
        check(self.authed(rb)?.send()?)
    }
}

/// Pass a success response through; turn anything else into
/// `ReportError::Backend` with the server's own message when it sent one.
fn check(resp: Response) -> Result<Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().unwrap_or_default();
    let message = error_message(&body)
        .or_else(|| status.canonical_reason().map(|r| s!(r)))
        .unwrap_or_else(|| s!("Error desconocido"));
    loge!("Backend: {} {}", status.as_u16(), message);
    Err(ReportError::Backend { status: status.as_u16(), message })
}

/// Best-effort message from an error body: `detail`, `message` or `error`
/// when it is JSON, the trimmed text otherwise.
pub fn error_message(body: &str) -> Option<String> {
    let text = body.trim();
    if text.is_empty() {
        return None;
    }
    let Ok(json) = serde_json::from_str::<Value>(text) else {
        return Some(s!(text));
    };
    ["detail", "message", "error"]
        .iter()
        .find_map(|k| json.get(*k))
        .map(|v| match v {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
        .or_else(|| Some(s!(text)))
}

/// `dates` comes back as plain strings or as `{ "fecha": ... }` objects.
fn date_tag(v: &Value) -> Option<String> {
    match v {
        Value::String(s) => Some(s.clone()),
        Value::Object(o) => o.get("fecha").and_then(Value::as_str).map(|s| s!(s)),
        _ => None,
    }
}

impl Backend for HttpBackend {
    fn replace_inventory(&self, records: &[InventoryRecord]) -> Result<()> {
        self.send(self.client.delete(self.url(INVENTORY_PATH)))?;
        self.send(self.client.post(self.url(INVENTORY_BULK_PATH)).json(records))?;
        logf!("Backend: inventory replaced ({} records)", records.len());
        Ok(())
    }

    fn list_inventory(&self) -> Result<Vec<InventoryRecord>> {
        let records: Vec<InventoryRecord> =
            self.send(self.client.get(self.url(INVENTORY_PATH)))?.json()?;
        logd!("Backend: {} inventory record(s)", records.len());
        Ok(records)
    }

    fn append_comparison(&self, fecha: &str, rows: &[ReconciliationRow]) -> Result<()> {
        let payload = ComparisonPayload { fecha, rows };
        self.send(self.client.post(self.url(COMPARISONS_PATH)).json(&payload))?;
        logf!("Backend: comparison {fecha} saved ({} rows)", rows.len());
        Ok(())
    }

    fn comparison_dates(&self) -> Result<Vec<String>> {
        let raw: Vec<Value> = self.send(self.client.get(self.url(COMPARISON_DATES_PATH)))?.json()?;
        Ok(raw.iter().filter_map(date_tag).collect())
    }

    fn comparison_at(&self, fecha: &str) -> Result<Vec<ComparisonRecord>> {
        let rb = self.client.get(self.url(COMPARISONS_PATH)).query(&[("fecha", fecha)]);
        Ok(self.send(rb)?.json()?)
    }
}
