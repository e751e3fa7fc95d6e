use anyhow::Context;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde::Deserialize;
use serde_json::Value;

use super::DataStore;

/// PostgREST client for a Supabase project's `rest/v1` endpoint.
pub struct SupabaseClient {
    rest_url: String,
    client: reqwest::Client,
}

/// Error body PostgREST returns with a non-2xx status.
#[derive(Debug, Deserialize)]
struct ApiError {
    #[serde(default)]
    code: Option<String>,
    message: String,
    #[serde(default)]
    details: Option<String>,
    #[serde(default)]
    hint: Option<String>,
}

impl SupabaseClient {
    pub fn new(project_url: &str, secret_key: &str) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        let key = HeaderValue::from_str(secret_key).context("secret key is not a valid header value")?;
        headers.insert("apikey", key);
        let mut bearer = HeaderValue::from_str(&format!("Bearer {secret_key}"))
            .context("secret key is not a valid header value")?;
        bearer.set_sensitive(true);
        headers.insert(AUTHORIZATION, bearer);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            rest_url: format!("{}/rest/v1", project_url.trim_end_matches('/')),
            client,
        })
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/{table}", self.rest_url)
    }

    async fn rows(resp: reqwest::Response, table: &str) -> anyhow::Result<Vec<Value>> {
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            match serde_json::from_str::<ApiError>(&body) {
                Ok(err) => anyhow::bail!(
                    "{table}: {status} {}: {}{}{}",
                    err.code.as_deref().unwrap_or("-"),
                    err.message,
                    err.details.map(|d| format!(" ({d})")).unwrap_or_default(),
                    err.hint.map(|h| format!(" hint: {h}")).unwrap_or_default(),
                ),
                Err(_) => anyhow::bail!("{table}: {status}: {body}"),
            }
        }

        resp.json()
            .await
            .with_context(|| format!("failed to decode {table} rows"))
    }
}

#[async_trait]
impl DataStore for SupabaseClient {
    async fn insert(
        &self,
        table: &str,
        row: Value,
        returning: Option<&str>,
    ) -> anyhow::Result<Vec<Value>> {
        let resp = self
            .client
            .post(self.table_url(table))
            .query(&[("select", returning.unwrap_or("*"))])
            .header("Prefer", "return=representation")
            .json(&row)
            .send()
            .await
            .with_context(|| format!("failed to insert into {table}"))?;

        Self::rows(resp, table).await
    }

    async fn select(
        &self,
        table: &str,
        columns: &str,
        filters: &[(&str, &str)],
    ) -> anyhow::Result<Vec<Value>> {
        let mut query = vec![("select".to_string(), columns.to_string())];
        query.extend(filters.iter().map(|(col, val)| (col.to_string(), format!("eq.{val}"))));

        let resp = self
            .client
            .get(self.table_url(table))
            .query(&query)
            .send()
            .await
            .with_context(|| format!("failed to select from {table}"))?;

        Self::rows(resp, table).await
    }
}
