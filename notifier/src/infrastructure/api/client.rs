use std::{sync::Arc, time::Duration};

use domain_business::{
    exception::{ApiException, ApiResult},
    model::vo::{ApiError, RefreshRequest, RefreshResponse},
};
use infrastructure_text::encoding::{decode_from_api, encode_for_api, ensure_utf8};
use reqwest::{
    header::{self, HeaderMap, HeaderValue},
    Client, Method, Response, StatusCode,
};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use url::Url;

use super::TokenManager;

pub(super) const TOKEN_PATH: &str = "auth/token/";
pub(super) const REFRESH_PATH: &str = "auth/token/refresh/";

/// JSON client for the plant backend.
///
/// Every non-auth request carries the stored bearer token. A 401 triggers
/// one refresh and one replay; if either fails the tokens are dropped and
/// [`ApiException::Unauthorized`] is returned.
pub struct ApiClient {
    http: Client,
    base_url: Url,
    tokens: Arc<TokenManager>,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout: Duration, tokens: Arc<TokenManager>) -> anyhow::Result<Self> {
        let mut base_url = Url::parse(base_url)?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        let mut headers = HeaderMap::new();
        headers.insert(header::ACCEPT_CHARSET, HeaderValue::from_static("UTF-8"));
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json; charset=UTF-8"),
        );
        let http = Client::builder()
            .default_headers(headers)
            .connect_timeout(timeout)
            .timeout(timeout)
            .build()?;
        Ok(Self {
            http,
            base_url,
            tokens,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn tokens(&self) -> &Arc<TokenManager> {
        &self.tokens
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> ApiResult<T> {
        decode(self.execute(Method::GET, path, query, None).await?).await
    }

    pub(crate) async fn send_json<B, T>(&self, method: Method, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned,
    {
        let body = serde_json::to_value(body).map_err(anyhow::Error::from)?;
        decode(self.execute(method, path, &[], Some(body)).await?).await
    }

    /// For endpoints whose answer body is irrelevant.
    pub(crate) async fn send_empty(&self, method: Method, path: &str) -> ApiResult<()> {
        self.execute(method, path, &[], None).await?;
        Ok(())
    }

    async fn execute(
        &self,
        method: Method,
        path: &str,
        query: &[(String, String)],
        body: Option<Value>,
    ) -> ApiResult<Response> {
        let query = query
            .iter()
            .map(|(key, value)| (key.clone(), encode_for_api(value)))
            .collect::<Vec<_>>();
        let body = body
            .map(|mut value| {
                encode_strings(&mut value);
                serde_json::to_vec(&value)
            })
            .transpose()
            .map_err(anyhow::Error::from)?;

        let response = self.send(&method, path, &query, body.as_deref()).await?;
        if response.status() != StatusCode::UNAUTHORIZED || is_auth_endpoint(path) {
            return check(response).await;
        }

        tracing::debug!("{method} {path} answered 401, refreshing the access token");
        if let Err(e) = self.refresh().await {
            tracing::warn!("Token refresh failed: {e}");
            self.drop_tokens().await;
            return Err(ApiException::Unauthorized);
        }
        let response = self.send(&method, path, &query, body.as_deref()).await?;
        if response.status() == StatusCode::UNAUTHORIZED {
            self.drop_tokens().await;
            return Err(ApiException::Unauthorized);
        }
        check(response).await
    }

    async fn send(
        &self,
        method: &Method,
        path: &str,
        query: &[(String, String)],
        body: Option<&[u8]>,
    ) -> ApiResult<Response> {
        let url = self.base_url.join(path).map_err(anyhow::Error::from)?;
        let mut request = self.http.request(method.clone(), url);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.body(body.to_vec());
        }
        if !is_auth_endpoint(path) {
            if let Some(token) = self.tokens.access_token().await {
                request = request.bearer_auth(token);
            }
        }
        request.send().await.map_err(transport)
    }

    async fn refresh(&self) -> ApiResult<()> {
        let Some(refresh) = self.tokens.refresh_token().await else {
            return Err(ApiException::Unauthorized);
        };
        let body = serde_json::to_vec(&RefreshRequest { refresh }).map_err(anyhow::Error::from)?;
        let response = check(
            self.send(&Method::POST, REFRESH_PATH, &[], Some(body.as_slice()))
                .await?,
        )
        .await?;
        let refreshed: RefreshResponse = decode(response).await?;
        self.tokens.update_access(refreshed.access).await?;
        Ok(())
    }

    async fn drop_tokens(&self) {
        if let Err(e) = self.tokens.clear().await {
            tracing::error!("Unable to clear the stored tokens: {e}");
        }
    }
}

fn is_auth_endpoint(path: &str) -> bool {
    path.starts_with(TOKEN_PATH)
}

fn transport(e: reqwest::Error) -> ApiException {
    ApiException::Transport(e.to_string())
}

fn encode_strings(value: &mut Value) {
    match value {
        Value::String(text) => *text = encode_for_api(text),
        Value::Array(items) => items.iter_mut().for_each(encode_strings),
        Value::Object(fields) => fields.values_mut().for_each(encode_strings),
        _ => {}
    }
}

async fn check(response: Response) -> ApiResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.bytes().await.map_err(transport)?;
    let message = serde_json::from_slice::<ApiError>(&body)
        .ok()
        .and_then(|error| error.summary())
        .or_else(|| status.canonical_reason().map(str::to_string))
        .unwrap_or_default();
    Err(ApiException::Status {
        code: status.as_u16(),
        message,
    })
}

async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    let bytes = response.bytes().await.map_err(transport)?;
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(ApiException::EmptyBody);
    }
    let text = decode_from_api(&ensure_utf8(&bytes));
    serde_json::from_str(&text).map_err(|e| ApiException::Decode(e.to_string()))
}
