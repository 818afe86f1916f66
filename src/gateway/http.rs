use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method, Response, Url};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use crate::config::{ConfigError, GatewayConfig};
use crate::models::registration::RegistrationRequest;
use crate::models::role::{RoleAssignment, RoleCatalogEntry};
use crate::models::user::{NewUser, UserId, UserRecord};
use super::error::{ErrorBody, GatewayError};
use super::Gateway;

/// `reqwest`-backed gateway bound to one base URL.
#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: Client,
    base_url: Url,
}

#[derive(Deserialize)]
struct RolesBody {
    #[serde(default)]
    roles: Option<Vec<RoleCatalogEntry>>,
}

impl HttpGateway {
    pub fn new(config: &GatewayConfig) -> Result<Self, ConfigError> {
        let mut headers = HeaderMap::new();
        for (name, value) in &config.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| ConfigError::Header(format!("{name}: {e}")))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| ConfigError::Header(format!("{name}: {e}")))?;
            headers.insert(name, value);
        }

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| ConfigError::Header(e.to_string()))?;

        let base_url = Url::parse(&config.base_url)
            .ok()
            .filter(|url| !url.cannot_be_a_base())
            .ok_or_else(|| ConfigError::Invalid {
                key: "RECRUITDESK_API_URL",
                value: config.base_url.clone(),
            })?;

        log::info!("Gateway bound to {base_url}");
        Ok(Self { client, base_url })
    }

    /// Base URL plus one percent-encoded path segment per element, so an id
    /// can never add segments or a query string. Empty, `.` and `..`
    /// segments are refused.
    fn url(&self, segments: &[&str]) -> Result<Url, GatewayError> {
        if let Some(bad) = segments.iter().find(|s| matches!(**s, "" | "." | "..")) {
            return Err(GatewayError::Request(format!("invalid path segment {bad:?}")));
        }
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| GatewayError::Request(format!("{} cannot be a base URL", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Sends one request. Non-success statuses and transport failures are
    /// logged here and normalised into [`GatewayError`].
    async fn execute(&self, method: Method, segments: &[&str], body: Option<Value>) -> Result<Response, GatewayError> {
        let url = self.url(segments).inspect_err(|err| {
            log::error!("API error: {method} {segments:?}: {err}");
        })?;
        let path = url.path().to_string();
        let mut request = self.client.request(method.clone(), url);
        if let Some(body) = body {
            request = request.json(&body);
        }

        let err = match request.send().await {
            Ok(response) if response.status().is_success() => return Ok(response),
            Ok(response) => {
                let status = response.status().as_u16();
                let message = response
                    .json::<ErrorBody>()
                    .await
                    .ok()
                    .and_then(|b| b.message);
                GatewayError::Server { status, message }
            }
            Err(e) => GatewayError::Transport(e.to_string()),
        };

        log::error!("API error: {method} {path}: {err}");
        Err(err)
    }

    async fn decode<T: DeserializeOwned>(path: &str, response: Response) -> Result<T, GatewayError> {
        response.json::<T>().await.map_err(|e| {
            log::error!("API error: unexpected body from {path}: {e}");
            GatewayError::Decode(e.to_string())
        })
    }
}

#[async_trait]
impl Gateway for HttpGateway {
    /// Records are decoded one by one: a malformed record is logged and
    /// skipped instead of failing the whole list.
    async fn list_users(&self) -> Result<Vec<UserRecord>, GatewayError> {
        let response = self.execute(Method::GET, &["users"], None).await?;
        let raw: Vec<Value> = Self::decode("/users", response).await?;
        let total = raw.len();
        let users: Vec<UserRecord> = raw
            .into_iter()
            .enumerate()
            .filter_map(|(index, value)| match serde_json::from_value::<UserRecord>(value) {
                Ok(user) => Some(user),
                Err(e) => {
                    log::warn!("Skipping malformed user record #{index}: {e}");
                    None
                }
            })
            .collect();
        if users.len() < total {
            log::warn!("Kept {} of {total} user records", users.len());
        }
        Ok(users)
    }

    async fn create_user(&self, user: &NewUser) -> Result<(), GatewayError> {
        let body = serde_json::to_value(user).map_err(|e| GatewayError::Decode(e.to_string()))?;
        self.execute(Method::POST, &["users"], Some(body)).await?;
        Ok(())
    }

    async fn update_user_roles(&self, id: &UserId, roles: &[RoleAssignment]) -> Result<(), GatewayError> {
        self.execute(Method::PUT, &["users", id.as_str()], Some(json!({ "roles": roles })))
            .await?;
        Ok(())
    }

    async fn delete_user(&self, id: &UserId) -> Result<(), GatewayError> {
        self.execute(Method::DELETE, &["users", id.as_str()], None).await?;
        Ok(())
    }

    async fn list_roles(&self) -> Result<Vec<RoleCatalogEntry>, GatewayError> {
        let response = self.execute(Method::GET, &["roles"], None).await?;
        let body: RolesBody = Self::decode("/roles", response).await?;
        Ok(body.roles.unwrap_or_default())
    }

    async fn update_roles(&self, roles: &[RoleCatalogEntry]) -> Result<(), GatewayError> {
        self.execute(Method::PUT, &["roles"], Some(json!({ "roles": roles }))).await?;
        Ok(())
    }

    async fn confirm_registration(&self, user_id: &str, request: &RegistrationRequest) -> Result<(), GatewayError> {
        let body = serde_json::to_value(request).map_err(|e| GatewayError::Decode(e.to_string()))?;
        self.execute(Method::POST, &["users", "register", "confirm", user_id], Some(body))
            .await?;
        Ok(())
    }
}
