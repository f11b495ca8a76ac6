use std::env;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::{DeserializeOwned, Deserializer};
use serde::Deserialize;
use serde_json::{Number, Value};
use thiserror::Error;

use crate::mojang;

pub mod matches;
pub mod user;

const API_URL: &str = "https://mcsrranked.com/api";

#[derive(Error, Debug)]
pub enum RankedApiError {
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Error, no status given")]
    NoStatus,
    #[error("The API returned an error: {0}")]
    Api(String),
    #[error("The API returned no data")]
    NoData,
    #[error("Could not parse response: {0}")]
    CouldNotParse(#[from] serde_json::Error),
    #[error("User {0} not found")]
    NotFound(String),
    #[error("{0} has no recent ranked match")]
    NoRecentMatch(String),
}

pub type RankedResult<T> = Result<T, RankedApiError>;

#[derive(Deserialize, Debug)]
pub(crate) struct RankedResponseStruct {
    status: Option<String>,
    data: Option<Value>,
}

impl RankedResponseStruct {
    pub(crate) fn into_data<T: DeserializeOwned>(self) -> RankedResult<T> {
        let status = self.status.ok_or(RankedApiError::NoStatus)?;

        if status != "success" {
            // errors carry their message in place of the data
            let message = match self.data {
                Some(Value::String(message)) => message,
                Some(other) => other.to_string(),
                None => status,
            };
            return Err(RankedApiError::Api(message));
        }

        let data = self.data.ok_or(RankedApiError::NoData)?;
        Ok(serde_json::from_value::<T>(data)?)
    }
}

/// Deserializes a field into `None` if it is absent, null or has an unexpected shape,
/// so a single odd field never fails a whole response
pub(crate) fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = match Value::deserialize(deserializer)? {
        Value::Number(number) if number.is_f64() => {
            integral(&number).unwrap_or(Value::Number(number))
        }
        other => other,
    };
    Ok(serde_json::from_value(value).ok())
}

/// `120000.0` is still a whole number of milliseconds
fn integral(number: &Number) -> Option<Value> {
    let float = number.as_f64().filter(|f| f.is_finite() && f.fract() == 0.0)?;
    if float >= 0.0 {
        Some(Value::from(float as u64))
    } else {
        Some(Value::from(float as i64))
    }
}

/// Uuids show up both with and without dashes depending on who you ask
pub fn same_uuid(a: &str, b: &str) -> bool {
    let normalize = |uuid: &str| -> String {
        uuid.chars()
            .filter(|c| *c != '-')
            .flat_map(char::to_lowercase)
            .collect()
    };
    normalize(a) == normalize(b)
}

/// Everything the reports need from the outside world
#[async_trait]
pub trait LeaderboardApi: Send + Sync {
    /// Profile of a player, scoped to one season
    async fn user_profile(&self, name: &str, season: u32) -> RankedResult<user::UserProfile>;

    /// Id of the most recent ranked match the player took part in
    async fn recent_ranked_match(&self, name: &str) -> RankedResult<u64>;

    async fn match_detail(&self, match_id: u64) -> RankedResult<matches::MatchDetail>;

    /// Platform uuid of a player, timeline events are keyed by it
    async fn resolve_uuid(&self, name: &str) -> RankedResult<String>;
}

pub struct RankedClient {
    client: Client,
    api_url: String,
    mojang_url: String,
}

impl RankedClient {
    pub fn new(api_url: &str, mojang_url: &str) -> RankedClient {
        RankedClient {
            client: Client::new(),
            api_url: api_url.trim_end_matches('/').to_owned(),
            mojang_url: mojang_url.trim_end_matches('/').to_owned(),
        }
    }

    /// Uses `RANKED_API_URL` and `MOJANG_API_URL` if set, the public endpoints otherwise
    pub fn from_env() -> RankedClient {
        let api_url = env::var("RANKED_API_URL").unwrap_or_else(|_| API_URL.to_owned());
        let mojang_url =
            env::var("MOJANG_API_URL").unwrap_or_else(|_| mojang::API_URL.to_owned());
        RankedClient::new(&api_url, &mojang_url)
    }

    pub(crate) async fn request<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, String)],
    ) -> RankedResult<T> {
        tracing::info!("Requesting from endpoint {}", endpoint);

        let url = format!("{}/{}", self.api_url, endpoint);
        let parsed_response: RankedResponseStruct = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await?
            .json()
            .await?;

        parsed_response.into_data()
    }
}

impl Default for RankedClient {
    fn default() -> Self {
        RankedClient::new(API_URL, mojang::API_URL)
    }
}

#[async_trait]
impl LeaderboardApi for RankedClient {
    async fn user_profile(&self, name: &str, season: u32) -> RankedResult<user::UserProfile> {
        user::request(self, name, season).await
    }

    async fn recent_ranked_match(&self, name: &str) -> RankedResult<u64> {
        let recent = matches::request_recent_ranked(self, name).await?;
        matches::most_recent_id(recent, name)
    }

    async fn match_detail(&self, match_id: u64) -> RankedResult<matches::MatchDetail> {
        matches::request(self, match_id).await
    }

    async fn resolve_uuid(&self, name: &str) -> RankedResult<String> {
        let profile = mojang::request(&self.client, &self.mojang_url, name).await?;
        Ok(profile.id)
    }
}
