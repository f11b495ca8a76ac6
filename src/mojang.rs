//! Mojang profile lookup, maps a player name to the uuid match timelines are keyed by

use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::ranked::{RankedApiError, RankedResult};

pub(crate) const API_URL: &str = "https://api.mojang.com";

const ENDPOINT: &str = "users/profiles/minecraft";

#[derive(Deserialize, Debug, Clone)]
pub struct MojangProfile {
    /// Undashed uuid
    pub id: String,
}

/// Unknown names come back as 204 or 404, anything but a 2xx with a body means not found
pub fn check_status(status: StatusCode, name: &str) -> RankedResult<()> {
    if status.is_success() && status != StatusCode::NO_CONTENT {
        Ok(())
    } else {
        Err(RankedApiError::NotFound(name.to_owned()))
    }
}

/// Looked up fresh every time, nothing is cached
pub async fn request(client: &Client, base_url: &str, name: &str) -> RankedResult<MojangProfile> {
    tracing::info!("Resolving uuid of {}", name);

    let url = format!("{}/{}/{}", base_url, ENDPOINT, name);
    let response = client.get(&url).send().await?;

    check_status(response.status(), name)?;
    Ok(response.json::<MojangProfile>().await?)
}
