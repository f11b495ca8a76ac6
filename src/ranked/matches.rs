//! Match history and match detail endpoints

use serde::Deserialize;

use crate::ranked::{lenient, same_uuid, RankedApiError, RankedClient, RankedResult};

const ENDPOINT: &str = "matches";

/// Match type filter for ranked queue matches
const RANKED_MATCH_TYPE: u8 = 2;

/// Entry of a player's match history
#[derive(Deserialize, Debug, Clone)]
pub struct MatchSummary {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<u64>,
}

#[derive(Deserialize, Debug, Default, Clone)]
pub struct MatchDetail {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    pub completions: Option<Vec<Completion>>,
    #[serde(default, deserialize_with = "lenient")]
    pub timelines: Option<Vec<TimelineEvent>>,
}

#[derive(Deserialize, Debug, Default, Clone)]
pub struct Completion {
    #[serde(default, deserialize_with = "lenient")]
    pub uuid: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub time: Option<u64>,
}

#[derive(Deserialize, Debug, Default, Clone)]
pub struct TimelineEvent {
    #[serde(default, deserialize_with = "lenient")]
    pub uuid: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub time: Option<u64>,
    #[serde(rename = "type", default, deserialize_with = "lenient")]
    pub event_type: Option<String>,
}

impl MatchDetail {
    /// Timestamp of the first timeline event of this type by this player, in list order
    pub fn first_event(&self, event_type: &str, uuid: &str) -> Option<u64> {
        self.timelines
            .iter()
            .flatten()
            .find(|event| {
                event.event_type.as_deref() == Some(event_type)
                    && event
                        .uuid
                        .as_deref()
                        .map_or(false, |actor| same_uuid(actor, uuid))
            })
            .and_then(|event| event.time)
    }

    /// The match's completion, i.e. whoever finished first
    pub fn completion(&self) -> Option<&Completion> {
        self.completions.as_ref().and_then(|c| c.first())
    }
}

/// Id of the first match in a player's history, which is the most recent one
pub fn most_recent_id(summaries: Vec<MatchSummary>, name: &str) -> RankedResult<u64> {
    summaries
        .into_iter()
        .next()
        .and_then(|summary| summary.id)
        .ok_or_else(|| RankedApiError::NoRecentMatch(name.to_owned()))
}

pub async fn request(client: &RankedClient, match_id: u64) -> RankedResult<MatchDetail> {
    client
        .request::<MatchDetail>(&format!("{}/{}", ENDPOINT, match_id), &[])
        .await
}

pub async fn request_recent_ranked(
    client: &RankedClient,
    name: &str,
) -> RankedResult<Vec<MatchSummary>> {
    client
        .request::<Vec<MatchSummary>>(
            &format!("users/{}/{}", name, ENDPOINT),
            &[
                ("type", RANKED_MATCH_TYPE.to_string()),
                ("count", "1".to_string()),
            ],
        )
        .await
}
