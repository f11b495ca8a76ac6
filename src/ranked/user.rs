use serde::Deserialize;

use crate::ranked::{lenient, RankedClient, RankedResult};

const ENDPOINT: &str = "users";

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default, deserialize_with = "lenient")]
    pub season_result: Option<SeasonResult>,
    #[serde(default, deserialize_with = "lenient")]
    pub statistics: Option<Statistics>,
}

#[derive(Deserialize, Debug, Default, Clone)]
pub struct SeasonResult {
    // Highest elo reached during the season
    #[serde(default, deserialize_with = "lenient")]
    pub highest: Option<i64>,
}

#[derive(Deserialize, Debug, Default, Clone)]
pub struct Statistics {
    #[serde(default, deserialize_with = "lenient")]
    pub season: Option<StatisticsScope>,
    #[serde(default, deserialize_with = "lenient")]
    pub total: Option<StatisticsScope>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsScope {
    #[serde(default, deserialize_with = "lenient")]
    pub best_time: Option<RankedTime>,
    #[serde(default, deserialize_with = "lenient")]
    pub wins: Option<RankedCount>,
    // sic, that's what the API calls it
    #[serde(default, deserialize_with = "lenient")]
    pub loses: Option<RankedCount>,
}

#[derive(Deserialize, Debug, Default, Clone)]
pub struct RankedTime {
    #[serde(default, deserialize_with = "lenient")]
    pub ranked: Option<u64>,
}

#[derive(Deserialize, Debug, Default, Clone)]
pub struct RankedCount {
    #[serde(default, deserialize_with = "lenient")]
    pub ranked: Option<u32>,
}

impl UserProfile {
    pub fn highest_elo(&self) -> Option<i64> {
        self.season_result.as_ref().and_then(|result| result.highest)
    }

    /// Best ranked completion across all seasons
    pub fn best_ranked_time(&self) -> Option<u64> {
        self.total()
            .and_then(|total| total.best_time.as_ref())
            .and_then(|time| time.ranked)
    }

    pub fn season_wins(&self) -> Option<u32> {
        self.season()
            .and_then(|season| season.wins.as_ref())
            .and_then(|wins| wins.ranked)
    }

    pub fn season_losses(&self) -> Option<u32> {
        self.season()
            .and_then(|season| season.loses.as_ref())
            .and_then(|loses| loses.ranked)
    }

    fn season(&self) -> Option<&StatisticsScope> {
        self.statistics.as_ref().and_then(|s| s.season.as_ref())
    }

    fn total(&self) -> Option<&StatisticsScope> {
        self.statistics.as_ref().and_then(|s| s.total.as_ref())
    }
}

pub async fn request(client: &RankedClient, name: &str, season: u32) -> RankedResult<UserProfile> {
    client
        .request::<UserProfile>(
            &format!("{}/{}", ENDPOINT, name),
            &[("season", season.to_string())],
        )
        .await
}
