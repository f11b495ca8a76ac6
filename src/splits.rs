use std::collections::HashMap;

use tracing::{debug, warn};

use crate::ranked::matches::MatchDetail;
use crate::ranked::{same_uuid, LeaderboardApi, RankedApiError, RankedResult};
use crate::settings::RunnerConfig;
use crate::time::format_or_dash;

/// Timeline events a split is reported for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Milestone {
    EnterNether,
    EnterBastion,
    EnterFortress,
    BlindTravel,
    EnterStronghold,
    EnterEnd,
    KillDragon,
}

impl Milestone {
    /// Event type as it appears in a match timeline
    pub fn timeline_type(&self) -> &'static str {
        match self {
            Milestone::EnterNether => "story.enter_the_nether",
            Milestone::EnterBastion => "nether.find_bastion",
            Milestone::EnterFortress => "nether.find_fortress",
            Milestone::BlindTravel => "projectelo.timeline.blind_travel",
            Milestone::EnterStronghold => "story.follow_ender_eye",
            Milestone::EnterEnd => "story.enter_the_end",
            Milestone::KillDragon => "projectelo.timeline.dragon_death",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Milestone::EnterNether => "Enter Nether",
            Milestone::EnterBastion => "Enter Bastion",
            Milestone::EnterFortress => "Enter Fortress",
            Milestone::BlindTravel => "Blind Travel",
            Milestone::EnterStronghold => "Enter Stronghold",
            Milestone::EnterEnd => "Enter End",
            Milestone::KillDragon => "Kill Dragon",
        }
    }

    pub fn iter() -> std::slice::Iter<'static, Milestone> {
        use Milestone::*;
        static MILESTONES: [Milestone; 7] = [
            EnterNether,
            EnterBastion,
            EnterFortress,
            BlindTravel,
            EnterStronghold,
            EnterEnd,
            KillDragon,
        ];
        MILESTONES.iter()
    }
}

/// Formatted splits of one player in one match, `-` where unknown
#[derive(Debug, Clone, PartialEq)]
pub struct MatchSplits {
    pub match_id: Option<u64>,
    pub enter_nether: String,
    pub enter_bastion: String,
    pub enter_fortress: String,
    pub blind_travel: String,
    pub enter_stronghold: String,
    pub enter_end: String,
    pub kill_dragon: String,
    pub final_time: String,
}

impl MatchSplits {
    pub fn from_match(detail: &MatchDetail, uuid: &str) -> MatchSplits {
        if detail.timelines.is_none() {
            warn!("Match {:?} has no timeline", detail.id);
        }

        let split = |milestone: Milestone| {
            let time = detail.first_event(milestone.timeline_type(), uuid);
            debug!("{:?} for {}: {:?}", milestone, uuid, time);
            format_or_dash(time)
        };

        let final_time = detail
            .completion()
            .filter(|completion| {
                completion
                    .uuid
                    .as_deref()
                    .map_or(false, |finisher| same_uuid(finisher, uuid))
            })
            .and_then(|completion| completion.time);

        MatchSplits {
            match_id: detail.id,
            enter_nether: split(Milestone::EnterNether),
            enter_bastion: split(Milestone::EnterBastion),
            enter_fortress: split(Milestone::EnterFortress),
            blind_travel: split(Milestone::BlindTravel),
            enter_stronghold: split(Milestone::EnterStronghold),
            enter_end: split(Milestone::EnterEnd),
            kill_dragon: split(Milestone::KillDragon),
            final_time: format_or_dash(final_time),
        }
    }

    pub fn get(&self, milestone: Milestone) -> &str {
        match milestone {
            Milestone::EnterNether => &self.enter_nether,
            Milestone::EnterBastion => &self.enter_bastion,
            Milestone::EnterFortress => &self.enter_fortress,
            Milestone::BlindTravel => &self.blind_travel,
            Milestone::EnterStronghold => &self.enter_stronghold,
            Milestone::EnterEnd => &self.enter_end,
            Milestone::KillDragon => &self.kill_dragon,
        }
    }
}

/// Splits of `player` in their most recent ranked match
pub async fn extract_splits<A>(
    api: &A,
    config: &RunnerConfig,
    player: &str,
) -> RankedResult<MatchSplits>
where
    A: LeaderboardApi + ?Sized,
{
    // both runners get resolved on every call, it's two requests
    let mut identities = HashMap::new();
    for runner in config.runners().iter() {
        let uuid = api.resolve_uuid(runner).await?;
        identities.insert(runner.to_string(), uuid);
    }

    let uuid = identities
        .get(player)
        .ok_or_else(|| RankedApiError::NotFound(player.to_owned()))?;

    let match_id = api.recent_ranked_match(player).await?;
    let detail = api.match_detail(match_id).await?;

    Ok(MatchSplits::from_match(&detail, uuid))
}

/// Splits of both runners, fetched side by side
pub async fn fetch_match_info<A>(
    api: &A,
    config: &RunnerConfig,
) -> RankedResult<(MatchSplits, MatchSplits)>
where
    A: LeaderboardApi + ?Sized,
{
    tokio::try_join!(
        extract_splits(api, config, &config.runner1),
        extract_splits(api, config, &config.runner2)
    )
}
