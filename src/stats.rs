use tracing::debug;

use crate::ranked::user::UserProfile;
use crate::ranked::{LeaderboardApi, RankedResult};

/// Per-player numbers gathered across every season up to the current one
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeasonStats {
    pub peak_elo: i64,
    /// Last best time any season reported, in milliseconds
    pub personal_best: u64,
    pub season_wins: Option<u32>,
    pub season_losses: Option<u32>,
}

impl SeasonStats {
    /// Folds one season's profile into the running totals.
    /// Wins and losses are only taken from the final season.
    pub fn record_season(&mut self, profile: &UserProfile, is_final: bool) {
        match profile.highest_elo() {
            Some(highest) if highest > self.peak_elo => self.peak_elo = highest,
            Some(_) => {}
            None => debug!("No season result in profile, peak elo stays at {}", self.peak_elo),
        }

        // overwritten, not minimized
        if let Some(best) = profile.best_ranked_time() {
            self.personal_best = best;
        }

        if is_final {
            self.season_wins = profile.season_wins();
            self.season_losses = profile.season_losses();
        }
    }
}

pub async fn aggregate<A>(api: &A, player: &str, season_count: u32) -> RankedResult<SeasonStats>
where
    A: LeaderboardApi + ?Sized,
{
    let mut stats = SeasonStats::default();

    // strictly one season after the other
    for season in 1..=season_count {
        let profile = api.user_profile(player, season).await?;
        stats.record_season(&profile, season + 1 > season_count);
        debug!("{} after season {}: {:?}", player, season, stats);
    }

    Ok(stats)
}
