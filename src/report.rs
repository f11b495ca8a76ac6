use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::ranked::{LeaderboardApi, RankedApiError};
use crate::settings::{ConfigError, RunnerConfig};
use crate::splits::{self, MatchSplits, Milestone};
use crate::stats::{self, SeasonStats};
use crate::time::{format_time, PLACEHOLDER};

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("{0}")]
    Config(#[from] ConfigError),
    #[error("{0}")]
    RankedApi(#[from] RankedApiError),
    #[error("Could not write {}: {}", .0.display(), .1)]
    Write(PathBuf, #[source] std::io::Error),
}

/// Everything needed to fill the four report files
#[derive(Debug, Clone)]
pub struct Reports {
    pub runner1: SeasonStats,
    pub runner2: SeasonStats,
    pub match1: MatchSplits,
    pub match2: MatchSplits,
}

fn or_dash<T: ToString>(value: Option<T>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

pub fn runner_report(name: &str, stats: &SeasonStats) -> String {
    format!(
        "Runner: {}\nPeak Elo: {}\nPersonal Best: {}\nWins: {}\nLosses: {}\n",
        name,
        stats.peak_elo,
        format_time(stats.personal_best),
        or_dash(stats.season_wins),
        or_dash(stats.season_losses),
    )
}

pub fn match_report(name: &str, splits: &MatchSplits) -> String {
    let milestones = Milestone::iter()
        .map(|milestone| format!("{}: {}\n", milestone.label(), splits.get(*milestone)))
        .collect::<String>();

    format!(
        "Runner: {}\nMatch: {}\n{}Final Time: {}\n",
        name,
        or_dash(splits.match_id),
        milestones,
        splits.final_time,
    )
}

/// Runs both season aggregations and the match lookups at once, the first error wins
pub async fn gather<A>(api: &A, config: &RunnerConfig) -> Result<Reports, RankedApiError>
where
    A: LeaderboardApi + ?Sized,
{
    let season_count = config.current_season_number;

    let (runner1, runner2, (match1, match2)) = tokio::try_join!(
        stats::aggregate(api, &config.runner1, season_count),
        stats::aggregate(api, &config.runner2, season_count),
        splits::fetch_match_info(api, config)
    )?;

    Ok(Reports {
        runner1,
        runner2,
        match1,
        match2,
    })
}

async fn write_report(dir: &Path, file_name: &str, content: String) -> Result<PathBuf, ReportError> {
    let path = dir.join(file_name);

    match tokio::fs::write(&path, content).await {
        Ok(_) => {
            println!("✓ Saved {}", file_name);
            Ok(path)
        }
        Err(e) => Err(ReportError::Write(path, e)),
    }
}

/// Writes the four report files into `dir`, returns their paths
pub async fn write_reports(
    dir: &Path,
    config: &RunnerConfig,
    reports: &Reports,
) -> Result<Vec<PathBuf>, ReportError> {
    let (runner1, runner2, match1, match2) = tokio::try_join!(
        write_report(
            dir,
            "runner1_info.txt",
            runner_report(&config.runner1, &reports.runner1)
        ),
        write_report(
            dir,
            "runner2_info.txt",
            runner_report(&config.runner2, &reports.runner2)
        ),
        write_report(
            dir,
            "match_info_1.txt",
            match_report(&config.runner1, &reports.match1)
        ),
        write_report(
            dir,
            "match_info_2.txt",
            match_report(&config.runner2, &reports.match2)
        )
    )?;

    Ok(vec![runner1, runner2, match1, match2])
}

pub async fn run<A>(api: &A, config: &RunnerConfig, dir: &Path) -> Result<Vec<PathBuf>, ReportError>
where
    A: LeaderboardApi + ?Sized,
{
    println!("Found runners: {} and {}\n", config.runner1, config.runner2);
    println!("Fetching information...\n");

    let reports = gather(api, config).await?;
    write_reports(dir, config, &reports).await
}
