//! Season-length normalisation
//!
//! Leagues differ in size (the Bundesliga has 18 teams, the others 20) and the
//! 2019-2020 Ligue 1 season stopped after 28 matches. Every counting statistic
//! is therefore projected onto a reference season of 38 matches so teams can
//! be compared across leagues and seasons.

use std::collections::HashMap;

use anyhow::Result;
use polars::prelude::*;

use super::columns::{round_to, strict_float_values};
use super::error::{require_columns, PipelineError};

/// Number of matches in the reference season
pub const REFERENCE_SEASON_GAMES: f64 = 38.0;

/// A derived per-38-match column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdjustedMetric {
    /// `round(value / games * 38)` of a single source column
    Count(&'static str),
    /// Scaled goals for minus scaled goals against, 2 decimals
    GoalDiff,
    /// `round(3 * scaled wins + scaled draws)`
    Points,
    /// Scaled points divided by 38, 2 decimals
    PointsPerMatch,
}

/// Derived columns, in the order they are appended
pub const ADJUSTED_METRICS: [AdjustedMetric; 15] = [
    AdjustedMetric::Count("wins"),
    AdjustedMetric::Count("draws"),
    AdjustedMetric::Count("losses"),
    AdjustedMetric::Count("goals_for"),
    AdjustedMetric::Count("goals_against"),
    AdjustedMetric::GoalDiff,
    AdjustedMetric::Count("assists"),
    AdjustedMetric::Count("pens_made"),
    AdjustedMetric::Count("pens_att"),
    AdjustedMetric::Count("shots_on_target_against"),
    AdjustedMetric::Count("saves"),
    AdjustedMetric::Count("clean_sheets"),
    AdjustedMetric::Count("shots_on_target"),
    AdjustedMetric::Points,
    AdjustedMetric::PointsPerMatch,
];

impl AdjustedMetric {
    /// Name of the derived column
    pub fn column_name(&self) -> String {
        match self {
            AdjustedMetric::Count(source) => format!("adjusted_{}", source),
            AdjustedMetric::GoalDiff => "adjusted_goal_diff".to_string(),
            AdjustedMetric::Points => "adjusted_points".to_string(),
            AdjustedMetric::PointsPerMatch => "adjusted_points_per_match".to_string(),
        }
    }

    /// Source columns the metric reads, besides `games`
    pub fn sources(&self) -> &[&'static str] {
        match self {
            AdjustedMetric::Count(source) => std::slice::from_ref(source),
            AdjustedMetric::GoalDiff => &["goals_for", "goals_against"],
            AdjustedMetric::Points | AdjustedMetric::PointsPerMatch => &["wins", "draws"],
        }
    }

    fn compute(&self, inputs: &[Option<f64>], games: f64) -> Option<AdjustedValue> {
        let value = match (self, inputs) {
            (AdjustedMetric::Count(_), [Some(v)]) => {
                AdjustedValue::Whole(adjusted_count(*v, games))
            }
            (AdjustedMetric::GoalDiff, [Some(gf), Some(ga)]) => {
                AdjustedValue::Decimal(adjusted_goal_diff(*gf, *ga, games))
            }
            (AdjustedMetric::Points, [Some(w), Some(d)]) => {
                AdjustedValue::Whole(adjusted_points(*w, *d, games))
            }
            (AdjustedMetric::PointsPerMatch, [Some(w), Some(d)]) => {
                AdjustedValue::Decimal(adjusted_points_per_match(*w, *d, games))
            }
            _ => return None,
        };
        Some(value)
    }

    fn is_whole(&self) -> bool {
        matches!(self, AdjustedMetric::Count(_) | AdjustedMetric::Points)
    }
}

enum AdjustedValue {
    Whole(i64),
    Decimal(f64),
}

/// Project a season total onto the reference season, unrounded
pub fn per_reference_season(value: f64, games: f64) -> f64 {
    (value / games) * REFERENCE_SEASON_GAMES
}

pub fn adjusted_count(value: f64, games: f64) -> i64 {
    per_reference_season(value, games).round_ties_even() as i64
}

pub fn adjusted_goal_diff(goals_for: f64, goals_against: f64, games: f64) -> f64 {
    round_to(
        per_reference_season(goals_for, games) - per_reference_season(goals_against, games),
        2,
    )
}

/// Three points per win and one per draw, from unrounded scaled counts
pub fn adjusted_points(wins: f64, draws: f64, games: f64) -> i64 {
    scaled_points(wins, draws, games).round_ties_even() as i64
}

pub fn adjusted_points_per_match(wins: f64, draws: f64, games: f64) -> f64 {
    round_to(scaled_points(wins, draws, games) / REFERENCE_SEASON_GAMES, 2)
}

fn scaled_points(wins: f64, draws: f64, games: f64) -> f64 {
    3.0 * per_reference_season(wins, games) + per_reference_season(draws, games)
}

/// Games played per row, rejecting rows that cannot be scaled
fn games_played(df: &DataFrame) -> Result<Vec<f64>> {
    let games = strict_float_values(df, "games")?;
    let mut played = Vec::with_capacity(games.len());

    for (row, value) in games.into_iter().enumerate() {
        match value {
            None => return Err(PipelineError::MissingGames { row }.into()),
            Some(g) if g == 0.0 => return Err(PipelineError::ZeroGames { row }.into()),
            Some(g) => played.push(g),
        }
    }

    Ok(played)
}

/// Append every adjusted column to `df` and return their names.
///
/// Fails if a source column is missing, holds non-numeric values, or if any
/// row has zero or null `games`. Nulls in other source columns give nulls in
/// the derived columns.
pub fn add_adjusted_columns(df: &mut DataFrame) -> Result<Vec<String>> {
    let mut required: Vec<&str> = vec!["games"];
    for metric in &ADJUSTED_METRICS {
        for source in metric.sources() {
            if !required.contains(source) {
                required.push(*source);
            }
        }
    }
    require_columns(df, &required)?;

    let games = games_played(df)?;

    let mut sources: HashMap<&str, Vec<Option<f64>>> = HashMap::new();
    for name in required.iter().skip(1) {
        sources.insert(*name, strict_float_values(df, name)?);
    }

    let mut added = Vec::with_capacity(ADJUSTED_METRICS.len());
    for metric in &ADJUSTED_METRICS {
        let inputs: Vec<&Vec<Option<f64>>> = metric
            .sources()
            .iter()
            .map(|name| &sources[name])
            .collect();

        let values: Vec<Option<AdjustedValue>> = games
            .iter()
            .enumerate()
            .map(|(row, &g)| {
                let row_inputs: Vec<Option<f64>> = inputs.iter().map(|col| col[row]).collect();
                metric.compute(&row_inputs, g)
            })
            .collect();

        let name = metric.column_name();
        let column = if metric.is_whole() {
            let whole: Vec<Option<i64>> = values
                .iter()
                .map(|v| match v {
                    Some(AdjustedValue::Whole(x)) => Some(*x),
                    _ => None,
                })
                .collect();
            Column::new(name.as_str().into(), whole)
        } else {
            let decimal: Vec<Option<f64>> = values
                .iter()
                .map(|v| match v {
                    Some(AdjustedValue::Decimal(x)) => Some(*x),
                    _ => None,
                })
                .collect();
            Column::new(name.as_str().into(), decimal)
        };

        df.with_column(column)?;
        added.push(name);
    }

    Ok(added)
}
