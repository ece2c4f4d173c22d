//! Competition outcome classification
//!
//! Each row is labelled Yes/No for three outcomes: qualifying for the UEFA
//! Champions League, qualifying for the UEFA Europa League, and relegation.
//! The free-text `notes` column answers some rows directly. The rest are
//! looked up in a curated table of (season, competition, squads) entries,
//! because the notes are incomplete across seasons.
//!
//! The built-in table covers 2010-2011 to 2020-2021 for the five leagues and
//! ships as JSON. A replacement table in the same format can be supplied at
//! runtime, so new seasons need no code change.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use anyhow::{Context, Result};
use polars::prelude::*;
use serde::{Deserialize, Serialize};

use super::columns::text_values;
use super::error::{require_columns, PipelineError};

/// Built-in outcome table (source: FlashFootball)
pub const BUILTIN_OUTCOME_TABLE: &str = include_str!("../../data/outcome_table.json");

/// Column holding the free-text source annotations
pub const NOTES_COLUMN: &str = "notes";

/// A season outcome recorded per row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    ChampionsLeague,
    EuropaLeague,
    Relegation,
}

impl Outcome {
    pub const ALL: [Outcome; 3] = [
        Outcome::ChampionsLeague,
        Outcome::EuropaLeague,
        Outcome::Relegation,
    ];

    /// Name of the output column
    pub fn column_name(self) -> &'static str {
        match self {
            Outcome::ChampionsLeague => "UEFA Champions League",
            Outcome::EuropaLeague => "UEFA Europa League",
            Outcome::Relegation => "Relegation",
        }
    }

    /// Verdict carried by the notes, if any.
    ///
    /// Tokens are whitespace separated and matched exactly. For the Europa
    /// League a `Conference` token is an explicit "No" and wins over `Europa`.
    pub fn from_notes(self, notes: &str) -> Option<bool> {
        let has = |token: &str| notes.split_whitespace().any(|t| t == token);

        match self {
            Outcome::ChampionsLeague => has("Champions").then_some(true),
            Outcome::EuropaLeague => {
                if has("Conference") {
                    Some(false)
                } else {
                    has("Europa").then_some(true)
                }
            }
            Outcome::Relegation => has("Relegated").then_some(true),
        }
    }
}

/// One season/competition entry of the outcome table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutcomeEntry {
    pub season: String,
    pub competition: String,
    pub squads: Vec<String>,
}

/// On-disk layout of an outcome table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutcomeTableFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default)]
    pub champions_league: Vec<OutcomeEntry>,
    #[serde(default)]
    pub europa_league: Vec<OutcomeEntry>,
    #[serde(default)]
    pub relegation: Vec<OutcomeEntry>,
}

impl OutcomeTableFile {
    fn entries(&self, outcome: Outcome) -> &[OutcomeEntry] {
        match outcome {
            Outcome::ChampionsLeague => &self.champions_league,
            Outcome::EuropaLeague => &self.europa_league,
            Outcome::Relegation => &self.relegation,
        }
    }
}

/// season -> competition -> squads
type SquadIndex = HashMap<String, HashMap<String, HashSet<String>>>;

/// Lookup structure: outcome -> season -> competition -> set of squads
#[derive(Debug, Clone)]
pub struct OutcomeTable {
    file: OutcomeTableFile,
    index: HashMap<Outcome, SquadIndex>,
}

impl OutcomeTable {
    /// The table compiled into the binary
    pub fn builtin() -> Result<Self> {
        Self::from_json_str(BUILTIN_OUTCOME_TABLE).context("Built-in outcome table is invalid")
    }

    /// Load a replacement table from a JSON file
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read outcome table: {}", path.display()))?;
        Self::from_json_str(&text)
            .with_context(|| format!("Failed to load outcome table: {}", path.display()))
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        let file: OutcomeTableFile = serde_json::from_str(text)
            .map_err(|e| PipelineError::InvalidOutcomeTable(e.to_string()))?;
        Ok(Self::from_file(file)?)
    }

    /// Build the lookup index, rejecting entries with blank keys
    pub fn from_file(file: OutcomeTableFile) -> Result<Self, PipelineError> {
        let mut index: HashMap<Outcome, SquadIndex> = HashMap::new();

        for outcome in Outcome::ALL {
            let by_season = index.entry(outcome).or_default();

            for entry in file.entries(outcome) {
                if entry.season.trim().is_empty() || entry.competition.trim().is_empty() {
                    return Err(PipelineError::InvalidOutcomeTable(format!(
                        "{} entry with empty season or competition",
                        outcome.column_name()
                    )));
                }

                by_season
                    .entry(entry.season.clone())
                    .or_default()
                    .entry(entry.competition.clone())
                    .or_default()
                    .extend(entry.squads.iter().cloned());
            }
        }

        Ok(Self { file, index })
    }

    /// Whether `squad` is listed for `outcome` in the given season and competition
    pub fn contains(&self, outcome: Outcome, season: &str, competition: &str, squad: &str) -> bool {
        self.index
            .get(&outcome)
            .and_then(|by_season| by_season.get(season))
            .and_then(|by_competition| by_competition.get(competition))
            .is_some_and(|squads| squads.contains(squad))
    }

    /// Number of (season, competition, squad) listings for an outcome
    pub fn listing_count(&self, outcome: Outcome) -> usize {
        self.index
            .get(&outcome)
            .map(|by_season| {
                by_season
                    .values()
                    .flat_map(|by_competition| by_competition.values())
                    .map(HashSet::len)
                    .sum()
            })
            .unwrap_or(0)
    }

    pub fn source(&self) -> Option<&str> {
        self.file.source.as_deref()
    }

    /// Write the table as pretty-printed JSON
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.file)?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write outcome table: {}", path.display()))
    }
}

/// Decide one outcome for one row: notes first, then the table
pub fn classify(
    table: &OutcomeTable,
    outcome: Outcome,
    notes: Option<&str>,
    season: &str,
    competition: &str,
    squad: &str,
) -> bool {
    if let Some(verdict) = notes.and_then(|n| outcome.from_notes(n)) {
        return verdict;
    }
    table.contains(outcome, season, competition, squad)
}

pub fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

/// Append the three Yes/No outcome columns and return how many rows are "Yes" for each.
pub fn add_outcome_columns(df: &mut DataFrame, table: &OutcomeTable) -> Result<Vec<(Outcome, usize)>> {
    require_columns(df, &["squad", "competition", "season", NOTES_COLUMN])?;

    let squads = text_values(df, "squad")?;
    let competitions = text_values(df, "competition")?;
    let seasons = text_values(df, "season")?;
    let notes = text_values(df, NOTES_COLUMN)?;

    let mut counts = Vec::with_capacity(Outcome::ALL.len());
    for outcome in Outcome::ALL {
        let flags: Vec<bool> = (0..df.height())
            .map(|row| {
                classify(
                    table,
                    outcome,
                    notes[row].as_deref(),
                    seasons[row].as_deref().unwrap_or(""),
                    competitions[row].as_deref().unwrap_or(""),
                    squads[row].as_deref().unwrap_or(""),
                )
            })
            .collect();

        let labels: Vec<&str> = flags.iter().map(|&flag| yes_no(flag)).collect();
        df.with_column(Column::new(outcome.column_name().into(), labels))?;
        counts.push((outcome, flags.iter().filter(|&&flag| flag).count()));
    }

    Ok(counts)
}

/// Remove the notes column once its information lives in the outcome columns
pub fn drop_notes(df: &mut DataFrame) -> Result<()> {
    require_columns(df, &[NOTES_COLUMN])?;
    df.drop_in_place(NOTES_COLUMN)?;
    Ok(())
}
