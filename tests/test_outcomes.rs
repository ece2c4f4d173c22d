//! Tests for outcome classification and the outcome table

use polars::prelude::*;
use tempfile::TempDir;
use topflight::pipeline::{
    add_outcome_columns, classify, drop_notes, Outcome, OutcomeEntry, OutcomeTable,
    OutcomeTableFile, PipelineError, NOTES_COLUMN,
};

mod common;

use common::*;

fn builtin() -> OutcomeTable {
    OutcomeTable::builtin().expect("built-in table should parse")
}

#[test]
fn test_builtin_table_lookups() {
    let table = builtin();

    assert!(table.contains(Outcome::ChampionsLeague, "2010-2011", "Premier League", "Arsenal"));
    assert!(table.contains(Outcome::EuropaLeague, "2010-2011", "Premier League", "Tottenham"));
    assert!(table.contains(Outcome::Relegation, "2010-2011", "Premier League", "Blackpool"));

    // Wrong season, wrong competition, wrong outcome
    assert!(!table.contains(Outcome::ChampionsLeague, "2009-2010", "Premier League", "Arsenal"));
    assert!(!table.contains(Outcome::ChampionsLeague, "2010-2011", "Serie A", "Arsenal"));
    assert!(!table.contains(Outcome::Relegation, "2010-2011", "Premier League", "Arsenal"));
}

#[test]
fn test_builtin_table_has_listings() {
    let table = builtin();

    for outcome in Outcome::ALL {
        assert!(table.listing_count(outcome) > 0, "{:?} has no listings", outcome);
    }
    assert_eq!(
        table.source(),
        Some("FlashFootball - https://www.flashfootball.com/")
    );
}

#[test]
fn test_notes_verdicts() {
    assert_eq!(
        Outcome::ChampionsLeague.from_notes("→ Champions League via league finish"),
        Some(true)
    );
    assert_eq!(Outcome::Relegation.from_notes("Relegated"), Some(true));
    assert_eq!(
        Outcome::EuropaLeague.from_notes("→ Europa League via league finish"),
        Some(true)
    );
    assert_eq!(
        Outcome::EuropaLeague.from_notes("→ Europa Conference League via league finish"),
        Some(false)
    );
    assert_eq!(Outcome::ChampionsLeague.from_notes("Relegated"), None);
    // Tokens are matched whole
    assert_eq!(Outcome::Relegation.from_notes("Relegation play-off"), None);
}

#[test]
fn test_relegated_notes_override_table() {
    let table = builtin();

    // Arsenal is not listed for relegation, but the notes say otherwise
    assert!(classify(
        &table,
        Outcome::Relegation,
        Some("Relegated"),
        "2010-2011",
        "Premier League",
        "Arsenal",
    ));
}

#[test]
fn test_conference_notes_force_no() {
    let table = builtin();

    // Tottenham is listed for the Europa League in 2010-2011
    assert!(classify(&table, Outcome::EuropaLeague, None, "2010-2011", "Premier League", "Tottenham"));
    assert!(!classify(
        &table,
        Outcome::EuropaLeague,
        Some("→ Europa Conference League via league finish"),
        "2010-2011",
        "Premier League",
        "Tottenham",
    ));
}

#[test]
fn test_add_outcome_columns() {
    let mut df = create_team_stats_dataframe();
    let table = builtin();

    let counts = add_outcome_columns(&mut df, &table).unwrap();

    assert_has_columns(&df, &["UEFA Champions League", "UEFA Europa League", "Relegation"]);

    let cl = texts(&df, "UEFA Champions League");
    let el = texts(&df, "UEFA Europa League");
    let rel = texts(&df, "Relegation");

    // Arsenal 2010-2011 from the table
    assert_eq!(cl[0].as_deref(), Some("Yes"));
    // Paris S-G from the notes
    assert_eq!(cl[1].as_deref(), Some("Yes"));
    // Birmingham City: relegated by notes, and listed for the Europa League
    assert_eq!(rel[2].as_deref(), Some("Yes"));
    assert_eq!(el[2].as_deref(), Some("Yes"));
    assert_eq!(cl[2].as_deref(), Some("No"));
    // Tottenham from the notes
    assert_eq!(el[3].as_deref(), Some("Yes"));

    // Every cell is Yes or No
    for column in [&cl, &el, &rel] {
        assert!(column
            .iter()
            .all(|v| matches!(v.as_deref(), Some("Yes") | Some("No"))));
    }

    let yes_counts: Vec<(Outcome, usize)> = Outcome::ALL
        .iter()
        .zip([&cl, &el, &rel])
        .map(|(outcome, column)| {
            (
                *outcome,
                column.iter().filter(|v| v.as_deref() == Some("Yes")).count(),
            )
        })
        .collect();
    assert_eq!(counts, yes_counts);
}

#[test]
fn test_add_outcome_columns_requires_notes() {
    let mut df = create_team_stats_dataframe();
    df.drop_in_place(NOTES_COLUMN).unwrap();

    let err = add_outcome_columns(&mut df, &builtin()).unwrap_err();
    match err.downcast_ref::<PipelineError>() {
        Some(PipelineError::MissingColumn { column, .. }) => assert_eq!(column, "notes"),
        other => panic!("expected MissingColumn, got {:?}", other),
    }
}

#[test]
fn test_drop_notes_keeps_rows() {
    let mut df = create_team_stats_dataframe();
    let (rows, cols) = df.shape();

    drop_notes(&mut df).unwrap();

    assert_shape(&df, rows, cols - 1);
    assert_missing_columns(&df, &[NOTES_COLUMN]);
}

#[test]
fn test_custom_table_from_file() {
    let file = OutcomeTableFile {
        source: None,
        champions_league: vec![OutcomeEntry {
            season: "2021-2022".to_string(),
            competition: "Serie A".to_string(),
            squads: vec!["Milan".to_string(), "Inter".to_string()],
        }],
        europa_league: Vec::new(),
        relegation: Vec::new(),
    };

    let table = OutcomeTable::from_file(file).unwrap();
    assert!(table.contains(Outcome::ChampionsLeague, "2021-2022", "Serie A", "Inter"));
    assert!(!table.contains(Outcome::ChampionsLeague, "2010-2011", "Premier League", "Arsenal"));
    assert_eq!(table.listing_count(Outcome::ChampionsLeague), 2);
    assert_eq!(table.listing_count(Outcome::Relegation), 0);
}

#[test]
fn test_blank_keys_are_rejected() {
    let file = OutcomeTableFile {
        relegation: vec![OutcomeEntry {
            season: " ".to_string(),
            competition: "Serie A".to_string(),
            squads: vec!["Parma".to_string()],
        }],
        ..Default::default()
    };

    assert!(matches!(
        OutcomeTable::from_file(file),
        Err(PipelineError::InvalidOutcomeTable(_))
    ));
}

#[test]
fn test_malformed_json_is_rejected() {
    let err = OutcomeTable::from_json_str("{ not json").unwrap_err();
    assert!(matches!(
        err.downcast_ref::<PipelineError>(),
        Some(PipelineError::InvalidOutcomeTable(_))
    ));
}

#[test]
fn test_written_table_reloads() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("outcomes.json");

    let table = builtin();
    table.write_json(&path).unwrap();
    let reloaded = OutcomeTable::from_path(&path).unwrap();

    for outcome in Outcome::ALL {
        assert_eq!(reloaded.listing_count(outcome), table.listing_count(outcome));
    }
    assert_eq!(reloaded.source(), table.source());
}

#[test]
fn test_partial_json_defaults_missing_outcomes() {
    let json = r#"{ "relegation": [ { "season": "2020-2021", "competition": "Serie A", "squads": ["Parma"] } ] }"#;

    let table = OutcomeTable::from_json_str(json).unwrap();
    assert!(table.contains(Outcome::Relegation, "2020-2021", "Serie A", "Parma"));
    assert_eq!(table.listing_count(Outcome::ChampionsLeague), 0);
    assert_eq!(table.source(), None);
}

#[test]
fn test_missing_key_values_fall_back_to_no() {
    let mut df = df! {
        "squad" => [Some("Arsenal"), None],
        "competition" => ["Premier League", "Premier League"],
        "season" => ["2010-2011", "2010-2011"],
        "notes" => [None::<&str>, None],
    }
    .unwrap();

    add_outcome_columns(&mut df, &builtin()).unwrap();

    let cl = texts(&df, "UEFA Champions League");
    assert_eq!(cl[0].as_deref(), Some("Yes"));
    assert_eq!(cl[1].as_deref(), Some("No"));
}
