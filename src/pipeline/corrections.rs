//! Literal text fixes and type coercions

use anyhow::Result;
use polars::prelude::*;

use super::columns::text_values;
use super::error::require_columns;

/// Squad names that the source spells inconsistently: (wrong, right)
pub const TEAM_NAME_FIXES: &[(&str, &str)] = &[("Paris S-G", "Paris SG")];

/// Replace misspelled team names in the `squad` column.
///
/// Returns the number of cells changed; running it again changes nothing.
pub fn fix_team_names(df: &mut DataFrame) -> Result<usize> {
    require_columns(df, &["squad"])?;

    let mut changed = 0;
    let fixed: Vec<Option<String>> = text_values(df, "squad")?
        .into_iter()
        .map(|value| {
            value.map(|squad| {
                let corrected = TEAM_NAME_FIXES
                    .iter()
                    .fold(squad.clone(), |name, (wrong, right)| name.replace(wrong, right));
                if corrected != squad {
                    changed += 1;
                }
                corrected
            })
        })
        .collect();

    if changed > 0 {
        df.with_column(Column::new("squad".into(), fixed))?;
    }

    Ok(changed)
}

/// Treat `rank` as a category label rather than a number.
///
/// Returns `true` if the column was recast, `false` if it was already text.
pub fn rank_as_category(df: &mut DataFrame) -> Result<bool> {
    require_columns(df, &["rank"])?;

    let rank = df.column("rank")?;
    if matches!(rank.dtype(), DataType::String) {
        return Ok(false);
    }

    let recast = rank.cast(&DataType::String)?;
    df.with_column(recast)?;

    Ok(true)
}
