use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::Serialize;

use crate::constants::{PREVIEW_COLUMNS, PREVIEW_ROWS};
use crate::types::EnrichedRecord;

// Header cell above the party labels and left of the ages
const CORNER_LABEL: &str = "party\\age";

/// Request counts with one row per party and one column per age, both sorted
/// ascending. Combinations with no requests count as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PartyAgeTable {
    pub parties: Vec<String>,
    pub ages: Vec<i32>,
    /// `counts[row][column]`, indexed like `parties` and `ages`
    pub counts: Vec<Vec<usize>>,
}

impl PartyAgeTable {
    pub fn from_records(records: &[EnrichedRecord]) -> Self {
        let mut groups: BTreeMap<(&str, i32), usize> = BTreeMap::new();
        for r in records {
            *groups.entry((r.party.as_str(), r.age)).or_default() += 1;
        }

        let parties: Vec<String> = groups
            .keys()
            .map(|(p, _)| *p)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect();
        let ages: Vec<i32> = groups
            .keys()
            .map(|(_, a)| *a)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let counts = parties
            .iter()
            .map(|p| {
                ages.iter()
                    .map(|a| groups.get(&(p.as_str(), *a)).copied().unwrap_or(0))
                    .collect()
            })
            .collect();

        Self {
            parties,
            ages,
            counts,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.parties.is_empty()
    }

    pub fn count(&self, party: &str, age: i32) -> usize {
        let row = self.parties.iter().position(|p| p == party);
        let col = self.ages.iter().position(|a| *a == age);
        match (row, col) {
            (Some(r), Some(c)) => self.counts[r][c],
            _ => 0,
        }
    }

    pub fn total(&self) -> usize {
        self.counts.iter().flatten().sum()
    }

    /// Renders at most `max_rows` parties and `max_columns` ages.
    pub fn preview(&self, max_rows: usize, max_columns: usize) -> String {
        if self.is_empty() {
            return "(no records)\n".to_string();
        }

        let rows = self.parties.len().min(max_rows);
        let cols = self.ages.len().min(max_columns);

        let label_width = self.parties[..rows]
            .iter()
            .map(|p| p.len())
            .chain(std::iter::once(CORNER_LABEL.len()))
            .max()
            .unwrap_or(0);
        let cell_width = self.ages[..cols]
            .iter()
            .map(|a| a.to_string().len())
            .chain(
                self.counts[..rows]
                    .iter()
                    .flat_map(|row| row[..cols].iter().map(|c| c.to_string().len())),
            )
            .max()
            .unwrap_or(1);

        let mut out = format!("{:<label_width$}", CORNER_LABEL);
        for age in &self.ages[..cols] {
            out.push_str(&format!("  {:>cell_width$}", age));
        }
        out.push('\n');
        for (party, row) in self.parties[..rows].iter().zip(&self.counts) {
            out.push_str(&format!("{:<label_width$}", party));
            for count in &row[..cols] {
                out.push_str(&format!("  {:>cell_width$}", count));
            }
            out.push('\n');
        }

        let hidden_rows = self.parties.len() - rows;
        let hidden_cols = self.ages.len() - cols;
        if hidden_rows > 0 || hidden_cols > 0 {
            out.push_str(&format!(
                "[{} parties x {} ages; {} rows and {} columns not shown]\n",
                self.parties.len(),
                self.ages.len(),
                hidden_rows,
                hidden_cols
            ));
        }
        out
    }
}

impl fmt::Display for PartyAgeTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.preview(PREVIEW_ROWS, PREVIEW_COLUMNS))
    }
}
