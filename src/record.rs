//! src/record.rs
use crate::outcome::{LineOutcome, SkipReason};

/// One delimited goal row. Fields borrow from the input line and are
/// already trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub description: &'a str,
    pub current_value: &'a str,
    pub target_value: &'a str,
    pub unit: &'a str,
    pub completed: &'a str,
    pub date: &'a str,
    pub is_punishment: &'a str,
    pub is_manual_task: &'a str,
    pub created_at: &'a str,
}

impl<'a> Record<'a> {
    pub const FIELD_COUNT: usize = 11;

    /// Splits `line` on `delimiter`. Quoted fields are not recognised, so a
    /// delimiter inside a value splits it. Fields past the eleventh are
    /// ignored.
    pub fn parse(line: &'a str, delimiter: char) -> LineOutcome<Self> {
        let line = line.trim_end_matches(['\r', '\n']);
        let fields: Vec<&'a str> = line.split(delimiter).map(str::trim).collect();
        if fields.len() < Self::FIELD_COUNT {
            return Err(SkipReason::TooFewFields {
                found: fields.len(),
                expected: Self::FIELD_COUNT,
            });
        }
        Ok(Record {
            id: fields[0],
            title: fields[1],
            description: fields[2],
            current_value: fields[3],
            target_value: fields[4],
            unit: fields[5],
            completed: fields[6],
            date: fields[7],
            is_punishment: fields[8],
            is_manual_task: fields[9],
            created_at: fields[10],
        })
    }

    pub fn group_key(&self, separator: &str) -> LineOutcome<GroupKey> {
        if self.title.is_empty() {
            return Err(SkipReason::EmptyTitle);
        }
        Ok(GroupKey::compose(self.title, self.completed, separator))
    }
}

/// Aggregation bucket: the title joined with the lowercased completion flag.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GroupKey(String);

impl GroupKey {
    pub fn compose(title: &str, completed: &str, separator: &str) -> Self {
        let completed = completed.to_lowercase();
        let mut key = String::with_capacity(title.len() + separator.len() + completed.len());
        key.push_str(title);
        key.push_str(separator);
        key.push_str(&completed);
        GroupKey(key)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
