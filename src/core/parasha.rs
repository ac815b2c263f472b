use crate::domain::model::TorahPortion;
use crate::utils::error::{Result, ShabbatError};
use chrono::NaiveDate;
use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;

static BUILTIN_JSON: &str = include_str!("../../data/torahportions.json");
static BUILTIN: OnceLock<ParashaTable> = OnceLock::new();

/// Weekly Torah-portion table, indexed by Saturday date. Immutable after
/// load; a date outside the covered reading cycles is a miss, not an error.
#[derive(Debug, Clone)]
pub struct ParashaTable {
    by_date: HashMap<NaiveDate, TorahPortion>,
}

impl ParashaTable {
    pub fn from_records(records: Vec<TorahPortion>) -> Self {
        let by_date = records
            .into_iter()
            .map(|portion| (portion.date, portion))
            .collect();
        Self { by_date }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let records: Vec<TorahPortion> = serde_json::from_str(json)?;
        if records.is_empty() {
            return Err(ShabbatError::ReferenceDataError {
                message: "portion table is empty".to_string(),
            });
        }
        Ok(Self::from_records(records))
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Table bundled with the crate, parsed once per process.
    pub fn builtin() -> &'static ParashaTable {
        BUILTIN.get_or_init(|| {
            Self::from_json(BUILTIN_JSON).expect("bundled portion table is valid")
        })
    }

    pub fn lookup(&self, date: NaiveDate) -> Option<&TorahPortion> {
        self.by_date.get(&date)
    }

    pub fn len(&self) -> usize {
        self.by_date.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_date.is_empty()
    }
}
