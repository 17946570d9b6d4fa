//! Request parameters for a historical fetch.
//!
//! A request names an inclusive date range and the ISINs to keep. It arrives
//! either as CLI flags or as a JSON document shaped like
//! `{"startDate": "2024-03-14", "endDate": "2024-03-16", "isins": ["..."]}`.

use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    #[error("empty token in ISIN list")]
    EmptyToken,

    #[error("no ISINs requested")]
    NoIdentifiers,

    #[error("invalid {field} {value:?} (expected YYYY-MM-DD)")]
    InvalidDate { field: &'static str, value: String },

    #[error("malformed request document: {0}")]
    Malformed(String),

    #[error("missing {0}")]
    Missing(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestParameters {
    pub start_date: NaiveDate,
    /// Inclusive.
    pub end_date: NaiveDate,
    pub isins: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RequestDocument {
    start_date: String,
    end_date: String,
    isins: Vec<String>,
}

impl RequestParameters {
    pub fn new(
        start_date: NaiveDate,
        end_date: NaiveDate,
        isins: Vec<String>,
    ) -> Result<Self, RequestError> {
        Ok(Self {
            start_date,
            end_date,
            isins: normalize_isins(isins)?,
        })
    }

    /// Builds a request from the string forms used on the command line.
    pub fn from_args(start: &str, end: &str, isins: &str) -> Result<Self, RequestError> {
        Self::new(
            parse_date("startDate", start)?,
            parse_date("endDate", end)?,
            parse_isins(isins)?,
        )
    }

    pub fn from_json(content: &str) -> Result<Self, RequestError> {
        let doc: RequestDocument =
            serde_json::from_str(content).map_err(|e| RequestError::Malformed(e.to_string()))?;
        Self::new(
            parse_date("startDate", &doc.start_date)?,
            parse_date("endDate", &doc.end_date)?,
            doc.isins,
        )
    }

    pub fn is_reversed(&self) -> bool {
        self.start_date > self.end_date
    }

    pub fn filter(&self) -> IsinFilter {
        IsinFilter::new(self.isins.iter().cloned())
    }
}

/// Exact, case-sensitive ISIN membership test.
#[derive(Debug, Clone, Default)]
pub struct IsinFilter {
    isins: HashSet<String>,
}

impl IsinFilter {
    pub fn new<I: IntoIterator<Item = String>>(isins: I) -> Self {
        Self {
            isins: isins.into_iter().collect(),
        }
    }

    pub fn contains(&self, isin: &str) -> bool {
        self.isins.contains(isin)
    }
}

pub fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, RequestError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| RequestError::InvalidDate {
        field,
        value: value.to_string(),
    })
}

/// Splits a comma-separated ISIN list, trimming each token. Case is kept.
pub fn parse_isins(input: &str) -> Result<Vec<String>, RequestError> {
    let mut isins = Vec::new();
    for token in input.split(',') {
        let trimmed = token.trim();
        if trimmed.is_empty() {
            return Err(RequestError::EmptyToken);
        }
        isins.push(trimmed.to_string());
    }
    Ok(isins)
}

fn normalize_isins(isins: Vec<String>) -> Result<Vec<String>, RequestError> {
    if isins.is_empty() {
        return Err(RequestError::NoIdentifiers);
    }
    let mut seen = HashSet::new();
    let mut out = Vec::with_capacity(isins.len());
    for isin in isins {
        if isin.is_empty() {
            return Err(RequestError::EmptyToken);
        }
        if seen.insert(isin.clone()) {
            out.push(isin);
        }
    }
    Ok(out)
}
