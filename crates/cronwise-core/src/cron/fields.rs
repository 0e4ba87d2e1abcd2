//! Raw cron fields and the permissive parser.

use std::fmt;

/// Error returned when a string cannot be split into cron fields.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Expression did not have 6 or 7 whitespace-separated fields.
    #[error("cron expression must have 6 or 7 fields, got {found}")]
    InvalidFieldCount { found: usize },
}

/// The six or seven raw tokens of a quartz-style cron expression.
///
/// Tokens are kept verbatim (`*`, `?`, `5`, `*/10`, ...); no range checks are
/// applied, so an hour of `99` is carried through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CronFields {
    pub second: String,
    pub minute: String,
    pub hour: String,
    pub day_of_month: String,
    pub month: String,
    pub day_of_week: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
}

impl fmt::Display for CronFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {}",
            self.second, self.minute, self.hour, self.day_of_month, self.month, self.day_of_week
        )?;
        if let Some(year) = &self.year {
            write!(f, " {}", year)?;
        }
        Ok(())
    }
}

impl std::str::FromStr for CronFields {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// Split a cron string on whitespace into its fields.
///
/// Fails only when the token count is not 6 or 7.
pub fn parse(cron: &str) -> Result<CronFields, ParseError> {
    let parts: Vec<&str> = cron.split_whitespace().collect();
    match parts.as_slice() {
        [second, minute, hour, dom, month, dow] => Ok(CronFields {
            second: second.to_string(),
            minute: minute.to_string(),
            hour: hour.to_string(),
            day_of_month: dom.to_string(),
            month: month.to_string(),
            day_of_week: dow.to_string(),
            year: None,
        }),
        [second, minute, hour, dom, month, dow, year] => Ok(CronFields {
            second: second.to_string(),
            minute: minute.to_string(),
            hour: hour.to_string(),
            day_of_month: dom.to_string(),
            month: month.to_string(),
            day_of_week: dow.to_string(),
            year: Some(year.to_string()),
        }),
        _ => Err(ParseError::InvalidFieldCount { found: parts.len() }),
    }
}

/// True iff `parse` succeeds. This is not a semantic check.
pub fn validate(cron: &str) -> bool {
    parse(cron).is_ok()
}
