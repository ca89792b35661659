use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// `utc` as a tri-state: the wire only ever carries the strings
/// `"true"` / `"false"`, or nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<bool>", into = "Option<bool>")]
pub enum UtcFlag {
    #[default]
    Unset,
    False,
    True,
}

impl UtcFlag {
    /// `Unset` when absent, otherwise `True` iff the value is exactly `"true"`.
    pub fn from_wire(value: Option<&str>) -> Self {
        match value {
            None => UtcFlag::Unset,
            Some("true") => UtcFlag::True,
            Some(_) => UtcFlag::False,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            UtcFlag::Unset => None,
            UtcFlag::False => Some(false),
            UtcFlag::True => Some(true),
        }
    }
}

impl From<Option<bool>> for UtcFlag {
    fn from(value: Option<bool>) -> Self {
        match value {
            None => UtcFlag::Unset,
            Some(false) => UtcFlag::False,
            Some(true) => UtcFlag::True,
        }
    }
}

impl From<UtcFlag> for Option<bool> {
    fn from(flag: UtcFlag) -> Self {
        flag.as_bool()
    }
}

/// Time window of a selection. Either `period` is set (relative) or
/// `start`/`end` are (absolute), never both.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectionDatetime {
    pub start: Option<DateTime<Local>>,
    pub end: Option<DateTime<Local>>,
    pub period: Option<String>,
    #[serde(default)]
    pub utc: UtcFlag,
}

impl SelectionDatetime {
    pub fn is_absolute(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    /// Restore the relative/absolute exclusivity: a period wins over
    /// `start`/`end`, and a half-open range is dropped.
    pub fn normalized(mut self) -> Self {
        if self.period.is_some() || !self.is_absolute() {
            self.start = None;
            self.end = None;
        }
        self
    }
}

/// Global filter state shared by an organization's views.
///
/// Empty `projects` means all projects, empty `environments` all environments.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub projects: Vec<i64>,
    pub environments: Vec<String>,
    pub datetime: SelectionDatetime,
}

/// Selection values as read from a query, before reshaping into [`Selection`].
///
/// `project` is `None` when the key is absent. Inside it, a `None` entry is a
/// list element that did not parse as an integer; a scalar that does not
/// parse yields an empty list instead.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionQueryState {
    pub project: Option<Vec<Option<i64>>>,
    pub environment: Option<Vec<String>>,
    pub period: Option<String>,
    pub start: Option<DateTime<Local>>,
    pub end: Option<DateTime<Local>>,
    pub utc: UtcFlag,
}

impl SelectionQueryState {
    /// Reshape into the canonical record. Unparsable project entries are dropped.
    pub fn into_selection(self) -> Selection {
        Selection {
            projects: self
                .project
                .unwrap_or_default()
                .into_iter()
                .flatten()
                .collect(),
            environments: self.environment.unwrap_or_default(),
            datetime: SelectionDatetime {
                start: self.start,
                end: self.end,
                period: self.period,
                utc: self.utc,
            },
        }
    }
}
