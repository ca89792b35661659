use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::domain::selection::model::{Selection, SelectionDatetime, UtcFlag};

/// Per-organization selection blob as stored under `global-selection:<org>`.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersistedSelectionEntity {
    #[serde(default)]
    pub projects: Vec<i64>,
    #[serde(default)]
    pub environments: Vec<String>,
    pub start: Option<DateTime<Local>>,
    pub end: Option<DateTime<Local>>,
    pub period: Option<String>,
    pub utc: Option<bool>,
}

impl From<&Selection> for PersistedSelectionEntity {
    fn from(selection: &Selection) -> Self {
        Self {
            projects: selection.projects.clone(),
            environments: selection.environments.clone(),
            start: selection.datetime.start,
            end: selection.datetime.end,
            period: selection.datetime.period.clone(),
            utc: selection.datetime.utc.as_bool(),
        }
    }
}

impl PersistedSelectionEntity {
    pub fn into_selection(self) -> Selection {
        Selection {
            projects: self.projects,
            environments: self.environments,
            datetime: SelectionDatetime {
                start: self.start,
                end: self.end,
                period: self.period,
                utc: UtcFlag::from(self.utc),
            }
            .normalized(),
        }
    }
}
