//! Query-string keys shared with the backend API.

pub struct UrlParam;

impl UrlParam {
    pub const PROJECT: &'static str = "project";
    pub const ENVIRONMENT: &'static str = "environment";
    pub const START: &'static str = "start";
    pub const END: &'static str = "end";
    pub const UTC: &'static str = "utc";
    pub const PERIOD: &'static str = "statsPeriod";

    pub const ALL: [&'static str; 6] = [
        Self::PROJECT,
        Self::ENVIRONMENT,
        Self::START,
        Self::END,
        Self::UTC,
        Self::PERIOD,
    ];
}

/// Subset of [`UrlParam::ALL`] describing the time window.
pub const DATE_TIME_KEYS: [&str; 4] = [UrlParam::START, UrlParam::END, UrlParam::PERIOD, UrlParam::UTC];

/// Older links carry the relative window under `period`.
pub const LEGACY_PERIOD_KEY: &str = "period";

pub const LOCAL_STORAGE_KEY: &str = "global-selection";

pub const DEFAULT_STATS_PERIOD: &str = "14d";
