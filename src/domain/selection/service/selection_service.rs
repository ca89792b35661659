use std::sync::OnceLock;

use tracing::{debug, warn};

use crate::api::dto::query_params_dto::{QueryParams, QueryValue};
use crate::config::PageFiltersConfig;
use crate::core::persistence::selection::persisted_selection_entity::PersistedSelectionEntity;
use crate::core::persistence::selection::selection_api_repository_trait::SelectionApiRepository;
use crate::core::persistence::selection::selection_repository::SelectionRepository;
use crate::core::util::date_util::get_utc_to_local_date_object;
use crate::domain::selection::constants::{UrlParam, DATE_TIME_KEYS};
use crate::domain::selection::model::{Selection, SelectionDatetime, SelectionQueryState, UtcFlag};

use super::params_normalizer::{normalize_query_params, NormalizeOptions};

#[derive(Debug, Clone, Copy)]
pub struct StateFromQueryOptions {
    pub allow_empty_period: bool,
    pub allow_absolute_datetime: bool,
}

impl Default for StateFromQueryOptions {
    fn default() -> Self {
        Self {
            allow_empty_period: false,
            allow_absolute_datetime: true,
        }
    }
}

/// Parse the global selection out of URL query parameters. Never fails:
/// malformed values degrade to empty or default filters.
pub fn get_state_from_query(query: &QueryParams, options: StateFromQueryOptions) -> SelectionQueryState {
    let parsed = normalize_query_params(
        query,
        &NormalizeOptions {
            allow_empty_period: options.allow_empty_period,
            allow_absolute_datetime: options.allow_absolute_datetime,
            ..Default::default()
        },
    );

    let (start, end) = match (&parsed.start, &parsed.end) {
        (Some(start), Some(end)) if options.allow_absolute_datetime => (
            get_utc_to_local_date_object(start),
            get_utc_to_local_date_object(end),
        ),
        _ => (None, None),
    };

    let project = query.get(UrlParam::PROJECT).map(|value| match value {
        QueryValue::List(values) => values.iter().map(|p| parse_int(p)).collect(),
        QueryValue::Scalar(p) => parse_int(p).map(|id| vec![Some(id)]).unwrap_or_default(),
    });

    let environment = query.get(UrlParam::ENVIRONMENT).map(|value| match value {
        QueryValue::Scalar(env) => vec![env.clone()],
        QueryValue::List(envs) => envs.clone(),
    });

    SelectionQueryState {
        project,
        environment,
        period: parsed.stats_period.filter(|p| !p.is_empty()),
        start,
        end,
        utc: UtcFlag::from_wire(parsed.utc.as_deref()),
    }
}

pub fn get_default_selection() -> Selection {
    let defaults = normalize_query_params(&QueryParams::new(), &NormalizeOptions::default());

    Selection {
        projects: Vec::new(),
        environments: Vec::new(),
        datetime: SelectionDatetime {
            start: defaults.start.as_deref().and_then(get_utc_to_local_date_object),
            end: defaults.end.as_deref().and_then(get_utc_to_local_date_object),
            period: Some(defaults.stats_period.unwrap_or_default()),
            utc: UtcFlag::from_wire(defaults.utc.as_deref()),
        },
    }
}

/// Compare the non-utc values of two selections.
///
/// `utc` is skipped: callers hand it over as unset, null or a boolean
/// interchangeably. Datetimes compare by their textual form.
pub fn is_selection_equal(selection: &Selection, other: &Selection) -> bool {
    if selection.projects != other.projects || selection.environments != other.environments {
        return false;
    }

    let (a, b) = (&selection.datetime, &other.datetime);
    a.period == b.period
        && a.start.map(|d| d.to_string()) == b.start.map(|d| d.to_string())
        && a.end.map(|d| d.to_string()) == b.end.map(|d| d.to_string())
}

/// Keep only truthy global selection parameters, e.g. when building another URL.
pub fn extract_selection_parameters(query: &QueryParams) -> QueryParams {
    pick_truthy(query, &UrlParam::ALL)
}

pub fn extract_datetime_selection_parameters(query: &QueryParams) -> QueryParams {
    pick_truthy(query, &DATE_TIME_KEYS)
}

pub fn remove_global_selection_storage(org_id: &str) {
    remove_global_selection_storage_with_repo(default_repository(), org_id)
}

pub fn remove_global_selection_storage_with_repo<R: SelectionApiRepository>(repo: &R, org_id: &str) {
    match repo.delete(org_id) {
        Ok(()) => debug!(org_id, "global selection storage removed"),
        Err(err) => warn!(org_id, error = %err, "failed to remove global selection storage"),
    }
}

pub fn set_global_selection_storage(org_id: &str, selection: &Selection) {
    set_global_selection_storage_with_repo(default_repository(), org_id, selection)
}

pub fn set_global_selection_storage_with_repo<R: SelectionApiRepository>(
    repo: &R,
    org_id: &str,
    selection: &Selection,
) {
    if let Err(err) = repo.update(org_id, &PersistedSelectionEntity::from(selection)) {
        warn!(org_id, error = %err, "failed to persist global selection");
    }
}

pub fn get_global_selection_storage(org_id: &str) -> Option<PersistedSelectionEntity> {
    get_global_selection_storage_with_repo(default_repository(), org_id)
}

pub fn get_global_selection_storage_with_repo<R: SelectionApiRepository>(
    repo: &R,
    org_id: &str,
) -> Option<PersistedSelectionEntity> {
    match repo.read(org_id) {
        Ok(entity) => entity,
        Err(err) => {
            warn!(org_id, error = %format!("{:#}", err), "ignoring unreadable global selection storage");
            None
        }
    }
}

/// Resolved once from the process environment. Loading `.env` is left to
/// the embedder's startup.
fn default_repository() -> &'static SelectionRepository {
    static REPOSITORY: OnceLock<SelectionRepository> = OnceLock::new();
    REPOSITORY.get_or_init(|| {
        let cfg = PageFiltersConfig::from_process_env().unwrap_or_else(|err| {
            warn!(error = %err, "invalid page filters config, using defaults");
            PageFiltersConfig::default()
        });
        SelectionRepository::from_config(&cfg)
    })
}

fn pick_truthy(query: &QueryParams, keys: &[&str]) -> QueryParams {
    keys.iter()
        .filter_map(|key| {
            query
                .get(key)
                .filter(|value| value.is_truthy())
                .map(|value| (*key, value.clone()))
        })
        .collect()
}

/// Base-10 integer prefix of `raw`: leading whitespace, an optional sign,
/// then digits up to the first non-digit. `None` when no digit is found.
///
/// Unlike JS `parseInt`, a value that overflows `i64` is also `None`, so an
/// oversized scalar project yields an empty list.
fn parse_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (sign, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => ("-", &trimmed[1..]),
        Some(b'+') => ("", &trimmed[1..]),
        _ => ("", trimmed),
    };

    let digits_len = rest.bytes().take_while(|b| b.is_ascii_digit()).count();
    if digits_len == 0 {
        return None;
    }

    format!("{}{}", sign, &rest[..digits_len]).parse().ok()
}
