//! Global page-filter selection: parse the project / environment / time
//! window filters out of a URL query, compare selections, and keep a
//! per-organization copy in a key-value store.

pub mod api;
pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod logging;

pub use api::dto::query_params_dto::{QueryParams, QueryValue};
pub use domain::selection::model::{Selection, SelectionDatetime, SelectionQueryState, UtcFlag};
pub use domain::selection::service::selection_service::{
    extract_datetime_selection_parameters, extract_selection_parameters, get_default_selection,
    get_global_selection_storage, get_state_from_query, is_selection_equal, remove_global_selection_storage,
    set_global_selection_storage, StateFromQueryOptions,
};
