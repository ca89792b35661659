use crate::api::dto::query_params_dto::{QueryParams, QueryValue};
use crate::core::util::date_util::DateUtil;
use crate::domain::selection::constants::{UrlParam, DEFAULT_STATS_PERIOD, LEGACY_PERIOD_KEY};

#[derive(Debug, Clone)]
pub struct NormalizeOptions {
    /// Keep an absent/invalid period empty instead of applying the default.
    pub allow_empty_period: bool,
    pub allow_absolute_datetime: bool,
    pub default_stats_period: String,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            allow_empty_period: false,
            allow_absolute_datetime: true,
            default_stats_period: DEFAULT_STATS_PERIOD.to_string(),
        }
    }
}

/// Time-window fields of a query, coerced to their wire form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedParams {
    pub stats_period: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub utc: Option<String>,
}

/// Coerce the time-window parameters of `query`.
///
/// A valid period always wins over `start`/`end`; when neither a period nor a
/// complete absolute range is present the default period applies.
pub fn normalize_query_params(query: &QueryParams, options: &NormalizeOptions) -> NormalizedParams {
    let mut stats_period = stats_period_value(query.get(UrlParam::PERIOD))
        .or_else(|| stats_period_value(query.get(LEGACY_PERIOD_KEY)));

    let (start, end) = if options.allow_absolute_datetime {
        (
            date_time_value(query.get(UrlParam::START)),
            date_time_value(query.get(UrlParam::END)),
        )
    } else {
        (None, None)
    };

    let has_absolute = start.is_some() && end.is_some();
    if !has_absolute && stats_period.is_none() && !options.allow_empty_period {
        stats_period = Some(options.default_stats_period.clone());
    }

    let (start, end) = if stats_period.is_some() { (None, None) } else { (start, end) };

    NormalizedParams {
        stats_period,
        start,
        end,
        utc: utc_value(query.get(UrlParam::UTC)),
    }
}

/// `<digits>[unit]` with unit one of `s m h d w`. A bare number is seconds.
pub fn coerce_stats_period(raw: &str) -> Option<String> {
    let (digits, unit) = match raw.chars().last()? {
        unit @ ('s' | 'm' | 'h' | 'd' | 'w') => (&raw[..raw.len() - 1], unit),
        _ => (raw, 's'),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    Some(format!("{}{}", digits, unit))
}

fn stats_period_value(value: Option<&QueryValue>) -> Option<String> {
    match value? {
        QueryValue::Scalar(s) => coerce_stats_period(s),
        QueryValue::List(values) => values.iter().find_map(|v| coerce_stats_period(v)),
    }
}

fn date_time_value(value: Option<&QueryValue>) -> Option<String> {
    match value? {
        QueryValue::Scalar(s) => DateUtil::to_utc_wire(s),
        QueryValue::List(values) => values.iter().find_map(|v| DateUtil::to_utc_wire(v)),
    }
}

fn utc_value(value: Option<&QueryValue>) -> Option<String> {
    let raw = match value? {
        QueryValue::Scalar(s) => s.as_str(),
        QueryValue::List(values) => values.first()?.as_str(),
    };
    Some(if raw == "true" { "true" } else { "false" }.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(pairs: &[(&str, QueryValue)]) -> QueryParams {
        pairs.iter().cloned().collect()
    }

    #[test]
    fn empty_query_gets_default_period() {
        let params = normalize_query_params(&QueryParams::new(), &NormalizeOptions::default());
        assert_eq!(
            params,
            NormalizedParams {
                stats_period: Some("14d".into()),
                ..Default::default()
            }
        );
    }

    #[test]
    fn allow_empty_period_skips_default() {
        let options = NormalizeOptions {
            allow_empty_period: true,
            ..Default::default()
        };
        let params = normalize_query_params(&QueryParams::new(), &options);
        assert_eq!(params.stats_period, None);
    }

    #[test]
    fn invalid_period_is_ignored() {
        let q = query(&[("statsPeriod", "2 weeks".into())]);
        let params = normalize_query_params(&q, &NormalizeOptions::default());
        assert_eq!(params.stats_period.as_deref(), Some("14d"));
    }

    #[test]
    fn unitless_period_is_seconds() {
        let q = query(&[("statsPeriod", "14".into())]);
        let params = normalize_query_params(&q, &NormalizeOptions::default());
        assert_eq!(params.stats_period.as_deref(), Some("14s"));
    }

    #[test]
    fn stats_period_beats_legacy_alias() {
        let q = query(&[("statsPeriod", "24h".into()), ("period", "7d".into())]);
        let params = normalize_query_params(&q, &NormalizeOptions::default());
        assert_eq!(params.stats_period.as_deref(), Some("24h"));

        let q = query(&[("period", "7d".into())]);
        let params = normalize_query_params(&q, &NormalizeOptions::default());
        assert_eq!(params.stats_period.as_deref(), Some("7d"));
    }

    #[test]
    fn first_valid_list_entry_wins() {
        let q = query(&[("statsPeriod", vec!["nope", "30m", "1h"].into())]);
        let params = normalize_query_params(&q, &NormalizeOptions::default());
        assert_eq!(params.stats_period.as_deref(), Some("30m"));
    }

    #[test]
    fn absolute_range_is_normalized_to_wire_format() {
        let q = query(&[
            ("start", "2021-01-01T00:00:00Z".into()),
            ("end", "2021-01-02".into()),
        ]);
        let params = normalize_query_params(&q, &NormalizeOptions::default());
        assert_eq!(params.stats_period, None);
        assert_eq!(params.start.as_deref(), Some("2021-01-01T00:00:00"));
        assert_eq!(params.end.as_deref(), Some("2021-01-02T00:00:00"));
    }

    #[test]
    fn period_clears_absolute_range() {
        let q = query(&[
            ("statsPeriod", "1h".into()),
            ("start", "2021-01-01T00:00:00".into()),
            ("end", "2021-01-02T00:00:00".into()),
        ]);
        let params = normalize_query_params(&q, &NormalizeOptions::default());
        assert_eq!(params.stats_period.as_deref(), Some("1h"));
        assert_eq!(params.start, None);
        assert_eq!(params.end, None);
    }

    #[test]
    fn half_open_range_falls_back_to_default_period() {
        let q = query(&[("start", "2021-01-01T00:00:00".into())]);
        let params = normalize_query_params(&q, &NormalizeOptions::default());
        assert_eq!(params.stats_period.as_deref(), Some("14d"));
        assert_eq!(params.start, None);
    }

    #[test]
    fn absolute_disallowed_drops_range() {
        let q = query(&[
            ("start", "2021-01-01T00:00:00".into()),
            ("end", "2021-01-02T00:00:00".into()),
        ]);
        let options = NormalizeOptions {
            allow_absolute_datetime: false,
            ..Default::default()
        };
        let params = normalize_query_params(&q, &options);
        assert_eq!(params.stats_period.as_deref(), Some("14d"));
        assert_eq!((params.start, params.end), (None, None));
    }

    #[test]
    fn utc_is_coerced_to_true_or_false() {
        let q = query(&[("utc", "true".into())]);
        assert_eq!(normalize_query_params(&q, &NormalizeOptions::default()).utc.as_deref(), Some("true"));

        let q = query(&[("utc", "yes".into())]);
        assert_eq!(normalize_query_params(&q, &NormalizeOptions::default()).utc.as_deref(), Some("false"));

        assert_eq!(normalize_query_params(&QueryParams::new(), &NormalizeOptions::default()).utc, None);
    }

    #[test]
    fn coerce_stats_period_rules() {
        assert_eq!(coerce_stats_period("90d").as_deref(), Some("90d"));
        assert_eq!(coerce_stats_period("2w").as_deref(), Some("2w"));
        assert_eq!(coerce_stats_period("d"), None);
        assert_eq!(coerce_stats_period("14").as_deref(), Some("14s"));
        assert_eq!(coerce_stats_period("-1d"), None);
        assert_eq!(coerce_stats_period("14y"), None);
        assert_eq!(coerce_stats_period(""), None);
    }
}
