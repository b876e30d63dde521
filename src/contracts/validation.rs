use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use super::params::{
    DEFAULT_EVENTS_LIMIT, DEFAULT_GROUP_BY, DEFAULT_METRIC_NAMES, EventsParams,
    GroupedCountParams, MAX_EVENTS_LIMIT, PagePerformanceParams, TimeRange, ValidationError,
    WILDCARD_QUERY, WaterfallParams,
};

pub type ValidationResult<T> = Result<T, Vec<ValidationError>>;

/// Arguments for `get_rum_applications`: an object (or nothing) with no fields.
pub fn validate_applications_args(args: &Value) -> ValidationResult<()> {
    as_object(args).map(|_| ())
}

pub fn validate_events_args(args: &Value) -> ValidationResult<EventsParams> {
    let obj = as_object(args)?;
    let mut errors = Vec::new();

    let query = get_required_query(obj.get("query"), "query", &mut errors);
    let range = get_time_range(obj, &mut errors);
    let limit = get_optional_limit(obj.get("limit"), "limit", &mut errors);

    finish(errors, || EventsParams {
        query,
        range,
        limit: limit.unwrap_or(DEFAULT_EVENTS_LIMIT),
    })
}

pub fn validate_grouped_count_args(args: &Value) -> ValidationResult<GroupedCountParams> {
    let obj = as_object(args)?;
    let mut errors = Vec::new();

    let query = get_optional_string(obj.get("query"), "query", &mut errors);
    let range = get_time_range(obj, &mut errors);
    let group_by = get_optional_string(obj.get("groupBy"), "groupBy", &mut errors);

    finish(errors, || GroupedCountParams {
        query: query.unwrap_or_else(|| WILDCARD_QUERY.into()),
        range,
        group_by: group_by.unwrap_or_else(|| DEFAULT_GROUP_BY.into()),
    })
}

pub fn validate_page_performance_args(args: &Value) -> ValidationResult<PagePerformanceParams> {
    let obj = as_object(args)?;
    let mut errors = Vec::new();

    let query = get_optional_string(obj.get("query"), "query", &mut errors);
    let range = get_time_range(obj, &mut errors);
    let metric_names = get_optional_string_list(obj.get("metricNames"), "metricNames", &mut errors);

    finish(errors, || PagePerformanceParams {
        query: query.unwrap_or_else(|| WILDCARD_QUERY.into()),
        range,
        metric_names: metric_names.unwrap_or_else(|| {
            DEFAULT_METRIC_NAMES.iter().map(|m| m.to_string()).collect()
        }),
    })
}

pub fn validate_waterfall_args(args: &Value) -> ValidationResult<WaterfallParams> {
    let obj = as_object(args)?;
    let mut errors = Vec::new();

    let application_name =
        get_required_string(obj.get("applicationName"), "applicationName", &mut errors);
    let session_id = get_required_string(obj.get("sessionId"), "sessionId", &mut errors);

    finish(errors, || WaterfallParams {
        application_name,
        session_id,
    })
}

// --- Helper extractors ---

fn finish<T>(errors: Vec<ValidationError>, build: impl FnOnce() -> T) -> ValidationResult<T> {
    if errors.is_empty() {
        Ok(build())
    } else {
        Err(errors)
    }
}

static EMPTY_ARGS: std::sync::LazyLock<Map<String, Value>> = std::sync::LazyLock::new(Map::new);

fn as_object(args: &Value) -> ValidationResult<&Map<String, Value>> {
    match args {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(&*EMPTY_ARGS),
        _ => Err(vec![ValidationError::new("arguments", "must be a JSON object")]),
    }
}

fn get_required_string(
    value: Option<&Value>,
    field: &str,
    errors: &mut Vec<ValidationError>,
) -> String {
    match value {
        Some(Value::String(s)) => {
            if s.trim().is_empty() {
                errors.push(ValidationError::new(field, "must be a non-empty string"));
            }
            s.clone()
        }
        _ => {
            errors.push(ValidationError::new(field, "must be a string"));
            String::new()
        }
    }
}

/// Like `get_required_string` but passes blank queries through unchanged.
fn get_required_query(
    value: Option<&Value>,
    field: &str,
    errors: &mut Vec<ValidationError>,
) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        _ => {
            errors.push(ValidationError::new(field, "must be a string"));
            String::new()
        }
    }
}

fn get_optional_string(
    value: Option<&Value>,
    field: &str,
    errors: &mut Vec<ValidationError>,
) -> Option<String> {
    match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) if s.trim().is_empty() => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            errors.push(ValidationError::new(field, "must be a string when provided"));
            None
        }
    }
}

fn as_whole_number(value: &Value) -> Option<i64> {
    let Value::Number(n) = value else {
        return None;
    };
    if let Some(i) = n.as_i64() {
        return Some(i);
    }
    // Also accept f64 that is a whole number
    n.as_f64()
        .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64)
        .map(|f| f as i64)
}

fn get_required_epoch_seconds(
    value: Option<&Value>,
    field: &str,
    errors: &mut Vec<ValidationError>,
) -> i64 {
    match value.and_then(as_whole_number) {
        Some(secs) if secs >= 0 && is_representable_instant(secs) => secs,
        _ => {
            errors.push(ValidationError::new(
                field,
                "must be a non-negative integer of Unix epoch seconds within the supported date range",
            ));
            0
        }
    }
}

/// The millisecond value sent upstream must be a valid date.
fn is_representable_instant(secs: i64) -> bool {
    secs.checked_mul(1000)
        .and_then(DateTime::<Utc>::from_timestamp_millis)
        .is_some()
}

fn get_time_range(obj: &Map<String, Value>, errors: &mut Vec<ValidationError>) -> TimeRange {
    TimeRange {
        from: get_required_epoch_seconds(obj.get("from"), "from", errors),
        to: get_required_epoch_seconds(obj.get("to"), "to", errors),
    }
}

fn get_optional_limit(
    value: Option<&Value>,
    field: &str,
    errors: &mut Vec<ValidationError>,
) -> Option<u32> {
    let value = match value {
        None | Some(Value::Null) => return None,
        Some(v) => v,
    };
    match as_whole_number(value) {
        Some(n) if (1..=MAX_EVENTS_LIMIT as i64).contains(&n) => Some(n as u32),
        _ => {
            errors.push(ValidationError::new(
                field,
                format!("must be an integer between 1 and {MAX_EVENTS_LIMIT} when provided"),
            ));
            None
        }
    }
}

fn get_optional_string_list(
    value: Option<&Value>,
    field: &str,
    errors: &mut Vec<ValidationError>,
) -> Option<Vec<String>> {
    match value {
        None | Some(Value::Null) => None,
        Some(Value::Array(items)) => {
            let mut out = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    Value::String(s) if !s.trim().is_empty() => out.push(s.clone()),
                    _ => {
                        errors.push(ValidationError::new(
                            field,
                            "must be an array of non-empty strings",
                        ));
                        return None;
                    }
                }
            }
            Some(out)
        }
        Some(_) => {
            errors.push(ValidationError::new(
                field,
                "must be an array of strings when provided",
            ));
            None
        }
    }
}
