use board_core::{BoardConfig, ReleasePolicy};

use crate::error::HostError;
use crate::utils::get_query_param;

/// Build the board configuration from the page query string, e.g.
/// `?unit=20&outline=%23333&release=discard`.
///
/// Bad values never abort start-up: each one is reported back and the
/// default is kept.
pub fn config_from_query(search: &str) -> (BoardConfig, Vec<HostError>) {
    let mut config = BoardConfig::default();
    let mut problems = Vec::new();

    if let Some(v) = get_query_param(search, "unit") {
        match v.trim().parse::<i32>() {
            Ok(unit) if unit > 0 => config.unit = unit,
            Ok(_) => problems.push(invalid("unit", v, "must be positive".into())),
            Err(e) => problems.push(invalid("unit", v, e.to_string())),
        }
    }
    if let Some(v) = get_query_param(search, "outline") {
        if v.trim().is_empty() {
            problems.push(invalid("outline", v, "empty color".into()));
        } else {
            config.outline_color = v.trim().to_string();
        }
    }
    if let Some(v) = get_query_param(search, "release") {
        match v.parse::<ReleasePolicy>() {
            Ok(policy) => config.release_policy = policy,
            Err(e) => problems.push(invalid("release", v, e.to_string())),
        }
    }
    (config, problems)
}

fn invalid(key: &'static str, value: String, reason: String) -> HostError {
    HostError::InvalidParam { key, value, reason }
}
