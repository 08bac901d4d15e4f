pub(crate) mod metrics;
pub(crate) mod trace_root;

use once_cell::sync::Lazy;
use regex::Regex;

static ID_SEGMENT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/-?[0-9]+(/|$)").expect("Invalid id segment regex"));

/// Collapses numeric id segments so metric labels stay bounded.
pub(crate) fn normalize_uri(path: &str) -> String {
    let path = path.split('?').next().unwrap_or(path);
    ID_SEGMENT_REGEX.replace_all(path, "/{id}$1").to_string()
}
