//! Maven version comparison.
//!
//! Versions are reduced to their numeric segments and compared position by
//! position. Qualifiers such as `-rc01`, `-jre` or `-SNAPSHOT` are stripped
//! before the numeric segments are collected, so `31.1-jre` and `31.1-android`
//! both compare as `[31, 1]`.

use regex::Regex;
use std::sync::OnceLock;

/// Version keywords that cannot be turned into a concrete artifact path
const UNRESOLVABLE_KEYWORDS: [&str; 3] = ["LATEST", "RELEASE", "SNAPSHOT"];

fn qualifier_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"[-_.](alpha|beta|rc|m|final|ga|sp|jre|android|kmpc)(\d+)?")
            .expect("valid qualifier regex")
    })
}

fn separator_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^0-9]+").expect("valid separator regex"))
}

/// Parses a version string into its ordered numeric segments.
///
/// Unparseable input yields an empty vector.
///
/// # Examples
/// ```
/// use mvn_resolve::maven_resolution::domain::version;
///
/// assert_eq!(version::parse("1.9.3"), vec![1, 9, 3]);
/// assert_eq!(version::parse("33.0.0-jre"), vec![33, 0, 0]);
/// assert_eq!(version::parse("2.0-SNAPSHOT"), vec![2, 0]);
/// assert!(version::parse("latest").is_empty());
/// ```
pub fn parse(version: &str) -> Vec<u64> {
    let lowered = version.to_lowercase();
    let without_qualifiers = qualifier_pattern().replace_all(&lowered, "");
    let cleaned = without_qualifiers
        .strip_suffix("-snapshot")
        .unwrap_or(&without_qualifiers);

    separator_pattern()
        .split(cleaned)
        .filter(|part| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit()))
        .filter_map(|part| part.parse::<u64>().ok())
        .collect()
}

/// Extracts (major, minor, patch) from a version string.
///
/// - no numeric segments: `(0, 0, 0)`
/// - one segment `x` (e.g. date versions like `20240205`): `(0, 0, x)`
/// - two segments `x.y`: `(x, y, 0)`
/// - three or more: the first three, extra segments ignored
pub fn major_minor_patch(version: &str) -> (u64, u64, u64) {
    match parse(version).as_slice() {
        [] => (0, 0, 0),
        [patch] => (0, 0, *patch),
        [major, minor] => (*major, *minor, 0),
        [major, minor, patch, ..] => (*major, *minor, *patch),
    }
}

/// Checks whether two versions can coexist under one mediated winner.
///
/// Differing majors are incompatible. Equal non-zero majors are always
/// compatible; two `0.x` versions must also share their minor.
/// A missing version on either side places no constraint.
pub fn compatible(first: Option<&str>, second: Option<&str>) -> bool {
    let (Some(first), Some(second)) = (first, second) else {
        return true;
    };

    let (first_major, first_minor, _) = major_minor_patch(first);
    let (second_major, second_minor, _) = major_minor_patch(second);

    if first_major != second_major {
        return false;
    }
    // 0.x lines only stay compatible within one minor
    first_major != 0 || first_minor == second_minor
}

/// Removes range syntax so the version can be used in a repository path.
///
/// Returns `None` for the bare keywords `LATEST`, `RELEASE` and `SNAPSHOT`,
/// which do not name a concrete artifact.
pub fn clean(version: &str) -> Option<String> {
    let cleaned: String = version
        .chars()
        .filter(|c| !matches!(c, '[' | ']' | '(' | ')'))
        .collect();

    if UNRESOLVABLE_KEYWORDS
        .iter()
        .any(|keyword| cleaned.eq_ignore_ascii_case(keyword))
    {
        return None;
    }
    Some(cleaned)
}

/// Returns true when `candidate` is strictly higher than `current`.
///
/// Anything beats no version at all. Versions that clean to nothing are
/// never higher than a concrete version. Numeric segments are compared
/// position by position with the shorter side padded with zeros, so `1.0`
/// and `1.0.0` are equal and neither is higher than the other.
pub fn is_higher(current: Option<&str>, candidate: &str) -> bool {
    let Some(current) = current else {
        return true;
    };

    let current_cleaned = clean(current).filter(|v| !v.is_empty());
    let candidate_cleaned = clean(candidate).filter(|v| !v.is_empty());

    let (current_cleaned, candidate_cleaned) = match (current_cleaned, candidate_cleaned) {
        (None, candidate) => return candidate.is_some(),
        (Some(_), None) => return false,
        (Some(current), Some(candidate)) => (current, candidate),
    };

    let current_parts = parse(&current_cleaned);
    let candidate_parts = parse(&candidate_cleaned);
    let width = current_parts.len().max(candidate_parts.len());

    for index in 0..width {
        let current_part = current_parts.get(index).copied().unwrap_or(0);
        let candidate_part = candidate_parts.get(index).copied().unwrap_or(0);
        if candidate_part != current_part {
            return candidate_part > current_part;
        }
    }

    false
}
