//! Release tag resolution.

use chrono::NaiveDateTime;

/// Timestamp tag format: `v2024.06.15-0930`.
const TIMESTAMP_TAG_FORMAT: &str = "v%Y.%m.%d-%H%M";

/// Resolve the tag for a release.
///
/// A non-blank override wins and is normalized to start with `v`. Otherwise
/// the tag is built from `now`, which callers pass in (normally the local
/// wall clock).
pub fn resolve_tag(version_override: Option<&str>, now: NaiveDateTime) -> String {
    match version_override.map(str::trim).filter(|v| !v.is_empty()) {
        Some(version) => normalize_version_tag(version),
        None => timestamp_tag(now),
    }
}

/// Prefix `v` unless already present.
pub fn normalize_version_tag(version: &str) -> String {
    if version.starts_with('v') {
        version.to_string()
    } else {
        format!("v{}", version)
    }
}

/// Build a tag from a timestamp, every field zero-padded.
pub fn timestamp_tag(now: NaiveDateTime) -> String {
    now.format(TIMESTAMP_TAG_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    #[test]
    fn test_override_gets_v_prefix() {
        assert_eq!(resolve_tag(Some("1.2.3"), at(2024, 1, 1, 0, 0)), "v1.2.3");
    }

    #[test]
    fn test_override_with_v_unchanged() {
        assert_eq!(resolve_tag(Some("v1.2.3"), at(2024, 1, 1, 0, 0)), "v1.2.3");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = normalize_version_tag("2.0.0-rc.1");
        assert_eq!(normalize_version_tag(&once), once);
    }

    #[test]
    fn test_timestamp_tag_zero_padded() {
        assert_eq!(resolve_tag(None, at(2024, 3, 5, 7, 9)), "v2024.03.05-0709");
    }

    #[test]
    fn test_timestamp_tag_late_in_day() {
        assert_eq!(timestamp_tag(at(2025, 12, 31, 23, 59)), "v2025.12.31-2359");
    }

    #[test]
    fn test_blank_override_uses_timestamp() {
        assert_eq!(resolve_tag(Some("  "), at(2024, 6, 15, 12, 30)), "v2024.06.15-1230");
    }

    #[test]
    fn test_override_is_trimmed() {
        assert_eq!(resolve_tag(Some(" 3.1.0\n"), at(2024, 1, 1, 0, 0)), "v3.1.0");
    }
}
