use crate::models::PriceRecord;
use regex::Regex;
use time::OffsetDateTime;

/// The selection criteria every price store scan accepts.
///
/// Text criteria match case-insensitively against the whole stored value.
/// Whitespace inside a region criterion matches zero or more whitespace
/// characters, so "South West" also selects "SouthWest" and "south  west".
/// Both period bounds are inclusive.
///
/// Stores are expected to apply [`state_pattern`](Self::state_pattern) and
/// [`region_pattern`](Self::region_pattern) verbatim (e.g. with a `REGEXP`
/// operator); [`matches`](Self::matches) is the in-process equivalent.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PriceFilter {
    /// Restrict to a single state
    pub state: Option<String>,
    /// Restrict to a single region
    pub region: Option<String>,
    /// Only records observed at or before this instant
    pub on_or_before: Option<OffsetDateTime>,
    /// Only records observed at or after this instant
    pub on_or_after: Option<OffsetDateTime>,
}

impl PriceFilter {
    /// A filter matching every record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to `state`. Blank input leaves the filter unrestricted.
    pub fn with_state(mut self, state: Option<&str>) -> Self {
        self.state = normalize(state);
        self
    }

    /// Restrict to `region`. Blank input leaves the filter unrestricted.
    pub fn with_region(mut self, region: Option<&str>) -> Self {
        self.region = normalize(region);
        self
    }

    /// Only keep records observed at or before `instant`.
    pub fn on_or_before(mut self, instant: OffsetDateTime) -> Self {
        self.on_or_before = Some(instant);
        self
    }

    /// Only keep records observed at or after `instant`.
    pub fn on_or_after(mut self, instant: OffsetDateTime) -> Self {
        self.on_or_after = Some(instant);
        self
    }

    /// Whether either text criterion is present.
    pub fn has_text_criteria(&self) -> bool {
        self.state.is_some() || self.region.is_some()
    }

    /// The anchored, case-insensitive pattern a stored state must match.
    pub fn state_pattern(&self) -> Option<String> {
        self.state
            .as_deref()
            .map(|state| format!("(?i)^{}$", regex::escape(state)))
    }

    /// The anchored, case-insensitive pattern a stored region must match.
    pub fn region_pattern(&self) -> Option<String> {
        self.region.as_deref().map(|region| {
            let body = region
                .split_whitespace()
                .map(regex::escape)
                .collect::<Vec<_>>()
                .join(r"\s*");
            format!("(?i)^{body}$")
        })
    }

    /// Whether `record` satisfies every criterion of this filter.
    pub fn matches(&self, record: &PriceRecord) -> bool {
        if self.on_or_before.is_some_and(|bound| record.period > bound) {
            return false;
        }
        if self.on_or_after.is_some_and(|bound| record.period < bound) {
            return false;
        }
        if let Some(pattern) = self.state_pattern() {
            if !is_match(&pattern, Some(&record.state)) {
                return false;
            }
        }
        if let Some(pattern) = self.region_pattern() {
            if !is_match(&pattern, record.region.as_deref()) {
                return false;
            }
        }
        true
    }
}

fn normalize(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToOwned::to_owned)
}

fn is_match(pattern: &str, value: Option<&str>) -> bool {
    match (Regex::new(pattern), value) {
        (Ok(re), Some(value)) => re.is_match(value),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use time::macros::datetime;

    fn record(state: &str, region: Option<&str>) -> PriceRecord {
        PriceRecord {
            id: 1,
            state: state.into(),
            region: region.map(Into::into),
            period: datetime!(2024-11-08 12:00 UTC),
            ago: None,
            pms: Some(770.0),
            dpk: None,
            lpg: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[rstest]
    #[case("Lagos", true)]
    #[case("lagos", true)]
    #[case("LAGOS", true)]
    #[case("Lag", false)]
    #[case("Lagos Island", false)]
    fn state_is_anchored_and_case_insensitive(#[case] stored: &str, #[case] expected: bool) {
        let filter = PriceFilter::new().with_state(Some("  Lagos "));
        assert_eq!(filter.matches(&record(stored, None)), expected);
    }

    #[rstest]
    #[case(Some("South West"), true)]
    #[case(Some("southwest"), true)]
    #[case(Some("SOUTH   WEST"), true)]
    #[case(Some("South West Zone"), false)]
    #[case(Some("Sou th West"), false)]
    #[case(None, false)]
    fn region_collapses_whitespace(#[case] stored: Option<&str>, #[case] expected: bool) {
        let filter = PriceFilter::new().with_region(Some("South  West"));
        assert_eq!(filter.matches(&record("Lagos", stored)), expected);
    }

    #[test]
    fn blank_text_is_no_filter() {
        let filter = PriceFilter::new()
            .with_state(Some("   "))
            .with_region(Some(""));
        assert!(!filter.has_text_criteria());
        assert!(filter.matches(&record("Anything", None)));
    }

    #[test]
    fn metacharacters_are_literal() {
        let filter = PriceFilter::new().with_state(Some("La.os"));
        assert_eq!(filter.state_pattern().as_deref(), Some(r"(?i)^La\.os$"));
        assert!(!filter.matches(&record("Lagos", None)));
    }

    #[test]
    fn period_bounds_are_inclusive() {
        let at = datetime!(2024-11-08 12:00 UTC);
        let filter = PriceFilter::new().on_or_after(at).on_or_before(at);
        assert!(filter.matches(&record("Lagos", None)));

        let filter = PriceFilter::new().on_or_before(datetime!(2024-11-08 11:59 UTC));
        assert!(!filter.matches(&record("Lagos", None)));

        let filter = PriceFilter::new().on_or_after(datetime!(2024-11-08 12:01 UTC));
        assert!(!filter.matches(&record("Lagos", None)));
    }
}
