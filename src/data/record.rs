//! Launch Record Model
//! Row type, the immutable dataset and the site selector value.

use std::collections::HashSet;
use std::fmt;

/// Sentinel used by the site selector for "every site".
pub const ALL_SITES: &str = "ALL";

/// One launch observation.
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchRecord {
    pub site: String,
    /// `None` when the source cell was empty or not a finite number.
    pub payload_mass_kg: Option<f64>,
    /// Raw outcome indicator (1 = success, 0 = failure).
    pub outcome: i64,
    pub booster_category: String,
}

impl LaunchRecord {
    pub fn new(
        site: impl Into<String>,
        payload_mass_kg: Option<f64>,
        outcome: i64,
        booster_category: impl Into<String>,
    ) -> Self {
        Self {
            site: site.into(),
            payload_mass_kg: payload_mass_kg.filter(|v| v.is_finite()),
            outcome,
            booster_category: booster_category.into(),
        }
    }
}

/// Observed payload extent of a dataset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayloadBounds {
    pub min: f64,
    pub max: f64,
}

/// Ordered, read-only collection of launch records.
///
/// Payload bounds are computed once here; there is no way to mutate the rows
/// after construction, so a `Dataset` can be shared behind an `Arc` freely.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<LaunchRecord>,
    payload_bounds: Option<PayloadBounds>,
}

impl Dataset {
    pub fn new(records: Vec<LaunchRecord>) -> Self {
        let payload_bounds = records
            .iter()
            .filter_map(|r| r.payload_mass_kg)
            .fold(None, |acc: Option<PayloadBounds>, v| {
                Some(match acc {
                    Some(b) => PayloadBounds {
                        min: b.min.min(v),
                        max: b.max.max(v),
                    },
                    None => PayloadBounds { min: v, max: v },
                })
            });

        Self {
            records,
            payload_bounds,
        }
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// `None` when no record carries a usable payload mass.
    pub fn payload_bounds(&self) -> Option<PayloadBounds> {
        self.payload_bounds
    }

    /// Distinct sites in order of first appearance.
    pub fn sites(&self) -> Vec<String> {
        Self::distinct(self.records.iter().map(|r| r.site.as_str()))
    }

    /// Distinct booster categories in order of first appearance.
    pub fn booster_categories(&self) -> Vec<String> {
        Self::distinct(self.records.iter().map(|r| r.booster_category.as_str()))
    }

    fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
        let mut index: HashSet<&str> = HashSet::new();
        let mut seen: Vec<String> = Vec::new();
        for v in values {
            if index.insert(v) {
                seen.push(v.to_string());
            }
        }
        seen
    }
}

/// Site selector value: every site, or one exact site name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum SiteFilter {
    #[default]
    All,
    Site(String),
}

impl SiteFilter {
    /// Parse the selector value; `"ALL"` is the all-sites sentinel.
    pub fn parse(value: &str) -> Self {
        if value == ALL_SITES {
            SiteFilter::All
        } else {
            SiteFilter::Site(value.to_string())
        }
    }

    pub fn matches(&self, record: &LaunchRecord) -> bool {
        match self {
            SiteFilter::All => true,
            SiteFilter::Site(site) => record.site == *site,
        }
    }
}

impl fmt::Display for SiteFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteFilter::All => f.write_str(ALL_SITES),
            SiteFilter::Site(site) => f.write_str(site),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dataset {
        Dataset::new(vec![
            LaunchRecord::new("siteA", Some(500.0), 1, "v1.0"),
            LaunchRecord::new("siteA", Some(600.0), 0, "FT"),
            LaunchRecord::new("siteB", Some(9000.0), 1, "FT"),
            LaunchRecord::new("siteB", Some(200.0), 0, "B4"),
        ])
    }

    #[test]
    fn bounds_are_computed_on_construction() {
        let ds = sample();
        assert_eq!(
            ds.payload_bounds(),
            Some(PayloadBounds {
                min: 200.0,
                max: 9000.0
            })
        );
    }

    #[test]
    fn bounds_ignore_missing_payloads() {
        let ds = Dataset::new(vec![
            LaunchRecord::new("a", None, 1, "x"),
            LaunchRecord::new("a", Some(f64::NAN), 1, "x"),
            LaunchRecord::new("a", Some(42.0), 0, "x"),
        ]);
        assert_eq!(
            ds.payload_bounds(),
            Some(PayloadBounds {
                min: 42.0,
                max: 42.0
            })
        );
        assert_eq!(ds.records()[1].payload_mass_kg, None);
    }

    #[test]
    fn bounds_absent_without_payloads() {
        let ds = Dataset::new(vec![LaunchRecord::new("a", None, 1, "x")]);
        assert!(ds.payload_bounds().is_none());
        assert!(Dataset::default().payload_bounds().is_none());
    }

    #[test]
    fn sites_keep_first_appearance_order() {
        let ds = sample();
        assert_eq!(ds.sites(), vec!["siteA", "siteB"]);
        assert_eq!(ds.booster_categories(), vec!["v1.0", "FT", "B4"]);
    }

    #[test]
    fn distinct_values_with_interleaved_repeats() {
        let ds = Dataset::new(vec![
            LaunchRecord::new("b", None, 1, "FT"),
            LaunchRecord::new("a", None, 1, "B4"),
            LaunchRecord::new("b", None, 0, "FT"),
            LaunchRecord::new("c", None, 1, "B5"),
            LaunchRecord::new("a", None, 0, "B4"),
        ]);
        assert_eq!(ds.sites(), vec!["b", "a", "c"]);
        assert_eq!(ds.booster_categories(), vec!["FT", "B4", "B5"]);
    }

    #[test]
    fn site_filter_parses_sentinel() {
        assert_eq!(SiteFilter::parse("ALL"), SiteFilter::All);
        assert_eq!(
            SiteFilter::parse("siteA"),
            SiteFilter::Site("siteA".to_string())
        );
        assert_eq!(SiteFilter::parse("all"), SiteFilter::Site("all".to_string()));
        assert_eq!(SiteFilter::All.to_string(), "ALL");
    }
}
