//! Outcome Aggregator Module
//! Reduces launch records to success counts for the share chart.

use crate::data::{Dataset, SiteFilter};
use std::collections::HashMap;

/// Success total for one site.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteSuccess {
    pub site: String,
    pub successes: i64,
}

/// Aggregated outcome counts. Shape depends on the site selection.
#[derive(Debug, Clone, PartialEq)]
pub enum OutcomeSummary {
    /// Sum of outcome per site, in first-appearance order.
    BySite(Vec<SiteSuccess>),
    /// Success and failure counts for one site. Zero counts for unknown sites.
    SingleSite {
        site: String,
        success: i64,
        failure: i64,
    },
}

impl OutcomeSummary {
    /// Labelled chart slices.
    pub fn slices(&self) -> Vec<(String, f64)> {
        match self {
            OutcomeSummary::BySite(sites) => sites
                .iter()
                .map(|s| (s.site.clone(), s.successes as f64))
                .collect(),
            OutcomeSummary::SingleSite {
                success, failure, ..
            } => vec![
                ("Success".to_string(), *success as f64),
                ("Failure".to_string(), *failure as f64),
            ],
        }
    }

    pub fn total(&self) -> i64 {
        match self {
            OutcomeSummary::BySite(sites) => sites.iter().map(|s| s.successes).sum(),
            OutcomeSummary::SingleSite {
                success, failure, ..
            } => success + failure,
        }
    }

    pub fn title(&self) -> String {
        match self {
            OutcomeSummary::BySite(_) => "Total Success Launches By Site".to_string(),
            OutcomeSummary::SingleSite { site, .. } => {
                format!("Total Success Launches for site {}", site)
            }
        }
    }
}

/// Success-count reducer over a dataset.
pub struct OutcomeAggregator;

impl OutcomeAggregator {
    /// Aggregate outcomes for the selected site.
    ///
    /// For all sites the outcome column is summed per site; for one site
    /// `outcome == 1` and `outcome == 0` are counted separately. The two paths
    /// differ when the column holds values other than 0 and 1.
    pub fn aggregate(dataset: &Dataset, site: &SiteFilter) -> OutcomeSummary {
        match site {
            SiteFilter::All => Self::sum_by_site(dataset),
            SiteFilter::Site(name) => Self::count_for_site(dataset, name),
        }
    }

    fn sum_by_site(dataset: &Dataset) -> OutcomeSummary {
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut totals: Vec<SiteSuccess> = Vec::new();

        for record in dataset.records() {
            match index.get(record.site.as_str()) {
                Some(&i) => totals[i].successes += record.outcome,
                None => {
                    index.insert(&record.site, totals.len());
                    totals.push(SiteSuccess {
                        site: record.site.clone(),
                        successes: record.outcome,
                    });
                }
            }
        }

        OutcomeSummary::BySite(totals)
    }

    fn count_for_site(dataset: &Dataset, site: &str) -> OutcomeSummary {
        let (success, failure) = dataset
            .records()
            .iter()
            .filter(|r| r.site == site)
            .fold((0, 0), |(s, f), r| match r.outcome {
                1 => (s + 1, f),
                0 => (s, f + 1),
                _ => (s, f),
            });

        OutcomeSummary::SingleSite {
            site: site.to_string(),
            success,
            failure,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::LaunchRecord;

    fn sample() -> Dataset {
        Dataset::new(vec![
            LaunchRecord::new("siteA", Some(500.0), 1, "v1.0"),
            LaunchRecord::new("siteA", Some(600.0), 0, "v1.0"),
            LaunchRecord::new("siteB", Some(9000.0), 1, "FT"),
            LaunchRecord::new("siteB", Some(200.0), 0, "FT"),
        ])
    }

    fn site(name: &str) -> SiteFilter {
        SiteFilter::Site(name.to_string())
    }

    #[test]
    fn all_sites_sums_per_site() {
        let summary = OutcomeAggregator::aggregate(&sample(), &SiteFilter::All);
        assert_eq!(
            summary,
            OutcomeSummary::BySite(vec![
                SiteSuccess {
                    site: "siteA".into(),
                    successes: 1
                },
                SiteSuccess {
                    site: "siteB".into(),
                    successes: 1
                },
            ])
        );
    }

    #[test]
    fn single_site_counts_success_and_failure() {
        let summary = OutcomeAggregator::aggregate(&sample(), &site("siteA"));
        assert_eq!(
            summary,
            OutcomeSummary::SingleSite {
                site: "siteA".into(),
                success: 1,
                failure: 1
            }
        );
        assert_eq!(summary.slices()[0], ("Success".to_string(), 1.0));
        assert_eq!(summary.slices()[1], ("Failure".to_string(), 1.0));
    }

    #[test]
    fn unknown_site_yields_zero_counts() {
        let summary = OutcomeAggregator::aggregate(&sample(), &site("nowhere"));
        assert_eq!(
            summary,
            OutcomeSummary::SingleSite {
                site: "nowhere".into(),
                success: 0,
                failure: 0
            }
        );
        assert_ne!(
            summary,
            OutcomeAggregator::aggregate(&sample(), &SiteFilter::All)
        );
    }

    #[test]
    fn site_with_only_failures_is_kept_in_all_view() {
        let ds = Dataset::new(vec![
            LaunchRecord::new("siteA", None, 0, "x"),
            LaunchRecord::new("siteB", None, 1, "x"),
        ]);
        let summary = OutcomeAggregator::aggregate(&ds, &SiteFilter::All);
        assert_eq!(summary.slices()[0], ("siteA".to_string(), 0.0));
        assert_eq!(summary.total(), 1);
    }

    #[test]
    fn non_binary_outcomes_follow_each_path() {
        let ds = Dataset::new(vec![
            LaunchRecord::new("siteA", None, 2, "x"),
            LaunchRecord::new("siteA", None, 1, "x"),
        ]);
        // Summing counts the raw value; the per-site count ignores it.
        assert_eq!(OutcomeAggregator::aggregate(&ds, &SiteFilter::All).total(), 3);
        assert_eq!(
            OutcomeAggregator::aggregate(&ds, &site("siteA")),
            OutcomeSummary::SingleSite {
                site: "siteA".into(),
                success: 1,
                failure: 0
            }
        );
    }

    #[test]
    fn interleaved_sites_keep_first_appearance_order() {
        let ds = Dataset::new(vec![
            LaunchRecord::new("siteB", None, 1, "x"),
            LaunchRecord::new("siteA", None, 0, "x"),
            LaunchRecord::new("siteB", None, 1, "x"),
            LaunchRecord::new("siteC", None, 1, "x"),
            LaunchRecord::new("siteA", None, 1, "x"),
        ]);
        assert_eq!(
            OutcomeAggregator::aggregate(&ds, &SiteFilter::All).slices(),
            vec![
                ("siteB".to_string(), 2.0),
                ("siteA".to_string(), 1.0),
                ("siteC".to_string(), 1.0),
            ]
        );
    }

    #[test]
    fn repeated_all_sites_calls_are_equal() {
        let ds = sample();
        assert_eq!(
            OutcomeAggregator::aggregate(&ds, &SiteFilter::All),
            OutcomeAggregator::aggregate(&ds, &SiteFilter::All)
        );
    }

    #[test]
    fn repeated_single_site_calls_are_equal() {
        let ds = sample();
        assert_eq!(
            OutcomeAggregator::aggregate(&ds, &site("siteB")),
            OutcomeAggregator::aggregate(&ds, &site("siteB"))
        );
    }

    #[test]
    fn partition_covers_binary_site() {
        let ds = sample();
        for name in ds.sites() {
            let expected = ds.records().iter().filter(|r| r.site == name).count() as i64;
            assert_eq!(OutcomeAggregator::aggregate(&ds, &site(&name)).total(), expected);
        }
    }

    #[test]
    fn all_sites_total_matches_successes() {
        let ds = sample();
        let successes = ds.records().iter().filter(|r| r.outcome == 1).count() as i64;
        assert_eq!(OutcomeAggregator::aggregate(&ds, &SiteFilter::All).total(), successes);
    }

    #[test]
    fn titles_follow_selection() {
        let ds = sample();
        assert_eq!(
            OutcomeAggregator::aggregate(&ds, &SiteFilter::All).title(),
            "Total Success Launches By Site"
        );
        assert_eq!(
            OutcomeAggregator::aggregate(&ds, &site("siteB")).title(),
            "Total Success Launches for site siteB"
        );
    }
}
