//! Payload Selector Module
//! Filters launch records by site and payload range for the correlation chart.

use crate::data::{Dataset, LaunchRecord, PayloadBounds, SiteFilter};
use std::collections::HashMap;
use thiserror::Error;

/// Padding applied to each side of the selected range on the scatter x-axis.
pub const AXIS_MARGIN_KG: f64 = 300.0;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RangeError {
    #[error("Payload range bounds must be finite, got [{0}, {1}]")]
    NotFinite(f64, f64),
    #[error("Payload range is inverted: {0} > {1}")]
    Inverted(f64, f64),
}

/// Inclusive payload mass range with `lo <= hi`, both finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayloadRange {
    lo: f64,
    hi: f64,
}

impl PayloadRange {
    pub fn new(lo: f64, hi: f64) -> Result<Self, RangeError> {
        if !lo.is_finite() || !hi.is_finite() {
            return Err(RangeError::NotFinite(lo, hi));
        }
        if lo > hi {
            return Err(RangeError::Inverted(lo, hi));
        }
        Ok(Self { lo, hi })
    }

    /// Range spanning the whole observed payload extent.
    pub fn full(bounds: PayloadBounds) -> Self {
        Self {
            lo: bounds.min,
            hi: bounds.max,
        }
    }

    pub fn lo(&self) -> f64 {
        self.lo
    }

    pub fn hi(&self) -> f64 {
        self.hi
    }

    pub fn contains(&self, value: f64) -> bool {
        self.lo <= value && value <= self.hi
    }

    /// `(lo - margin, hi + margin)`.
    pub fn widen(&self, margin: f64) -> (f64, f64) {
        (self.lo - margin, self.hi + margin)
    }

    /// Clamp both ends into `bounds`, preserving `lo <= hi`.
    pub fn clamp_to(&self, bounds: PayloadBounds) -> Self {
        let lo = self.lo.clamp(bounds.min, bounds.max);
        let hi = self.hi.clamp(bounds.min, bounds.max).max(lo);
        Self { lo, hi }
    }
}

/// Records to plot plus the x-axis display bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct PayloadSelection {
    pub site: SiteFilter,
    pub range: PayloadRange,
    pub records: Vec<LaunchRecord>,
    pub axis_bounds: (f64, f64),
}

impl PayloadSelection {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Points grouped by booster category, first-appearance order.
    pub fn by_category(&self) -> Vec<(String, Vec<[f64; 2]>)> {
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut groups: Vec<(String, Vec<[f64; 2]>)> = Vec::new();

        for record in &self.records {
            let Some(payload) = record.payload_mass_kg else {
                continue;
            };
            let point = [payload, record.outcome as f64];
            match index.get(record.booster_category.as_str()) {
                Some(&i) => groups[i].1.push(point),
                None => {
                    index.insert(&record.booster_category, groups.len());
                    groups.push((record.booster_category.clone(), vec![point]));
                }
            }
        }

        groups
    }

    pub fn title(&self) -> String {
        match &self.site {
            SiteFilter::All => "Correlation between Payload and Success for all Sites".to_string(),
            SiteFilter::Site(site) => {
                format!("Correlation between Payload and Success for site {}", site)
            }
        }
    }
}

/// Site and payload-range filter over a dataset.
pub struct PayloadSelector;

impl PayloadSelector {
    /// Validate raw control values and clamp them into the dataset's observed
    /// payload bounds.
    pub fn selection_range(
        dataset: &Dataset,
        lo: f64,
        hi: f64,
    ) -> Result<PayloadRange, RangeError> {
        let range = PayloadRange::new(lo, hi)?;
        Ok(match dataset.payload_bounds() {
            Some(bounds) => range.clamp_to(bounds),
            None => range,
        })
    }

    /// Select records for the scatter chart using the default axis margin.
    pub fn select(dataset: &Dataset, site: &SiteFilter, range: &PayloadRange) -> PayloadSelection {
        Self::select_with_margin(dataset, site, range, AXIS_MARGIN_KG)
    }

    /// Stable filter: site first, then inclusive payload range. Records with
    /// no payload never match.
    pub fn select_with_margin(
        dataset: &Dataset,
        site: &SiteFilter,
        range: &PayloadRange,
        margin: f64,
    ) -> PayloadSelection {
        let records = dataset
            .records()
            .iter()
            .filter(|r| site.matches(r))
            .filter(|r| r.payload_mass_kg.is_some_and(|kg| range.contains(kg)))
            .cloned()
            .collect();

        PayloadSelection {
            site: site.clone(),
            range: *range,
            records,
            axis_bounds: range.widen(margin),
        }
    }
}
