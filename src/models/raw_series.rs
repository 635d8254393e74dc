use chrono::{DateTime, Utc};
use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;

/// A single intraday trade bar, extended hours included.
#[derive(Clone, Debug, Eq, Getters, PartialEq, new)]
pub struct PriceSample {
    timestamp: DateTime<Utc>,
    close: Decimal,
}

/// Chronologically ordered samples for the latest trading session.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RawSeries {
    samples: Vec<PriceSample>,
}

impl RawSeries {
    pub fn new(samples: Vec<PriceSample>) -> Self {
        Self { samples }
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn last(&self) -> Option<&PriceSample> {
        self.samples.last()
    }

    pub fn samples(&self) -> &[PriceSample] {
        &self.samples
    }
}

impl FromIterator<PriceSample> for RawSeries {
    fn from_iter<I: IntoIterator<Item = PriceSample>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
