pub mod quote;
pub mod raw_info;
pub mod raw_series;

pub use quote::Quote;
pub use raw_info::RawInfo;
pub use raw_series::{PriceSample, RawSeries};
