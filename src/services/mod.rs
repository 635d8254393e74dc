pub mod normalize;
pub mod quote_service;

pub use normalize::normalize;
pub use quote_service::QuoteService;
