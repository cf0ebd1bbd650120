//! Text-filter system for link output pipelines.

mod case_filters;
mod count_filters;
mod filter_trait;
mod grep_filter;
mod order_filters;
mod registry;
mod slice_filters;
mod token_filters;

pub use filter_trait::TextFilter;
pub use registry::FilterRegistry;
