pub mod filters;
pub mod options;
pub mod sorting;
pub mod suggestions;

pub use filters::{filter_properties, PriceRange, SearchFilters};
pub use sorting::{sort_properties, SortOption};
pub use suggestions::{generate_price_ranges, generate_search_suggestions, PriceRangeOption};
