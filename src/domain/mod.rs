pub mod business;
pub mod contact;
pub mod facets;
pub mod filter;
pub mod view;

pub use business::{Business, Dataset};
pub use facets::Facets;
pub use filter::{featured_businesses, filter_businesses, sort_by_district_category, FilterQuery};
pub use view::{ResultsView, ViewMode};
