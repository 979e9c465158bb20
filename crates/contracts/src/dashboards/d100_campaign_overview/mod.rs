pub mod dto;
pub mod field;
pub mod mock;
pub mod pagination;
pub mod query;
pub mod sort;

pub use dto::{AcquisitionPoint, CampaignRecord, ConversionStage, RevenuePoint};
pub use field::{CampaignField, ColumnKind, ColumnValue};
pub use pagination::{clamp_page, page_count, page_items, PageItem};
pub use query::{available_channels, query, DateRange, QueryResult, QueryState};
pub use sort::{SortDirection, SortState};
