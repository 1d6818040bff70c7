pub mod data_point;
pub mod sample_table;
pub mod summary;

pub use data_point::{RawSample, REQUIRED_COLUMNS};
pub use sample_table::{ConvertedTable, SampleTable};
pub use summary::Summary;
