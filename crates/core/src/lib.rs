pub mod field;
pub mod measure;
pub mod summary;

pub use field::{Extraction, FieldResult, FieldStatus};
pub use measure::{Abv, MeasureError, NetContents, VolumeUnit};
pub use summary::{BatchSummary, ImageSummary};
