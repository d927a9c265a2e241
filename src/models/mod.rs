pub mod dataset;
pub mod observation;
pub mod record;
pub mod station;

pub use dataset::{Dataset, DatasetRow};
pub use observation::{ObservationDescriptor, ObservationKind};
pub use record::{DailyValue, StationRecord};
pub use station::StationId;
