pub mod index;
pub mod merged;
pub mod temperature;

pub use index::{RegionValues, TemperatureObservation, TemporalIndex, ValueIndex};
pub use merged::{ChartRow, MergedRecord};
pub use temperature::{ReducedTemperatureRow, TemperatureRecord};
