// Adapters layer: concrete implementations of the domain ports.

pub mod clock;
pub mod output;

pub use clock::{FixedClock, SystemClock};
pub use output::{CollectingSink, WriterSink};
