pub mod bounds;
pub mod isqrt;
pub mod report;
pub mod scanner;

pub use crate::domain::model::{PrimeHit, ScanOptions, ScanResult, SearchBounds, SearchInterval};
pub use crate::domain::ports::{Clock, PrimeSink};
pub use crate::utils::error::Result;
