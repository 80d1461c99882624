//! Data model: input records, the validated series, and annotated output.

pub mod annotated;
pub mod record;
pub mod score_basis;
pub mod series;
pub mod summary;
pub mod timestamp;

pub use annotated::{AnnotatedRecord, CorrectedSeries};
pub use record::Record;
pub use score_basis::{DegenerateReason, ScoreBasis, StdDevConvention};
pub use series::Series;
pub use summary::CorrectionSummary;
pub use timestamp::Timestamp;
