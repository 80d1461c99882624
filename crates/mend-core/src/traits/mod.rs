//! Seams between the corrector and its collaborators.

pub mod sink;
pub mod source;

pub use sink::SeriesSink;
pub use source::RecordSource;
