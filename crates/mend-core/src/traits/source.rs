use crate::errors::InputError;
use crate::models::Series;

/// Produces a validated series from some storage or transport.
///
/// Implementations own parsing and ordering; anything malformed is
/// reported here so the corrector only ever sees a valid `Series`.
pub trait RecordSource {
    fn read_series(&mut self) -> Result<Series, InputError>;
}

impl RecordSource for Series {
    fn read_series(&mut self) -> Result<Series, InputError> {
        Ok(self.clone())
    }
}
