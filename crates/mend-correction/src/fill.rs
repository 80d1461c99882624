//! Forward fill as an explicit two-state machine.

/// Fill state while walking the series left to right.
///
/// `HasGoodValue` is sticky: once a usable reading has been seen the
/// machine never returns to `NoGoodValueYet`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum FillState {
    #[default]
    NoGoodValueYet,
    HasGoodValue(f64),
}

impl FillState {
    /// The value that would be carried forward right now.
    pub fn last_good(&self) -> Option<f64> {
        match self {
            Self::NoGoodValueYet => None,
            Self::HasGoodValue(v) => Some(*v),
        }
    }

    /// Consume one reading and return its corrected value.
    ///
    /// Missing or flagged readings take the carried value (or stay missing
    /// inside a leading gap); anything else is kept and becomes the new
    /// carried value.
    pub fn step(&mut self, raw: Option<f64>, is_outlier: bool) -> Option<f64> {
        match raw {
            Some(v) if !is_outlier => {
                *self = Self::HasGoodValue(v);
                Some(v)
            }
            _ => self.last_good(),
        }
    }
}

/// Correct `raw` in one pass. `flags[i]` marks `raw[i]` as an outlier.
/// Position `i` of the result depends only on positions `..=i`.
///
/// # Panics
/// Panics if `raw` and `flags` differ in length.
pub fn forward_fill(raw: &[Option<f64>], flags: &[bool]) -> Vec<Option<f64>> {
    assert_eq!(raw.len(), flags.len(), "raw values and flags must align");

    let mut state = FillState::default();
    raw.iter()
        .zip(flags)
        .map(|(&v, &flagged)| state.step(v, flagged))
        .collect()
}
