/// mend version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Absolute z-score above which a reading is classified as an outlier.
/// Three standard deviations: the conventional bound for "extreme".
pub const OUTLIER_Z_THRESHOLD: f64 = 3.0;

/// Fewest present values that still give a meaningful dispersion estimate.
pub const MIN_SCORABLE_VALUES: usize = 2;

/// Default name of the timestamp column in tabular input and output.
pub const TIMESTAMP_COLUMN: &str = "timestamp";

/// Default name of the raw reading column in tabular input and output.
pub const SENSOR_VALUE_COLUMN: &str = "sensor_value";

/// Name of the corrected reading column in tabular output.
pub const CORRECTED_VALUE_COLUMN: &str = "corrected_value";

/// Name of the z-score column when annotations are exported.
pub const SCORE_COLUMN: &str = "score";

/// Name of the outlier flag column when annotations are exported.
pub const OUTLIER_COLUMN: &str = "is_outlier";

/// Lossless output format for timestamps. `%.f` prints fractional seconds
/// only when they are non-zero.
pub const TIMESTAMP_OUTPUT_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";
