//! Cross-cutting, shared constants.

/// Floor applied to similarity and model scores before geometric-mean
/// combination. The geometric mean is only defined for positive inputs.
pub const MIN_SIMILARITY: f32 = 1e-4;

/// Number of life-situation meters in the 3x10D questionnaire.
pub const METER_COUNT: usize = 10;

/// Raw 3x10D ratings are rescaled with `1 - mean / 10.1`. Dividing by 10.1
/// instead of 10 keeps the transformed value above zero when every rating
/// is 10.
pub const METER_SCALE_DIVISOR: f32 = 10.1;

/// Maximum raw rating a single life-situation meter can carry.
pub const MAX_METER_RATING: u8 = 10;

/// Non-existing municipality code that short-circuits the pipeline into the
/// fixed mock result set. Used by downstream session-transfer integration
/// tests.
pub const MOCK_SERVICE_MUNICIPALITY: &str = "000";

/// Default number of services returned when the caller gives no limit.
pub const DEFAULT_RESULT_LIMIT: usize = 5;

/// Default cap on concurrently executing pipeline requests per worker.
pub const DEFAULT_MAX_CONCURRENT_TASKS: usize = 2;
