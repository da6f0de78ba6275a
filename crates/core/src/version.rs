//! Engine version strings.

/// First public release: node graph and shader registry.
pub const V_0_1_0: &str = "0.1.0";

/// Adds stereo camera rigs and pick volumes.
///
/// Releases after 0.2.0 remain backward compatible with it.
pub const V_0_2_0: &str = "0.2.0";

/// The version this crate was built as.
pub const CURRENT: &str = V_0_2_0;
