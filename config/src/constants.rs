//! # Configuration Constants
//!
//! Centralized constants for the signed-field pipeline. Sampling
//! defaults and safety limits are defined here.
//!
//! ## Categories
//!
//! - **Sampling**: Default lattice resolution, bounds and iso-level
//! - **Limits**: Maximum values for safety bounds
//! - **Color**: Default display color handed to renderers

// =============================================================================
// SAMPLING CONSTANTS
// =============================================================================

/// Default number of lattice points per axis.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_RESOLUTION;
///
/// // 50 points per axis = 125,000 field evaluations
/// assert_eq!(DEFAULT_RESOLUTION.pow(3), 125_000);
/// ```
pub const DEFAULT_RESOLUTION: usize = 50;

/// Smallest usable resolution.
///
/// Two points per axis is the minimum for a single marching-cubes cell.
pub const MIN_RESOLUTION: usize = 2;

/// Largest accepted resolution.
///
/// Sampling cost and volume memory grow with the cube of the resolution,
/// 1024³ doubles is already 8 GiB.
pub const MAX_RESOLUTION: usize = 1024;

/// Default iso-level at which surfaces are extracted.
///
/// Zero is the boundary of every signed field.
pub const DEFAULT_ISO_LEVEL: f64 = 0.0;

/// Default sampling bounds, one `(min, max)` pair per axis.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_BOUNDS;
///
/// for (min, max) in DEFAULT_BOUNDS {
///     assert!(min < max);
/// }
/// ```
pub const DEFAULT_BOUNDS: [(f64, f64); 3] = [(-1.0, 1.0), (-1.0, 1.0), (-1.0, 1.0)];

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Remaining stack below which field evaluation grows a new stack segment.
///
/// Field trees are evaluated recursively and the `stacker` crate is used to
/// keep deeply nested compositions from overflowing worker-thread stacks.
pub const STACKER_RED_ZONE_BYTES: usize = 64 * 1024;

/// Bytes of stack space allocated each time the `stacker` crate grows.
///
/// # Example
///
/// ```rust
/// use config::constants::{STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES};
///
/// assert!(STACKER_STACK_SIZE_BYTES > STACKER_RED_ZONE_BYTES);
/// ```
pub const STACKER_STACK_SIZE_BYTES: usize = 4 * 1024 * 1024;

/// Maximum number of vertices in a single mesh.
///
/// Safety limit to prevent memory exhaustion from extremely dense surfaces.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_VERTICES;
///
/// let vertex_count = 1000;
/// assert!(vertex_count < MAX_VERTICES);
/// ```
pub const MAX_VERTICES: usize = 10_000_000;

/// Maximum number of triangles in a single mesh.
///
/// Safety limit to prevent memory exhaustion from extremely dense surfaces.
pub const MAX_TRIANGLES: usize = 20_000_000;

// =============================================================================
// COLOR CONSTANTS
// =============================================================================

/// Default RGBA color for rendered solids (cyan, opaque).
///
/// Used when a render request carries no explicit color.
pub const DEFAULT_COLOR: [f32; 4] = [0.0, 1.0, 1.0, 1.0];

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Returns the lattice spacing along one axis.
///
/// Both bounds are lattice points, so `resolution` points span
/// `resolution - 1` intervals.
///
/// # Example
///
/// ```rust
/// use config::constants::lattice_spacing;
///
/// assert_eq!(lattice_spacing(-1.0, 1.0, 3), 1.0);
/// ```
#[inline]
pub fn lattice_spacing(min: f64, max: f64, resolution: usize) -> f64 {
    (max - min) / (resolution.saturating_sub(1).max(1)) as f64
}
