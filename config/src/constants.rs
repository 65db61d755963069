//! # Configuration Constants
//!
//! Centralized constants for the scene pipeline. Primitive tessellation,
//! colour baking, camera, lighting and animation values are defined here.
//!
//! ## Categories
//!
//! - **Geometry**: Unit primitive sizes and tessellation
//! - **Colour**: Baking sentinel and material colours
//! - **Camera**: Perspective projection defaults
//! - **Lighting**: Fixed three-point light rig
//! - **Animation**: Per-frame rotation step

// =============================================================================
// GEOMETRY CONSTANTS
// =============================================================================

/// Edge length of the unit cube and the height of the unit cylinder.
///
/// Every primitive is built at unit scale; the per-command transform
/// supplies the final size.
///
/// # Example
///
/// ```rust
/// use config::constants::UNIT_SIZE;
///
/// let half = UNIT_SIZE / 2.0;
/// assert_eq!(half, 0.5);
/// ```
pub const UNIT_SIZE: f64 = 1.0;

/// Radius of the unit sphere and unit cylinder (diameter of one unit).
///
/// # Example
///
/// ```rust
/// use config::constants::{UNIT_RADIUS, UNIT_SIZE};
///
/// assert_eq!(UNIT_RADIUS * 2.0, UNIT_SIZE);
/// ```
pub const UNIT_RADIUS: f64 = 0.5;

/// Default tessellation segment count for spheres and cylinders.
///
/// Spheres use this value for both latitude and longitude segments,
/// cylinders for the radial segments.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_SEGMENTS;
///
/// let quads_per_ring = DEFAULT_SEGMENTS;
/// assert_eq!(quads_per_ring, 32);
/// ```
pub const DEFAULT_SEGMENTS: u32 = 32;

/// Minimum segment count that still encloses area.
pub const MIN_SEGMENTS: u32 = 3;

/// Y-axis scale applied to the sphere when building a `squash` primitive.
///
/// # Example
///
/// ```rust
/// use config::constants::{SQUASH_Y_SCALE, UNIT_RADIUS};
///
/// let squashed_height = 2.0 * UNIT_RADIUS * SQUASH_Y_SCALE;
/// assert_eq!(squashed_height, 0.5);
/// ```
pub const SQUASH_Y_SCALE: f64 = 0.5;

/// Default triangle used when a `triangle` command carries no coordinates.
///
/// Lies in the XY plane, apex up.
pub const DEFAULT_TRIANGLE: [[f64; 3]; 3] = [
    [0.0, 0.5, 0.0],
    [-0.5, -0.5, 0.0],
    [0.5, -0.5, 0.0],
];

/// End points of the unit line segment along the X axis.
pub const UNIT_LINE: [[f64; 3]; 2] = [[-0.5, 0.0, 0.0], [0.5, 0.0, 0.0]];

// =============================================================================
// COLOUR CONSTANTS
// =============================================================================

/// Placeholder written into the fourth channel of baked vertex colours.
///
/// The shared merged material never reads vertex alpha, so this channel only
/// keeps the colour attribute at a stride of four components.
///
/// # Example
///
/// ```rust
/// use config::constants::VERTEX_COLOR_SENTINEL;
///
/// let baked = [1.0_f32, 0.5, 0.25, VERTEX_COLOR_SENTINEL];
/// assert_eq!(baked.len(), 4);
/// ```
pub const VERTEX_COLOR_SENTINEL: f32 = -100.0;

/// Component count of a baked vertex colour.
pub const COLOR_COMPONENTS: usize = 4;

/// Component count of a vertex position.
pub const POSITION_COMPONENTS: usize = 3;

/// Scene background before any background command is applied.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_BACKGROUND;
///
/// let r = (DEFAULT_BACKGROUND >> 16) & 0xff;
/// assert_eq!(r, 0x44);
/// ```
pub const DEFAULT_BACKGROUND: u32 = 0x444444;

/// Specular colour of per-object Phong materials.
pub const PHONG_SPECULAR: u32 = 0x999999;

/// Shininess of per-object Phong materials.
pub const PHONG_SHININESS: f64 = 0.0;

/// Emissive colour of the shared vertex-coloured material used in merged mode.
pub const MERGED_EMISSIVE: u32 = 0x072534;

/// Base colour of the shared vertex-coloured material used in merged mode.
pub const MERGED_BASE_COLOR: u32 = 0xffffff;

/// Specular colour of the shared merged material.
pub const MERGED_SPECULAR: u32 = 0x111111;

/// Shininess of the shared merged material.
pub const MERGED_SHININESS: f64 = 30.0;

// =============================================================================
// CAMERA CONSTANTS
// =============================================================================

/// Vertical field of view in degrees.
pub const CAMERA_FOV_DEGREES: f64 = 30.0;

/// Near clipping plane distance.
pub const CAMERA_NEAR: f64 = 1.0;

/// Far clipping plane distance.
pub const CAMERA_FAR: f64 = 100_000.0;

/// Camera distance from the origin along +Z.
///
/// # Example
///
/// ```rust
/// use config::constants::{CAMERA_DISTANCE, CAMERA_NEAR};
///
/// assert!(CAMERA_DISTANCE > CAMERA_NEAR);
/// ```
pub const CAMERA_DISTANCE: f64 = 10.0;

/// Surface size used when the host has not reported one yet.
pub const DEFAULT_SURFACE_SIZE: (u32, u32) = (800, 600);

// =============================================================================
// LIGHTING CONSTANTS
// =============================================================================

/// Positions of the fixed three-point light rig.
///
/// All three lights are white point lights with unit intensity and no
/// distance falloff.
pub const LIGHT_POSITIONS: [[f64; 3]; 3] = [
    [0.0, 200.0, 0.0],
    [100.0, 200.0, 100.0],
    [-100.0, -200.0, -100.0],
];

/// Intensity of every light in the rig.
pub const LIGHT_INTENSITY: f64 = 1.0;

/// Colour of every light in the rig.
pub const LIGHT_COLOR: u32 = 0xffffff;

// =============================================================================
// ANIMATION CONSTANTS
// =============================================================================

/// Radians added to the group's X and Y rotation on every animated frame.
///
/// # Example
///
/// ```rust
/// use config::constants::ROTATION_STEP;
///
/// let after_200_frames = ROTATION_STEP * 200.0;
/// assert!((after_200_frames - 1.0).abs() < 1e-9);
/// ```
pub const ROTATION_STEP: f64 = 0.005;
