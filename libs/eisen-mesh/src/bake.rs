//! # Vertex Colour Baking
//!
//! Merged mode replaces per-primitive materials with one shared material, so
//! each primitive's colour is written into its vertices instead.

use crate::geometry::Geometry;
use config::constants::VERTEX_COLOR_SENTINEL;
use eisen_ir::Rgb;

/// Writes `color` into every vertex of `geometry`, replacing any colours it
/// already had.
///
/// The fourth channel holds [`VERTEX_COLOR_SENTINEL`]; the shared material
/// does not read vertex alpha.
///
/// # Example
///
/// ```rust
/// use eisen_ir::Rgb;
/// use eisen_mesh::{bake_vertex_colors, primitives::create_line};
///
/// let mut line = create_line();
/// bake_vertex_colors(&mut line, Rgb::WHITE);
/// assert_eq!(line.colors().unwrap().len(), 2);
/// ```
pub fn bake_vertex_colors(geometry: &mut Geometry, color: Rgb) {
    let [r, g, b] = color.to_array();
    let colors = vec![[r, g, b, VERTEX_COLOR_SENTINEL]; geometry.vertex_count()];
    geometry.set_colors(colors);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::create_cube;

    #[test]
    fn test_one_colour_per_vertex() {
        let mut geometry = create_cube();
        bake_vertex_colors(&mut geometry, Rgb::from_hex(0xff0000));
        let colors = geometry.colors().unwrap();
        assert_eq!(colors.len(), geometry.vertex_count());
        assert!(colors.iter().all(|c| *c == [1.0, 0.0, 0.0, VERTEX_COLOR_SENTINEL]));
    }

    #[test]
    fn test_rebake_replaces_colours() {
        let mut geometry = create_cube();
        bake_vertex_colors(&mut geometry, Rgb::from_hex(0xff0000));
        bake_vertex_colors(&mut geometry, Rgb::from_hex(0x0000ff));
        assert_eq!(geometry.colors().unwrap()[0][2], 1.0);
    }
}
