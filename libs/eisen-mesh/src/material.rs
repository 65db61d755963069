//! # Materials
//!
//! Phong-style surface descriptions attached to renderable nodes.
//!
//! ## Variants
//!
//! - **Per-object**: one per primitive, carrying its colour and opacity
//! - **Shared**: one for the merged batch, coloured by vertex colours

use config::constants::{
    MERGED_BASE_COLOR, MERGED_EMISSIVE, MERGED_SHININESS, MERGED_SPECULAR, PHONG_SHININESS,
    PHONG_SPECULAR,
};
use eisen_ir::{IrError, PrimitiveCommand, PrimitiveKind, Rgb};

/// Which faces of a triangle are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Counter-clockwise faces only.
    Front,
    /// Both faces.
    Double,
}

/// A flat-shaded Phong material.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    /// Base colour (multiplied by vertex colours when enabled).
    pub color: Rgb,
    /// Specular highlight colour.
    pub specular: Rgb,
    /// Specular exponent; zero disables the highlight.
    pub shininess: f64,
    /// Colour added regardless of lighting.
    pub emissive: Rgb,
    /// One normal per face instead of interpolated normals.
    pub flat_shading: bool,
    /// Read the geometry's colour attribute.
    pub vertex_colors: bool,
    /// Alpha in `[0, 1]`.
    pub opacity: f64,
    /// Alpha blending enabled.
    pub transparent: bool,
    /// Draw triangle edges only.
    pub wireframe: bool,
    /// Face culling.
    pub side: Side,
}

impl Material {
    /// Per-object base material for a colour and opacity.
    pub fn phong(color: Rgb, opacity: f64) -> Self {
        Self {
            color,
            specular: Rgb::from_hex(PHONG_SPECULAR),
            shininess: PHONG_SHININESS,
            emissive: Rgb::from_hex(0x000000),
            flat_shading: true,
            vertex_colors: false,
            opacity,
            transparent: true,
            wireframe: false,
            side: Side::Front,
        }
    }

    /// Shared material for a merged batch.
    ///
    /// # Example
    ///
    /// ```rust
    /// use eisen_mesh::{Material, Side};
    ///
    /// let shared = Material::shared_vertex_colored(false);
    /// assert!(shared.vertex_colors);
    /// assert_eq!(shared.side, Side::Double);
    /// ```
    pub fn shared_vertex_colored(wireframe: bool) -> Self {
        Self {
            color: Rgb::from_hex(MERGED_BASE_COLOR),
            specular: Rgb::from_hex(MERGED_SPECULAR),
            shininess: MERGED_SHININESS,
            emissive: Rgb::from_hex(MERGED_EMISSIVE),
            flat_shading: true,
            vertex_colors: true,
            opacity: 1.0,
            transparent: true,
            wireframe,
            side: Side::Double,
        }
    }

    /// True when the material needs blending with what is behind it.
    #[inline]
    pub fn blends(&self) -> bool {
        self.transparent && self.opacity < 1.0
    }
}

/// Builds the per-object material for a primitive.
///
/// `grid` is always wireframe and `triangle` always double-sided. A forced
/// wireframe from the viewer applies to every kind.
///
/// # Errors
///
/// [`IrError::InvalidColor`] if the command's colour does not parse.
///
/// # Example
///
/// ```rust
/// use eisen_ir::{PrimitiveCommand, PrimitiveKind};
/// use eisen_mesh::build_material;
///
/// let grid = PrimitiveCommand::new(PrimitiveKind::Grid, "#00ff00").with_opacity(0.5);
/// let material = build_material(&grid, false).unwrap();
/// assert!(material.wireframe);
/// assert_eq!(material.opacity, 0.5);
/// ```
pub fn build_material(primitive: &PrimitiveCommand, wireframe: bool) -> Result<Material, IrError> {
    let mut material = Material::phong(primitive.color()?, primitive.opacity);

    match primitive.kind {
        PrimitiveKind::Grid => material.wireframe = true,
        PrimitiveKind::Triangle => material.side = Side::Double,
        _ => {}
    }
    material.wireframe |= wireframe;

    Ok(material)
}
