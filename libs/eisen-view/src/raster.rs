//! # Software Rasterizer
//!
//! CPU rendering of a [`Scene`] into a [`FrameBuffer`].
//!
//! ## Pipeline
//!
//! ```text
//! node → group matrix → view-projection → screen
//!      → cull → flat shade → (edge-function fill | wireframe edges)
//! ```
//!
//! Two passes share one depth buffer: opaque nodes first, then blending
//! nodes, each pass in group order. Blending fragments are depth-tested but
//! never write depth, so opaque geometry behind them stays visible. Between
//! blending nodes the look still depends on draw order. Triangles with a
//! vertex outside the clip volume are dropped whole; there is no clipping.

use crate::camera::Camera;
use crate::framebuffer::FrameBuffer;
use eisen_ir::Rgb;
use eisen_mesh::{Material, NodeKind, PointLight, RenderNode, Scene, Side};
use glam::{DMat4, DVec3};

/// Upper bound on steps per drawn segment.
const MAX_SEGMENT_STEPS: usize = 1 << 14;

/// Something that can draw a scene into a frame.
pub trait Rasterizer {
    /// Clears `target` to the scene background and draws every node.
    fn render(&mut self, scene: &Scene, camera: &Camera, target: &mut FrameBuffer);
}

/// Z-buffered flat-shading rasterizer.
#[derive(Debug, Default)]
pub struct SoftwareRasterizer {
    depth: Vec<f64>,
    width: u32,
    height: u32,
}

/// A projected vertex: pixel coordinates plus NDC depth.
#[derive(Debug, Clone, Copy)]
struct ScreenVertex {
    x: f64,
    y: f64,
    z: f64,
}

/// How a node's fragments reach the frame.
#[derive(Debug, Clone, Copy)]
struct Paint {
    color: [f64; 3],
    alpha: f64,
    write_depth: bool,
}

/// Per-frame transforms and lighting.
struct Pass<'a> {
    model: DMat4,
    view_projection: DMat4,
    eye: DVec3,
    lights: &'a [PointLight],
    width: f64,
    height: f64,
}

impl Pass<'_> {
    fn project(&self, world: DVec3) -> Option<ScreenVertex> {
        let clip = self.view_projection * world.extend(1.0);
        if clip.w <= 0.0 || clip.z < -clip.w || clip.z > clip.w {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        Some(ScreenVertex {
            x: (ndc.x + 1.0) * 0.5 * self.width,
            y: (1.0 - ndc.y) * 0.5 * self.height,
            z: ndc.z,
        })
    }
}

impl Rasterizer for SoftwareRasterizer {
    fn render(&mut self, scene: &Scene, camera: &Camera, target: &mut FrameBuffer) {
        target.clear(scene.background);
        self.reset_depth(target.width(), target.height());

        let pass = Pass {
            model: scene.group.matrix(),
            view_projection: camera.view_projection(),
            eye: camera.position,
            lights: &scene.lights,
            width: f64::from(target.width()),
            height: f64::from(target.height()),
        };

        let nodes = scene.group.nodes();
        let opaque = nodes.iter().filter(|node| !node.material.blends());
        let blending = nodes.iter().filter(|node| node.material.blends());
        for node in opaque.chain(blending) {
            match node.kind {
                NodeKind::Mesh => self.draw_mesh(&pass, node, target),
                NodeKind::Line => self.draw_lines(&pass, node, target),
            }
        }
    }
}

impl SoftwareRasterizer {
    /// Creates a rasterizer; buffers are sized on first render.
    pub fn new() -> Self {
        Self::default()
    }

    fn reset_depth(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.depth.clear();
        self.depth
            .resize(width as usize * height as usize, f64::INFINITY);
    }

    fn draw_mesh(&mut self, pass: &Pass<'_>, node: &RenderNode, target: &mut FrameBuffer) {
        let material = &node.material;
        let positions = node.geometry.positions();
        let colors = node.geometry.colors().filter(|_| material.vertex_colors);

        for (face, corners) in positions.chunks_exact(3).enumerate() {
            let world = [
                pass.model.transform_point3(corners[0]),
                pass.model.transform_point3(corners[1]),
                pass.model.transform_point3(corners[2]),
            ];
            let (Some(a), Some(b), Some(c)) = (
                pass.project(world[0]),
                pass.project(world[1]),
                pass.project(world[2]),
            ) else {
                continue;
            };

            // Screen y points down, so front faces have negative area.
            let area = edge(a, b, c.x, c.y);
            if area == 0.0 {
                continue;
            }
            let front = area < 0.0;
            if !front && material.side == Side::Front {
                continue;
            }

            let mut normal = (world[1] - world[0])
                .cross(world[2] - world[0])
                .normalize_or_zero();
            if !front {
                normal = -normal;
            }

            let base = face_color(material, colors, face * 3, 3);
            let centroid = (world[0] + world[1] + world[2]) / 3.0;
            let lit = paint(material, shade(material, base, normal, centroid, pass));

            if material.wireframe {
                self.draw_segment(a, b, lit, target);
                self.draw_segment(b, c, lit, target);
                self.draw_segment(c, a, lit, target);
            } else {
                self.fill_triangle([a, b, c], area, lit, target);
            }
        }
    }

    fn draw_lines(&mut self, pass: &Pass<'_>, node: &RenderNode, target: &mut FrameBuffer) {
        let material = &node.material;
        let colors = node.geometry.colors().filter(|_| material.vertex_colors);
        let emissive = channels(material.emissive);

        for (segment, ends) in node.geometry.positions().chunks_exact(2).enumerate() {
            let (Some(a), Some(b)) = (
                pass.project(pass.model.transform_point3(ends[0])),
                pass.project(pass.model.transform_point3(ends[1])),
            ) else {
                continue;
            };
            let base = face_color(material, colors, segment * 2, 2);
            let color = [0, 1, 2].map(|i| (base[i] + emissive[i]).min(1.0));
            self.draw_segment(a, b, paint(material, color), target);
        }
    }

    /// Edge-function fill over the triangle's clamped bounding box.
    fn fill_triangle(
        &mut self,
        [a, b, c]: [ScreenVertex; 3],
        area: f64,
        paint: Paint,
        target: &mut FrameBuffer,
    ) {
        let max_x = f64::from(self.width) - 1.0;
        let max_y = f64::from(self.height) - 1.0;
        let min_px = a.x.min(b.x).min(c.x).floor().clamp(0.0, max_x) as u32;
        let max_px = a.x.max(b.x).max(c.x).ceil().clamp(0.0, max_x) as u32;
        let min_py = a.y.min(b.y).min(c.y).floor().clamp(0.0, max_y) as u32;
        let max_py = a.y.max(b.y).max(c.y).ceil().clamp(0.0, max_y) as u32;

        for py in min_py..=max_py {
            for px in min_px..=max_px {
                let (x, y) = (f64::from(px) + 0.5, f64::from(py) + 0.5);
                let w0 = edge(b, c, x, y) / area;
                let w1 = edge(c, a, x, y) / area;
                let w2 = edge(a, b, x, y) / area;
                if w0 < 0.0 || w1 < 0.0 || w2 < 0.0 {
                    continue;
                }
                let z = w0 * a.z + w1 * b.z + w2 * c.z;
                self.plot(px, py, z, paint, target);
            }
        }
    }

    fn draw_segment(
        &mut self,
        a: ScreenVertex,
        b: ScreenVertex,
        paint: Paint,
        target: &mut FrameBuffer,
    ) {
        let (dx, dy, dz) = (b.x - a.x, b.y - a.y, b.z - a.z);
        let steps = (dx.abs().max(dy.abs()).ceil() as usize).clamp(1, MAX_SEGMENT_STEPS);

        for step in 0..=steps {
            let t = step as f64 / steps as f64;
            let (x, y) = (a.x + dx * t, a.y + dy * t);
            if x < 0.0 || y < 0.0 {
                continue;
            }
            self.plot(x as u32, y as u32, a.z + dz * t, paint, target);
        }
    }

    fn plot(&mut self, x: u32, y: u32, z: f64, paint: Paint, target: &mut FrameBuffer) {
        if x >= self.width || y >= self.height {
            return;
        }
        let index = y as usize * self.width as usize + x as usize;
        if z > self.depth[index] {
            return;
        }
        if paint.write_depth {
            self.depth[index] = z;
        }
        target.blend(x, y, paint.color, paint.alpha);
    }
}

/// Signed doubled area of (a, b, p).
#[inline]
fn edge(a: ScreenVertex, b: ScreenVertex, px: f64, py: f64) -> f64 {
    (b.x - a.x) * (py - a.y) - (b.y - a.y) * (px - a.x)
}

#[inline]
fn channels(color: Rgb) -> [f64; 3] {
    color.to_array().map(f64::from)
}

fn paint(material: &Material, color: [f64; 3]) -> Paint {
    let blends = material.blends();
    Paint {
        color,
        alpha: if blends { material.opacity } else { 1.0 },
        write_depth: !blends,
    }
}

/// Material colour, tinted by the mean colour of the `count` vertices
/// starting at `first` when vertex colours are in use.
fn face_color(
    material: &Material,
    colors: Option<&[[f32; 4]]>,
    first: usize,
    count: usize,
) -> [f64; 3] {
    let base = channels(material.color);
    let Some(colors) = colors else {
        return base;
    };
    let Some(corners) = colors.get(first..first + count) else {
        return base;
    };

    let mut mean = [0.0; 3];
    for corner in corners {
        for (sum, channel) in mean.iter_mut().zip(corner) {
            *sum += f64::from(*channel) / count as f64;
        }
    }
    [0, 1, 2].map(|i| base[i] * mean[i])
}

/// Flat Phong shading from the pass's point lights.
fn shade(material: &Material, base: [f64; 3], normal: DVec3, point: DVec3, pass: &Pass<'_>) -> [f64; 3] {
    let mut out = channels(material.emissive);
    let specular = channels(material.specular);
    let to_eye = (pass.eye - point).normalize_or_zero();

    for light in pass.lights {
        let to_light = (light.position - point).normalize_or_zero();
        let diffuse = normal.dot(to_light);
        if diffuse <= 0.0 {
            continue;
        }
        let light_color = channels(light.color).map(|c| c * light.intensity);
        let highlight = if material.shininess > 0.0 {
            let half = (to_light + to_eye).normalize_or_zero();
            normal.dot(half).max(0.0).powf(material.shininess)
        } else {
            0.0
        };
        for i in 0..3 {
            out[i] += light_color[i] * (base[i] * diffuse + specular[i] * highlight);
        }
    }

    out.map(|c| c.clamp(0.0, 1.0))
}
