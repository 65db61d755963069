//! Host-controlled viewer toggles.
//!
//! The host exposes four switches (optimize, wireframe, demo embedding and
//! animate). They are read once into a [`ViewerConfig`] and passed to the
//! build and frame operations as a plain value.

use serde::{Deserialize, Serialize};

/// Snapshot of the host's viewer toggles.
///
/// # Examples
/// ```
/// use config::ViewerConfig;
/// let cfg = ViewerConfig::default();
/// assert!(cfg.optimize);
/// assert!(!cfg.wireframe);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Allow merging fully opaque scenes into a single draw call.
    pub optimize: bool,
    /// Force wireframe rendering.
    pub wireframe: bool,
    /// Embedded demo mode: render only while the pointer is over the surface.
    pub demo_embedding: bool,
    /// Rotate the scene group on every frame.
    pub animate: bool,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            optimize: true,
            wireframe: false,
            demo_embedding: false,
            animate: false,
        }
    }
}

impl ViewerConfig {
    /// Host attribute name of the optimize toggle.
    pub const OPTIMIZE_FLAG: &'static str = "doOptimize";
    /// Host attribute name of the wireframe toggle.
    pub const WIREFRAME_FLAG: &'static str = "wireframe";
    /// Host attribute name of the demo-embedding toggle.
    pub const DEMO_EMBEDDING_FLAG: &'static str = "docsite";
    /// Host attribute name of the animate toggle.
    pub const ANIMATE_FLAG: &'static str = "animate";

    /// Reads every toggle through `lookup`, which returns the raw attribute
    /// text the host stores for a flag name.
    ///
    /// Values are numeric strings: any finite non-zero number enables the
    /// toggle, `"0"` and unparsable text disable it. A flag the host does not
    /// provide keeps its default.
    ///
    /// # Examples
    /// ```
    /// use config::ViewerConfig;
    /// let cfg = ViewerConfig::from_host_flags(|name| match name {
    ///     "doOptimize" => Some("0"),
    ///     "animate" => Some("1"),
    ///     _ => None,
    /// });
    /// assert!(!cfg.optimize);
    /// assert!(cfg.animate);
    /// ```
    pub fn from_host_flags<'a, F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<&'a str>,
    {
        let defaults = Self::default();
        let read = |name: &str, fallback: bool| lookup(name).map_or(fallback, parse_flag);

        Self {
            optimize: read(Self::OPTIMIZE_FLAG, defaults.optimize),
            wireframe: read(Self::WIREFRAME_FLAG, defaults.wireframe),
            demo_embedding: read(Self::DEMO_EMBEDDING_FLAG, defaults.demo_embedding),
            animate: read(Self::ANIMATE_FLAG, defaults.animate),
        }
    }
}

fn parse_flag(raw: &str) -> bool {
    raw.trim()
        .parse::<f64>()
        .map(|value| value.is_finite() && value != 0.0)
        .unwrap_or(false)
}
