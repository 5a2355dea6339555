//! Canvas-style drawing surface backed by GPU circle instances
//!
//! [`CanvasSurface`] accepts the path calls `Universe::render` issues and
//! turns every filled arc into a [`CircleInstance`] in canvas pixel space.
//! The renderer uploads those instances once per frame.

use universe::DrawSurface;

/// Instance data for GPU rendering
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CircleInstance {
    pub center: [f32; 2],
    pub radius: f32,
    pub color: [f32; 4],
}

impl CircleInstance {
    const ATTRIBS: [wgpu::VertexAttribute; 3] = wgpu::vertex_attr_array![
        1 => Float32x2,
        2 => Float32,
        3 => Float32x4,
    ];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<CircleInstance>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRIBS,
        }
    }
}

const DEFAULT_FILL: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

#[derive(Debug, Clone)]
pub struct CanvasSurface {
    height: f64,
    path: Vec<(f64, f64, f64)>,
    fill: [f32; 4],
    instances: Vec<CircleInstance>,
}

impl CanvasSurface {
    pub fn new(height: f64) -> Self {
        Self {
            height,
            path: Vec::new(),
            fill: DEFAULT_FILL,
            instances: Vec::new(),
        }
    }

    /// Drop last frame's circles and adopt the current canvas height
    pub fn begin_frame(&mut self, height: f64) {
        self.height = height;
        self.path.clear();
        self.instances.clear();
    }

    pub fn instances(&self) -> &[CircleInstance] {
        &self.instances
    }
}

impl DrawSurface for CanvasSurface {
    fn height(&self) -> f64 {
        self.height
    }

    fn begin_path(&mut self) {
        self.path.clear();
    }

    // Only full circles are drawn, the angles are ignored.
    fn arc(
        &mut self,
        cx: f64,
        cy: f64,
        radius: f64,
        _start_angle: f64,
        _end_angle: f64,
        _counterclockwise: bool,
    ) {
        self.path.push((cx, cy, radius));
    }

    fn set_fill_style(&mut self, color: &str) {
        // A canvas ignores fill styles it cannot parse
        match parse_color(color) {
            Some(rgba) => self.fill = rgba,
            None => log::warn!("ignoring unknown fill style {color:?}"),
        }
    }

    fn fill(&mut self) {
        let color = self.fill;
        self.instances
            .extend(self.path.iter().map(|&(cx, cy, radius)| CircleInstance {
                center: [cx as f32, cy as f32],
                radius: radius as f32,
                color,
            }));
    }
}

/// Parse a CSS color name or `#rgb` / `#rrggbb` hex string into linear RGBA
pub fn parse_color(color: &str) -> Option<[f32; 4]> {
    let color = color.trim();
    let rgb = match color.strip_prefix('#') {
        Some(hex) => parse_hex(hex)?,
        None => named_color(&color.to_ascii_lowercase())?,
    };

    Some([
        srgb_to_linear(rgb[0]),
        srgb_to_linear(rgb[1]),
        srgb_to_linear(rgb[2]),
        1.0,
    ])
}

fn parse_hex(hex: &str) -> Option<[u8; 3]> {
    let digit = |i: usize, len: usize| u8::from_str_radix(hex.get(i..i + len)?, 16).ok();

    match hex.len() {
        3 => Some([digit(0, 1)? * 17, digit(1, 1)? * 17, digit(2, 1)? * 17]),
        6 => Some([digit(0, 2)?, digit(2, 2)?, digit(4, 2)?]),
        _ => None,
    }
}

fn named_color(name: &str) -> Option<[u8; 3]> {
    let rgb = match name {
        "black" => [0, 0, 0],
        "white" => [255, 255, 255],
        "whitesmoke" => [245, 245, 245],
        "red" => [255, 0, 0],
        "green" => [0, 128, 0],
        "blue" => [0, 0, 255],
        "yellow" => [255, 255, 0],
        "orange" => [255, 165, 0],
        "purple" => [128, 0, 128],
        "cyan" => [0, 255, 255],
        "magenta" => [255, 0, 255],
        "gray" | "grey" => [128, 128, 128],
        _ => return None,
    };
    Some(rgb)
}

// The swapchain uses an sRGB format, so colors are written in linear space
fn srgb_to_linear(channel: u8) -> f32 {
    let c = channel as f32 / 255.0;
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}
