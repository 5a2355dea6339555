//! The 2D drawing capability `render` draws into
//!
//! [`DrawSurface`] mirrors the handful of canvas-style path calls the core
//! issues. Any host that can provide them, directly or through a shim, is a
//! valid render target. [`RecordingSurface`] is a headless implementation
//! that keeps every call for later inspection.

/// Canvas-style path API used by [`Universe::render`](crate::Universe::render)
pub trait DrawSurface {
    /// Surface height in pixels, used to flip the y axis
    fn height(&self) -> f64;

    fn begin_path(&mut self);

    fn arc(
        &mut self,
        cx: f64,
        cy: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        counterclockwise: bool,
    );

    /// Set the color used by the next `fill`; the string is opaque to the core
    fn set_fill_style(&mut self, color: &str);

    fn fill(&mut self);
}

/// One recorded surface call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    BeginPath,
    Arc {
        cx: f64,
        cy: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        counterclockwise: bool,
    },
    FillStyle(String),
    Fill,
}

/// A filled circle reconstructed from a recorded command stream
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCircle {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub color: String,
}

/// Headless surface that records every call it receives
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    height: f64,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(height: f64) -> Self {
        Self {
            height,
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of `arc` calls seen so far
    pub fn arc_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Arc { .. }))
            .count()
    }

    /// Replay the command stream like a canvas would and return every
    /// filled arc with the fill style active at the time of `fill`.
    pub fn circles(&self) -> Vec<RecordedCircle> {
        let mut circles = Vec::new();
        let mut path: Vec<(f64, f64, f64)> = Vec::new();
        let mut fill_style = String::new();

        for command in &self.commands {
            match command {
                DrawCommand::BeginPath => path.clear(),
                DrawCommand::Arc { cx, cy, radius, .. } => path.push((*cx, *cy, *radius)),
                DrawCommand::FillStyle(color) => fill_style = color.clone(),
                DrawCommand::Fill => {
                    circles.extend(path.iter().map(|&(cx, cy, radius)| RecordedCircle {
                        cx,
                        cy,
                        radius,
                        color: fill_style.clone(),
                    }));
                }
            }
        }

        circles
    }

    /// Forget recorded calls, keeping the height
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl DrawSurface for RecordingSurface {
    fn height(&self) -> f64 {
        self.height
    }

    fn begin_path(&mut self) {
        self.commands.push(DrawCommand::BeginPath);
    }

    fn arc(
        &mut self,
        cx: f64,
        cy: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        counterclockwise: bool,
    ) {
        self.commands.push(DrawCommand::Arc {
            cx,
            cy,
            radius,
            start_angle,
            end_angle,
            counterclockwise,
        });
    }

    fn set_fill_style(&mut self, color: &str) {
        self.commands.push(DrawCommand::FillStyle(color.to_string()));
    }

    fn fill(&mut self) {
        self.commands.push(DrawCommand::Fill);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circles_use_fill_style_active_at_fill_time() {
        let mut surface = RecordingSurface::new(100.0);
        surface.begin_path();
        surface.arc(1.0, 2.0, 3.0, 0.0, 6.0, false);
        surface.set_fill_style("red");
        surface.fill();
        surface.begin_path();
        surface.arc(4.0, 5.0, 6.0, 0.0, 6.0, false);
        surface.set_fill_style("green");
        surface.fill();

        let circles = surface.circles();
        assert_eq!(circles.len(), 2);
        assert_eq!(circles[0].color, "red");
        assert_eq!(circles[1].cx, 4.0);
        assert_eq!(circles[1].color, "green");
        assert_eq!(surface.arc_count(), 2);
    }

    #[test]
    fn unfilled_paths_are_not_circles() {
        let mut surface = RecordingSurface::new(10.0);
        surface.begin_path();
        surface.arc(1.0, 1.0, 1.0, 0.0, 1.0, false);
        assert!(surface.circles().is_empty());

        surface.clear();
        assert!(surface.commands().is_empty());
        assert_eq!(surface.height(), 10.0);
    }
}
