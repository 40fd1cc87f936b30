use tracing::warn;

use crate::error::Result;
use crate::math::Point3;

use super::Cable;

/// How much of the cable an editor preview draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PreviewDetail {
    /// Every sampled segment plus a marker on each interior sample.
    #[default]
    Full,
    /// A single straight line between the anchors. The curve is not generated.
    Simplified,
}

/// Editor preview configuration for a cable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewSettings {
    pub enabled: bool,
    pub detail: PreviewDetail,
}

impl Default for PreviewSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            detail: PreviewDetail::Full,
        }
    }
}

/// Semantic colors of preview primitives; hosts map them to real colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewColor {
    /// Start anchor of a cable with an end attached (green).
    Attached,
    /// Start anchor of a cable without an end (red).
    Detached,
    /// End anchor (blue).
    EndAnchor,
    /// Cable lines and sample markers (yellow).
    Cable,
}

/// A single preview primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    /// A straight line between two points.
    Line {
        from: Point3,
        to: Point3,
        color: PreviewColor,
    },
    /// A wire sphere marking a point.
    Marker {
        center: Point3,
        radius: f64,
        color: PreviewColor,
    },
}

/// Debug-draw surface that replays preview commands.
pub trait PreviewCanvas {
    /// Draws a line segment from `from` to `to`.
    fn draw_line(&mut self, from: &Point3, to: &Point3, color: PreviewColor);

    /// Draws a point marker of the given radius.
    fn draw_marker(&mut self, center: &Point3, radius: f64, color: PreviewColor);
}

impl Cable {
    /// Builds the preview primitives for this cable.
    ///
    /// Anchor markers come first, followed by the cable lines. In
    /// [`PreviewDetail::Full`] mode a marker is added on every interior sample.
    ///
    /// # Errors
    ///
    /// Returns the generator's configuration error in full-detail mode; no
    /// partial command list is produced.
    pub fn preview(&self) -> Result<Vec<DrawCommand>> {
        let settings = self.preview_settings();
        if !settings.enabled {
            return Ok(Vec::new());
        }

        let radius = self.style().marker_radius();
        let start = *self.start();
        let Some(&end) = self.end() else {
            return Ok(vec![DrawCommand::Marker {
                center: start,
                radius,
                color: PreviewColor::Detached,
            }]);
        };

        let mut commands = vec![
            DrawCommand::Marker {
                center: start,
                radius,
                color: PreviewColor::Attached,
            },
            DrawCommand::Marker {
                center: end,
                radius,
                color: PreviewColor::EndAnchor,
            },
        ];

        match settings.detail {
            PreviewDetail::Simplified => commands.push(DrawCommand::Line {
                from: start,
                to: end,
                color: PreviewColor::Cable,
            }),
            PreviewDetail::Full => {
                let sample = self.catenary()?;
                commands.reserve(sample.len() * 2);
                commands.extend(sample.segments().map(|(a, b)| DrawCommand::Line {
                    from: *a,
                    to: *b,
                    color: PreviewColor::Cable,
                }));
                commands.extend(sample.interior().iter().map(|p| DrawCommand::Marker {
                    center: *p,
                    radius,
                    color: PreviewColor::Cable,
                }));
            }
        }

        Ok(commands)
    }

    /// Draws the preview onto `canvas`.
    ///
    /// A configuration error is logged and nothing is drawn, so a broken
    /// cable never paints partial geometry.
    pub fn draw_preview(&self, canvas: &mut impl PreviewCanvas) {
        let commands = match self.preview() {
            Ok(commands) => commands,
            Err(err) => {
                warn!(error = %err, "skipping cable preview");
                return;
            }
        };
        for command in &commands {
            match command {
                DrawCommand::Line { from, to, color } => canvas.draw_line(from, to, *color),
                DrawCommand::Marker {
                    center,
                    radius,
                    color,
                } => canvas.draw_marker(center, *radius, *color),
            }
        }
    }
}
