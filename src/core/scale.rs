//! Affine Abbildung zwischen Rohkoordinaten und Render-Koordinaten.
//!
//! Das Roh-Rechteck wird von den beiden Kalibrierungs-Eckpunkten aufgespannt,
//! das Render-Rechteck vom Kartenbild (Größe plus optionaler Versatz).

use super::{GraphError, GraphResult};
use glam::DVec2;

/// Lineare Interpolation zwischen Roh- und Render-Rechteck je Achse
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateScale {
    /// Rohkoordinaten des oberen linken Eckpunkts
    raw_min: DVec2,
    /// Ausdehnung des Roh-Rechtecks (nie 0)
    raw_extent: DVec2,
    /// Render-Größe des Rechtecks (nie 0)
    size: DVec2,
    /// Render-Position des oberen linken Eckpunkts
    offset: DVec2,
}

impl CoordinateScale {
    /// Erstellt eine kalibrierte Skalierung
    pub fn new(raw_upper_left: DVec2, raw_lower_right: DVec2, size: DVec2) -> GraphResult<Self> {
        let mut scale = Self::default();
        scale.rescale(
            raw_upper_left.x,
            raw_upper_left.y,
            raw_lower_right.x,
            raw_lower_right.y,
        )?;
        scale.set_size(size.x, size.y)?;
        Ok(scale)
    }

    /// Setzt das Roh-Rechteck aus zwei Eckpunkten
    pub fn rescale(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) -> GraphResult<()> {
        let extent = DVec2::new(x2 - x1, y2 - y1);
        ensure_extent(extent)?;
        self.raw_min = DVec2::new(x1, y1);
        self.raw_extent = extent;
        Ok(())
    }

    /// Setzt die Render-Größe des Rechtecks
    pub fn set_size(&mut self, width: f64, height: f64) -> GraphResult<()> {
        let size = DVec2::new(width, height);
        ensure_extent(size)?;
        self.size = size;
        Ok(())
    }

    /// Setzt die Render-Position des oberen linken Eckpunkts
    pub fn set_offset(&mut self, x: f64, y: f64) {
        self.offset = DVec2::new(x, y);
    }

    /// Render-Größe
    pub fn size(&self) -> DVec2 {
        self.size
    }

    /// Roh-X → Render-X
    pub fn x(&self, raw: f64) -> f64 {
        self.offset.x + (raw - self.raw_min.x) / self.raw_extent.x * self.size.x
    }

    /// Roh-Y → Render-Y
    pub fn y(&self, raw: f64) -> f64 {
        self.offset.y + (raw - self.raw_min.y) / self.raw_extent.y * self.size.y
    }

    /// Render-X → Roh-X
    pub fn inverse_x(&self, rendered: f64) -> f64 {
        self.raw_min.x + (rendered - self.offset.x) / self.size.x * self.raw_extent.x
    }

    /// Render-Y → Roh-Y
    pub fn inverse_y(&self, rendered: f64) -> f64 {
        self.raw_min.y + (rendered - self.offset.y) / self.size.y * self.raw_extent.y
    }

    /// Rohposition → Render-Position
    pub fn to_render(&self, raw: DVec2) -> DVec2 {
        DVec2::new(self.x(raw.x), self.y(raw.y))
    }

    /// Render-Position → Rohposition
    pub fn to_raw(&self, rendered: DVec2) -> DVec2 {
        DVec2::new(self.inverse_x(rendered.x), self.inverse_y(rendered.y))
    }
}

impl Default for CoordinateScale {
    /// Identität: Einheitsrechteck auf beiden Seiten
    fn default() -> Self {
        Self {
            raw_min: DVec2::ZERO,
            raw_extent: DVec2::ONE,
            size: DVec2::ONE,
            offset: DVec2::ZERO,
        }
    }
}

fn ensure_extent(extent: DVec2) -> GraphResult<()> {
    if extent.x == 0.0 || extent.y == 0.0 || !extent.is_finite() {
        return Err(GraphError::DegenerateScale {
            width: extent.x,
            height: extent.y,
        });
    }
    Ok(())
}
