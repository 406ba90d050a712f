//! Contains the PlaneMapper struct, which describes a relationship
//! between a square grid of pixels on the integral plane with an
//! origin at 0,0, and a rectangle on the complex plane given by its
//! lowest and highest real and imaginary bounds.
use num::Complex;

use crate::error::RenderError;

/// Describes the x, y of a pixel on the integral plane.  The first
/// element is the column, the second the row.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pixel(pub usize, pub usize);

/// The rectangle of the complex plane being rendered, treating the
/// real part as the x-component and the imaginary part as the
/// y-component.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Viewport {
    /// Lowest real bound
    pub x_min: f64,
    /// Highest real bound
    pub x_max: f64,
    /// Lowest imaginary bound
    pub y_min: f64,
    /// Highest imaginary bound
    pub y_max: f64,
}

impl Viewport {
    /// Constructor.  The bounds must be finite and each maximum must
    /// lie strictly above its minimum.
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Result<Viewport, RenderError> {
        let finite = x_min.is_finite() && x_max.is_finite() && y_min.is_finite() && y_max.is_finite();
        if !finite || x_max <= x_min || y_max <= y_min {
            return Err(RenderError::InvalidViewport {
                x_min,
                x_max,
                y_min,
                y_max,
            });
        }
        Ok(Viewport {
            x_min,
            x_max,
            y_min,
            y_max,
        })
    }
}

/// Contains the definitions of two planes: an integral cartesian
/// plane `resolution` pixels on a side, and a rectangle of the complex
/// plane.  Maps pixels of the former to points of the latter.
#[derive(Clone, Debug)]
pub struct PlaneMapper {
    /// The region of the complex plane covered by the image.
    pub viewport: Viewport,
    /// The number of pixels along each side of the image.
    pub resolution: usize,
    // The width and height, in complex units, of a single pixel.
    pixel_size: (f64, f64),
}

impl PlaneMapper {
    /// Constructor.  Takes the viewport and the number of pixels on a
    /// side; the size of a single pixel is fixed from then on.
    pub fn new(viewport: Viewport, resolution: usize) -> Result<PlaneMapper, RenderError> {
        if resolution == 0 {
            return Err(RenderError::InvalidResolution(resolution));
        }

        let pixel_size = (
            (viewport.x_max - viewport.x_min) / (resolution as f64),
            (viewport.y_max - viewport.y_min) / (resolution as f64),
        );

        Ok(PlaneMapper {
            viewport,
            resolution,
            pixel_size,
        })
    }

    /// The total number of points in the integral grid.  Used to
    /// calculate memory needs.
    pub fn len(&self) -> usize {
        self.resolution * self.resolution
    }

    /// Describes that the integral plane is of a size.
    pub fn is_empty(&self) -> bool {
        self.resolution == 0
    }

    /// The width of one pixel on the complex plane.
    pub fn pixel_width(&self) -> f64 {
        self.pixel_size.0
    }

    /// The height of one pixel on the complex plane.
    pub fn pixel_height(&self) -> f64 {
        self.pixel_size.1
    }

    /// The real part of every point in column `ix`.
    #[inline]
    pub fn column_to_real(&self, ix: usize) -> f64 {
        self.viewport.x_min + (ix as f64) * self.pixel_size.0
    }

    /// The imaginary part of every point in row `iy`.  A row closer
    /// than half a pixel to the real axis is pinned to exactly zero.
    #[inline]
    pub fn row_to_imaginary(&self, iy: usize) -> f64 {
        let im = self.viewport.y_min + (iy as f64) * self.pixel_size.1;
        if im.abs() < self.pixel_size.1 / 2.0 {
            0.0
        } else {
            im
        }
    }

    /// Given a pixel on the integral cartesian plane, map it to the
    /// point on the complex plane at its lower-left corner.
    pub fn pixel_to_point(&self, pixel: &Pixel) -> Complex<f64> {
        Complex::new(self.column_to_real(pixel.0), self.row_to_imaginary(pixel.1))
    }

    /// The linear offset of a pixel from the root of a row-major
    /// image buffer.
    pub fn offset(&self, pixel: &Pixel) -> usize {
        pixel.1 * self.resolution + pixel.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapper(x_min: f64, x_max: f64, y_min: f64, y_max: f64, resolution: usize) -> PlaneMapper {
        PlaneMapper::new(Viewport::new(x_min, x_max, y_min, y_max).unwrap(), resolution).unwrap()
    }

    #[test]
    fn viewport_fails_on_bad_shape() {
        assert!(Viewport::new(1.0, -1.0, -1.0, 1.0).is_err());
        assert!(Viewport::new(-1.0, 1.0, 1.0, -1.0).is_err());
        assert!(Viewport::new(-1.0, -1.0, -1.0, 1.0).is_err());
        assert!(Viewport::new(-1.0, std::f64::NAN, -1.0, 1.0).is_err());
    }

    #[test]
    fn viewport_passes_on_good_shape() {
        assert!(Viewport::new(-2.5, 1.5, -2.0, 2.0).is_ok());
    }

    #[test]
    fn planemapper_rejects_empty_grid() {
        let vp = Viewport::new(-1.0, 1.0, -1.0, 1.0).unwrap();
        match PlaneMapper::new(vp, 0) {
            Err(RenderError::InvalidResolution(0)) => {}
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn pixel_sizes_are_derived_from_the_viewport() {
        let pm = mapper(-2.5, 1.5, -2.0, 2.0, 16);
        assert_eq!(pm.pixel_width(), 0.25);
        assert_eq!(pm.pixel_height(), 0.25);
        assert_eq!(pm.len(), 256);
        assert!(!pm.is_empty());
    }

    #[test]
    fn pixel_to_point_on_mixed_planes() {
        let pm = mapper(-2.0, 2.0, -2.0, 2.0, 4);
        assert_eq!(pm.pixel_to_point(&Pixel(0, 0)), Complex::new(-2.0, -2.0));
        assert_eq!(pm.pixel_to_point(&Pixel(2, 2)), Complex::new(0.0, 0.0));
        assert_eq!(pm.pixel_to_point(&Pixel(3, 1)), Complex::new(1.0, -1.0));
    }

    #[test]
    fn rows_near_the_axis_snap_to_zero() {
        // -0.3 + 3 * 0.1 leaves a rounding residue.
        let pm = mapper(-1.0, 1.0, -0.3, 0.7, 10);
        assert_eq!(pm.row_to_imaginary(3).to_bits(), 0.0f64.to_bits());

        // Row 10 lands about 0.02 below the axis, inside half a pixel.
        let pm = mapper(-1.0, 1.0, -1.02, 0.98, 20);
        assert_eq!(pm.row_to_imaginary(10).to_bits(), 0.0f64.to_bits());
        assert_eq!(pm.pixel_to_point(&Pixel(7, 10)).im.to_bits(), 0.0f64.to_bits());
    }

    #[test]
    fn rows_away_from_the_axis_are_untouched() {
        let pm = mapper(-1.0, 1.0, -1.02, 0.98, 20);
        assert_eq!(pm.row_to_imaginary(0), -1.02);
        assert!(pm.row_to_imaginary(11) > 0.05);
        assert!(pm.row_to_imaginary(9) < -0.05);
    }

    #[test]
    fn offsets_are_row_major() {
        let pm = mapper(-2.0, 2.0, -2.0, 2.0, 8);
        assert_eq!(pm.offset(&Pixel(0, 0)), 0);
        assert_eq!(pm.offset(&Pixel(7, 0)), 7);
        assert_eq!(pm.offset(&Pixel(0, 1)), 8);
        assert_eq!(pm.offset(&Pixel(3, 5)), 43);
    }
}
