use geo::{Coord, LineString, Polygon};
use image::GenericImageView;

pub(crate) fn to_geo_poly(points: &[Coord<f32>]) -> Polygon<f32> {
    Polygon::new(LineString::new(points.to_vec()), vec![])
}

/// Maps taps from the on-screen image layout into captured-image pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    pub factor_x: f32,
    pub factor_y: f32,
}

impl Scale {
    /// Ratio between a captured image and the layout it is displayed in.
    ///
    /// Returns `None` when either size is empty or not finite.
    pub fn between(layout: (f32, f32), image: (f32, f32)) -> Option<Self> {
        let (layout_width, layout_height) = layout;
        let (image_width, image_height) = image;
        let valid = |side: f32| side.is_finite() && side > 0.0;
        if ![layout_width, layout_height, image_width, image_height]
            .into_iter()
            .all(valid)
        {
            log::debug!("Can't scale between layout {layout:?} and image {image:?}");
            return None;
        }
        let factor_x = image_width / layout_width;
        let factor_y = image_height / layout_height;
        log::debug!("Layout (w: {layout_width}, h: {layout_height}) maps to image (w: {image_width}, h: {image_height}) with scaling factor ({factor_x}, {factor_y}).");
        Some(Self { factor_x, factor_y })
    }

    pub fn for_image<I: GenericImageView>(layout: (f32, f32), image: &I) -> Option<Self> {
        let (width, height) = image.dimensions();
        Self::between(layout, (width as f32, height as f32))
    }

    pub fn to_image_space(&self, point: Coord<f32>) -> Coord<f32> {
        Coord {
            x: point.x * self.factor_x,
            y: point.y * self.factor_y,
        }
    }
}

impl Default for Scale {
    fn default() -> Self {
        Self {
            factor_x: 1.0,
            factor_y: 1.0,
        }
    }
}
