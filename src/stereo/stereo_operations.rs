//! Image coordinate mapping - pure functions
//!
//! Offsets are measured from the image centre with +Y pointing down the rows,
//! matching the camera-relative axes.

use super::stereo_interfaces::StereoImage;
use crate::location::{Coordinates, Offset};
use image::{ImageBuffer, Pixel};
use std::ops::Deref;

/// Pixel treated as the optical centre
pub fn image_centre<I: StereoImage + ?Sized>(image: &I) -> Coordinates {
    let (width, height) = image.dimensions();
    Coordinates {
        x: width / 2,
        y: height / 2,
    }
}

/// Absolute coordinates of the pixel `offset` away from the centre, or None
/// when that pixel is outside the image
pub fn to_absolute_coordinates<I: StereoImage + ?Sized>(image: &I, offset: Offset) -> Option<Coordinates> {
    let (width, height) = image.dimensions();
    let centre = image_centre(image);

    let x = i64::from(centre.x).checked_add(offset.x)?;
    let y = i64::from(centre.y).checked_add(offset.y)?;

    if x < 0 || y < 0 || x >= i64::from(width) || y >= i64::from(height) {
        return None;
    }

    Some(Coordinates {
        x: x as u32,
        y: y as u32,
    })
}

/// Offset of `coordinates` from the image centre
pub fn centre_offset_of<I: StereoImage + ?Sized>(image: &I, coordinates: Coordinates) -> Offset {
    let centre = image_centre(image);
    Offset {
        x: i64::from(coordinates.x) - i64::from(centre.x),
        y: i64::from(coordinates.y) - i64::from(centre.y),
    }
}

impl<P, C> StereoImage for ImageBuffer<P, C>
where
    P: Pixel<Subpixel = u8>,
    C: Deref<Target = [u8]>,
{
    fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    fn intensity(&self, x: u32, y: u32) -> u8 {
        self.get_pixel(x, y).to_luma()[0]
    }
}
