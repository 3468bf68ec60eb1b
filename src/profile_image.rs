//! The user's profile photo and its byte encoding.

use image::imageops::{self, FilterType};
use image::{DynamicImage, ImageFormat, RgbaImage};
use parking_lot::Mutex;
use std::fmt;
use std::io::Cursor;
use std::path::Path;

/// Longest side of a picked photo. Larger picks are scaled down.
pub const MAX_PHOTO_SIDE: u32 = 512;

/// Decoded profile photo held in memory as RGBA pixels.
pub struct ProfileImage {
    pixels: RgbaImage,
    /// Last thumbnail handed out, reused while the requested size holds.
    thumbnail: Mutex<Option<RgbaImage>>,
}

impl ProfileImage {
    pub fn from_rgba(pixels: RgbaImage) -> Self {
        Self {
            pixels,
            thumbnail: Mutex::new(None),
        }
    }

    /// Build from raw RGBA bytes, `None` if the buffer does not match the size.
    pub fn from_raw(width: u32, height: u32, bytes: Vec<u8>) -> Option<Self> {
        RgbaImage::from_raw(width, height, bytes).map(Self::from_rgba)
    }

    /// Read an image file, format detected from its contents.
    pub fn open(path: &Path) -> Result<Self, image::ImageError> {
        let image = image::ImageReader::open(path)?
            .with_guessed_format()?
            .decode()?;
        Ok(Self::from_dynamic(image))
    }

    /// Decode stored bytes. Format is sniffed, so PNG and JPEG both load.
    pub fn decode(bytes: &[u8]) -> Result<Self, image::ImageError> {
        image::load_from_memory(bytes).map(Self::from_dynamic)
    }

    /// Lossless PNG encoding used for storage.
    pub fn encode_png(&self) -> Result<Vec<u8>, image::ImageError> {
        let mut out = Cursor::new(Vec::new());
        self.pixels.write_to(&mut out, ImageFormat::Png)?;
        Ok(out.into_inner())
    }

    /// Largest centred square, the shape the round avatar shows.
    pub fn square_cropped(self) -> Self {
        let (width, height) = self.pixels.dimensions();
        if width == height {
            return self;
        }
        let side = width.min(height);
        let x = (width - side) / 2;
        let y = (height - side) / 2;
        let cropped = imageops::crop_imm(&self.pixels, x, y, side, side).to_image();
        Self::from_rgba(cropped)
    }

    /// Scale down so neither side exceeds `max_side`, keeping the aspect ratio.
    pub fn bounded(self, max_side: u32) -> Self {
        let (width, height) = self.pixels.dimensions();
        let longest = width.max(height);
        let max_side = max_side.max(1);
        if longest <= max_side {
            return self;
        }
        let scale = |side: u32| ((side as u64 * max_side as u64 / longest as u64) as u32).max(1);
        let resized = imageops::resize(
            &self.pixels,
            scale(width),
            scale(height),
            FilterType::Triangle,
        );
        Self::from_rgba(resized)
    }

    /// Resample to exactly `width` x `height` pixels for display.
    ///
    /// The result is cached, so redrawing at the same size is a copy.
    pub fn thumbnail(&self, width: u32, height: u32) -> RgbaImage {
        let (width, height) = (width.max(1), height.max(1));
        let mut cached = self.thumbnail.lock();
        if let Some(thumbnail) = cached.as_ref().filter(|t| t.dimensions() == (width, height)) {
            return thumbnail.clone();
        }
        let thumbnail = imageops::resize(&self.pixels, width, height, FilterType::Triangle);
        *cached = Some(thumbnail.clone());
        thumbnail
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    fn from_dynamic(image: DynamicImage) -> Self {
        Self::from_rgba(image.to_rgba8())
    }
}

impl Clone for ProfileImage {
    fn clone(&self) -> Self {
        Self::from_rgba(self.pixels.clone())
    }
}

impl PartialEq for ProfileImage {
    fn eq(&self, other: &Self) -> bool {
        self.pixels == other.pixels
    }
}

impl fmt::Debug for ProfileImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ProfileImage({}x{})", self.width(), self.height())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn gradient(width: u32, height: u32) -> ProfileImage {
        ProfileImage::from_rgba(RgbaImage::from_fn(width, height, |x, y| {
            Rgba([(x * 10) as u8, (y * 10) as u8, 128, 255])
        }))
    }

    #[test]
    fn png_encoding_is_lossless() {
        let original = gradient(7, 5);
        let bytes = original.encode_png().unwrap();
        assert_eq!(&bytes[1..4], b"PNG");
        assert_eq!(ProfileImage::decode(&bytes).unwrap(), original);
    }

    #[test]
    fn decode_rejects_garbage() {
        assert!(ProfileImage::decode(b"definitely not an image").is_err());
    }

    #[test]
    fn square_crop_keeps_centre() {
        let cropped = gradient(10, 4).square_cropped();
        assert_eq!((cropped.width(), cropped.height()), (4, 4));
        // Column 3 of the source is column 0 of the crop.
        assert_eq!(cropped.pixels().get_pixel(0, 0), &Rgba([30, 0, 128, 255]));
    }

    #[test]
    fn debug_shows_dimensions_only() {
        assert_eq!(format!("{:?}", gradient(3, 2)), "ProfileImage(3x2)");
    }

    #[test]
    fn bounded_shrinks_long_side_only() {
        let small = gradient(40, 20).bounded(64);
        assert_eq!((small.width(), small.height()), (40, 20));

        let large = gradient(1200, 600).bounded(MAX_PHOTO_SIDE);
        assert_eq!((large.width(), large.height()), (512, 256));
    }

    #[test]
    fn thumbnail_is_reused_at_same_size() {
        let image = gradient(20, 20);
        let first = image.thumbnail(10, 10);
        assert_eq!(image.thumbnail(10, 10), first);
        assert_eq!(image.thumbnail(4, 6).dimensions(), (4, 6));
    }

    #[test]
    fn clones_compare_by_pixels() {
        let image = gradient(6, 6);
        image.thumbnail(3, 3);
        assert_eq!(image.clone(), image);
    }
}
