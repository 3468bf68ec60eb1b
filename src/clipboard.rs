//! Clipboard access for picking a profile photo.

use arboard::Clipboard;

use crate::profile_image::ProfileImage;

/// Handler for clipboard operations.
pub struct ClipboardHandler {
    clipboard: Clipboard,
}

impl ClipboardHandler {
    /// Create a new clipboard handler.
    pub fn new() -> Result<Self, arboard::Error> {
        let clipboard = Clipboard::new()?;
        Ok(Self { clipboard })
    }

    /// Read the image currently on the system clipboard.
    pub fn image(&mut self) -> Result<ProfileImage, arboard::Error> {
        let data = self.clipboard.get_image()?;
        let (width, height) = (data.width as u32, data.height as u32);
        ProfileImage::from_raw(width, height, data.bytes.into_owned())
            .ok_or(arboard::Error::ConversionFailure)
    }
}
