//! Where a picked profile photo comes from.

use std::path::PathBuf;
use thiserror::Error;

use crate::clipboard::ClipboardHandler;
use crate::profile_image::{ProfileImage, MAX_PHOTO_SIDE};

#[derive(Debug, Error)]
pub enum PickError {
    #[error("No file path entered")]
    EmptyPath,

    #[error("Cannot open '{path}': {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Clipboard has no image: {0}")]
    Clipboard(#[from] arboard::Error),
}

/// Trim the typed path and expand a leading `~`.
pub fn expand_path(input: &str) -> Option<PathBuf> {
    let trimmed = input.trim().trim_matches(|c| c == '"' || c == '\'');
    if trimmed.is_empty() {
        return None;
    }
    if trimmed == "~" {
        return dirs::home_dir();
    }
    if let Some(rest) = trimmed.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return Some(home.join(rest));
        }
    }
    Some(PathBuf::from(trimmed))
}

/// Load the image at a typed path, cropped square like an edited photo.
pub fn pick_from_path(input: &str) -> Result<ProfileImage, PickError> {
    let path = expand_path(input).ok_or(PickError::EmptyPath)?;
    let image = ProfileImage::open(&path).map_err(|source| PickError::Open { path, source })?;
    Ok(edit(image))
}

/// Take the clipboard image, cropped square.
pub fn pick_from_clipboard() -> Result<ProfileImage, PickError> {
    let mut clipboard = ClipboardHandler::new()?;
    Ok(edit(clipboard.image()?))
}

/// Square crop at avatar scale.
fn edit(image: ProfileImage) -> ProfileImage {
    image.square_cropped().bounded(MAX_PHOTO_SIDE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_input_has_no_path() {
        assert_eq!(expand_path("   "), None);
        assert!(matches!(pick_from_path(""), Err(PickError::EmptyPath)));
    }

    #[test]
    fn quotes_and_whitespace_are_stripped() {
        assert_eq!(
            expand_path("  '/tmp/me.png' "),
            Some(PathBuf::from("/tmp/me.png"))
        );
    }

    #[test]
    fn tilde_expands_to_home() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_path("~/me.png"), Some(home.join("me.png")));
        }
    }

    #[test]
    fn missing_file_reports_path() {
        let err = pick_from_path("/definitely/not/here.png").unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.png"));
    }

    #[test]
    fn large_pick_is_cropped_and_scaled_down() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("large.png");
        image::RgbaImage::from_pixel(1600, 1000, image::Rgba([20, 40, 60, 255]))
            .save(&path)
            .unwrap();

        let picked = pick_from_path(path.to_str().unwrap()).unwrap();
        assert_eq!((picked.width(), picked.height()), (MAX_PHOTO_SIDE, MAX_PHOTO_SIDE));
    }
}
