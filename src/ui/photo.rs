// src/ui/photo.rs
//! Photo intake: one candidate file in, a wire-ready attachment plus a
//! preview image out. Anything that does not sniff as an `image/*` format
//! is silently ignored, whether it arrived by drag-drop or the picker.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use bevy::prelude::*;
use bevy_egui::egui;
use std::path::Path;

use crate::analysis::PhotoAttachment;

pub struct LoadedPhoto {
    pub attachment: PhotoAttachment,
    pub preview: egui::ColorImage,
}

/// Reads and converts a candidate file. Returns `None` for unreadable
/// files and for anything that is not an image.
pub fn load_photo(path: &Path) -> Option<LoadedPhoto> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!("Failed to read file '{}': {}", path.display(), e);
            return None;
        }
    };
    photo_from_bytes(&bytes)
}

/// Sniffs the format, gates on an `image/*` MIME type, and produces the
/// base64 payload (original bytes, no data-URL prefix) plus an RGBA
/// preview for the drop zone.
pub fn photo_from_bytes(bytes: &[u8]) -> Option<LoadedPhoto> {
    let format = image::guess_format(bytes).ok()?;
    let mime_type = format.to_mime_type();
    if !mime_type.starts_with("image/") {
        return None;
    }

    let decoded = match image::load_from_memory_with_format(bytes, format) {
        Ok(decoded) => decoded,
        Err(e) => {
            warn!("Failed to decode {} attachment: {}", mime_type, e);
            return None;
        }
    };

    let rgba = decoded.into_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    let preview = egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw());

    Some(LoadedPhoto {
        attachment: PhotoAttachment {
            mime_type: mime_type.to_string(),
            data: BASE64.encode(bytes),
        },
        preview,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png_bytes() -> Vec<u8> {
        let img = image::RgbaImage::from_pixel(2, 2, image::Rgba([10, 20, 30, 255]));
        let mut buf = Vec::new();
        image::DynamicImage::ImageRgba8(img)
            .write_to(&mut std::io::Cursor::new(&mut buf), image::ImageFormat::Png)
            .unwrap();
        buf
    }

    #[test]
    fn png_bytes_become_attachment_and_preview() {
        let bytes = png_bytes();
        let loaded = photo_from_bytes(&bytes).unwrap();
        assert_eq!(loaded.attachment.mime_type, "image/png");
        assert_eq!(loaded.preview.size, [2, 2]);
        // Raw base64 body, no data-URL prefix.
        assert!(!loaded.attachment.data.starts_with("data:"));
        assert_eq!(BASE64.decode(&loaded.attachment.data).unwrap(), bytes);
    }

    #[test]
    fn non_image_bytes_are_ignored() {
        assert!(photo_from_bytes(b"{\"not\": \"an image\"}").is_none());
        assert!(photo_from_bytes(b"").is_none());
    }
}
