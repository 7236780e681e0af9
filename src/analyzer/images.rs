use crate::error::FnolError;
use crate::models::ClaimImage;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

/// Upper bound on images forwarded to the model per claim.
pub const MAX_IMAGES: usize = 3;

/// An image that decoded cleanly, ready to be sent as an inline content part.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImagePart {
    pub name: String,
    pub mime_type: String,
    pub data: String,
}

/// Takes the first [`MAX_IMAGES`] uploads and keeps those that decode.
/// Undecodable images are dropped without affecting their neighbours.
pub fn prepare_images(images: &[ClaimImage]) -> Vec<ImagePart> {
    images
        .iter()
        .take(MAX_IMAGES)
        .filter_map(|image| match encode_image(image) {
            Ok(part) => Some(part),
            Err(e) => {
                tracing::debug!(image = %image.name, error = %e, "skipping image");
                None
            }
        })
        .collect()
}

pub fn encode_image(image: &ClaimImage) -> Result<ImagePart, FnolError> {
    let format = image::guess_format(&image.bytes)
        .map_err(|e| FnolError::ImageDecode(format!("{}: {}", image.name, e)))?;

    // Sniffing only reads the header; a full decode catches truncated files.
    image::load_from_memory_with_format(&image.bytes, format)
        .map_err(|e| FnolError::ImageDecode(format!("{}: {}", image.name, e)))?;

    Ok(ImagePart {
        name: image.name.clone(),
        mime_type: format.to_mime_type().to_string(),
        data: base64::engine::general_purpose::STANDARD.encode(&image.bytes),
    })
}
