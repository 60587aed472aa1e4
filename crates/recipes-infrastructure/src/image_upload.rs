//! Local image files turned into embeddable data URLs.

use std::fs;
use std::path::Path;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;

use recipes_core::error::{RecipeError, Result};

/// Largest accepted image, in bytes.
pub const MAX_IMAGE_BYTES: u64 = 5 * 1024 * 1024;

/// A validated image ready to be stored as a recipe's `imageUrl`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub file_name: String,
    pub mime_type: String,
    pub size: u64,
    data_url: String,
}

impl ImageUpload {
    /// Reads and validates the image at `path`.
    ///
    /// # Errors
    ///
    /// - [`RecipeError::Validation`] on field `image` if the file is larger
    ///   than [`MAX_IMAGE_BYTES`] or its guessed MIME type is not `image/*`.
    /// - [`RecipeError::Io`] if the file cannot be read.
    pub fn from_path(path: &Path) -> Result<Self> {
        let mime_type = infer_mime_type(path);
        if !mime_type.starts_with("image/") {
            return Err(RecipeError::validation(
                "image",
                format!("{} is not an image ({})", path.display(), mime_type),
            ));
        }

        let size = fs::metadata(path)
            .map_err(|e| RecipeError::io(format!("Failed to read {}: {}", path.display(), e)))?
            .len();
        if size > MAX_IMAGE_BYTES {
            return Err(RecipeError::validation(
                "image",
                format!("image must be at most 5 MB ({} bytes given)", size),
            ));
        }

        let bytes = fs::read(path)
            .map_err(|e| RecipeError::io(format!("Failed to read {}: {}", path.display(), e)))?;
        let data_url = format!("data:{};base64,{}", mime_type, BASE64_STANDARD.encode(&bytes));

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        tracing::debug!("Encoded image {} ({} bytes)", file_name, size);

        Ok(Self {
            file_name,
            mime_type,
            size,
            data_url,
        })
    }

    /// `data:<mime>;base64,<payload>`
    pub fn data_url(&self) -> &str {
        &self.data_url
    }

    pub fn into_data_url(self) -> String {
        self.data_url
    }
}

fn infer_mime_type(path: &Path) -> String {
    mime_guess::from_path(path)
        .first_or_octet_stream()
        .to_string()
}
