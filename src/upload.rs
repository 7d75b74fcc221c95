//! Image upload placeholders
//!
//! The branding deck lets the presenter drop in a logo and a mascot image.
//! The chosen file replaces the placeholder box on its slide.

use crate::error::{DeckError, Result};

pub const NOT_AN_IMAGE_MESSAGE: &str = "Por favor selecciona un archivo de imagen válido";
pub const READ_FAILED_MESSAGE: &str = "No se pudo leer la imagen. Inténtalo de nuevo.";

/// Class applied to an uploaded image inside its placeholder
pub const UPLOADED_CLASS: &str = "uploaded-image";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UploadSlot {
    Logo,
    Mascot,
}

impl UploadSlot {
    pub const ALL: [UploadSlot; 2] = [UploadSlot::Logo, UploadSlot::Mascot];

    /// Id of the `<input type="file">`
    pub fn input_id(&self) -> &'static str {
        match self {
            UploadSlot::Logo => "logoInput",
            UploadSlot::Mascot => "mascotaInput",
        }
    }

    /// Id of the container the image replaces
    pub fn placeholder_id(&self) -> &'static str {
        match self {
            UploadSlot::Logo => "logoPlaceholder",
            UploadSlot::Mascot => "mascotaPlaceholder",
        }
    }

    pub fn alt_text(&self) -> &'static str {
        match self {
            UploadSlot::Logo => "Logo del proyecto",
            UploadSlot::Mascot => "Mascota del proyecto",
        }
    }

    pub fn success_message(&self) -> &'static str {
        match self {
            UploadSlot::Logo => "Logo cargado correctamente 🖼️",
            UploadSlot::Mascot => "Mascota cargada correctamente 🎭",
        }
    }
}

/// Accept only `image/*` MIME types
pub fn validate_image(mime: &str) -> Result<()> {
    let is_image = mime
        .split_once('/')
        .is_some_and(|(kind, sub)| kind.eq_ignore_ascii_case("image") && !sub.is_empty());
    if is_image {
        Ok(())
    } else {
        Err(DeckError::NotAnImage {
            mime: mime.to_string(),
        })
    }
}

/// User-facing text for a failed upload
pub fn failure_message(err: &DeckError) -> &'static str {
    match err {
        DeckError::NotAnImage { .. } => NOT_AN_IMAGE_MESSAGE,
        _ => READ_FAILED_MESSAGE,
    }
}
