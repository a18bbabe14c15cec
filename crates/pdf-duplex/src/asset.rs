//! Image ingestion
//!
//! Uploaded files are accepted only when their MIME type is `image/*`.
//! Only the image header is read here, to learn the natural size; the
//! encoded bytes are kept untouched and handed to the encoder at export.

use crate::types::*;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use std::io::Cursor;
use std::path::Path;
use std::sync::Arc;

/// A decoded image together with its natural pixel size
#[derive(Debug, Clone, PartialEq)]
pub struct ImageAsset {
    bytes: Arc<[u8]>,
    mime: String,
    width_px: u32,
    height_px: u32,
}

impl ImageAsset {
    /// Accept an uploaded file.
    ///
    /// Returns `Ok(None)` when `mime` is not an image type; such uploads are
    /// ignored rather than reported.
    pub fn ingest(bytes: impl Into<Arc<[u8]>>, mime: &str) -> Result<Option<Self>> {
        if !mime.starts_with("image/") {
            log::debug!("Ignoring upload with non-image MIME type '{}'", mime);
            return Ok(None);
        }

        let bytes = bytes.into();
        let (width_px, height_px) = probe_dimensions(&bytes)?;

        Ok(Some(Self {
            bytes,
            mime: mime.to_string(),
            width_px,
            height_px,
        }))
    }

    /// Same as [`ImageAsset::ingest`], off the async runtime's worker threads
    pub async fn decode(bytes: Vec<u8>, mime: impl Into<String>) -> Result<Option<Self>> {
        let mime = mime.into();
        tokio::task::spawn_blocking(move || Self::ingest(bytes, &mime)).await?
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn mime(&self) -> &str {
        &self.mime
    }

    pub fn width_px(&self) -> u32 {
        self.width_px
    }

    pub fn height_px(&self) -> u32 {
        self.height_px
    }

    /// `data:` URI suitable for displaying the image in a preview
    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime, STANDARD.encode(&self.bytes))
    }
}

/// Load an image file from disk.
///
/// The MIME type is inferred from the file extension, so files without a
/// recognised image extension come back as `Ok(None)`.
pub async fn load_image(path: impl AsRef<Path>) -> Result<Option<ImageAsset>> {
    let path = path.as_ref().to_owned();
    let mime = image::ImageFormat::from_path(&path)
        .map(|format| format.to_mime_type())
        .unwrap_or("application/octet-stream");

    let bytes = tokio::fs::read(&path).await?;
    let asset = ImageAsset::decode(bytes, mime).await?;
    if let Some(asset) = &asset {
        log::info!(
            "Loaded {} ({}x{}px, {})",
            path.display(),
            asset.width_px(),
            asset.height_px(),
            asset.mime()
        );
    }
    Ok(asset)
}

fn probe_dimensions(bytes: &[u8]) -> Result<(u32, u32)> {
    let reader = image::ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DuplexError::AssetDecode(e.to_string()))?;

    if reader.format().is_none() {
        return Err(DuplexError::AssetDecode(
            "Unrecognised image format".to_string(),
        ));
    }

    let (width, height) = reader
        .into_dimensions()
        .map_err(|e| DuplexError::AssetDecode(e.to_string()))?;

    if width == 0 || height == 0 {
        return Err(DuplexError::AssetDecode(format!(
            "Image has no area ({}x{}px)",
            width, height
        )));
    }

    Ok((width, height))
}
