//! Submission encoding: pixel buffer to portable image artifact.

use crate::draw::Surface;
use base64::{Engine as _, engine::general_purpose::STANDARD};
use image::ImageFormat;
use std::io::Cursor;

/// Prefix of every submission artifact.
pub const DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// Receiver of submitted sketch artifacts.
///
/// The host form framework implements this to collect the encoded image.
/// `instance_id` identifies the submitting widget among possibly many on one
/// form; `artifact` is a `data:image/png;base64,...` payload whose ownership
/// transfers to the host with this call.
pub trait Host {
    fn accept_input(&mut self, instance_id: &str, artifact: &str);
}

/// Encodes the surface's pixel buffer as a self-contained image artifact.
///
/// The buffer is flattened to a lossless PNG and wrapped as a data URI, so
/// the artifact reflects exactly the pixel state at the moment of the call.
/// A blank surface is valid input and encodes to a blank image.
///
/// # Errors
/// Returns the underlying encoder error if PNG encoding fails.
pub fn encode_artifact(surface: &Surface) -> image::ImageResult<String> {
    let mut png = Vec::new();
    surface
        .pixels()
        .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;

    log::debug!(
        "Encoded {}x{} surface into {} PNG bytes",
        surface.side(),
        surface.side(),
        png.len()
    );

    Ok(format!("{}{}", DATA_URI_PREFIX, STANDARD.encode(&png)))
}
