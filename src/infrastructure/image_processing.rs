use image::{ImageBuffer, ImageEncoder, ImageError, Rgba};

use crate::domain::placeholder::{FillColor, PLACEHOLDER_HEIGHT, PLACEHOLDER_WIDTH};

pub const PLACEHOLDER_CONTENT_TYPE: &str = "image/png";

/// Render a solid placeholder of the fixed placeholder size and encode it as PNG.
pub fn render_placeholder(color: FillColor) -> Result<Vec<u8>, ImageError> {
    let img = ImageBuffer::from_pixel(
        PLACEHOLDER_WIDTH,
        PLACEHOLDER_HEIGHT,
        Rgba(color.rgba()),
    );

    let mut buf = Vec::new();
    let encoder = image::codecs::png::PngEncoder::new(&mut buf);
    encoder.write_image(
        img.as_raw(),
        PLACEHOLDER_WIDTH,
        PLACEHOLDER_HEIGHT,
        image::ExtendedColorType::Rgba8,
    )?;

    Ok(buf)
}
