//! QR codes linking a printed label back to an item's edit page.

use super::WebError;
use image::{ImageFormat, Luma};
use qrcode::{EcLevel, QrCode};
use std::io::Cursor;

/// Smallest side of a generated QR code, in pixels.
pub const QR_MIN_SIDE: u32 = 256;

#[must_use]
pub fn edit_url(host: &str, module: &str, id: &str) -> String {
    format!("http://{host}/{module}/edit?id={id}")
}

/// PNG of a medium error-correction QR code encoding `content`.
pub fn qr_png(content: &str) -> Result<Vec<u8>, WebError> {
    let code = QrCode::with_error_correction_level(content.as_bytes(), EcLevel::M)?;
    let rendered = code
        .render::<Luma<u8>>()
        .min_dimensions(QR_MIN_SIDE, QR_MIN_SIDE)
        .build();
    let mut png = Vec::new();
    rendered.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;
    Ok(png)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::GenericImageView as _;

    #[test]
    fn test_edit_url() {
        assert_eq!(
            edit_url("shop.local:8080", "equipment", "drillpress"),
            "http://shop.local:8080/equipment/edit?id=drillpress"
        );
    }

    #[test]
    fn test_qr_png_is_at_least_min_side() {
        let png = qr_png(&edit_url("localhost", "inventory", "m3screws")).unwrap();
        let decoded = image::load_from_memory_with_format(&png, ImageFormat::Png).unwrap();
        let (width, height) = decoded.dimensions();
        assert_eq!(width, height);
        assert!(width >= QR_MIN_SIDE);
    }
}
