use crate::errors::{AppError, AppResult};
use data_encoding::BASE64;
use qrcode::QrCode;
use qrcode::render::svg;

/// Renders a text payload into a scannable image, returned as a string the
/// front end can put straight into an `<img src>`.
pub trait QrEncoder: Send + Sync {
    fn encode(&self, payload: &str) -> AppResult<String>;
}

/// SVG rendering wrapped in a base64 `data:` URL.
#[derive(Debug, Clone)]
pub struct SvgQrEncoder {
    pub size: u32,
    pub dark: String,
    pub light: String,
}

impl Default for SvgQrEncoder {
    fn default() -> Self {
        Self {
            size: 300,
            dark: "#0047AB".to_string(),
            light: "#ffffff".to_string(),
        }
    }
}

impl QrEncoder for SvgQrEncoder {
    fn encode(&self, payload: &str) -> AppResult<String> {
        let code = QrCode::new(payload.as_bytes()).map_err(|e| AppError::Encode(e.to_string()))?;

        let image = code
            .render::<svg::Color>()
            .min_dimensions(self.size, self.size)
            .quiet_zone(true)
            .dark_color(svg::Color(&self.dark))
            .light_color(svg::Color(&self.light))
            .build();

        Ok(format!(
            "data:image/svg+xml;base64,{}",
            BASE64.encode(image.as_bytes())
        ))
    }
}
