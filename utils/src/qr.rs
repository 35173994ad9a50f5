//! QR rendering of the final LNURL value.
//!
//! The upper-case LNURL lets the encoder pick alphanumeric mode, which keeps
//! the symbol small. Black modules on white, 200 px minimum with a quiet zone.

use std::fmt;
use std::str::FromStr;

use image::codecs::png::PngEncoder;
use image::{ColorType, Luma};
use qrcode::render::{svg, unicode};
use qrcode::types::QrError as EncodeError;
use qrcode::QrCode;
use serde::{Deserialize, Serialize};
use xerror::lnurl::QrError;

pub const QR_SIZE: u32 = 200;

const DARK: &str = "#000000";
const LIGHT: &str = "#ffffff";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QrFormat {
    Text,
    Svg,
    Png,
}

impl QrFormat {
    pub fn content_type(&self) -> &'static str {
        match self {
            QrFormat::Text => "text/plain; charset=utf-8",
            QrFormat::Svg => "image/svg+xml",
            QrFormat::Png => "image/png",
        }
    }

    pub fn file_name(&self) -> &'static str {
        match self {
            QrFormat::Text => "lnurl-qr.txt",
            QrFormat::Svg => "lnurl-qr.svg",
            QrFormat::Png => "lnurl-qr.png",
        }
    }
}

impl FromStr for QrFormat {
    type Err = QrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(QrFormat::Text),
            "svg" => Ok(QrFormat::Svg),
            "png" => Ok(QrFormat::Png),
            _ => Err(QrError::UnknownFormat(s.to_string())),
        }
    }
}

impl fmt::Display for QrFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            QrFormat::Text => "text",
            QrFormat::Svg => "svg",
            QrFormat::Png => "png",
        };
        f.write_str(name)
    }
}

fn build(value: &str) -> Result<QrCode, QrError> {
    QrCode::new(value.as_bytes()).map_err(|err| match err {
        EncodeError::DataTooLong => QrError::DataTooLong,
        other => QrError::Generation(other.to_string()),
    })
}

/// Half-block rendering for terminals, light modules drawn so it scans on a
/// dark background.
pub fn to_text(value: &str) -> Result<String, QrError> {
    let code = build(value)?;
    Ok(code
        .render::<unicode::Dense1x2>()
        .dark_color(unicode::Dense1x2::Light)
        .light_color(unicode::Dense1x2::Dark)
        .build())
}

pub fn to_svg(value: &str, size: u32) -> Result<String, QrError> {
    let code = build(value)?;
    Ok(code
        .render::<svg::Color<'_>>()
        .min_dimensions(size, size)
        .dark_color(svg::Color(DARK))
        .light_color(svg::Color(LIGHT))
        .build())
}

pub fn to_png(value: &str, size: u32) -> Result<Vec<u8>, QrError> {
    let code = build(value)?;
    let image = code.render::<Luma<u8>>().min_dimensions(size, size).build();

    let mut png = Vec::new();
    PngEncoder::new(&mut png)
        .encode(image.as_raw(), image.width(), image.height(), ColorType::L8)
        .map_err(|err| QrError::Image(err.to_string()))?;
    Ok(png)
}

/// Renders `value` in `format`, returning the bytes to write or serve.
pub fn render(value: &str, format: QrFormat, size: u32) -> Result<Vec<u8>, QrError> {
    match format {
        QrFormat::Text => Ok(to_text(value)?.into_bytes()),
        QrFormat::Svg => Ok(to_svg(value, size)?.into_bytes()),
        QrFormat::Png => to_png(value, size),
    }
}
