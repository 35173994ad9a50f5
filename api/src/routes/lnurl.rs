use actix_web::http::header;
use actix_web::{get, web, web::Query, HttpResponse};
use serde::Deserialize;

use utils::lnurl;
use utils::qr::{self, QrFormat};
use xerror::api::ApiError;

use crate::WebState;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(convert_address).service(encode_url).service(qr_code);
}

#[derive(Deserialize, Debug)]
pub struct ConvertParams {
    pub address: String,
    pub prefix: Option<bool>,
}

#[get("/lnurl/convert")]
pub async fn convert_address(query: Query<ConvertParams>, state: WebState) -> Result<HttpResponse, ApiError> {
    let include_prefix = query.prefix.unwrap_or(state.default_prefix);

    let conversion = lnurl::convert(&query.address, include_prefix).map_err(|err| {
        slog::warn!(state.logger, "Rejected conversion"; "address" => query.address.as_str(), "error" => %err);
        ApiError::from(err)
    })?;

    slog::info!(state.logger, "Converted lightning address"; "address" => conversion.address.as_str(), "lnurl" => conversion.lnurl.as_str());
    Ok(HttpResponse::Ok().json(&conversion))
}

#[derive(Deserialize, Debug)]
pub struct EncodeParams {
    pub url: String,
    pub prefix: Option<bool>,
}

#[get("/lnurl/encode")]
pub async fn encode_url(query: Query<EncodeParams>, state: WebState) -> Result<HttpResponse, ApiError> {
    let include_prefix = query.prefix.unwrap_or(state.default_prefix);
    let encoded = lnurl::encode_url(&query.url, include_prefix)?;

    slog::debug!(state.logger, "Encoded url"; "url" => encoded.url.as_str());
    Ok(HttpResponse::Ok().json(&encoded))
}

#[derive(Deserialize, Debug)]
pub struct QrParams {
    pub address: String,
    pub prefix: Option<bool>,
    pub format: Option<QrFormat>,
}

#[get("/lnurl/qr")]
pub async fn qr_code(query: Query<QrParams>, state: WebState) -> Result<HttpResponse, ApiError> {
    let include_prefix = query.prefix.unwrap_or(state.default_prefix);
    let format = query.format.unwrap_or(QrFormat::Svg);

    let conversion = lnurl::convert(&query.address, include_prefix)?;
    let body = qr::render(&conversion.value, format, state.qr_size).map_err(|err| {
        slog::error!(state.logger, "Failed to render QR code"; "format" => %format, "error" => %err);
        ApiError::from(err)
    })?;

    Ok(HttpResponse::Ok()
        .content_type(format.content_type())
        .insert_header((
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", format.file_name()),
        ))
        .body(body))
}
