use err_derive::Error;
use serde::Serialize;
use serde_json::json;

use actix_web::{error, http::StatusCode, HttpResponse};

use crate::lnurl::{LnurlError, QrError};

#[derive(Debug, Error, Serialize)]
pub enum ApiError {
    #[error(display = "Lnurl error: {}", _0)]
    Lnurl(LnurlError),
    #[error(display = "Qr error: {}", _0)]
    Qr(QrError),
}

impl From<LnurlError> for ApiError {
    fn from(err: LnurlError) -> Self {
        ApiError::Lnurl(err)
    }
}

impl From<QrError> for ApiError {
    fn from(err: QrError) -> Self {
        ApiError::Qr(err)
    }
}

impl error::ResponseError for ApiError {
    fn error_response(&self) -> HttpResponse {
        let message = match self {
            ApiError::Lnurl(lnurl) => match lnurl {
                LnurlError::Address(address) => address.to_string(),
                LnurlError::BitConversion(_) | LnurlError::Bech32(_) => "Failed to encode LNURL.".to_string(),
            },
            ApiError::Qr(qr) => match qr {
                QrError::DataTooLong => qr.to_string(),
                QrError::UnknownFormat(_) => qr.to_string(),
                QrError::Generation(_) | QrError::Image(_) => "Failed to generate QR code.".to_string(),
            },
        };
        HttpResponse::build(self.status_code()).json(json!({ "error": message }))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Lnurl(lnurl) => match lnurl {
                LnurlError::Address(_) => StatusCode::BAD_REQUEST,
                LnurlError::BitConversion(_) => StatusCode::INTERNAL_SERVER_ERROR,
                LnurlError::Bech32(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            ApiError::Qr(qr) => match qr {
                QrError::DataTooLong => StatusCode::BAD_REQUEST,
                QrError::UnknownFormat(_) => StatusCode::BAD_REQUEST,
                QrError::Generation(_) => StatusCode::INTERNAL_SERVER_ERROR,
                QrError::Image(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lnurl::{AddressError, BitConversionError};
    use actix_web::ResponseError;

    #[test]
    fn address_errors_are_bad_requests() {
        let err = ApiError::from(LnurlError::from(AddressError::InvalidAddressFormat));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn encoding_failures_are_internal() {
        let err = ApiError::from(LnurlError::from(BitConversionError::NonZeroPadding));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.error_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
