use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::services::articles::ARTICLE_NOT_FOUND_MESSAGE;

/// Article id taken from the `{id}` path segment.
///
/// A segment that is not an integer cannot name a stored row, so it is
/// answered with the same 404 as an unknown id. Existence is checked by the
/// handler, not here.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct ArticleId(pub i64);

impl ArticleId {
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        raw.trim()
            .parse::<i64>()
            .map(ArticleId)
            .map_err(|_| {
                AppError::not_found(ErrorCode::ArticleNotFound, ARTICLE_NOT_FOUND_MESSAGE)
            })
    }
}

impl FromRequest for ArticleId {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let result = match req.match_info().get("id") {
            Some(raw) => ArticleId::parse(raw),
            None => Err(AppError::bad_request(
                ErrorCode::BadRequest,
                "Missing id parameter",
            )),
        };
        ready(result)
    }
}
