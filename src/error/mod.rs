mod constants;
mod db;

pub use constants::*;
pub use db::*;

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use bytes::{BufMut, Bytes, BytesMut};
use sea_orm::DbErr;
use serde::Serialize;
use std::fmt;

/// An API error: the HTTP status, a stable numeric code and a message.
///
/// All errors the service can answer with are listed in [`constants`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Error<'a> {
    status: Option<StatusCode>,
    code: u16,
    message: &'a str,
}

pub type Result<T = ()> = std::result::Result<T, Error<'static>>;

#[derive(Serialize)]
struct Body<'a> {
    code: u16,
    error: &'a str,
}

impl<'a> Error<'a> {
    /// Logs `error` and hides it behind [`INTERNAL`].
    pub fn internal<E: fmt::Debug>(error: E) -> Self {
        error!("internal error: {error:?}");
        INTERNAL
    }

    const fn new(status: Option<StatusCode>, code: u16, message: &'a str) -> Error<'a> {
        Self {
            status,
            code,
            message,
        }
    }

    #[inline]
    pub const fn code(&self) -> u16 {
        self.code
    }

    #[inline]
    pub fn status(&self) -> StatusCode {
        self.status.unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    #[inline]
    pub const fn message(&self) -> &str {
        self.message
    }

    pub fn to_bytes(&self) -> Bytes {
        let body = Body {
            code: self.code,
            error: self.message,
        };
        let mut buf = BytesMut::with_capacity(64).writer();

        if let Err(err) = serde_json::to_writer(&mut buf, &body) {
            error!("failed to serialize error body: {err}");
        }

        buf.into_inner().freeze()
    }
}

impl fmt::Display for Error<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message, self.code)
    }
}

impl IntoResponse for Error<'_> {
    fn into_response(self) -> Response {
        let mut res = (self.status(), self.to_bytes()).into_response();

        res.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static(mime::APPLICATION_JSON.as_ref()),
        );

        res
    }
}

impl From<DbErr> for Error<'_> {
    fn from(error: DbErr) -> Self {
        error!("database error: {error:?}");
        DATABASE_ERROR
    }
}

impl From<serde_json::Error> for Error<'_> {
    fn from(error: serde_json::Error) -> Self {
        error!("failed to deserialize json: {error:?}");
        JSON_DESERIALIZE
    }
}

impl From<std::io::Error> for Error<'_> {
    fn from(error: std::io::Error) -> Self {
        error!("io error: {error:?}");
        INTERNAL
    }
}

macro_rules! const_error {
    ($name:ident, $status:ident, $code:literal, $msg:literal) => {
        pub const $name: $crate::error::Error<'static> =
            $crate::error::Error::new(Some(::axum::http::StatusCode::$status), $code, $msg);
    };
}

#[allow(clippy::useless_attribute)]
#[allow(clippy::needless_pub_self)]
pub(self) use const_error;
