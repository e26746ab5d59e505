use crate::{
    auth::Claims,
    error::{self, Error},
};
use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use std::ops::Deref;

/// Id of the authenticated user.
pub struct UserID(i32);

#[async_trait]
impl<S> FromRequestParts<S> for UserID
where
    S: Send + Sync,
{
    type Rejection = Error<'static>;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Some(claims) = parts.extensions.get::<Claims>() else {
            return Err(error::COULD_NOT_GET_CLAIMS);
        };

        Ok(UserID(claims.subject))
    }
}

impl Deref for UserID {
    type Target = i32;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
