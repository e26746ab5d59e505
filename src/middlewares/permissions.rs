use crate::{auth::Claims, error};
use axum::{
    http::Request,
    response::{IntoResponse, Response},
};
use futures::future::BoxFuture;
use std::{
    convert::Infallible,
    task::{Context, Poll},
};
use tower::{Layer, Service};

/// Lets through only requests whose claims belong to a staff user.
#[derive(Debug, Clone, Default)]
pub struct RequireStaffLayer;

impl<S> Layer<S> for RequireStaffLayer {
    type Service = RequireStaff<S>;

    fn layer(&self, inner: S) -> Self::Service {
        RequireStaff { inner }
    }
}

#[derive(Debug, Clone)]
pub struct RequireStaff<S> {
    inner: S,
}

impl<S, B> Service<Request<B>> for RequireStaff<S>
where
    S: Service<Request<B>, Error = Infallible, Response = Response> + Send,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = Response;
    type Error = Infallible;
    type Future = BoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<B>) -> Self::Future {
        let rejection = match req.extensions().get::<Claims>() {
            None => Some(error::COULD_NOT_GET_CLAIMS),
            Some(claims) if !claims.staff => {
                warn!(user_id = claims.subject, "non-staff user tried the admin interface");
                Some(error::NOT_ENOUGH_PERMISSIONS)
            }
            Some(_) => None,
        };

        if let Some(error) = rejection {
            return Box::pin(async move { Ok(error.into_response()) });
        }

        Box::pin(self.inner.call(req))
    }
}
