use crate::{auth::Claims, StateTrait};
use axum::http::Request;
use headers::{
    authorization::{Authorization, Bearer},
    HeaderMapExt,
};
use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};
use tower::{Layer, Service};
use tracing::Span;

/// Puts the [`Claims`] of a valid bearer token into the request extensions.
///
/// Requests without a token, or with one that fails to decode, pass through
/// untouched. Rejecting them is left to [`super::RequireStaffLayer`].
#[derive(Debug, Clone)]
pub struct GetClaimsLayer<ST> {
    state: ST,
}

impl<ST> GetClaimsLayer<ST> {
    pub fn new(state: ST) -> Self {
        Self { state }
    }
}

impl<S, ST: Clone> Layer<S> for GetClaimsLayer<ST> {
    type Service = GetClaims<S, ST>;

    fn layer(&self, inner: S) -> Self::Service {
        GetClaims {
            inner,
            state: self.state.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct GetClaims<S, ST> {
    inner: S,
    state: ST,
}

impl<S, ST: StateTrait> GetClaims<S, ST> {
    fn decode<B>(&self, request: &Request<B>) -> Option<Claims> {
        let bearer = request.headers().typed_get::<Authorization<Bearer>>()?;

        self.state.jwt().get_claims(bearer.token()).ok()
    }
}

impl<S, B, ST> Service<Request<B>> for GetClaims<S, ST>
where
    S: Service<Request<B>>,
    ST: StateTrait,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = ResponseFuture<S::Future>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut request: Request<B>) -> Self::Future {
        let span = match self.decode(&request) {
            Some(claims) => {
                let span = info_span!("claims", user_id = claims.subject, staff = claims.staff);
                request.extensions_mut().insert(claims);
                span
            }
            None => Span::none(),
        };

        ResponseFuture {
            future: self.inner.call(request),
            span,
        }
    }
}

/// Polls the inner future inside the span of the caller.
#[pin_project::pin_project]
#[derive(Debug)]
pub struct ResponseFuture<F> {
    #[pin]
    future: F,
    span: Span,
}

impl<F: Future> Future for ResponseFuture<F> {
    type Output = F::Output;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();
        let _entered = this.span.enter();

        this.future.poll(cx)
    }
}
