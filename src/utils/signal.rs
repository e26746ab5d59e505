use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};

#[cfg(not(unix))]
use futures::future::BoxFuture;
#[cfg(unix)]
use smallvec::SmallVec;
#[cfg(unix)]
use tokio::signal::unix::{signal, Signal, SignalKind};

#[cfg(unix)]
const SHUTDOWN_SIGNALS: [(&str, fn() -> SignalKind); 3] = [
    ("SIGINT", SignalKind::interrupt),
    ("SIGTERM", SignalKind::terminate),
    ("SIGQUIT", SignalKind::quit),
];

/// Completes when the process is asked to shut down.
///
/// Used as the graceful shutdown trigger of the server. A listener that cannot
/// be installed is logged and skipped.
pub struct SignalHandler {
    #[cfg(unix)]
    listeners: SmallVec<[(&'static str, Signal); 3]>,
    #[cfg(not(unix))]
    ctrl_c: BoxFuture<'static, std::io::Result<()>>,
}

impl SignalHandler {
    #[cfg(unix)]
    pub fn new() -> Self {
        let listeners = SHUTDOWN_SIGNALS
            .into_iter()
            .filter_map(|(name, kind)| match signal(kind()) {
                Ok(listener) => Some((name, listener)),
                Err(err) => {
                    error!("failed to listen for {name}: {err}");
                    None
                }
            })
            .collect();

        SignalHandler { listeners }
    }

    #[cfg(not(unix))]
    pub fn new() -> Self {
        SignalHandler {
            ctrl_c: Box::pin(tokio::signal::ctrl_c()),
        }
    }
}

impl Future for SignalHandler {
    type Output = ();

    #[cfg(unix)]
    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        for (name, listener) in &mut self.listeners {
            if listener.poll_recv(cx).is_ready() {
                info!("received {name}, shutting down");
                return Poll::Ready(());
            }
        }

        Poll::Pending
    }

    #[cfg(not(unix))]
    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.ctrl_c.as_mut().poll(cx).is_ready() {
            info!("received ctrl-c, shutting down");
            return Poll::Ready(());
        }

        Poll::Pending
    }
}
