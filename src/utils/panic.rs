use std::{backtrace::Backtrace, panic};

/// Routes panics through `tracing` so they end up next to the request logs.
pub fn set_hook() {
    panic::set_hook(Box::new(|info| {
        let backtrace = Backtrace::force_capture();

        let location = info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()))
            .unwrap_or_default();

        let payload = info
            .payload()
            .downcast_ref::<&str>()
            .map(|s| (*s).to_owned())
            .or_else(|| info.payload().downcast_ref::<String>().cloned())
            .unwrap_or_default();

        error!(location, "panic: {payload}\n{backtrace}");
    }));
}
