use std::fmt::Display;

use deferr::{LogSink, Outcome};

use crate::AsyncClose;

/// See [`deferr::close_overwrite`].
pub async fn close_overwrite<C, O>(closeable: &mut C, outcome: &mut O)
where
    C: AsyncClose + ?Sized,
    O: Outcome + ?Sized,
    O::Error: From<C::Error>,
{
    if let Err(error) = closeable.close().await {
        outcome.set_err(error.into());
    }
}

/// See [`deferr::close_defer_to_existing`].
pub async fn close_defer_to_existing<C, O>(closeable: &mut C, outcome: &mut O)
where
    C: AsyncClose + ?Sized,
    O: Outcome + ?Sized,
    O::Error: From<C::Error>,
{
    let closed = closeable.close().await;
    if outcome.is_err() {
        return;
    }
    if let Err(error) = closed {
        outcome.set_err(error.into());
    }
}

/// See [`deferr::close_and_log`].
pub async fn close_and_log<C, S>(closeable: &mut C, mut sink: S)
where
    C: AsyncClose + ?Sized,
    C::Error: Display,
    S: LogSink,
{
    if let Err(error) = closeable.close().await {
        sink.log(format_args!("closing {}: {}", closeable.name(), error));
    }
}
