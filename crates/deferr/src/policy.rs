use std::fmt::Display;

use crate::{Close, CloseError, LogSink, Outcome};

/// Closes `closeable`. A close error takes priority and overwrites `outcome`.
///
/// Use this when failing to release the resource matters more than whatever
/// went wrong while using it, e.g. a file whose buffered data may not have
/// been written.
///
/// When the close succeeds `outcome` is not touched.
pub fn close_overwrite<C, O>(closeable: &mut C, outcome: &mut O)
where
    C: Close + ?Sized,
    O: Outcome + ?Sized,
    O::Error: From<C::Error>,
{
    if let Err(error) = closeable.close() {
        outcome.set_err(error.into());
    }
}

/// Closes `closeable`. A close error is only stored in `outcome` when
/// `outcome` has no error yet.
///
/// The resource is closed even when `outcome` already holds an error.
pub fn close_defer_to_existing<C, O>(closeable: &mut C, outcome: &mut O)
where
    C: Close + ?Sized,
    O: Outcome + ?Sized,
    O::Error: From<C::Error>,
{
    let closed = closeable.close();
    if outcome.is_err() {
        return;
    }
    if let Err(error) = closed {
        outcome.set_err(error.into());
    }
}

/// Closes `closeable` and sends `closing {name}: {error}` to `sink` if that
/// fails. The sink is never called when the close succeeds.
pub fn close_and_log<C, S>(closeable: &mut C, mut sink: S)
where
    C: Close + ?Sized,
    C::Error: Display,
    S: LogSink,
{
    if let Err(error) = closeable.close() {
        report(&*closeable, &error, &mut sink);
    }
}

/// Closes `closeable`, attaching its name to the error.
pub fn close_named<C>(closeable: &mut C) -> Result<(), CloseError<C::Error>>
where
    C: Close + ?Sized,
{
    closeable
        .close()
        .map_err(|error| CloseError::new(closeable.name(), error))
}

pub(crate) fn report<C, S>(closeable: &C, error: &dyn Display, sink: &mut S)
where
    C: Close + ?Sized,
    S: LogSink + ?Sized,
{
    sink.log(format_args!("closing {}: {}", closeable.name(), error))
}
