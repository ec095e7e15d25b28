use std::{
    fmt::Display,
    ops::{Deref, DerefMut},
};

use crate::{Close, CloseError, Config, LogSink, Logger};

/// Closes the wrapped resource when dropped, logging a failed close to its
/// sink.
///
/// Call [`CloseGuard::close`] instead to get the error back.
pub struct CloseGuard<C, S = Logger>
where
    C: Close,
    C::Error: Display,
    S: LogSink,
{
    inner: Option<C>,
    sink: S,
}

impl<C> CloseGuard<C>
where
    C: Close,
    C::Error: Display,
{
    pub fn new(closeable: C) -> Self {
        Self::with_config(closeable, Config::default())
    }

    pub fn with_config(closeable: C, config: Config) -> Self {
        Self::with_sink(closeable, Logger::new(config))
    }
}

impl<C, S> CloseGuard<C, S>
where
    C: Close,
    C::Error: Display,
    S: LogSink,
{
    pub fn with_sink(closeable: C, sink: S) -> Self {
        Self {
            inner: Some(closeable),
            sink,
        }
    }

    pub fn close(mut self) -> Result<(), CloseError<C::Error>> {
        match self.inner.take() {
            Some(mut closeable) => crate::close_named(&mut closeable),
            None => Ok(()),
        }
    }

    /// Gives the resource back without closing it.
    pub fn into_inner(mut self) -> C {
        match self.inner.take() {
            Some(closeable) => {
                log::trace!("guard for {} disarmed", closeable.name());
                closeable
            }
            None => unreachable!("the resource is only taken by value"),
        }
    }
}

impl<C, S> Deref for CloseGuard<C, S>
where
    C: Close,
    C::Error: Display,
    S: LogSink,
{
    type Target = C;

    fn deref(&self) -> &Self::Target {
        match &self.inner {
            Some(inner) => inner,
            None => unreachable!("the resource is only taken by value"),
        }
    }
}

impl<C, S> DerefMut for CloseGuard<C, S>
where
    C: Close,
    C::Error: Display,
    S: LogSink,
{
    fn deref_mut(&mut self) -> &mut Self::Target {
        match &mut self.inner {
            Some(inner) => inner,
            None => unreachable!("the resource is only taken by value"),
        }
    }
}

impl<C, S> std::fmt::Debug for CloseGuard<C, S>
where
    C: Close,
    C::Error: Display,
    S: LogSink,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CloseGuard")
            .field("inner", &self.inner.as_ref().map(|c| c.name()))
            .finish_non_exhaustive()
    }
}

impl<C, S> Drop for CloseGuard<C, S>
where
    C: Close,
    C::Error: Display,
    S: LogSink,
{
    fn drop(&mut self) {
        let Some(mut closeable) = self.inner.take() else {
            return;
        };
        if let Err(error) = closeable.close() {
            crate::policy::report(&closeable, &error, &mut self.sink);
        }
    }
}
