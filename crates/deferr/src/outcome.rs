/// A slot for an in-flight error: either empty or holding exactly one error.
pub trait Outcome {
    type Error;

    fn is_err(&self) -> bool;

    /// Replaces whatever the outcome held with `error`.
    fn set_err(&mut self, error: Self::Error);

    #[inline]
    fn is_ok(&self) -> bool {
        !self.is_err()
    }
}

impl<T, E> Outcome for Result<T, E> {
    type Error = E;

    #[inline]
    fn is_err(&self) -> bool {
        Result::is_err(self)
    }

    #[inline]
    fn set_err(&mut self, error: Self::Error) {
        *self = Err(error)
    }
}

impl<E> Outcome for Option<E> {
    type Error = E;

    #[inline]
    fn is_err(&self) -> bool {
        self.is_some()
    }

    #[inline]
    fn set_err(&mut self, error: Self::Error) {
        *self = Some(error)
    }
}

/// Chaining forms of [`close_overwrite`](crate::close_overwrite) and
/// [`close_defer_to_existing`](crate::close_defer_to_existing).
pub trait OutcomeExt: Outcome + Sized {
    /// The close error, if any, replaces the outcome.
    fn or_close_err<C>(mut self, closeable: &mut C) -> Self
    where
        C: crate::Close + ?Sized,
        Self::Error: From<C::Error>,
    {
        crate::close_overwrite(closeable, &mut self);
        self
    }

    /// The close error, if any, is kept only when the outcome had no error.
    fn then_close<C>(mut self, closeable: &mut C) -> Self
    where
        C: crate::Close + ?Sized,
        Self::Error: From<C::Error>,
    {
        crate::close_defer_to_existing(closeable, &mut self);
        self
    }
}

impl<O: Outcome> OutcomeExt for O {}
