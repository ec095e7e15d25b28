use std::{
    borrow::Cow,
    io::{BufWriter, Write},
    net::{Shutdown, TcpStream},
};

/// A resource that can be released, where releasing it can fail.
pub trait Close {
    type Error;

    fn close(&mut self) -> Result<(), Self::Error>;

    /// How this resource is shown in log messages.
    ///
    /// Defaults to the type name. Override it to give something prettier.
    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed(std::any::type_name::<Self>())
    }
}

impl<C> Close for &mut C
where
    C: Close + ?Sized,
{
    type Error = C::Error;

    #[inline]
    fn close(&mut self) -> Result<(), Self::Error> {
        (**self).close()
    }

    #[inline]
    fn name(&self) -> Cow<'_, str> {
        (**self).name()
    }
}

impl<C> Close for Box<C>
where
    C: Close + ?Sized,
{
    type Error = C::Error;

    #[inline]
    fn close(&mut self) -> Result<(), Self::Error> {
        (**self).close()
    }

    #[inline]
    fn name(&self) -> Cow<'_, str> {
        (**self).name()
    }
}

// the descriptor itself is released on drop, this surfaces the write-back errors
impl Close for std::fs::File {
    type Error = std::io::Error;

    fn close(&mut self) -> Result<(), Self::Error> {
        self.sync_all()
    }

    fn name(&self) -> Cow<'_, str> {
        Cow::Owned(format!("{self:?}"))
    }
}

impl<W: Write> Close for BufWriter<W> {
    type Error = std::io::Error;

    fn close(&mut self) -> Result<(), Self::Error> {
        self.flush()
    }
}

impl Close for TcpStream {
    type Error = std::io::Error;

    fn close(&mut self) -> Result<(), Self::Error> {
        self.shutdown(Shutdown::Both)
    }

    fn name(&self) -> Cow<'_, str> {
        match self.peer_addr() {
            Ok(addr) => Cow::Owned(format!("tcp stream to {addr}")),
            Err(..) => Cow::Borrowed("tcp stream"),
        }
    }
}

/// A [`Close`] built from a closure. See [`from_fn`].
pub struct FnClose<F> {
    name: Cow<'static, str>,
    close: F,
}

impl<F> std::fmt::Debug for FnClose<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnClose")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl<F, E> Close for FnClose<F>
where
    F: FnMut() -> Result<(), E>,
{
    type Error = E;

    fn close(&mut self) -> Result<(), Self::Error> {
        (self.close)()
    }

    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.name)
    }
}

/// Wraps `close` so it can be used wherever a [`Close`] is expected.
///
/// ```
/// let mut conn = deferr::from_fn("fake conn", || Err::<(), _>("broken pipe"));
/// let mut result: Result<(), &str> = Ok(());
/// deferr::close_overwrite(&mut conn, &mut result);
/// assert_eq!(result, Err("broken pipe"));
/// ```
pub fn from_fn<F, E>(name: impl Into<Cow<'static, str>>, close: F) -> FnClose<F>
where
    F: FnMut() -> Result<(), E>,
{
    FnClose {
        name: name.into(),
        close,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::{MockClose, MockError};

    #[test]
    fn default_name_is_the_type_name() {
        struct Plain;
        impl Close for Plain {
            type Error = ();
            fn close(&mut self) -> Result<(), Self::Error> {
                Ok(())
            }
        }

        assert!(Plain.name().ends_with("Plain"));
    }

    #[test]
    fn forwarding_impls_keep_the_name_and_close() {
        fn check(mut closeable: impl Close<Error = MockError>) {
            assert_eq!(closeable.name(), "err closer");
            assert_eq!(closeable.close(), Err(MockError("close")));
        }

        let mut mock = MockClose::failing(MockError("close")).named("err closer");
        let counter = mock.clone();

        check(&mut mock);
        check(Box::new(mock) as Box<dyn Close<Error = MockError>>);

        assert_eq!(counter.close_count(), 2);
    }

    #[test]
    fn from_fn_calls_the_closure() {
        let mut calls = 0;
        let mut closer = from_fn("counting", || {
            calls += 1;
            Ok::<_, MockError>(())
        });
        assert_eq!(closer.name(), "counting");
        assert!(closer.close().is_ok());
        assert!(closer.close().is_ok());
        drop(closer);
        assert_eq!(calls, 2);
    }

    #[test]
    fn buf_writer_close_flushes() {
        let mut writer = BufWriter::new(Vec::new());
        writer.write_all(b"hello").unwrap();
        assert!(writer.get_ref().is_empty());

        writer.close().unwrap();
        assert_eq!(writer.get_ref().as_slice(), b"hello");
    }

    #[test]
    fn file_close_syncs() {
        let path = std::env::temp_dir().join(format!("deferr-close-{}", std::process::id()));
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(b"data").unwrap();
        file.close().unwrap();
        assert!(file.name().contains("File"));
        drop(file);

        assert_eq!(std::fs::read(&path).unwrap(), b"data");
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn tcp_stream_close_shuts_down() {
        use std::io::Read as _;

        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        let mut client = TcpStream::connect(addr).unwrap();
        let (mut server, _) = listener.accept().unwrap();

        assert_eq!(client.name(), format!("tcp stream to {addr}"));
        client.close().unwrap();

        let mut buf = Vec::new();
        assert_eq!(server.read_to_end(&mut buf).unwrap(), 0);
    }
}
