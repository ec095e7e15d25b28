use std::borrow::Cow;

use tokio::io::{AsyncWrite, AsyncWriteExt as _};

/// The asynchronous version of [`deferr::Close`].
#[async_trait::async_trait]
pub trait AsyncClose: Send {
    type Error: Send;

    async fn close(&mut self) -> Result<(), Self::Error>;

    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed(std::any::type_name::<Self>())
    }
}

#[async_trait::async_trait]
impl<C> AsyncClose for &mut C
where
    C: AsyncClose + ?Sized,
{
    type Error = C::Error;

    async fn close(&mut self) -> Result<(), Self::Error> {
        (**self).close().await
    }

    fn name(&self) -> Cow<'_, str> {
        (**self).name()
    }
}

#[async_trait::async_trait]
impl<C> AsyncClose for Box<C>
where
    C: AsyncClose + ?Sized,
{
    type Error = C::Error;

    async fn close(&mut self) -> Result<(), Self::Error> {
        (**self).close().await
    }

    fn name(&self) -> Cow<'_, str> {
        (**self).name()
    }
}

#[async_trait::async_trait]
impl AsyncClose for tokio::fs::File {
    type Error = std::io::Error;

    async fn close(&mut self) -> Result<(), Self::Error> {
        self.flush().await?;
        self.sync_all().await
    }

    fn name(&self) -> Cow<'_, str> {
        Cow::Owned(format!("{self:?}"))
    }
}

#[async_trait::async_trait]
impl AsyncClose for tokio::net::TcpStream {
    type Error = std::io::Error;

    async fn close(&mut self) -> Result<(), Self::Error> {
        self.shutdown().await
    }

    fn name(&self) -> Cow<'_, str> {
        match self.peer_addr() {
            Ok(addr) => Cow::Owned(format!("tcp stream to {addr}")),
            Err(..) => Cow::Borrowed("tcp stream"),
        }
    }
}

#[async_trait::async_trait]
impl<W> AsyncClose for tokio::io::BufWriter<W>
where
    W: AsyncWrite + Send + Unpin,
{
    type Error = std::io::Error;

    async fn close(&mut self) -> Result<(), Self::Error> {
        self.shutdown().await
    }
}

#[async_trait::async_trait]
impl AsyncClose for tokio::io::DuplexStream {
    type Error = std::io::Error;

    async fn close(&mut self) -> Result<(), Self::Error> {
        self.shutdown().await
    }
}

/// Closes any [`AsyncWrite`] by shutting it down.
#[derive(Debug)]
pub struct Shutdown<W>(pub W);

#[async_trait::async_trait]
impl<W> AsyncClose for Shutdown<W>
where
    W: AsyncWrite + Send + Unpin,
{
    type Error = std::io::Error;

    async fn close(&mut self) -> Result<(), Self::Error> {
        self.0.shutdown().await
    }

    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed(std::any::type_name::<W>())
    }
}

/// Runs a [`deferr::Close`] inline on the current task.
#[derive(Debug)]
pub struct Blocking<C>(pub C);

#[async_trait::async_trait]
impl<C> AsyncClose for Blocking<C>
where
    C: deferr::Close + Send,
    C::Error: Send,
{
    type Error = C::Error;

    async fn close(&mut self) -> Result<(), Self::Error> {
        deferr::Close::close(&mut self.0)
    }

    fn name(&self) -> Cow<'_, str> {
        deferr::Close::name(&self.0)
    }
}
