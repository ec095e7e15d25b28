/// A close failure together with the name of what was being closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloseError<E> {
    name: String,
    error: E,
}

impl<E> CloseError<E> {
    pub fn new(name: impl Into<String>, error: E) -> Self {
        Self {
            name: name.into(),
            error,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn error(&self) -> &E {
        &self.error
    }

    pub fn into_inner(self) -> E {
        self.error
    }
}

impl<E: std::fmt::Display> std::fmt::Display for CloseError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "closing {}: {}", self.name, self.error)
    }
}

impl<E> std::error::Error for CloseError<E>
where
    E: std::error::Error + 'static,
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}
