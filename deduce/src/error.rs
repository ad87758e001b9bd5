use modus::status::{self, NoSuccessKind};

pub struct Error(NoSuccessKind, Option<Box<dyn std::error::Error>>);

impl Error {
    pub fn new(k: NoSuccessKind, e: Box<dyn std::error::Error>) -> Self {
        Self(k, Some(e))
    }

    pub fn get_kind(&self) -> &NoSuccessKind {
        &self.0
    }

    pub fn get_error(&self) -> &Option<Box<dyn std::error::Error>> {
        &self.1
    }
}

impl From<NoSuccessKind> for Error {
    fn from(k: NoSuccessKind) -> Self {
        Self(k, None)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::new(status::OsError, e.into())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::new(status::SyntaxError, e.into())
    }
}

impl From<modus::Error> for Error {
    fn from(e: modus::Error) -> Self {
        Self::new(status::InputError, e.to_string().into())
    }
}
