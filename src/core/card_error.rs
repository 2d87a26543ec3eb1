use std::fmt;

#[derive(Debug)]
pub enum CardError {
    ConfigRead(String),
    ConfigParse(String),
    UnknownColor(String),
    BadColor(String),
}

impl fmt::Display for CardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardError::ConfigRead(detail) => write!(f, "could not read scene config: {detail}"),
            CardError::ConfigParse(detail) => write!(f, "could not parse scene config: {detail}"),
            CardError::UnknownColor(name) => write!(f, "no palette entry named '{name}'"),
            CardError::BadColor(detail) => write!(f, "bad color value: {detail}"),
        }
    }
}

impl std::error::Error for CardError {}

impl From<std::io::Error> for CardError {
    fn from(error: std::io::Error) -> Self {
        CardError::ConfigRead(error.to_string())
    }
}

impl From<ron::error::SpannedError> for CardError {
    fn from(error: ron::error::SpannedError) -> Self {
        CardError::ConfigParse(error.to_string())
    }
}
