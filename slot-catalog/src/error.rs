use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub enum Error {
    InvalidCatalogConfiguration { start_hour: u8, end_hour: u8 },
    InvalidSlot(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCatalogConfiguration {
                start_hour,
                end_hour,
            } => {
                write!(
                    f,
                    "invalid catalog hours {start_hour}..{end_hour}: expected start < end <= 24",
                )
            }
            Self::InvalidSlot(raw) => {
                write!(f, "`{raw}` is not a half-hour slot: expected H:00 or H:30")
            }
        }
    }
}

impl std::error::Error for Error {}
