use std::fmt;

#[derive(Debug)]
pub enum ScrapeError {
    Transport(reqwest::Error),
    Csv(csv::Error),
    Io(std::io::Error),
}

impl fmt::Display for ScrapeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ScrapeError::Transport(e) => write!(f, "Transport error: {}", e),
            ScrapeError::Csv(e) => write!(f, "CSV error: {}", e),
            ScrapeError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for ScrapeError {}

impl From<reqwest::Error> for ScrapeError {
    fn from(err: reqwest::Error) -> Self {
        ScrapeError::Transport(err)
    }
}

impl From<csv::Error> for ScrapeError {
    fn from(err: csv::Error) -> Self {
        ScrapeError::Csv(err)
    }
}

impl From<std::io::Error> for ScrapeError {
    fn from(err: std::io::Error) -> Self {
        ScrapeError::Io(err)
    }
}
