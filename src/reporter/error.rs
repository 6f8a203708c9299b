use std::fmt;
use std::io;

/// Failure to produce a report document. Never fatal to terminal output;
/// the caller reports it and carries on.
#[derive(Debug)]
pub enum ReportError {
    Template(liquid::Error),
    Io(io::Error),
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ReportError::Template(err) => write!(f, "template error: {}", err),
            ReportError::Io(err) => write!(f, "cannot write report: {}", err),
        }
    }
}

impl std::error::Error for ReportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReportError::Template(err) => Some(err),
            ReportError::Io(err) => Some(err),
        }
    }
}

impl From<liquid::Error> for ReportError {
    fn from(err: liquid::Error) -> Self {
        ReportError::Template(err)
    }
}

impl From<io::Error> for ReportError {
    fn from(err: io::Error) -> Self {
        ReportError::Io(err)
    }
}
