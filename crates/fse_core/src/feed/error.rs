use std::fmt;

/// Errors encountered while querying the FSEconomy data feed.
#[derive(Debug)]
pub enum FeedError {
    #[cfg(feature = "http")]
    Http(reqwest::Error),
    Status(u16),
    Xml(quick_xml::DeError),
    /// The feed answered with an `<Error>` document.
    Api(String),
}

impl fmt::Display for FeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            #[cfg(feature = "http")]
            FeedError::Http(err) => write!(f, "request failed: {err}"),
            FeedError::Status(code) => write!(f, "feed returned HTTP status {code}"),
            FeedError::Xml(err) => write!(f, "unreadable feed response: {err}"),
            FeedError::Api(message) => write!(f, "feed reported an error: {message}"),
        }
    }
}

impl std::error::Error for FeedError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            #[cfg(feature = "http")]
            FeedError::Http(err) => Some(err),
            FeedError::Xml(err) => Some(err),
            FeedError::Status(_) | FeedError::Api(_) => None,
        }
    }
}

#[cfg(feature = "http")]
impl From<reqwest::Error> for FeedError {
    fn from(err: reqwest::Error) -> Self {
        FeedError::Http(err)
    }
}

impl From<quick_xml::DeError> for FeedError {
    fn from(err: quick_xml::DeError) -> Self {
        FeedError::Xml(err)
    }
}
