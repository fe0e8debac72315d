#[derive(Debug, thiserror::Error)]
pub enum Error {
  #[error("invalid paragraph exclusion pattern: {source}")]
  InvalidPattern {
    #[from]
    source: regex::Error,
  },
  #[error("invalid selector: {0}")]
  InvalidSelector(String),
  #[error("invalid page url: {source}")]
  InvalidUrl {
    #[from]
    source: url::ParseError,
  },
  #[error("document has no body element")]
  MissingBody,
}
