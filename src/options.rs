use super::*;

const DEFAULT_DISCLAIMER_PATH: &str = "/fragments/event-disclaimers";

const DEFAULT_EVENT_URL_PATTERNS: &[&str] =
  &["/schedule-of-events/", "/events-and-promotions/"];

const DEFAULT_MIN_PARAGRAPH_LENGTH: usize = 50;

const DEFAULT_NOISE_SELECTORS: &[&str] = &[
  "header",
  "footer",
  "nav",
  ".header",
  ".footer",
  ".navigation",
  ".breadcrumb",
  "script",
  "noscript",
  "style",
];

const DEFAULT_TICKET_LINK_MARKER: &str = "ticketmaster";

/// Settings controlling how event pages are detected and rebuilt.
#[derive(Debug, Clone)]
pub struct ImportOptions {
  pub disclaimer_path: String,
  pub event_url_patterns: Vec<String>,
  pub min_paragraph_length: usize,
  pub noise_selectors: Vec<String>,
  pub paragraph_exclusion: Regex,
  pub ticket_link_marker: String,
}

impl Default for ImportOptions {
  fn default() -> Self {
    Self {
      disclaimer_path: DEFAULT_DISCLAIMER_PATH.to_string(),
      event_url_patterns: DEFAULT_EVENT_URL_PATTERNS
        .iter()
        .map(ToString::to_string)
        .collect(),
      min_paragraph_length: DEFAULT_MIN_PARAGRAPH_LENGTH,
      noise_selectors: DEFAULT_NOISE_SELECTORS
        .iter()
        .map(ToString::to_string)
        .collect(),
      paragraph_exclusion: re::PARAGRAPH_EXCLUSION.clone(),
      ticket_link_marker: DEFAULT_TICKET_LINK_MARKER.to_string(),
    }
  }
}

impl ImportOptions {
  #[must_use]
  pub fn builder() -> ImportOptionsBuilder {
    ImportOptionsBuilder::default()
  }
}

pub struct ImportOptionsBuilder {
  inner: ImportOptions,
  paragraph_exclusion: Option<String>,
}

impl Default for ImportOptionsBuilder {
  fn default() -> Self {
    Self {
      inner: ImportOptions::default(),
      paragraph_exclusion: None,
    }
  }
}

impl ImportOptionsBuilder {
  /// Validates the configured selectors and compiles the exclusion pattern.
  pub fn build(self) -> Result<ImportOptions> {
    for selector in &self.inner.noise_selectors {
      if dom_query::Matcher::new(selector).is_err() {
        return Err(Error::InvalidSelector(selector.clone()));
      }
    }

    let paragraph_exclusion = match self.paragraph_exclusion {
      Some(pattern) => Regex::new(&pattern)?,
      None => self.inner.paragraph_exclusion,
    };

    Ok(ImportOptions {
      paragraph_exclusion,
      ..self.inner
    })
  }

  #[must_use]
  pub fn disclaimer_path(self, disclaimer_path: impl Into<String>) -> Self {
    Self {
      inner: ImportOptions {
        disclaimer_path: disclaimer_path.into(),
        ..self.inner
      },
      ..self
    }
  }

  #[must_use]
  pub fn event_url_patterns<I, S>(self, patterns: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    Self {
      inner: ImportOptions {
        event_url_patterns: patterns.into_iter().map(Into::into).collect(),
        ..self.inner
      },
      ..self
    }
  }

  #[must_use]
  pub fn min_paragraph_length(self, min_paragraph_length: usize) -> Self {
    Self {
      inner: ImportOptions {
        min_paragraph_length,
        ..self.inner
      },
      ..self
    }
  }

  #[must_use]
  pub fn noise_selectors<I, S>(self, selectors: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    Self {
      inner: ImportOptions {
        noise_selectors: selectors.into_iter().map(Into::into).collect(),
        ..self.inner
      },
      ..self
    }
  }

  #[must_use]
  pub fn paragraph_exclusion(self, pattern: impl Into<String>) -> Self {
    Self {
      paragraph_exclusion: Some(pattern.into()),
      ..self
    }
  }

  #[must_use]
  pub fn ticket_link_marker(self, marker: impl Into<String>) -> Self {
    Self {
      inner: ImportOptions {
        ticket_link_marker: marker.into(),
        ..self.inner
      },
      ..self
    }
  }
}
