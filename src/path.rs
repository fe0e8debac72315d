use super::*;

/// Derives the document path for a page: the URL path with a trailing
/// `.html` removed.
pub fn generate_document_path(url: &str) -> Result<String> {
  let url = Url::parse(url)?;

  let path = url.path();

  Ok(path.strip_suffix(".html").unwrap_or(path).to_string())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn strips_html_extension() {
    assert_eq!(
      generate_document_path("https://example.com/events/show.html").unwrap(),
      "/events/show"
    );
  }

  #[test]
  fn keeps_extensionless_paths() {
    assert_eq!(
      generate_document_path("https://example.com/events/show").unwrap(),
      "/events/show"
    );
  }

  #[test]
  fn keeps_other_extensions() {
    assert_eq!(
      generate_document_path("https://example.com/events/show.htm").unwrap(),
      "/events/show.htm"
    );
    assert_eq!(
      generate_document_path("https://example.com/events/").unwrap(),
      "/events/"
    );
  }

  #[test]
  fn ignores_query_and_fragment() {
    assert_eq!(
      generate_document_path(
        "https://example.com/events/show.html?ref=home#tickets"
      )
      .unwrap(),
      "/events/show"
    );
  }

  #[test]
  fn only_strips_trailing_extension() {
    assert_eq!(
      generate_document_path("https://example.com/a.html/b").unwrap(),
      "/a.html/b"
    );
  }

  #[test]
  fn rejects_relative_urls() {
    assert!(matches!(
      generate_document_path("/events/show.html"),
      Err(Error::InvalidUrl { .. })
    ));
  }
}
