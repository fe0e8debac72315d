use super::*;

/// Rebuilds event pages into hero, disclaimer and metadata blocks, passing
/// every other page through untouched.
#[derive(Debug, Clone, Default)]
pub struct Importer {
  options: ImportOptions,
}

impl Importer {
  /// Parses `html`, transforms it and derives its document path.
  pub fn import(&self, html: &str, url: &str) -> Result<Import> {
    let path = generate_document_path(url)?;

    let mut document = dom_query::Document::from(html);

    let (root, event) = self.restructure(&mut document, url, html)?;

    Ok(Import {
      content: root.html().to_string(),
      event,
      path,
    })
  }

  pub fn is_event_page(&self, url: &str) -> bool {
    is_event_url(url, &self.options.event_url_patterns)
  }

  #[must_use]
  pub fn new(options: ImportOptions) -> Self {
    Self { options }
  }

  pub fn options(&self) -> &ImportOptions {
    &self.options
  }

  /// Transforms an already parsed page and returns its root element.
  ///
  /// Event pages are rebuilt in place. Any other page is returned as its
  /// original `<body>` node, unmodified. `html` is the raw source the
  /// document was parsed from and is not parsed again.
  pub fn transform<'a>(
    &self,
    document: &'a mut dom_query::Document,
    url: &str,
    html: &str,
  ) -> Result<NodeRef<'a>> {
    self.restructure(document, url, html).map(|(root, _)| root)
  }

  fn body(document: &dom_query::Document) -> Result<NodeRef<'_>> {
    document
      .select("body")
      .nodes()
      .first()
      .cloned()
      .ok_or(Error::MissingBody)
  }

  fn restructure<'a>(
    &self,
    document: &'a mut dom_query::Document,
    url: &str,
    html: &str,
  ) -> Result<(NodeRef<'a>, Option<EventInfo>)> {
    if !self.is_event_page(url) {
      info!(url, "passing through non-event page");
      return Ok((Self::body(document)?, None));
    }

    info!(url, bytes = html.len(), "restructuring event page");

    let event_info = Pipeline::with_default_stages(Context::new(
      &mut *document,
      url,
      &self.options,
    ))
    .run()?
    .take_event_info();

    Ok((Self::body(document)?, Some(event_info)))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn non_event_page_returns_original_body() {
    let html = "<html><head></head><body><nav>Menu</nav><p>About us</p></body></html>";

    let mut document = dom_query::Document::from(html);

    let body_id = document.select("body").nodes()[0].id;

    let root = Importer::default()
      .transform(&mut document, "https://example.com/about", html)
      .unwrap();

    assert_eq!(root.id, body_id);
    assert_eq!(
      root.html().to_string(),
      "<body><nav>Menu</nav><p>About us</p></body>"
    );
  }

  #[test]
  fn event_pattern_in_query_does_not_rebuild_page() {
    let html = "<html><head></head><body><nav>Menu</nav><p>About us</p></body></html>";

    let mut document = dom_query::Document::from(html);

    let importer = Importer::default();

    let url = "https://example.com/about?next=/schedule-of-events/x";

    assert!(!importer.is_event_page(url));

    let root = importer.transform(&mut document, url, html).unwrap();

    assert_eq!(
      root.html().to_string(),
      "<body><nav>Menu</nav><p>About us</p></body>"
    );
  }

  #[test]
  fn event_page_returns_rebuilt_body() {
    let html = "<html><head></head><body><h1>Show</h1></body></html>";

    let mut document = dom_query::Document::from(html);

    let body_id = document.select("body").nodes()[0].id;

    let root = Importer::default()
      .transform(
        &mut document,
        "https://example.com/schedule-of-events/show",
        html,
      )
      .unwrap();

    assert_eq!(root.id, body_id);
    assert!(root.html().contains("/fragments/event-disclaimers"));
  }

  #[test]
  fn import_reports_path_and_event() {
    let import = Importer::default()
      .import(
        "<html><body><h1>Show</h1></body></html>",
        "https://example.com/events-and-promotions/show.html",
      )
      .unwrap();

    assert_eq!(import.path, "/events-and-promotions/show");
    assert_eq!(
      import.event.and_then(|event| event.title),
      Some("Show".to_string())
    );
  }

  #[test]
  fn import_skips_event_for_other_pages() {
    let import = Importer::default()
      .import("<html><body><p>Hi</p></body></html>", "https://example.com/")
      .unwrap();

    assert_eq!(import.path, "/");
    assert_eq!(import.event, None);
    assert_eq!(import.content, "<body><p>Hi</p></body>");
  }

  #[test]
  fn import_rejects_invalid_url() {
    assert!(matches!(
      Importer::default().import("<html></html>", "not a url"),
      Err(Error::InvalidUrl { .. })
    ));
  }
}
