use super::*;

pub(crate) struct Document<'a> {
  document: &'a mut dom_query::Document,
}

impl<'a> Document<'a> {
  pub(crate) fn body(&self) -> Option<NodeRef<'_>> {
    self.document.select("body").nodes().first().cloned()
  }

  /// Every element in the document, in document order.
  pub(crate) fn elements(&self) -> Vec<NodeRef<'_>> {
    self
      .document
      .root()
      .descendants()
      .into_iter()
      .filter(NodeRef::is_element)
      .collect()
  }

  /// First element matching any of `selectors`, tried in priority order.
  pub(crate) fn first_of(&self, selectors: &[&str]) -> Option<NodeRef<'_>> {
    selectors.iter().find_map(|selector| {
      self.document.select(selector).nodes().first().cloned()
    })
  }

  /// Content of the first `<meta>` whose `name` or `property` equals one of
  /// `keys`, tried in priority order.
  pub(crate) fn meta_content(&self, keys: &[&str]) -> Option<String> {
    let metas = self.document.select("meta[content]");

    keys.iter().find_map(|key| {
      metas.nodes().iter().find_map(|meta| {
        let matches = ["name", "property"].iter().any(|attribute| {
          meta
            .attr(attribute)
            .is_some_and(|value| value.trim().eq_ignore_ascii_case(key))
        });

        meta
          .attr("content")
          .map(|content| content.trim().to_string())
          .filter(|content| matches && !content.is_empty())
      })
    })
  }

  pub(crate) fn new(document: &'a mut dom_query::Document) -> Self {
    Document { document }
  }

  /// Removes every element matching `selector`, returning how many matched.
  pub(crate) fn remove_elements(&mut self, selector: &str) -> usize {
    let selection = self.document.select(selector);

    let count = selection.length();

    selection.remove();

    count
  }

  pub(crate) fn select(&self, selector: &str) -> Selection<'_> {
    self.document.select(selector)
  }

  pub(crate) fn title(&self) -> Option<String> {
    self
      .first_of(&["title"])
      .map(|title| normalize_text(&title.text()))
      .filter(|title| !title.is_empty())
  }

  pub(crate) fn tree(&self) -> &Tree {
    &self.document.tree
  }
}

/// Trims `text` and collapses internal whitespace runs to single spaces.
pub(crate) fn normalize_text(text: &str) -> String {
  text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn elements_are_listed_in_document_order() {
    let mut document = dom_query::Document::from(
      "<html><body><div><p>One</p></div><span>Two</span></body></html>",
    );

    let document = Document::new(&mut document);

    let names = document
      .elements()
      .iter()
      .filter_map(|node| node.node_name().map(|name| name.to_string()))
      .collect::<Vec<String>>();

    assert_eq!(names, vec!["html", "head", "body", "div", "p", "span"]);
  }

  #[test]
  fn meta_content_prefers_key_order() {
    let mut document = dom_query::Document::from(
      r#"
      <html>
        <head>
          <meta name="twitter:title" content="Twitter Title" />
          <meta property="og:title" content=" OG Title " />
          <meta property="og:image" content="" />
        </head>
        <body></body>
      </html>
      "#,
    );

    let document = Document::new(&mut document);

    assert_eq!(
      document.meta_content(&["og:title", "twitter:title"]),
      Some("OG Title".to_string())
    );
    assert_eq!(document.meta_content(&["og:image"]), None);
  }

  #[test]
  fn remove_elements_reports_match_count() {
    let mut document = dom_query::Document::from(
      "<html><body><nav>A</nav><p>B</p><nav>C</nav></body></html>",
    );

    let mut wrapper = Document::new(&mut document);

    assert_eq!(wrapper.remove_elements("nav"), 2);
    assert_eq!(wrapper.remove_elements("aside"), 0);
    assert_eq!(document.select("nav").length(), 0);
  }

  #[test]
  fn normalize_text_collapses_whitespace() {
    assert_eq!(normalize_text("  Jazz \n\n  Night \t"), "Jazz Night");
  }
}
