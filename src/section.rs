use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SectionKind {
  DisclaimerReference,
  Hero,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Content {
  Block(Block),
  /// Serialized markup cloned out of the source page.
  Markup(String),
  /// A level-three heading linking to a shared fragment path.
  Reference(String),
}

impl Content {
  fn reference<'a>(tree: &'a Tree, path: &str) -> NodeRef<'a> {
    let heading = tree.new_element("h3");

    let link = tree.new_element("a");

    link.set_attr("href", path);
    link.append_child(&tree.new_text(path));
    heading.append_child(&link);

    heading
  }
}

/// An ordered run of content built as one top-level section container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Section {
  content: Vec<Content>,
  kind: SectionKind,
}

impl Section {
  /// Builds the detached `<div>` container for this section in `tree`.
  pub(crate) fn build<'a>(&self, tree: &'a Tree) -> NodeRef<'a> {
    let container = tree.new_element("div");

    for content in &self.content {
      match content {
        Content::Block(block) => container.append_child(&block.build(tree)),
        Content::Markup(markup) => container.append_html(markup.as_str()),
        Content::Reference(path) => {
          container.append_child(&Content::reference(tree, path));
        }
      }
    }

    container
  }

  pub(crate) fn kind(&self) -> SectionKind {
    self.kind
  }

  pub(crate) fn new(kind: SectionKind, content: Vec<Content>) -> Self {
    Self { content, kind }
  }
}
