/// A body paragraph that survived filtering, cloned out of the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Paragraph {
  pub(crate) markup: String,
  pub(crate) text: String,
}
