use super::*;

/// The outcome of importing one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Import {
  /// Serialized root element handed to downstream conversion.
  pub content: String,
  /// Extracted fields, present only for restructured event pages.
  pub event: Option<EventInfo>,
  pub path: String,
}
