use super::*;

/// A value extracted from an event page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum EventValue {
  /// Serialized markup of an element cloned from the page.
  Element(String),
  Text(String),
}

impl EventValue {
  pub(crate) fn into_cell(self) -> Cell {
    match self {
      Self::Element(markup) => Cell::Markup(markup),
      Self::Text(text) => Cell::Text(text),
    }
  }
}

/// Structured fields extracted from an event page.
///
/// Absent signals are left as `None` and omitted from the metadata block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventInfo {
  pub title: Option<String>,
  pub image: Option<EventValue>,
  pub description: Option<String>,
  pub dates: Option<String>,
  pub location: Option<String>,
  /// Markup of the page's primary heading, reused by the hero section.
  #[serde(skip)]
  pub(crate) heading: Option<String>,
}

impl EventInfo {
  /// Field name and value pairs in metadata block order, skipping absent
  /// fields.
  pub fn fields(&self) -> Vec<(&'static str, EventValue)> {
    let text = |value: &Option<String>| value.clone().map(EventValue::Text);

    [
      ("Title", text(&self.title)),
      ("Image", self.image.clone()),
      ("Description", text(&self.description)),
      ("Dates", text(&self.dates)),
      ("Location", text(&self.location)),
    ]
    .into_iter()
    .filter_map(|(name, value)| value.map(|value| (name, value)))
    .collect()
  }

  pub(crate) fn heading(&self) -> Option<&str> {
    self.heading.as_deref()
  }

  /// Markup of the hero image, when the page had one.
  pub(crate) fn hero_image(&self) -> Option<&str> {
    match &self.image {
      Some(EventValue::Element(markup)) => Some(markup.as_str()),
      _ => None,
    }
  }
}
