use super::*;

pub(crate) struct Context<'a> {
  event_info: EventInfo,
  html: &'a mut dom_query::Document,
  options: &'a ImportOptions,
  paragraphs: Vec<Paragraph>,
  sections: Vec<Section>,
  url: &'a str,
}

impl<'a> Context<'a> {
  pub(crate) fn document(&mut self) -> Document<'_> {
    Document::new(&mut *self.html)
  }

  pub(crate) fn event_info(&self) -> &EventInfo {
    &self.event_info
  }

  /// The first retained body paragraph, if any survived filtering.
  pub(crate) fn lead_paragraph(&self) -> Option<&Paragraph> {
    self.paragraphs.first()
  }

  pub(crate) fn new(
    html: &'a mut dom_query::Document,
    url: &'a str,
    options: &'a ImportOptions,
  ) -> Self {
    Self {
      event_info: EventInfo::default(),
      html,
      options,
      paragraphs: Vec::new(),
      sections: Vec::new(),
      url,
    }
  }

  pub(crate) fn options(&self) -> &'a ImportOptions {
    self.options
  }

  pub(crate) fn paragraphs(&self) -> &[Paragraph] {
    &self.paragraphs
  }

  pub(crate) fn sections(&self) -> &[Section] {
    &self.sections
  }

  pub(crate) fn set_event_info(&mut self, event_info: EventInfo) {
    self.event_info = event_info;
  }

  pub(crate) fn set_paragraphs(&mut self, paragraphs: Vec<Paragraph>) {
    self.paragraphs = paragraphs;
  }

  pub(crate) fn set_sections(&mut self, sections: Vec<Section>) {
    self.sections = sections;
  }

  pub(crate) fn take_event_info(&mut self) -> EventInfo {
    mem::take(&mut self.event_info)
  }

  pub(crate) fn url(&self) -> &str {
    self.url
  }
}
