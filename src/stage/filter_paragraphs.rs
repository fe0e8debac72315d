use super::*;

/// Selects the body paragraphs worth carrying into the hero section.
pub struct FilterParagraphsStage;

impl Stage for FilterParagraphsStage {
  fn run(&mut self, context: &mut Context<'_>) -> Result {
    let options = context.options();

    let paragraphs = Self::filter(&context.document(), options);

    debug!(retained = paragraphs.len(), "filtered body paragraphs");

    context.set_paragraphs(paragraphs);

    Ok(())
  }
}

impl FilterParagraphsStage {
  fn filter(
    document: &Document<'_>,
    options: &ImportOptions,
  ) -> Vec<Paragraph> {
    document
      .select("body p")
      .nodes()
      .iter()
      .filter(|paragraph| Self::is_retained(paragraph, options))
      .map(|paragraph| Paragraph {
        markup: paragraph.html().to_string(),
        text: normalize_text(&paragraph.text()),
      })
      .collect()
  }

  fn has_ticket_link(paragraph: &NodeRef<'_>, marker: &str) -> bool {
    Selection::from(paragraph.clone())
      .select("a[href]")
      .nodes()
      .iter()
      .any(|link| {
        link
          .attr("href")
          .is_some_and(|href| is_ticket_link(&href, marker))
      })
  }

  fn is_retained(paragraph: &NodeRef<'_>, options: &ImportOptions) -> bool {
    predicate::is_retained_paragraph_text(&paragraph.text(), options)
      && !Self::has_ticket_link(paragraph, &options.ticket_link_marker)
  }
}
