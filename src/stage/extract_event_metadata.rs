use super::*;

/// Collects event fields from the cleaned page without mutating it.
pub struct ExtractEventMetadataStage;

impl Stage for ExtractEventMetadataStage {
  fn run(&mut self, context: &mut Context<'_>) -> Result {
    let event_info = Self::extract(&context.document());

    debug!(
      title = event_info.title.as_deref(),
      image = event_info.image.is_some(),
      dates = event_info.dates.as_deref(),
      location = event_info.location.as_deref(),
      "extracted event metadata"
    );

    context.set_event_info(event_info);

    Ok(())
  }
}

impl ExtractEventMetadataStage {
  const HEADING_SELECTORS: [&'static str; 2] = ["h1", "h2"];

  const IMAGE_KEYS: [&'static str; 2] = ["og:image", "twitter:image"];

  const MAX_SHORT_TEXT_LENGTH: usize = 200;

  const TITLE_KEYS: [&'static str; 2] = ["og:title", "twitter:title"];

  fn extract(document: &Document<'_>) -> EventInfo {
    let heading = document.first_of(&Self::HEADING_SELECTORS);

    let title = heading
      .as_ref()
      .map(|heading| normalize_text(&heading.text()))
      .filter(|title| !title.is_empty())
      .or_else(|| document.meta_content(&Self::TITLE_KEYS))
      .or_else(|| document.title());

    let image = Self::find_hero_image(document)
      .map(EventValue::Element)
      .or_else(|| {
        document
          .meta_content(&Self::IMAGE_KEYS)
          .map(EventValue::Text)
      });

    EventInfo {
      title,
      image,
      description: None,
      dates: Self::find_dates(document),
      location: Self::find_hinted_text(document, &re::LOCATION_HINT),
      heading: heading.map(|heading| heading.html().to_string()),
    }
  }

  /// Walks up from `node` to the nearest `<picture>`, falling back to the
  /// node itself.
  fn enclosing_picture<'a>(node: &NodeRef<'a>) -> NodeRef<'a> {
    if node.node_name().as_deref() == Some("picture") {
      return node.clone();
    }

    node
      .ancestors(None)
      .into_iter()
      .find(|ancestor| ancestor.node_name().as_deref() == Some("picture"))
      .unwrap_or_else(|| node.clone())
  }

  fn find_dates(document: &Document<'_>) -> Option<String> {
    Self::find_hinted_text(document, &re::DATE_HINT)
      .or_else(|| {
        document.first_of(&["time"]).and_then(|time| {
          time
            .attr("datetime")
            .map(|datetime| datetime.trim().to_string())
            .filter(|datetime| !datetime.is_empty())
            .or_else(|| Self::short_text(&time))
        })
      })
      .or_else(|| {
        let body = document.body()?;

        let text = normalize_text(&body.text());

        re::MONTH_DAY_PHRASE
          .find(&text)
          .map(|found| found.as_str().to_string())
      })
  }

  /// Serialized markup of the first hero image candidate in document order.
  fn find_hero_image(document: &Document<'_>) -> Option<String> {
    document
      .elements()
      .into_iter()
      .find(|element| {
        is_hero_image_candidate(
          element.attr("alt").as_deref(),
          element.attr("src").as_deref(),
        )
      })
      .map(|element| Self::enclosing_picture(&element).html().to_string())
  }

  /// Text of the first element whose class or `itemprop` matches `hint`.
  fn find_hinted_text(
    document: &Document<'_>,
    hint: &Regex,
  ) -> Option<String> {
    document.elements().into_iter().find_map(|element| {
      let hinted = ["class", "itemprop"].iter().any(|attribute| {
        element
          .attr(attribute)
          .is_some_and(|value| hint.is_match(&value))
      });

      if hinted {
        Self::short_text(&element)
      } else {
        None
      }
    })
  }

  fn short_text(node: &NodeRef<'_>) -> Option<String> {
    Some(normalize_text(&node.text())).filter(|text| {
      !text.is_empty() && text.chars().count() <= Self::MAX_SHORT_TEXT_LENGTH
    })
  }
}
