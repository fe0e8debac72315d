use super::*;

/// Returns `true` when the path of `url` contains any of the event page
/// `patterns`.
///
/// Matching is a plain, case-sensitive substring test. Query strings and
/// fragments never match. An unparseable `url` is matched as given.
pub fn is_event_url<S: AsRef<str>>(url: &str, patterns: &[S]) -> bool {
  let parsed = Url::parse(url).ok();

  let path = parsed.as_ref().map_or(url, Url::path);

  patterns
    .iter()
    .any(|pattern| path.contains(pattern.as_ref()))
}

/// Returns `true` when trimmed paragraph text matches the exclusion pattern.
pub fn is_excluded_paragraph_text(text: &str, pattern: &Regex) -> bool {
  pattern.is_match(text.trim())
}

/// Returns `true` when an `href` points at the ticket vendor named by
/// `marker`.
pub fn is_ticket_link(href: &str, marker: &str) -> bool {
  href.contains(marker)
}

/// Returns `true` for an element carrying a non-empty `alt`, or a `src`
/// pointing at a managed media asset.
pub fn is_hero_image_candidate(alt: Option<&str>, src: Option<&str>) -> bool {
  alt.is_some_and(|alt| !alt.is_empty())
    || src.is_some_and(|src| src.contains("media_"))
}

/// Length is counted in UTF-16 code units, so an astral character such as an
/// emoji counts twice.
pub(crate) fn is_retained_paragraph_text(
  text: &str,
  options: &ImportOptions,
) -> bool {
  let text = text.trim();

  text.encode_utf16().count() > options.min_paragraph_length
    && !is_excluded_paragraph_text(text, &options.paragraph_exclusion)
}

#[cfg(test)]
mod tests {
  use super::*;

  const SIXTY: usize = 60;

  fn pad(prefix: &str) -> String {
    format!("{prefix}{}", "x".repeat(SIXTY - prefix.len()))
  }

  #[test]
  fn event_urls_match_either_pattern() {
    let patterns = ImportOptions::default().event_url_patterns;

    assert!(is_event_url(
      "https://example.com/schedule-of-events/jazz-night",
      &patterns
    ));
    assert!(is_event_url(
      "https://example.com/events-and-promotions/summer",
      &patterns
    ));
    assert!(!is_event_url("https://example.com/about", &patterns));
  }

  #[test]
  fn event_url_matching_is_not_normalized() {
    let patterns = ImportOptions::default().event_url_patterns;

    assert!(!is_event_url(
      "https://example.com/Schedule-Of-Events/jazz",
      &patterns
    ));
    assert!(!is_event_url(
      "https://example.com/schedule-of-events",
      &patterns
    ));
  }

  #[test]
  fn event_url_patterns_only_match_the_path() {
    let patterns = ImportOptions::default().event_url_patterns;

    assert!(!is_event_url(
      "https://example.com/about?next=/schedule-of-events/x",
      &patterns
    ));
    assert!(!is_event_url(
      "https://example.com/about#/events-and-promotions/summer",
      &patterns
    ));
    assert!(is_event_url(
      "https://example.com/schedule-of-events/x?ref=/about",
      &patterns
    ));
  }

  #[test]
  fn unparseable_event_urls_match_as_given() {
    let patterns = ImportOptions::default().event_url_patterns;

    assert!(is_event_url("/schedule-of-events/jazz-night", &patterns));
    assert!(!is_event_url("/about", &patterns));
  }

  #[test]
  fn paragraph_length_counts_utf16_units() {
    let options = ImportOptions::default();

    assert!(!is_retained_paragraph_text(&"🎷".repeat(25), &options));
    assert!(is_retained_paragraph_text(&"🎷".repeat(26), &options));
    assert!(is_retained_paragraph_text(&"é".repeat(51), &options));
    assert!(!is_retained_paragraph_text(&"é".repeat(50), &options));
  }

  #[test]
  fn short_paragraphs_are_dropped() {
    let options = ImportOptions::default();

    assert!(!is_retained_paragraph_text(&"a".repeat(50), &options));
    assert!(is_retained_paragraph_text(&"a".repeat(51), &options));
    assert!(!is_retained_paragraph_text(
      &format!("   {}   ", "a".repeat(50)),
      &options
    ));
  }

  #[test]
  fn purchase_prompts_are_dropped() {
    let options = ImportOptions::default();

    let text = pad("Purchase tickets now");

    assert_eq!(text.chars().count(), SIXTY);
    assert!(!is_retained_paragraph_text(&text, &options));
  }

  #[test]
  fn narrative_paragraphs_are_kept() {
    let options = ImportOptions::default();

    let text = pad("The concert begins");

    assert_eq!(text.chars().count(), SIXTY);
    assert!(is_retained_paragraph_text(&text, &options));
  }

  #[test]
  fn exclusion_applies_to_leading_at_not_trailing_at() {
    let pattern = &ImportOptions::default().paragraph_exclusion;

    assert!(is_excluded_paragraph_text("at The Venue tonight", pattern));
    assert!(!is_excluded_paragraph_text("Doors at 7pm", pattern));
    assert!(is_excluded_paragraph_text("  View tickets", pattern));
    assert!(is_excluded_paragraph_text("On-Sale now", pattern));
  }

  #[test]
  fn ticket_links_are_detected_by_substring() {
    assert!(is_ticket_link(
      "https://www.ticketmaster.com/event/123",
      "ticketmaster"
    ));
    assert!(!is_ticket_link("https://example.com/tickets", "ticketmaster"));
  }

  #[test]
  fn hero_candidates_need_alt_or_media_src() {
    assert!(is_hero_image_candidate(Some("Stage"), None));
    assert!(is_hero_image_candidate(None, Some("/media_1a2b.jpg")));
    assert!(is_hero_image_candidate(Some(""), Some("./media_3c.png")));
    assert!(!is_hero_image_candidate(Some(""), Some("/img/logo.png")));
    assert!(!is_hero_image_candidate(None, None));
  }
}
