use super::*;

/// Assembles the hero and disclaimer-reference sections, detached from the
/// document.
pub struct BuildSectionsStage;

impl Stage for BuildSectionsStage {
  fn run(&mut self, context: &mut Context<'_>) -> Result {
    let sections = vec![
      Self::hero(context.event_info(), context.paragraphs()),
      Self::disclaimer_reference(&context.options().disclaimer_path),
    ];

    debug!(
      url = context.url(),
      sections = sections.len(),
      "built event sections"
    );

    context.set_sections(sections);

    Ok(())
  }
}

impl BuildSectionsStage {
  const HERO_BLOCK: &'static str = "Hero";

  const SECTION_METADATA_BLOCK: &'static str = "Section Metadata";

  fn disclaimer_reference(path: &str) -> Section {
    Section::new(
      SectionKind::DisclaimerReference,
      vec![Content::Reference(path.to_string())],
    )
  }

  fn hero(event_info: &EventInfo, paragraphs: &[Paragraph]) -> Section {
    let image_row = event_info
      .hero_image()
      .map(|image| vec![Cell::Markup(image.to_string())]);

    let mut content =
      vec![Content::Block(Block::new(Self::HERO_BLOCK).rows(image_row))];

    content.extend(
      event_info
        .heading()
        .map(|heading| Content::Markup(heading.to_string())),
    );

    content.extend(
      paragraphs
        .iter()
        .map(|paragraph| Content::Markup(paragraph.markup.clone())),
    );

    content.push(Content::Block(
      Block::new(Self::SECTION_METADATA_BLOCK).row(vec![
        Cell::Text("text-align".into()),
        Cell::Text("center".into()),
      ]),
    ));

    Section::new(SectionKind::Hero, content)
  }
}
