use super::*;

/// Replaces the body content with the fully built sections in one step.
pub struct SpliceSectionsStage;

impl Stage for SpliceSectionsStage {
  fn run(&mut self, context: &mut Context<'_>) -> Result {
    let sections = context.sections().to_vec();

    let kinds = sections
      .iter()
      .map(Section::kind)
      .collect::<Vec<SectionKind>>();

    let document = context.document();

    let body = document.body().ok_or(Error::MissingBody)?;

    let containers = sections
      .iter()
      .map(|section| section.build(document.tree()))
      .collect::<Vec<NodeRef<'_>>>();

    body.remove_children();

    for container in &containers {
      body.append_child(container);
    }

    debug!(sections = ?kinds, "spliced sections into body");

    Ok(())
  }
}
