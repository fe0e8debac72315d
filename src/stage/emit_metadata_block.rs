use super::*;

/// Appends the page metadata block after the rebuilt sections.
pub struct EmitMetadataBlockStage;

impl Stage for EmitMetadataBlockStage {
  fn run(&mut self, context: &mut Context<'_>) -> Result {
    let description = context
      .lead_paragraph()
      .map(|paragraph| paragraph.text.clone());

    let event_info = EventInfo {
      description,
      ..context.take_event_info()
    };

    let block = Self::block(&event_info);

    {
      let document = context.document();

      let body = document.body().ok_or(Error::MissingBody)?;

      body.append_child(&block.build(document.tree()));
    }

    debug!(
      fields = event_info.fields().len(),
      "emitted metadata block"
    );

    context.set_event_info(event_info);

    Ok(())
  }
}

impl EmitMetadataBlockStage {
  const METADATA_BLOCK: &'static str = "Metadata";

  fn block(event_info: &EventInfo) -> Block {
    Block::new(Self::METADATA_BLOCK).rows(event_info.fields().into_iter().map(
      |(name, value)| vec![Cell::Text(name.to_string()), value.into_cell()],
    ))
  }
}
