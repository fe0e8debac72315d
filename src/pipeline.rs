use super::*;

pub(crate) struct Pipeline<'a> {
  context: Context<'a>,
  stages: Vec<Box<dyn Stage + 'a>>,
}

impl<'a> Pipeline<'a> {
  fn add_stage(&mut self, stage: Box<dyn Stage + 'a>) {
    self.stages.push(stage);
  }

  pub(crate) fn new(context: Context<'a>) -> Self {
    Self {
      context,
      stages: Vec::new(),
    }
  }

  pub(crate) fn run(mut self) -> Result<Context<'a>> {
    for stage in &mut self.stages {
      stage.run(&mut self.context)?;
    }

    Ok(self.context)
  }

  /// Stages rebuilding an event page, in execution order.
  pub(crate) fn with_default_stages(context: Context<'a>) -> Self {
    let mut pipeline = Self::new(context);

    pipeline.add_stage(Box::new(RemoveNoiseStage));
    pipeline.add_stage(Box::new(ExtractEventMetadataStage));
    pipeline.add_stage(Box::new(FilterParagraphsStage));
    pipeline.add_stage(Box::new(BuildSectionsStage));
    pipeline.add_stage(Box::new(SpliceSectionsStage));
    pipeline.add_stage(Box::new(EmitMetadataBlockStage));

    pipeline
  }
}
