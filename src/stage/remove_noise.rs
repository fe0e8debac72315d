use super::*;

/// Strips page chrome and non-rendering elements before extraction.
pub struct RemoveNoiseStage;

impl Stage for RemoveNoiseStage {
  fn run(&mut self, context: &mut Context<'_>) -> Result {
    let selectors = &context.options().noise_selectors;

    let mut document = context.document();

    let removed = selectors
      .iter()
      .map(|selector| document.remove_elements(selector))
      .sum::<usize>();

    debug!(removed, "stripped noise elements");

    Ok(())
  }
}
