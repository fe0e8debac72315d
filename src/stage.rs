use super::*;

mod build_sections;
mod emit_metadata_block;
mod extract_event_metadata;
mod filter_paragraphs;
mod remove_noise;
mod splice_sections;

pub use {
  build_sections::BuildSectionsStage,
  emit_metadata_block::EmitMetadataBlockStage,
  extract_event_metadata::ExtractEventMetadataStage,
  filter_paragraphs::FilterParagraphsStage, remove_noise::RemoveNoiseStage,
  splice_sections::SpliceSectionsStage,
};

pub(crate) trait Stage {
  fn run(&mut self, context: &mut Context<'_>) -> Result;
}
