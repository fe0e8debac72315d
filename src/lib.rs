use {
  block::{Block, Cell},
  context::Context,
  document::{Document, normalize_text},
  dom_query::{NodeRef, Selection, Tree},
  paragraph::Paragraph,
  pipeline::Pipeline,
  regex::Regex,
  section::{Content, Section, SectionKind},
  serde::{Deserialize, Serialize},
  stage::{
    BuildSectionsStage, EmitMetadataBlockStage, ExtractEventMetadataStage,
    FilterParagraphsStage, RemoveNoiseStage, SpliceSectionsStage, Stage,
  },
  std::{mem, sync::LazyLock},
  tracing::{debug, info},
  url::Url,
};

pub use crate::{
  error::Error,
  event_info::{EventInfo, EventValue},
  import::Import,
  importer::Importer,
  options::{ImportOptions, ImportOptionsBuilder},
  path::generate_document_path,
  predicate::{
    is_event_url, is_excluded_paragraph_text, is_hero_image_candidate,
    is_ticket_link,
  },
};

#[cfg(test)]
macro_rules! test {
  (
    name: $name:ident,
    stage: $stage:expr,
    url: $url:expr,
    content: $content:expr,
    expected: $expected:expr $(,)?
  ) => {
    #[test]
    fn $name() {
      let mut document = dom_query::Document::from($content);

      let options = ImportOptions::default();

      let mut context = Context::new(&mut document, $url, &options);

      $stage.run(&mut context).unwrap();

      pretty_assertions::assert_eq!(
        document.html().to_string(),
        $expected.to_string()
      );
    }
  };
}

mod block;
mod context;
mod document;
mod error;
mod event_info;
mod import;
mod importer;
mod options;
mod paragraph;
mod path;
mod pipeline;
mod predicate;
mod re;
mod section;
mod stage;

pub type Result<T = (), E = Error> = std::result::Result<T, E>;
