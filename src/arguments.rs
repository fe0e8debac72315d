use super::*;

#[derive(Parser)]
#[command(name = "event-importer")]
#[command(
  about = "Rebuild a crawled page into block-based document markup",
  long_about = None
)]
pub(crate) struct Arguments {
  #[arg(value_name = "FILE", help = "Path to the crawled HTML file")]
  input: PathBuf,
  #[arg(long, help = "Print the import result as JSON")]
  json: bool,
  #[arg(
    long = "noise-selector",
    value_name = "SELECTOR",
    help = "Selector to strip before extraction, replacing the defaults"
  )]
  noise_selectors: Vec<String>,
  #[arg(long, help = "URL the page was crawled from")]
  url: String,
}

impl Arguments {
  fn options(&self) -> Result<ImportOptions> {
    let mut builder = ImportOptions::builder();

    if !self.noise_selectors.is_empty() {
      builder = builder.noise_selectors(self.noise_selectors.iter().cloned());
    }

    builder.build().context("invalid import options")
  }

  pub(crate) fn run(self) -> Result {
    let html = fs::read_to_string(&self.input).with_context(|| {
      format!("failed to read file from `{}`", self.input.display())
    })?;

    let importer = Importer::new(self.options()?);

    let import = importer
      .import(&html, &self.url)
      .with_context(|| format!("failed to import `{}`", self.url))?;

    if self.json {
      println!("{}", serde_json::to_string_pretty(&import)?);
    } else {
      println!("{}", import.content);
    }

    Ok(())
  }
}
