use super::*;

/// One cell of a structured block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Cell {
  /// Serialized markup of an element cloned out of the source page.
  Markup(String),
  Text(String),
}

impl Cell {
  fn build<'a>(&self, tree: &'a Tree) -> NodeRef<'a> {
    let cell = tree.new_element("td");

    match self {
      Self::Markup(markup) => cell.append_html(markup.as_str()),
      Self::Text(text) => cell.append_child(&tree.new_text(text.as_str())),
    }

    cell
  }
}

/// A named two-column block, built as a table whose first row holds the
/// block name spanning every column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Block {
  name: String,
  rows: Vec<Vec<Cell>>,
}

impl Block {
  pub(crate) fn new(name: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      rows: Vec::new(),
    }
  }

  /// Builds the detached `<table>` for this block in `tree`.
  pub(crate) fn build<'a>(&self, tree: &'a Tree) -> NodeRef<'a> {
    let columns = self.rows.iter().map(Vec::len).max().unwrap_or(1).max(1);

    let table = tree.new_element("table");

    let tbody = tree.new_element("tbody");

    table.append_child(&tbody);

    let header = tree.new_element("th");

    if columns > 1 {
      header.set_attr("colspan", &columns.to_string());
    }

    header.append_child(&tree.new_text(self.name.as_str()));

    let row = tree.new_element("tr");
    row.append_child(&header);
    tbody.append_child(&row);

    for cells in &self.rows {
      let row = tree.new_element("tr");

      for cell in cells {
        row.append_child(&cell.build(tree));
      }

      tbody.append_child(&row);
    }

    table
  }

  #[must_use]
  pub(crate) fn row(self, cells: Vec<Cell>) -> Self {
    let mut rows = self.rows;
    rows.push(cells);
    Self { rows, ..self }
  }

  #[must_use]
  pub(crate) fn rows<I>(self, rows: I) -> Self
  where
    I: IntoIterator<Item = Vec<Cell>>,
  {
    rows.into_iter().fold(self, Self::row)
  }
}
