//! One data row of a Scenario Outline's Examples table.

/// Column holding the tags of the Examples block a row came from.
///
/// The tags are rendered as one string: the first tag's bare name, then every
/// further tag prefixed with `" @"`, so `@smoke @slow` becomes `"smoke @slow"`.
pub const EXAMPLE_TAGS_KEY: &str = "__EXAMPLE_TAGS";

/// Values of one Examples row keyed by column header.
///
/// Columns keep table order and are unique. The [`EXAMPLE_TAGS_KEY`] column
/// is always present and always last.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Example {
    values: Vec<(String, String)>,
}

impl Example {
    /// Pair `columns` with `cells` and append the block's tag column.
    ///
    /// Extra columns or extra cells are ignored.
    pub(crate) fn new<'a>(
        columns: impl IntoIterator<Item = &'a String>,
        cells: impl IntoIterator<Item = &'a String>,
        block_tags: &str,
    ) -> Self {
        let mut values: Vec<(String, String)> = columns
            .into_iter()
            .zip(cells)
            .map(|(column, cell)| (column.clone(), cell.clone()))
            .collect();
        values.push((EXAMPLE_TAGS_KEY.to_owned(), block_tags.to_owned()));
        Self { values }
    }

    /// Value of `column`, including [`EXAMPLE_TAGS_KEY`].
    #[must_use]
    pub fn get(&self, column: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(key, _)| key == column)
            .map(|(_, value)| value.as_str())
    }

    /// Table columns in order, without the tag column.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.cells().map(|(column, _)| column)
    }

    /// `(column, value)` pairs in order, without the tag column.
    pub fn cells(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries().filter(|(column, _)| *column != EXAMPLE_TAGS_KEY)
    }

    /// Every `(column, value)` pair in order, ending with the tag column.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values
            .iter()
            .map(|(column, value)| (column.as_str(), value.as_str()))
    }

    /// The rendered tag column.
    #[must_use]
    pub fn tags(&self) -> &str {
        self.get(EXAMPLE_TAGS_KEY).unwrap_or_default()
    }

    /// Tag names of the Examples block this row came from.
    ///
    /// # Examples
    /// ```
    /// let feature = capriccio::parse(
    ///     "Feature: F\nScenario Outline: O\nGiven <x>\n@smoke @slow\nExamples:\n| x |\n| 1 |\n",
    /// )
    /// .unwrap_or_else(|err| panic!("{err}"));
    /// let outline = feature.outlines().next().unwrap_or_else(|| panic!("outline"));
    /// let example = outline.examples.first().unwrap_or_else(|| panic!("example"));
    /// assert_eq!(example.tags(), "smoke @slow");
    /// assert_eq!(example.tag_names(), vec!["smoke", "slow"]);
    /// ```
    #[must_use]
    pub fn tag_names(&self) -> Vec<&str> {
        let tags = self.tags();
        if tags.is_empty() {
            return Vec::new();
        }
        tags.split(" @").collect()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Example {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (column, value) in self.entries() {
            map.serialize_entry(column, value)?;
        }
        map.end()
    }
}
