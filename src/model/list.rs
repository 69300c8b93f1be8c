//! List types.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A list environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListBlock {
    /// Environment kind
    #[serde(default)]
    pub kind: ListKind,

    /// List entries
    #[serde(default)]
    pub items: ListItems,
}

impl ListBlock {
    /// Create a bulleted list.
    pub fn itemize<S: Into<String>>(items: impl IntoIterator<Item = S>) -> Self {
        Self::plain(ListKind::Itemize, items)
    }

    /// Create a numbered list.
    pub fn enumerate<S: Into<String>>(items: impl IntoIterator<Item = S>) -> Self {
        Self::plain(ListKind::Enumerate, items)
    }

    /// Create a list of plain items.
    pub fn plain<S: Into<String>>(kind: ListKind, items: impl IntoIterator<Item = S>) -> Self {
        Self {
            kind,
            items: ListItems::Plain(items.into_iter().map(Into::into).collect()),
        }
    }

    /// Create a description list from term/description pairs.
    ///
    /// Entries keep their insertion order.
    pub fn description<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            kind: ListKind::Description,
            items: ListItems::Descriptive(
                entries
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    /// Override the environment kind.
    pub fn with_kind(mut self, kind: ListKind) -> Self {
        self.kind = kind;
        self
    }

    /// Get the number of entries.
    pub fn len(&self) -> usize {
        match &self.items {
            ListItems::Plain(items) => items.len(),
            ListItems::Descriptive(entries) => entries.len(),
        }
    }

    /// Check if the list has no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// List entries: either plain items or term/description pairs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ListItems {
    /// `\item text`
    Plain(Vec<String>),
    /// `\item[term] description`
    Descriptive(IndexMap<String, String>),
}

impl Default for ListItems {
    fn default() -> Self {
        ListItems::Plain(Vec::new())
    }
}

/// List environment kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListKind {
    /// Bulleted list
    #[default]
    Itemize,
    /// Numbered list
    Enumerate,
    /// Term/description list
    Description,
}

impl ListKind {
    /// Get the LaTeX environment name.
    pub fn environment(&self) -> &'static str {
        match self {
            ListKind::Itemize => "itemize",
            ListKind::Enumerate => "enumerate",
            ListKind::Description => "description",
        }
    }
}
