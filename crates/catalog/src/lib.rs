//! Tag vocabulary and the filter/sort view over the project list. Everything
//! here is pure: callers own the state and recompute the view on change.

use content::domain::Project;
use unicode_normalization::UnicodeNormalization;

/// Sentinel tag meaning "no filtering". Always first in the vocabulary and
/// never duplicated, even if a project authors a literal "All" tag.
pub const ALL_TAG: &str = "All";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    #[default]
    Featured,
    Name,
}

impl SortMode {
    pub const ALL: [SortMode; 2] = [SortMode::Featured, SortMode::Name];

    pub fn label(self) -> &'static str {
        match self {
            SortMode::Featured => "Featured",
            SortMode::Name => "Name",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogState {
    pub selected_tag: String,
    pub sort: SortMode,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self {
            selected_tag: ALL_TAG.to_string(),
            sort: SortMode::Featured,
        }
    }
}

impl CatalogState {
    pub fn select_tag(&mut self, tag: &str) {
        self.selected_tag = tag.to_string();
    }
}

/// Deduplicated union of all project tags in first-seen order, sentinel
/// forced first.
pub fn tag_vocabulary(projects: &[Project]) -> Vec<String> {
    let mut vocabulary = vec![ALL_TAG.to_string()];
    for project in projects {
        for tag in &project.tags {
            if !vocabulary.iter().any(|known| known == tag) {
                vocabulary.push(tag.clone());
            }
        }
    }
    vocabulary
}

/// Projects retained by the selected tag, ordered per the sort mode.
/// `Featured` keeps source order; `Name` sorts by collation key with a
/// stable sort, so equal keys also keep source order.
pub fn visible_projects<'a>(projects: &'a [Project], state: &CatalogState) -> Vec<&'a Project> {
    let mut visible: Vec<&Project> = projects
        .iter()
        .filter(|project| {
            state.selected_tag == ALL_TAG
                || project.tags.iter().any(|tag| *tag == state.selected_tag)
        })
        .collect();

    if state.sort == SortMode::Name {
        visible.sort_by_key(|project| collation_key(&project.name));
    }

    visible
}

/// Case- and diacritic-insensitive key: NFKD decomposition with combining
/// marks stripped, then lowercased.
fn collation_key(name: &str) -> String {
    name.nfkd()
        .filter(|c| !unicode_normalization::char::is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
