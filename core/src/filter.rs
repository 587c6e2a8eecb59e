use std::collections::HashSet;
use std::fmt;

use crate::content::Project;

pub const ALL_TAGS_LABEL: &str = "All";

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum TagFilter {
    #[default]
    All,
    Tag(String),
}

impl TagFilter {
    pub fn label(&self) -> &str {
        match self {
            TagFilter::All => ALL_TAGS_LABEL,
            TagFilter::Tag(tag) => tag,
        }
    }

    pub fn matches(&self, project: &Project) -> bool {
        match self {
            TagFilter::All => true,
            TagFilter::Tag(tag) => project.tags.iter().any(|entry| *entry == tag.as_str()),
        }
    }
}

impl fmt::Display for TagFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub fn visible_projects<'a>(all: &'a [Project], filter: &TagFilter) -> Vec<&'a Project> {
    all.iter().filter(|project| filter.matches(project)).collect()
}

pub fn tag_vocabulary(all: &[Project]) -> Vec<TagFilter> {
    let mut seen = HashSet::new();
    let mut vocabulary = vec![TagFilter::All];
    for tag in all.iter().flat_map(|project| project.tags.iter().copied()) {
        if tag == ALL_TAGS_LABEL || !seen.insert(tag) {
            continue;
        }
        vocabulary.push(TagFilter::Tag(tag.to_string()));
    }
    vocabulary
}
