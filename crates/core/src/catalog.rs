//! Catalog records (categories, projects, achievements) and the catalog filter.
//!
//! The filter is a pure function of a collection and a [`FilterState`]. It is
//! used by the client-side projects section on every filter change and by the
//! server's list endpoints, so both sides agree on what "matches" means.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::types::{DbId, Timestamp};

/// Color assigned to categories created without one.
pub const DEFAULT_CATEGORY_COLOR: &str = "#007bff";

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: DbId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_color")]
    pub color: String,
}

fn default_color() -> String {
    DEFAULT_CATEGORY_COLOR.to_string()
}

/// A portfolio project.
///
/// `category_id` is the owning reference; `category` is the resolved record,
/// embedded when the project leaves a repository so clients can render the
/// badge without a second lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: DbId,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub demo_url: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default, deserialize_with = "deserialize_technologies")]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub is_published: bool,
    #[serde(default)]
    pub category_id: Option<DbId>,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub likes_count: u64,
    #[serde(default)]
    pub comments_count: u64,
    #[serde(default)]
    pub views: u64,
    pub created_at: Timestamp,
    #[serde(default)]
    pub updated_at: Option<Timestamp>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: DbId,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub certificate_url: Option<String>,
    #[serde(default)]
    pub date_achieved: Option<chrono::NaiveDate>,
    #[serde(default)]
    pub organization: Option<String>,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub is_published: bool,
    #[serde(default)]
    pub category_id: Option<DbId>,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub likes_count: u64,
    #[serde(default)]
    pub comments_count: u64,
    pub created_at: Timestamp,
    #[serde(default)]
    pub updated_at: Option<Timestamp>,
}

// ---------------------------------------------------------------------------
// Technology tags
// ---------------------------------------------------------------------------

/// Parse a stored technology list.
///
/// Accepts a JSON array of strings (`["React", "Node.js"]`) or a
/// comma-separated list (`React, Node.js`). Blank entries are dropped and
/// order is preserved.
pub fn parse_technologies(raw: &str) -> Vec<String> {
    if let Ok(list) = serde_json::from_str::<Vec<String>>(raw) {
        return list
            .into_iter()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect();
    }

    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Serde adapter accepting either a JSON array or an encoded string for
/// `technologies`.
pub fn deserialize_technologies<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        List(Vec<String>),
        Encoded(String),
        Missing(()),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::List(list) => list,
        Raw::Encoded(raw) => parse_technologies(&raw),
        Raw::Missing(()) => Vec::new(),
    })
}

// ---------------------------------------------------------------------------
// Filter state
// ---------------------------------------------------------------------------

/// Category part of the filter: every category, or exactly one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CategorySelection {
    #[default]
    All,
    Category(DbId),
}

impl CategorySelection {
    pub fn matches(self, category_id: Option<DbId>) -> bool {
        match self {
            CategorySelection::All => true,
            CategorySelection::Category(id) => category_id == Some(id),
        }
    }
}

impl From<Option<DbId>> for CategorySelection {
    fn from(id: Option<DbId>) -> Self {
        id.map_or(CategorySelection::All, CategorySelection::Category)
    }
}

impl fmt::Display for CategorySelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategorySelection::All => f.write_str("all"),
            CategorySelection::Category(id) => write!(f, "{id}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid category selection '{0}': expected \"all\" or a category id")]
pub struct InvalidCategorySelection(pub String);

impl FromStr for CategorySelection {
    type Err = InvalidCategorySelection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("all") {
            return Ok(CategorySelection::All);
        }
        s.parse::<DbId>()
            .map(CategorySelection::Category)
            .map_err(|_| InvalidCategorySelection(s.to_string()))
    }
}

/// Everything the catalog filter looks at.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub search: String,
    pub category: CategorySelection,
    pub featured_only: bool,
}

impl FilterState {
    /// True when the filter lets every record through.
    pub fn is_identity(&self) -> bool {
        self.search.is_empty() && self.category == CategorySelection::All && !self.featured_only
    }

    pub fn matches<T: Listing + ?Sized>(&self, item: &T) -> bool {
        Matcher::new(self).matches(item)
    }
}

/// Anything the catalog filter can be applied to.
pub trait Listing {
    fn title(&self) -> &str;
    fn description(&self) -> &str;
    fn category_id(&self) -> Option<DbId>;
    fn is_featured(&self) -> bool;
}

impl Listing for Project {
    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn category_id(&self) -> Option<DbId> {
        self.category_id
    }

    fn is_featured(&self) -> bool {
        self.is_featured
    }
}

impl Listing for Achievement {
    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn category_id(&self) -> Option<DbId> {
        self.category_id
    }

    fn is_featured(&self) -> bool {
        self.is_featured
    }
}

/// A filter state with its search needle lowered once.
struct Matcher<'a> {
    needle: String,
    state: &'a FilterState,
}

impl<'a> Matcher<'a> {
    fn new(state: &'a FilterState) -> Self {
        Self {
            needle: state.search.to_lowercase(),
            state,
        }
    }

    fn matches<T: Listing + ?Sized>(&self, item: &T) -> bool {
        let search = self.needle.is_empty()
            || item.title().to_lowercase().contains(&self.needle)
            || item.description().to_lowercase().contains(&self.needle);

        search
            && self.state.category.matches(item.category_id())
            && (!self.state.featured_only || item.is_featured())
    }
}

/// Return the records matching `state`, in their original order.
pub fn filter<'a, T: Listing>(items: &'a [T], state: &FilterState) -> Vec<&'a T> {
    let matcher = Matcher::new(state);
    items.iter().filter(|item| matcher.matches(*item)).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use chrono::{TimeZone, Utc};

    use super::*;

    fn project(id: DbId, title: &str, category_id: DbId, featured: bool) -> Project {
        Project {
            id,
            title: title.to_string(),
            description: format!("{title} description"),
            content: None,
            image_url: None,
            demo_url: None,
            github_url: None,
            technologies: Vec::new(),
            is_featured: featured,
            is_published: true,
            category_id: Some(category_id),
            category: None,
            likes_count: 0,
            comments_count: 0,
            views: 0,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            updated_at: None,
        }
    }

    fn sample() -> Vec<Project> {
        vec![
            project(1, "Shop", 1, true),
            project(2, "Tasks", 2, false),
            project(3, "Shop Analytics", 3, false),
            project(4, "Pipelines", 1, true),
        ]
    }

    fn ids(found: &[&Project]) -> Vec<DbId> {
        found.iter().map(|p| p.id).collect()
    }

    // -- filter ---------------------------------------------------------------

    #[test]
    fn search_is_case_insensitive_substring() {
        let projects = vec![project(1, "Shop", 1, true), project(2, "Tasks", 2, false)];
        let state = FilterState {
            search: "sho".into(),
            ..FilterState::default()
        };
        assert_eq!(ids(&filter(&projects, &state)), vec![1]);
    }

    #[test]
    fn search_matches_description() {
        let mut projects = sample();
        projects[1].description = "Realtime COLLABORATION".into();
        let state = FilterState {
            search: "collab".into(),
            ..FilterState::default()
        };
        assert_eq!(ids(&filter(&projects, &state)), vec![2]);
    }

    #[test]
    fn identity_filter_returns_everything_in_order() {
        let projects = sample();
        let state = FilterState::default();
        assert!(state.is_identity());
        assert_eq!(ids(&filter(&projects, &state)), vec![1, 2, 3, 4]);
    }

    #[test]
    fn category_and_featured_combine() {
        let projects = sample();
        let state = FilterState {
            search: String::new(),
            category: CategorySelection::Category(1),
            featured_only: true,
        };
        assert_eq!(ids(&filter(&projects, &state)), vec![1, 4]);

        let state = FilterState {
            search: "shop".into(),
            category: CategorySelection::All,
            featured_only: true,
        };
        assert_eq!(ids(&filter(&projects, &state)), vec![1]);
    }

    #[test]
    fn every_result_is_a_member_of_the_collection() {
        let projects = sample();
        let searches = ["", "shop", "zzz", "TASK"];
        let categories = [
            CategorySelection::All,
            CategorySelection::Category(1),
            CategorySelection::Category(9),
        ];
        for search in searches {
            for category in categories {
                for featured_only in [false, true] {
                    let state = FilterState {
                        search: search.into(),
                        category,
                        featured_only,
                    };
                    let found = filter(&projects, &state);
                    assert!(found.len() <= projects.len());
                    for p in found {
                        assert!(projects.iter().any(|q| q == p));
                        assert!(state.matches(p));
                    }
                }
            }
        }
    }

    #[test]
    fn no_match_yields_empty_result() {
        let projects = sample();
        let state = FilterState {
            search: "nothing like this".into(),
            ..FilterState::default()
        };
        assert!(filter(&projects, &state).is_empty());
    }

    #[test]
    fn uncategorised_records_only_match_all() {
        let mut projects = sample();
        projects[0].category_id = None;
        let state = FilterState {
            category: CategorySelection::Category(1),
            ..FilterState::default()
        };
        assert_eq!(ids(&filter(&projects, &state)), vec![4]);
    }

    // -- CategorySelection ----------------------------------------------------

    #[test]
    fn category_selection_parses_all_and_ids() {
        assert_eq!("all".parse::<CategorySelection>(), Ok(CategorySelection::All));
        assert_eq!(
            " 3 ".parse::<CategorySelection>(),
            Ok(CategorySelection::Category(3))
        );
        assert_matches!("web".parse::<CategorySelection>(), Err(_));
        assert_eq!(CategorySelection::Category(3).to_string(), "3");
    }

    // -- technologies ---------------------------------------------------------

    #[test]
    fn technologies_from_json_array() {
        assert_eq!(
            parse_technologies(r#"["React", "Node.js", " "]"#),
            vec!["React", "Node.js"]
        );
    }

    #[test]
    fn technologies_from_comma_list() {
        assert_eq!(
            parse_technologies("Docker, Kubernetes,,AWS"),
            vec!["Docker", "Kubernetes", "AWS"]
        );
    }

    #[test]
    fn project_accepts_encoded_technologies() {
        let json = serde_json::json!({
            "id": 7,
            "title": "Pipeline",
            "description": "CI",
            "technologies": "[\"Docker\", \"Jenkins\"]",
            "created_at": "2024-04-05T16:45:00Z"
        });
        let p: Project = serde_json::from_value(json).unwrap();
        assert_eq!(p.technologies, vec!["Docker", "Jenkins"]);
        assert!(!p.is_featured);
        assert_eq!(p.likes_count, 0);
    }
}
