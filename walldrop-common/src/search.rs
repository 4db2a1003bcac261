//! Parameters of a single search against the gallery.
use serde::{Deserialize, Serialize};
use std::fmt::Display;

use crate::wallpaper::{category::Categories, purity::PurityFilter, resolution::Resolution};

/// Number of entries the search page lists when a page is full.
pub const PAGE_SIZE: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sorting {
    Relevance,
    Random,
    DateAdded,
    Views,
    Favorites,
    Toplist,
}

impl Display for Sorting {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Relevance => write!(f, "relevance"),
            Self::Random => write!(f, "random"),
            Self::DateAdded => write!(f, "date_added"),
            Self::Views => write!(f, "views"),
            Self::Favorites => write!(f, "favorites"),
            Self::Toplist => write!(f, "toplist"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Order {
    Desc,
    Asc,
}

impl Display for Order {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Desc => write!(f, "desc"),
            Self::Asc => write!(f, "asc"),
        }
    }
}

/// Filters for one search. The page number is passed separately since the same query is reused
/// while paginating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub query: String,
    pub categories: Categories,
    pub purity: PurityFilter,
    pub sorting: Sorting,
    pub order: Order,
    pub resolutions: Vec<Resolution>,
    /// Aspect ratios in the `WxH` form, e.g. `16x9`.
    pub ratios: Vec<String>,
}

impl SearchQuery {
    /// Query used to mirror a subscribed tag: the quoted `"#<tag>"` literal, every category, SFW
    /// only, newest first.
    pub fn subscribed_tag(tag: &str) -> Self {
        Self {
            query: format!("\"#{}\"", tag),
            categories: Categories::all(),
            purity: PurityFilter::SFW,
            sorting: Sorting::DateAdded,
            order: Order::Desc,
            resolutions: Vec::new(),
            ratios: Vec::new(),
        }
    }

    /// Query string pairs for the requested `page`.
    pub fn query_params(&self, page: u16) -> Vec<(&'static str, String)> {
        let resolutions: Vec<String> = self.resolutions.iter().map(|r| r.to_string()).collect();

        vec![
            ("q", self.query.clone()),
            ("categories", self.categories.to_query_value()),
            ("purity", self.purity.to_query_value()),
            ("sorting", self.sorting.to_string()),
            ("order", self.order.to_string()),
            ("resolutions", resolutions.join(",")),
            ("ratios", self.ratios.join(",")),
            ("page", page.to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subscribed_tag_query_shape() {
        let query = SearchQuery::subscribed_tag("Youjo Senki");
        let params = query.query_params(3);

        assert_eq!(
            params,
            vec![
                ("q", String::from("\"#Youjo Senki\"")),
                ("categories", String::from("111")),
                ("purity", String::from("100")),
                ("sorting", String::from("date_added")),
                ("order", String::from("desc")),
                ("resolutions", String::new()),
                ("ratios", String::new()),
                ("page", String::from("3")),
            ]
        );
    }

    #[test]
    fn lists_are_comma_joined() {
        let mut query = SearchQuery::subscribed_tag("mecha");
        query.resolutions = vec![Resolution::new(1920, 1080), Resolution::new(1280, 720)];
        query.ratios = vec![String::from("16x9"), String::from("4x3")];

        let params = query.query_params(1);

        assert!(params.contains(&("resolutions", String::from("1920x1080,1280x720"))));
        assert!(params.contains(&("ratios", String::from("16x9,4x3"))));
    }
}
