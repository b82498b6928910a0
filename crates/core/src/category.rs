//! Sidebar categories derived from endpoint ids.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Fixed set of sidebar categories.
///
/// Membership is computed from an endpoint id on demand; nothing stores it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    User,
    Post,
    Comment,
    Authentication,
}

impl Category {
    /// Sidebar order.
    pub const ALL_VARIANTS: &'static [Category] =
        &[Category::User, Category::Post, Category::Comment, Category::Authentication];

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match *self {
            Self::User => "User",
            Self::Post => "Post",
            Self::Comment => "Comment",
            Self::Authentication => "Authentication",
        }
    }

    /// Substrings of an endpoint id that place it in this category.
    #[must_use]
    pub const fn keywords(&self) -> &'static [&'static str] {
        match *self {
            Self::User => &["user"],
            Self::Post => &["post"],
            Self::Comment => &["comment"],
            Self::Authentication => &["auth", "login", "token"],
        }
    }

    /// Icon name rendered next to the section heading.
    #[must_use]
    pub const fn icon(&self) -> &'static str {
        match *self {
            Self::User => "users",
            Self::Post => "file-text",
            Self::Comment => "message-square",
            Self::Authentication => "lock",
        }
    }

    /// Case-sensitive substring test against the endpoint id.
    #[must_use]
    pub fn matches(&self, id: &str) -> bool {
        self.keywords().iter().any(|keyword| id.contains(keyword))
    }

    /// Every category whose predicate accepts `id`, in sidebar order.
    pub fn for_id(id: &str) -> impl Iterator<Item = Category> + '_ {
        Self::ALL_VARIANTS.iter().copied().filter(move |category| category.matches(id))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
