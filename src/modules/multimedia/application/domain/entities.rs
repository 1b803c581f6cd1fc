use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// The kinds of content a media item can be attached to.
///
/// Each kind owns its own join table with an identical shape
/// (`<parent>_id`, `media_id`, `position`), so every ordering rule is
/// written once and bound to a table through this enum.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ParentKind {
    Gallery,
    Project,
}

impl ParentKind {
    /// Join table holding `(parent, media) -> position`.
    pub fn join_table(&self) -> &'static str {
        match self {
            ParentKind::Gallery => "gallery_media",
            ParentKind::Project => "project_media",
        }
    }

    /// Foreign key column of the parent inside the join table.
    pub fn parent_column(&self) -> &'static str {
        match self {
            ParentKind::Gallery => "gallery_id",
            ParentKind::Project => "project_id",
        }
    }

    /// Table holding the parent rows (and their cover image reference).
    pub fn parent_table(&self) -> &'static str {
        match self {
            ParentKind::Gallery => "galleries",
            ParentKind::Project => "projects",
        }
    }

    /// First key of the transaction-scoped advisory lock taken before
    /// touching the positions of one parent.
    pub fn lock_namespace(&self) -> i32 {
        match self {
            ParentKind::Gallery => 1,
            ParentKind::Project => 2,
        }
    }

    /// Parses the plural URL segment used by the HTTP routes.
    pub fn from_path_segment(segment: &str) -> Option<Self> {
        match segment {
            "galleries" => Some(ParentKind::Gallery),
            "projects" => Some(ParentKind::Project),
            _ => None,
        }
    }
}

impl fmt::Display for ParentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ParentKind::Gallery => "gallery",
            ParentKind::Project => "project",
        };
        write!(f, "{s}")
    }
}

/// A concrete gallery or project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ParentRef {
    pub kind: ParentKind,
    pub id: i32,
}

impl ParentRef {
    pub fn new(kind: ParentKind, id: i32) -> Self {
        Self { kind, id }
    }

    pub fn gallery(id: i32) -> Self {
        Self::new(ParentKind::Gallery, id)
    }

    pub fn project(id: i32) -> Self {
        Self::new(ParentKind::Project, id)
    }
}

impl fmt::Display for ParentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.id)
    }
}

/// Position of one attached media item inside its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AttachmentPosition {
    pub media_id: i32,
    pub position: i32,
}

/// An uploaded asset as seen by the attachment subsystem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MediaItem {
    pub id: i32,
    pub file_name: String,
    pub full_url: String,
    pub thumbnail_url: Option<String>,
    pub embed_url: Option<String>,
    pub mime_type: Option<String>,
}

/// A media item together with its position inside one parent.
///
/// `position` is a sort key. Unlinking leaves gaps, so it must never be used
/// as an index into the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AttachedMedia {
    #[serde(flatten)]
    pub media: MediaItem,
    pub position: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PageRequest {
    pub page: u32,
    pub per_page: u32,
}

impl PageRequest {
    pub const MAX_PER_PAGE: u32 = 100;
    pub const DEFAULT_PER_PAGE: u32 = 24;

    pub fn new(page: u32, per_page: u32) -> Self {
        Self { page, per_page }
    }

    pub fn is_valid(&self) -> bool {
        self.page >= 1 && (1..=Self::MAX_PER_PAGE).contains(&self.per_page)
    }

    pub fn limit(&self) -> i64 {
        i64::from(self.per_page)
    }

    pub fn offset(&self) -> i64 {
        i64::from(self.page.saturating_sub(1)) * i64::from(self.per_page)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: Self::DEFAULT_PER_PAGE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub per_page: u32,
    pub total: u64,
}
