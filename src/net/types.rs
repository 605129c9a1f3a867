//! Wire DTOs for the GraphQL boundary.
//!
//! DESIGN
//! ======
//! These types mirror backend payloads field-for-field (camelCase on the
//! wire) so serde round-trips stay lossless. List payloads are owned,
//! read-only copies; the client never mutates them in place: updated lists
//! are rebuilt and swapped whole.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Token envelope returned by `login`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AuthPayload {
    /// Opaque signed bearer token issued by the identity provider.
    pub token: String,
}

/// Acknowledgement shape shared by several mutations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct Acknowledged {
    pub success: bool,
}

/// A user account as returned by `getUserByName`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAccount {
    /// Account name (the identity provider subject for newer accounts).
    #[serde(default)]
    pub name: String,
    /// Topics the user wants their feed and challenges drawn from.
    #[serde(default)]
    pub topics: Vec<String>,
    /// Whether today's challenge is still open for this user.
    #[serde(default)]
    pub daily_challenge_available: bool,
    /// AI roadmap generations left on the current plan.
    #[serde(default)]
    pub gen_usages_remaining: i32,
    /// Course/roadmap creations left on the current plan.
    #[serde(default)]
    pub creations_remaining: i32,
}

/// A course in the catalog.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// External location of the actual course content.
    #[serde(default)]
    pub url: String,
    /// Hosting platform, e.g. `"Udemy"` or `"YouTube"`.
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub difficulty: String,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub is_free: bool,
    #[serde(default)]
    pub author: String,
    /// Estimated effort in hours.
    #[serde(default)]
    pub duration: u32,
    #[serde(default)]
    pub language: String,
}

/// Page-based pagination state, passed back and forth verbatim.
///
/// `last_evaluated_key` is an opaque continuation cursor minted by the
/// backend; the client never inspects it. Absent cursor means first page on
/// the way out and final page on the way back.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u32,
    pub per_page: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_evaluated_key: Option<String>,
}

/// One page of the course catalog.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct CoursePage {
    pub courses: Vec<Course>,
    pub pagination: Pagination,
}

/// An ordered learning path over the course catalog.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Roadmap {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub description: String,
    /// Course ids in prescribed learning order.
    #[serde(rename = "courseIDs", default)]
    pub course_ids: Vec<String>,
    /// Resolved courses, same order as `course_ids`; populated only when
    /// the roadmap is fetched expanded (detail view, generation result).
    #[serde(default)]
    pub courses: Vec<Course>,
    #[serde(default)]
    pub topics: Vec<String>,
    /// Whether this roadmap was user-assembled rather than curated.
    #[serde(default)]
    pub is_custom: bool,
    #[serde(default)]
    pub created_by: String,
    #[serde(default)]
    pub likes: i64,
    #[serde(default)]
    pub difficulty: String,
    /// Whether the viewer has liked this roadmap (feed queries only).
    #[serde(default)]
    pub liked: bool,
    /// Hosted thumbnail URL, empty when none was uploaded.
    #[serde(default)]
    pub image_url: String,
}

/// Input shape for `upsertRoadmap`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapInput {
    pub id: String,
    pub title: String,
    pub author: String,
    pub description: String,
    #[serde(rename = "courseIDs")]
    pub course_ids: Vec<String>,
    pub topics: Vec<String>,
    pub is_custom: bool,
    pub created_by: String,
    pub likes: i64,
    pub difficulty: String,
    pub image_url: String,
}

/// A named learning topic.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub name: String,
}

/// Today's challenge question for the current user.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ChallengeQuestion {
    pub question: String,
    #[serde(default)]
    pub categories: Vec<String>,
    /// Question style, e.g. `"open"`; informational only.
    #[serde(rename = "type", default)]
    pub kind: String,
}

/// Backend verdict on a submitted challenge answer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ChallengeOutcome {
    /// Rating on a 0–10 scale; 6 and above counts as a pass.
    #[serde(default)]
    pub rating: i32,
    /// Short feedback text explaining the rating.
    #[serde(default)]
    pub insight: String,
    /// Submissions remaining today.
    #[serde(default)]
    pub left: i32,
}
