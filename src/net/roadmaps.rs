//! Roadmap facade: curated lists, the personalized feed, likes, and the
//! AI-assisted builder call.

use super::auth;
use super::error::ApiError;
use super::graphql;
use super::types::{Roadmap, RoadmapInput};

const GET_ROADMAPS_QUERY: &str = "\
query GetRoadmaps {
    getRoadmaps {
        id title author description courseIDs topics isCustom createdBy likes difficulty liked imageUrl
    }
}";

const GET_ROADMAP_BY_ID_QUERY: &str = "\
query GetRoadmapById($id: String!) {
    getRoadmapById(id: $id) {
        id title author description courseIDs topics isCustom createdBy likes difficulty imageUrl
        courses {
            id title description url source difficulty topics isFree author duration language
        }
    }
}";

const GET_ROADMAPS_BY_USER_QUERY: &str = "\
query GetRoadmapsByUser($userId: String!) {
    getRoadmapsByUser(userId: $userId) {
        id title author description courseIDs topics isCustom createdBy likes difficulty liked imageUrl
    }
}";

const GET_ROADMAP_FEED_QUERY: &str = "\
query GetRoadmapFeed($userId: String!) {
    getRoadmapFeed(userId: $userId) {
        id title author description courseIDs topics isCustom createdBy likes difficulty liked imageUrl
    }
}";

const UPSERT_ROADMAP_MUTATION: &str = "\
mutation UpsertRoadmap($input: RoadmapInput!) {
    upsertRoadmap(input: $input) {
        id
    }
}";

const USER_LIKED_ROADMAP_MUTATION: &str = "\
mutation UserLikedRoadmap($userId: String!, $roadmapId: String!) {
    userLikedRoadmap(userId: $userId, roadmapId: $roadmapId) {
        success
    }
}";

const CUSTOM_ROADMAP_REQUESTED_MUTATION: &str = "\
mutation CustomRoadmapRequested($userId: String!, $prompt: String!) {
    customRoadmapRequested(userId: $userId, prompt: $prompt) {
        id title author description topics isCustom difficulty
        courses {
            id title description url source difficulty topics isFree author duration language
        }
    }
}";

fn viewer_id() -> String {
    auth::current_claims().map(|c| c.subject_id).unwrap_or_default()
}

/// All curated roadmaps.
///
/// # Errors
///
/// Propagates transport and decode failures from the GraphQL layer.
pub async fn get_roadmaps() -> Result<Vec<Roadmap>, ApiError> {
    let data = graphql::execute(GET_ROADMAPS_QUERY, serde_json::json!({})).await?;
    graphql::decode_field(data, "getRoadmaps")
}

/// One roadmap with its course sequence resolved.
///
/// # Errors
///
/// [`AppErrorKind::NoViewsRemaining`] and [`AppErrorKind::RoadmapNotFound`]
/// arrive as typed application errors; transport and decode failures
/// propagate unchanged.
///
/// [`AppErrorKind::NoViewsRemaining`]: super::error::AppErrorKind::NoViewsRemaining
/// [`AppErrorKind::RoadmapNotFound`]: super::error::AppErrorKind::RoadmapNotFound
pub async fn get_roadmap_by_id(id: &str) -> Result<Roadmap, ApiError> {
    let variables = serde_json::json!({ "id": id });
    let data = graphql::execute(GET_ROADMAP_BY_ID_QUERY, variables).await?;
    graphql::decode_field(data, "getRoadmapById")
}

/// Roadmaps the current user has liked or authored.
///
/// # Errors
///
/// Propagates transport and decode failures from the GraphQL layer.
pub async fn get_roadmaps_by_user() -> Result<Vec<Roadmap>, ApiError> {
    let variables = serde_json::json!({ "userId": viewer_id() });
    let data = graphql::execute(GET_ROADMAPS_BY_USER_QUERY, variables).await?;
    graphql::decode_field(data, "getRoadmapsByUser")
}

/// Topic-matched roadmap feed for the current user, with per-item liked
/// flags for the viewer.
///
/// # Errors
///
/// Propagates transport and decode failures from the GraphQL layer.
pub async fn get_roadmap_feed() -> Result<Vec<Roadmap>, ApiError> {
    let variables = serde_json::json!({ "userId": viewer_id() });
    let data = graphql::execute(GET_ROADMAP_FEED_QUERY, variables).await?;
    graphql::decode_field(data, "getRoadmapFeed")
}

/// Create or update a roadmap.
///
/// # Errors
///
/// Propagates transport and decode failures from the GraphQL layer.
pub async fn upsert_roadmap(input: &RoadmapInput) -> Result<(), ApiError> {
    let variables = serde_json::json!({ "input": input });
    graphql::execute(UPSERT_ROADMAP_MUTATION, variables).await.map(|_| ())
}

/// Record that the current user liked a roadmap.
///
/// # Errors
///
/// Propagates transport and decode failures from the GraphQL layer.
pub async fn like_roadmap(roadmap_id: &str) -> Result<(), ApiError> {
    let variables = serde_json::json!({ "userId": viewer_id(), "roadmapId": roadmap_id });
    graphql::execute(USER_LIKED_ROADMAP_MUTATION, variables).await.map(|_| ())
}

/// Ask the backend to generate a roadmap draft for a free-form prompt.
/// Consumes one of the user's generation credits.
///
/// # Errors
///
/// Propagates transport and decode failures from the GraphQL layer.
pub async fn request_custom_roadmap(prompt: &str) -> Result<Roadmap, ApiError> {
    let variables = serde_json::json!({ "userId": viewer_id(), "prompt": prompt });
    let data = graphql::execute(CUSTOM_ROADMAP_REQUESTED_MUTATION, variables).await?;
    graphql::decode_field(data, "customRoadmapRequested")
}
