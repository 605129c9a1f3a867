//! Course catalog facade.

#[cfg(test)]
#[path = "courses_test.rs"]
mod courses_test;

use super::auth;
use super::error::ApiError;
use super::graphql;
use super::types::{Course, CoursePage, Pagination};

/// Default catalog page size, matching the picker grid.
pub const PAGE_SIZE: u32 = 12;

const GET_COURSES_QUERY: &str = "\
query GetCourses($userId: String!, $pagination: PaginationInput!) {
    getCourses(userId: $userId, pagination: $pagination) {
        courses {
            id title description url source difficulty topics isFree author duration language
        }
        pagination {
            page perPage lastEvaluatedKey
        }
    }
}";

const UPSERT_COURSE_MUTATION: &str = "\
mutation UpsertCourse($input: CourseInput!) {
    upsertCourse(input: $input) {
        id
    }
}";

/// Fetch one catalog page. The continuation cursor inside `pagination` is
/// passed back verbatim from the previous page's response; an absent cursor
/// requests the first page.
///
/// # Errors
///
/// Propagates transport and decode failures from the GraphQL layer.
pub async fn get_courses(pagination: &Pagination) -> Result<CoursePage, ApiError> {
    let user_id = auth::current_claims().map(|c| c.subject_id).unwrap_or_default();
    let variables = serde_json::json!({ "userId": user_id, "pagination": pagination });
    let data = graphql::execute(GET_COURSES_QUERY, variables).await?;
    graphql::decode_field(data, "getCourses")
}

/// Create or update a catalog course authored by the current user.
///
/// # Errors
///
/// Propagates transport and decode failures from the GraphQL layer.
pub async fn upsert_course(input: &Course) -> Result<(), ApiError> {
    let variables = serde_json::json!({ "input": input });
    graphql::execute(UPSERT_COURSE_MUTATION, variables).await.map(|_| ())
}
