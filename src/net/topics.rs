//! Topic catalog facade.

use super::error::ApiError;
use super::graphql;
use super::types::Topic;

const GET_ALL_TOPICS_QUERY: &str = "\
query GetAllTopics {
    getAllTopics {
        name
    }
}";

const ADD_TOPICS_MUTATION: &str = "\
mutation AddTopics($names: [String!]!) {
    addTopics(names: $names) {
        name
    }
}";

/// All known topic names.
///
/// # Errors
///
/// Propagates transport and decode failures from the GraphQL layer.
pub async fn get_all_topics() -> Result<Vec<String>, ApiError> {
    let data = graphql::execute(GET_ALL_TOPICS_QUERY, serde_json::json!({})).await?;
    let topics: Vec<Topic> = graphql::decode_field(data, "getAllTopics")?;
    Ok(topics.into_iter().map(|t| t.name).collect())
}

/// Register topic names that do not exist yet (no-op for known names).
///
/// # Errors
///
/// Propagates transport and decode failures from the GraphQL layer.
pub async fn add_topics(names: &[String]) -> Result<(), ApiError> {
    let variables = serde_json::json!({ "names": names });
    graphql::execute(ADD_TOPICS_MUTATION, variables).await.map(|_| ())
}
