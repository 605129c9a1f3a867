//! User-account facade: profile reads, topic updates, feedback.

use super::auth;
use super::error::ApiError;
use super::graphql;
use super::types::{Acknowledged, UserAccount};

const GET_USER_BY_NAME_QUERY: &str = "\
query GetUserByName($name: String!) {
    getUserByName(name: $name) {
        name
        topics
        dailyChallengeAvailable
        genUsagesRemaining
        creationsRemaining
    }
}";

const UPDATE_USER_MUTATION: &str = "\
mutation UpdateUser($input: UserInput!) {
    updateUser(input: $input) {
        name
        topics
    }
}";

const SEND_FEEDBACK_MUTATION: &str = "\
mutation SendFeedback($feedback: String!, $from: String!) {
    sendFeedback(feedback: $feedback, from: $from) {
        success
    }
}";

/// The current user's account record.
///
/// # Errors
///
/// Propagates transport and decode failures from the GraphQL layer.
pub async fn get_current_account() -> Result<UserAccount, ApiError> {
    let name = auth::current_claims().map(|c| c.subject_id).unwrap_or_default();
    let variables = serde_json::json!({ "name": name });
    let data = graphql::execute(GET_USER_BY_NAME_QUERY, variables).await?;
    graphql::decode_field(data, "getUserByName")
}

/// Replace the current user's learning topics.
///
/// # Errors
///
/// Propagates transport and decode failures from the GraphQL layer.
pub async fn update_topics(topics: &[String]) -> Result<(), ApiError> {
    let name = auth::current_claims().map(|c| c.subject_id).unwrap_or_default();
    let variables = serde_json::json!({ "input": { "name": name, "topics": topics } });
    graphql::execute(UPDATE_USER_MUTATION, variables).await.map(|_| ())
}

/// Send free-form feedback to the operators. Fails soft with `false`.
pub async fn send_feedback(feedback: &str) -> bool {
    let from = auth::current_claims()
        .map(|c| c.display_name)
        .unwrap_or_else(|| "anonymous".to_owned());
    let variables = serde_json::json!({ "feedback": feedback, "from": from });
    match graphql::execute(SEND_FEEDBACK_MUTATION, variables).await {
        Ok(data) => graphql::decode_field::<Acknowledged>(data, "sendFeedback")
            .map(|ack| ack.success)
            .unwrap_or(false),
        Err(_) => false,
    }
}
