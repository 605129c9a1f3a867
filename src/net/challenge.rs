//! Daily-challenge facade: availability, question fetch, and answer
//! submission.

use super::auth;
use super::error::ApiError;
use super::graphql;
use super::types::{ChallengeOutcome, ChallengeQuestion, UserAccount};

const AVAILABILITY_QUERY: &str = "\
query GetDailyChallengeAvailability($name: String!) {
    getUserByName(name: $name) {
        dailyChallengeAvailable
    }
}";

const GET_DAILY_CHALLENGE_QUERY: &str = "\
query GetDailyChallenge($userId: String!) {
    dailyChallenge(userId: $userId) {
        question
        categories
        type
    }
}";

const SUBMIT_DAILY_CHALLENGE_MUTATION: &str = "\
mutation SubmitDailyChallenge($username: String!, $question: String!, $answer: String!) {
    dailyChallenge(username: $username, question: $question, answer: $answer) {
        rating
        insight
        left
    }
}";

/// Whether today's challenge is still open for the current user.
///
/// # Errors
///
/// Propagates transport and decode failures from the GraphQL layer.
pub async fn availability() -> Result<bool, ApiError> {
    let name = auth::current_claims().map(|c| c.subject_id).unwrap_or_default();
    let variables = serde_json::json!({ "name": name });
    let data = graphql::execute(AVAILABILITY_QUERY, variables).await?;
    let account: UserAccount = graphql::decode_field(data, "getUserByName")?;
    Ok(account.daily_challenge_available)
}

/// Fetch today's question, drawn from the user's learning topics.
///
/// # Errors
///
/// Propagates transport and decode failures from the GraphQL layer.
pub async fn fetch_question() -> Result<ChallengeQuestion, ApiError> {
    let user_id = auth::current_claims().map(|c| c.subject_id).unwrap_or_default();
    let variables = serde_json::json!({ "userId": user_id });
    let data = graphql::execute(GET_DAILY_CHALLENGE_QUERY, variables).await?;
    graphql::decode_field(data, "dailyChallenge")
}

/// Submit an answer for rating. Each submission burns one of today's
/// attempts regardless of the verdict.
///
/// # Errors
///
/// Propagates transport and decode failures from the GraphQL layer.
pub async fn submit(question: &str, answer: &str) -> Result<ChallengeOutcome, ApiError> {
    let username = auth::current_claims().map(|c| c.subject_id).unwrap_or_default();
    let variables = serde_json::json!({
        "username": username,
        "question": question,
        "answer": answer,
    });
    let data = graphql::execute(SUBMIT_DAILY_CHALLENGE_MUTATION, variables).await?;
    graphql::decode_field(data, "dailyChallenge")
}
