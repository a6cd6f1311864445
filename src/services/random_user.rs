use serde::Deserialize;
use gloo_net::http::Request;

/// randomuser.me API endpoint
pub const RANDOM_USER_API: &str = "https://randomuser.me/api/";

/// Message shown to the user for any fetch failure
pub const FETCH_FAILURE_MESSAGE: &str = "Failed to fetch user. Please try again.";

/// A profile ready for display
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub address: String,
    pub image: String,
    pub description: String,
}

/// Top-level response from randomuser.me
#[derive(Debug, Clone, Deserialize)]
pub struct RandomUserResponse {
    pub results: Vec<RandomUser>,
}

/// One generated user. Fields we don't display are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct RandomUser {
    pub name: RandomUserName,
    pub email: String,
    pub location: RandomUserLocation,
    pub picture: RandomUserPicture,
    pub login: RandomUserLogin,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RandomUserName {
    pub first: String,
    pub last: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RandomUserLocation {
    pub street: RandomUserStreet,
    pub city: String,
    pub country: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RandomUserStreet {
    pub number: StreetNumber,
    pub name: String,
}

/// The service sends a number, but some seeds have produced strings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum StreetNumber {
    Number(i64),
    Text(String),
}

impl std::fmt::Display for StreetNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            StreetNumber::Number(n) => write!(f, "{}", n),
            StreetNumber::Text(s) => write!(f, "{}", s),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RandomUserPicture {
    pub large: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RandomUserLogin {
    pub uuid: String,
}

impl From<RandomUser> for UserProfile {
    fn from(user: RandomUser) -> Self {
        let street = &user.location.street;
        Self {
            name: format!("{} {}", user.name.first, user.name.last),
            email: user.email,
            address: format!(
                "{} {}, {}, {}",
                street.number, street.name, user.location.city, user.location.country
            ),
            image: user.picture.large,
            description: user.login.uuid,
        }
    }
}

/// Error type for random user fetches
#[derive(Debug, Clone, PartialEq)]
pub enum FetchError {
    Request(String),
    Status(u16),
    Parse(String),
    NoResults,
}

impl FetchError {
    /// Every failure is shown to the user the same way
    pub fn user_message(&self) -> &'static str {
        FETCH_FAILURE_MESSAGE
    }
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            FetchError::Request(e) => write!(f, "Request failed: {}", e),
            FetchError::Status(code) => write!(f, "Unexpected HTTP status: {}", code),
            FetchError::Parse(e) => write!(f, "Failed to parse user: {}", e),
            FetchError::NoResults => write!(f, "Response contained no users"),
        }
    }
}

impl std::error::Error for FetchError {}

/// Map a raw response body to the first user's profile
pub fn parse_random_user(body: &str) -> Result<UserProfile, FetchError> {
    let response: RandomUserResponse = serde_json::from_str(body)
        .map_err(|e| FetchError::Parse(e.to_string()))?;

    response
        .results
        .into_iter()
        .next()
        .map(UserProfile::from)
        .ok_or(FetchError::NoResults)
}

/// Fetch one random user from randomuser.me
pub async fn fetch_random_user() -> Result<UserProfile, FetchError> {
    let response = Request::get(RANDOM_USER_API)
        .send()
        .await
        .map_err(|e| FetchError::Request(e.to_string()))?;

    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }

    let body = response
        .text()
        .await
        .map_err(|e| FetchError::Request(e.to_string()))?;

    parse_random_user(&body)
}
