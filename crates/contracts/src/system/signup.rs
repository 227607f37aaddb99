use serde::{Deserialize, Serialize};

/// Payload of `POST /signup`. Field names follow the remote service (camelCase).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub password: String,
    pub address: String,
    pub state: String,
    pub pincode: String,
    pub city: String,
    pub favourite_game: String,
}
