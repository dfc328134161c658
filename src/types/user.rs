use entity::user::Model as UserModel;
use serde::{Deserialize, Serialize};

/// Registration / login request body. The password only ever lives in this
/// transient struct; it is hashed before anything touches the database and
/// must never be logged.
#[derive(Serialize, Deserialize)]
pub struct RUserCredentials {
    pub username: String,
    pub password: String,
}

/// Public projection of a user. Deliberately excludes the password hash.
#[derive(Serialize, Deserialize)]
pub struct UserPublic {
    pub id: i32,
    pub username: String,
}

impl From<UserModel> for UserPublic {
    fn from(user: UserModel) -> Self {
        UserPublic {
            id: user.id,
            username: user.username,
        }
    }
}

#[derive(Serialize, Deserialize)]
pub struct LoginRes {
    pub access_token: String,
    pub token_type: String,
}
