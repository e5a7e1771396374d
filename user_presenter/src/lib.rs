pub mod client;
pub mod console;
pub mod presenter;
pub mod utils;

use serde::{Deserialize, Serialize};

pub use client::{decode_users, FetchError, UsersClient};
pub use console::ConsoleView;
pub use presenter::{PresenterConfig, PresenterError, UserPresenter, UserView, UsersRequest};

/// Default source of the user list.
pub const USERS_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/users";

/// A single entry of the `/users` response. Extra fields in the payload are ignored.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub username: String,
    pub email: String,
}

impl User {
    pub fn new(id: i64, name: &str, username: &str, email: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            username: username.to_string(),
            email: email.to_string(),
        }
    }

    /// Text shown when the user is tapped.
    pub fn alert_message(&self) -> String {
        format!(
            "{} has an email of {} & a username of {}",
            self.name, self.email, self.username
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alert_message_mentions_email_and_username() {
        let user = User::new(2, "Ervin Howell", "Antonette", "Shanna@melissa.tv");
        assert_eq!(
            user.alert_message(),
            "Ervin Howell has an email of Shanna@melissa.tv & a username of Antonette"
        );
    }

    #[test]
    fn deserializes_and_ignores_unknown_fields() {
        let raw = r#"{
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "email": "Sincere@april.biz",
            "phone": "1-770-736-8031 x56442",
            "address": { "city": "Gwenborough" }
        }"#;
        let user: User = serde_json::from_str(raw).unwrap();
        assert_eq!(user, User::new(1, "Leanne Graham", "Bret", "Sincere@april.biz"));
    }
}
