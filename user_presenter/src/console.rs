use crate::presenter::UserView;
use crate::User;
use std::sync::{Mutex, PoisonError};

/// A [`UserView`] that prints to stdout and keeps the last list it was given.
#[derive(Debug, Default)]
pub struct ConsoleView {
    users: Mutex<Vec<User>>,
    last_alert: Mutex<Option<(String, String)>>,
}

impl ConsoleView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn users(&self) -> Vec<User> {
        self.users
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn user_at(&self, index: usize) -> Option<User> {
        self.users
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(index)
            .cloned()
    }

    /// `(title, message)` of the most recent alert.
    pub fn last_alert(&self) -> Option<(String, String)> {
        self.last_alert
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

pub fn format_user_line(user: &User) -> String {
    format!("#{} {} (@{}) {}", user.id, user.name, user.username, user.email)
}

impl UserView for ConsoleView {
    fn present_users(&self, users: Vec<User>) {
        for user in &users {
            println!("{}", format_user_line(user));
        }
        *self.users.lock().unwrap_or_else(PoisonError::into_inner) = users;
    }

    fn present_alert(&self, title: &str, message: &str) {
        println!("[{}] {}", title, message);
        *self.last_alert.lock().unwrap_or_else(PoisonError::into_inner) =
            Some((title.to_string(), message.to_string()));
    }
}
