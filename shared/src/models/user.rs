//! User Profile Model

use serde::{Deserialize, Serialize};

/// Independent notification channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationSettings {
    pub email: bool,
    pub sms: bool,
}

/// Singleton user profile.
///
/// `favorites` is a legacy field kept for serialization compatibility; the
/// favorites aggregate owned by the store is the source of truth.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub dietary_preferences: Vec<String>,
    pub favorites: Vec<String>,
    pub notifications: NotificationSettings,
}

impl Default for UserProfile {
    /// Default guest identity used when no persisted profile exists
    fn default() -> Self {
        Self {
            id: "user-001".into(),
            name: "Guest User".into(),
            email: "guest@example.com".into(),
            phone: "(555) 000-0000".into(),
            dietary_preferences: Vec::new(),
            favorites: Vec::new(),
            notifications: NotificationSettings {
                email: true,
                sms: false,
            },
        }
    }
}

/// Update profile payload: shallow-merged field by field
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfileUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub dietary_preferences: Option<Vec<String>>,
    pub notifications: Option<NotificationSettings>,
}

impl UserProfileUpdate {
    /// Merge this update into a profile, leaving `None` fields untouched
    pub fn apply(&self, profile: &mut UserProfile) {
        if let Some(name) = &self.name {
            profile.name = name.clone();
        }
        if let Some(email) = &self.email {
            profile.email = email.clone();
        }
        if let Some(phone) = &self.phone {
            profile.phone = phone.clone();
        }
        if let Some(dietary_preferences) = &self.dietary_preferences {
            profile.dietary_preferences = dietary_preferences.clone();
        }
        if let Some(notifications) = self.notifications {
            profile.notifications = notifications;
        }
    }
}
