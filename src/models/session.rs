use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UserRole {
    #[default]
    Passenger,
    Admin,
    MasterAdmin,
}

impl UserRole {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            UserRole::Passenger => "Passenger",
            UserRole::Admin => "Station Admin",
            UserRole::MasterAdmin => "Master Admin",
        }
    }
}

/// Account state owned by the UI shell and handed to views through context
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SessionState {
    pub is_logged_in: bool,
    pub user_name: Option<String>,
    pub role: UserRole,
}

impl SessionState {
    #[must_use]
    pub fn guest() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn signed_in(user_name: impl Into<String>, role: UserRole) -> Self {
        Self {
            is_logged_in: true,
            user_name: Some(user_name.into()),
            role,
        }
    }

    #[must_use]
    pub fn display_name(&self) -> &str {
        match (&self.user_name, self.is_logged_in) {
            (Some(name), true) => name,
            _ => "Guest",
        }
    }

    /// Whether the session may open screens that require `role`
    #[must_use]
    pub fn has_role(&self, role: UserRole) -> bool {
        self.is_logged_in && self.role == role
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guest_session() {
        let session = SessionState::guest();
        assert!(!session.is_logged_in);
        assert_eq!(session.display_name(), "Guest");
        assert!(!session.has_role(UserRole::Passenger));
    }

    #[test]
    fn test_signed_in_session() {
        let session = SessionState::signed_in("Priya", UserRole::Admin);
        assert_eq!(session.display_name(), "Priya");
        assert!(session.has_role(UserRole::Admin));
        assert!(!session.has_role(UserRole::MasterAdmin));
    }

    #[test]
    fn test_role_names() {
        let role: UserRole = serde_json::from_str("\"masterAdmin\"").expect("valid role");
        assert_eq!(role, UserRole::MasterAdmin);
        assert_eq!(role.label(), "Master Admin");
    }
}
