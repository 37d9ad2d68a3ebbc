use crate::model::user::{Role, UserDto};

/// Logged in user as known to the front end.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserState {
    pub user: Option<UserDto>,
    /// Set once the session lookup has finished, logged in or not
    pub fetched: bool,
}

impl UserState {
    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|user| user.role)
    }

    /// Page the user lands on after signing in.
    pub fn home_path(&self) -> &'static str {
        match self.role() {
            Some(Role::Admin) => "/admin",
            Some(Role::Worker) => "/worker",
            None => "/login",
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use super::UserState;
    use crate::model::user::{Role, UserDto};

    fn user(role: Role) -> UserDto {
        UserDto {
            id: Uuid::new_v4(),
            email: "jane@example.com".to_string(),
            full_name: "Jane Doe".to_string(),
            role,
            phone: None,
            address: None,
            emergency_contact_name: None,
            emergency_contact_phone: None,
            hourly_rate: None,
            hire_date: None,
            is_active: true,
            created_at: Utc::now().naive_utc(),
        }
    }

    #[test]
    fn routes_by_role() {
        let admin = UserState {
            user: Some(user(Role::Admin)),
            fetched: true,
        };
        let worker = UserState {
            user: Some(user(Role::Worker)),
            fetched: true,
        };

        assert_eq!(admin.home_path(), "/admin");
        assert_eq!(worker.home_path(), "/worker");
        assert_eq!(UserState::default().home_path(), "/login");
    }
}
