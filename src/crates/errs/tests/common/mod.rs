//! Shared service-layer fixture for the integration tests.
//!
//! Models a small user service whose layers fail in the ways the error chain
//! is designed to capture: validation failures carrying safe messages, and
//! wrapped infrastructure failures carrying unsafe ones.

use errs::DomainError;

pub struct User {
    pub username: String,
    pub age: i64,
}

impl User {
    pub fn named(username: &str) -> Self {
        Self {
            username: username.to_string(),
            age: 30,
        }
    }
}

pub struct UserService;

impl UserService {
    pub fn create_user(&self, user: &User) -> errs::Result<()> {
        if user.username.is_empty() {
            return Err(DomainError::invalid("Username is required").into());
        }
        self.add_role(user, "default")
            .map_err(|err| DomainError::wrap("userService.createUser", err).into())
    }

    pub fn validate(&self, user: &User) -> errs::Result<()> {
        if user.username.is_empty() {
            return Err(DomainError::invalid("Username is required").into());
        }
        if user.age < 18 {
            return Err(DomainError::invalid("Age must be >= 18").into());
        }
        Ok(())
    }

    fn add_role(&self, _user: &User, _role: &str) -> errs::Result<()> {
        // Simulated sql call that always fails.
        let sql_error = anyhow::anyhow!("syntax error at near 'INSERT'");
        Err(DomainError::wrap("userService.addRole", sql_error).into())
    }
}
