use crate::domain::ports::{Authenticator, ConfigProvider, KeyValueStore};
use crate::utils::error::{Result, TrackerError};

pub const LOGGED_IN_KEY: &str = "loggedIn";

/// A single shared username and password taken from configuration.
#[derive(Debug, Clone, Default)]
pub struct StaticCredentials {
    credentials: Option<(String, String)>,
}

impl StaticCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            credentials: Some((username.into(), password.into())),
        }
    }

    /// Without configured credentials every login attempt fails.
    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Self {
        Self {
            credentials: config
                .credentials()
                .map(|(user, pass)| (user.to_string(), pass.to_string())),
        }
    }
}

impl Authenticator for StaticCredentials {
    fn authenticate(&self, username: &str, password: &str) -> bool {
        match &self.credentials {
            Some((user, pass)) => user == username && pass == password,
            None => false,
        }
    }
}

pub struct LoginGate<A: Authenticator> {
    authenticator: A,
}

impl<A: Authenticator> LoginGate<A> {
    pub fn new(authenticator: A) -> Self {
        Self { authenticator }
    }

    pub fn login<S: KeyValueStore + ?Sized>(
        &self,
        storage: &mut S,
        username: &str,
        password: &str,
    ) -> Result<()> {
        if !self.authenticator.authenticate(username, password) {
            tracing::warn!("Rejected login for {}", username);
            return Err(TrackerError::InvalidCredentials);
        }
        storage.set(LOGGED_IN_KEY, "true")?;
        tracing::info!("Login successful");
        Ok(())
    }
}

pub fn logout<S: KeyValueStore + ?Sized>(storage: &mut S) -> Result<()> {
    storage.remove(LOGGED_IN_KEY)?;
    tracing::info!("User logged out");
    Ok(())
}

pub fn is_logged_in<S: KeyValueStore + ?Sized>(storage: &S) -> Result<bool> {
    Ok(storage
        .get(LOGGED_IN_KEY)?
        .is_some_and(|flag| !flag.is_empty()))
}

pub fn require_session<S: KeyValueStore + ?Sized>(storage: &S) -> Result<()> {
    if is_logged_in(storage)? {
        Ok(())
    } else {
        tracing::info!("Redirecting to login: no active session");
        Err(TrackerError::NotLoggedIn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::MemoryStorage;

    #[test]
    fn test_login_sets_flag() {
        let gate = LoginGate::new(StaticCredentials::new("rick", "roll"));
        let mut storage = MemoryStorage::new();

        assert!(require_session(&storage).is_err());
        gate.login(&mut storage, "rick", "roll").unwrap();
        assert!(is_logged_in(&storage).unwrap());
        assert!(require_session(&storage).is_ok());

        logout(&mut storage).unwrap();
        assert!(matches!(
            require_session(&storage),
            Err(TrackerError::NotLoggedIn)
        ));
    }

    #[test]
    fn test_wrong_credentials_leave_flag_unset() {
        let gate = LoginGate::new(StaticCredentials::new("rick", "roll"));
        let mut storage = MemoryStorage::new();

        assert!(matches!(
            gate.login(&mut storage, "rick", "wrong"),
            Err(TrackerError::InvalidCredentials)
        ));
        assert!(!is_logged_in(&storage).unwrap());
    }

    #[test]
    fn test_unconfigured_credentials_reject_everything() {
        let gate = LoginGate::new(StaticCredentials::default());
        let mut storage = MemoryStorage::new();
        assert!(gate.login(&mut storage, "", "").is_err());
    }
}
