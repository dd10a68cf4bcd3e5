//! Account service — registration, login, and profile flows.

use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use punchclock_auth::crypto::{FieldCipher, lookup_key};
use punchclock_auth::password::PasswordHasher;
use punchclock_auth::token::{IssuedToken, TokenEncoder};
use punchclock_core::error::AppError;
use punchclock_database::repositories::UserRepository;
use punchclock_entity::user::model::CreateUser;
use punchclock_entity::user::{User, UserRole};

/// A user row together with its decrypted email, ready for a response.
#[derive(Debug, Clone)]
pub struct UserProfile {
    /// The stored user.
    pub user: User,
    /// Decrypted email address.
    pub email: String,
}

/// Owns the registration and login flows.
///
/// Plaintext secrets stop here: passwords are hashed and emails encrypted
/// before anything reaches the repository.
#[derive(Debug, Clone)]
pub struct AccountService {
    user_repo: Arc<UserRepository>,
    password_hasher: Arc<PasswordHasher>,
    field_cipher: Arc<FieldCipher>,
    token_encoder: Arc<TokenEncoder>,
}

impl AccountService {
    /// Creates a new account service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        password_hasher: Arc<PasswordHasher>,
        field_cipher: Arc<FieldCipher>,
        token_encoder: Arc<TokenEncoder>,
    ) -> Self {
        Self {
            user_repo,
            password_hasher,
            field_cipher,
            token_encoder,
        }
    }

    /// Registers a new user.
    ///
    /// Hashes the password on a blocking thread (bcrypt is deliberately
    /// slow), encrypts the email, and derives the deterministic lookup
    /// digest that carries the uniqueness constraint. A duplicate email
    /// surfaces as a conflict from the repository.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        role: UserRole,
        password: &str,
    ) -> Result<UserProfile, AppError> {
        let password_hash = self.hash_password_blocking(password.to_string()).await?;

        let normalized_email = email.trim().to_lowercase();
        let email_ciphertext = self.field_cipher.encrypt(&normalized_email)?;
        let email_lookup = lookup_key(&normalized_email);

        let user = self
            .user_repo
            .create(CreateUser {
                name: name.trim().to_string(),
                email_ciphertext,
                email_lookup,
                password_hash,
                role,
            })
            .await?;

        info!(user_id = %user.id, role = %user.role, "User registered");

        Ok(UserProfile {
            user,
            email: normalized_email,
        })
    }

    /// Authenticates a user and issues a session token.
    ///
    /// An unknown email and a wrong password produce the same generic
    /// error so callers cannot probe which addresses are registered.
    pub async fn login(&self, email: &str, password: &str) -> Result<IssuedToken, AppError> {
        let user = self
            .user_repo
            .find_by_email_lookup(&lookup_key(email))
            .await?
            .ok_or_else(|| AppError::unauthorized("Invalid email or password"))?;

        let verified = self
            .verify_password_blocking(password.to_string(), user.password_hash.clone())
            .await?;

        if !verified {
            warn!(user_id = %user.id, "Login failed: password mismatch");
            return Err(AppError::unauthorized("Invalid email or password"));
        }

        let issued = self.token_encoder.issue(user.id, user.role)?;
        info!(user_id = %user.id, expires_at = %issued.expires_at, "Login successful");
        Ok(issued)
    }

    /// Loads a user's profile, decrypting the stored email.
    pub async fn get_profile(&self, user_id: Uuid) -> Result<UserProfile, AppError> {
        let user = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;

        let email = self.field_cipher.decrypt(&user.email_ciphertext)?;
        Ok(UserProfile { user, email })
    }

    /// Lists all users with decrypted emails.
    pub async fn list_users(&self) -> Result<Vec<UserProfile>, AppError> {
        let users = self.user_repo.find_all().await?;

        users
            .into_iter()
            .map(|user| {
                let email = self.field_cipher.decrypt(&user.email_ciphertext)?;
                Ok(UserProfile { user, email })
            })
            .collect()
    }

    async fn hash_password_blocking(&self, password: String) -> Result<String, AppError> {
        let hasher = Arc::clone(&self.password_hasher);
        tokio::task::spawn_blocking(move || hasher.hash_password(&password))
            .await
            .map_err(|e| AppError::internal(format!("Hashing task failed: {e}")))?
    }

    async fn verify_password_blocking(
        &self,
        password: String,
        hash: String,
    ) -> Result<bool, AppError> {
        let hasher = Arc::clone(&self.password_hasher);
        tokio::task::spawn_blocking(move || hasher.verify_password(&password, &hash))
            .await
            .map_err(|e| AppError::internal(format!("Verification task failed: {e}")))?
    }
}
