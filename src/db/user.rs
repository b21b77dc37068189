use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use color_eyre::{eyre::OptionExt, Result};
use ulid::Ulid;

use super::models::{AuthUser, Profile};
use super::Db;

pub struct NewProfile<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
    pub date_of_birth: Option<&'a str>,
    pub gender: &'a str,
}

impl Db {
    /// Create a user together with their profile and a zeroed score counter.
    pub async fn create_user(
        &self,
        username: &str,
        password: &str,
        profile: NewProfile<'_>,
    ) -> Result<i64> {
        if self.username_exists(username).await? {
            return Err(color_eyre::eyre::eyre!(
                "Username '{}' is already taken. Please choose a different one.",
                username
            ));
        }

        let password_hash = hash_password(password)?;

        let mut tx = self.pool.begin().await?;

        let user_id: i64 = sqlx::query_scalar(
            "INSERT INTO users (username, password_hash) VALUES (?, ?) RETURNING id",
        )
        .bind(username)
        .bind(&password_hash)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query(
            "INSERT INTO profiles (user_id, first_name, last_name, email, date_of_birth, gender) VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(user_id)
        .bind(profile.first_name)
        .bind(profile.last_name)
        .bind(profile.email)
        .bind(profile.date_of_birth)
        .bind(profile.gender)
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            "INSERT INTO current_results (user_id, correct_answers, incorrect_answers) VALUES (?, 0, 0)",
        )
        .bind(user_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::info!("new user created: id={user_id}, username={username}");
        Ok(user_id)
    }

    pub async fn username_exists(&self, username: &str) -> Result<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE username = ?)")
                .bind(username)
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }

    pub async fn find_user_by_username(&self, username: &str) -> Result<Option<AuthUser>> {
        let user = sqlx::query_as::<_, AuthUser>("SELECT id, username FROM users WHERE username = ?")
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    pub async fn verify_user_password(&self, username: &str, password: &str) -> Result<bool> {
        let stored_hash: Option<String> =
            sqlx::query_scalar("SELECT password_hash FROM users WHERE username = ?")
                .bind(username)
                .fetch_optional(&self.pool)
                .await?;

        match stored_hash {
            Some(hash) => Ok(verify_password(password, &hash)),
            None => Ok(false),
        }
    }

    pub async fn create_user_session(&self, user_id: i64) -> Result<String> {
        let session = Ulid::new().to_string();

        sqlx::query("INSERT INTO user_sessions (id, user_id) VALUES (?, ?)")
            .bind(&session)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        tracing::info!("new user session created for user_id={user_id}");
        Ok(session)
    }

    pub async fn get_user_by_session(&self, session_id: &str) -> Result<Option<AuthUser>> {
        let user = sqlx::query_as::<_, AuthUser>(
            r#"
            SELECT u.id, u.username
            FROM user_sessions s
            JOIN users u ON u.id = s.user_id
            WHERE s.id = ?
            "#,
        )
        .bind(session_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    pub async fn delete_user_session(&self, session_id: &str) -> Result<()> {
        sqlx::query("DELETE FROM user_sessions WHERE id = ?")
            .bind(session_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    pub async fn get_profile(&self, user_id: i64) -> Result<Option<Profile>> {
        let profile = sqlx::query_as::<_, Profile>(
            "SELECT user_id, first_name, last_name, email, date_of_birth, gender FROM profiles WHERE user_id = ?",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(profile)
    }

    pub async fn update_profile(&self, user_id: i64, profile: NewProfile<'_>) -> Result<()> {
        sqlx::query(
            "UPDATE profiles SET first_name = ?, last_name = ?, email = ?, date_of_birth = ?, gender = ? WHERE user_id = ?",
        )
        .bind(profile.first_name)
        .bind(profile.last_name)
        .bind(profile.email)
        .bind(profile.date_of_birth)
        .bind(profile.gender)
        .bind(user_id)
        .execute(&self.pool)
        .await?;

        tracing::info!("profile updated for user_id={user_id}");
        Ok(())
    }

    /// Delete an account. Profile, sessions, score counter, and authored
    /// content are removed through cascading foreign keys.
    pub async fn delete_user(&self, user_id: i64) -> Result<()> {
        sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        tracing::info!("deleted user {user_id}");
        Ok(())
    }

    /// Change password for an authenticated user. Verifies current password first.
    pub async fn change_password(
        &self,
        user_id: i64,
        current_password: &str,
        new_password: &str,
    ) -> Result<bool> {
        let stored_hash: Option<String> =
            sqlx::query_scalar("SELECT password_hash FROM users WHERE id = ?")
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await?;

        let stored_hash = stored_hash.ok_or_eyre("user not found")?;

        if !verify_password(current_password, &stored_hash) {
            return Ok(false);
        }

        let new_hash = hash_password(new_password)?;
        sqlx::query("UPDATE users SET password_hash = ? WHERE id = ?")
            .bind(new_hash)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(true)
    }
}

/// Run argon2 hashing on a dedicated thread with a large stack to avoid
/// stack overflow in debug builds.
fn hash_password(password: &str) -> Result<String> {
    let password = password.to_string();
    std::thread::Builder::new()
        .stack_size(4 * 1024 * 1024) // 4 MB stack
        .spawn(move || {
            let salt = SaltString::generate(&mut OsRng);
            let argon2 = Argon2::default();
            argon2
                .hash_password(password.as_bytes(), &salt)
                .map(|h| h.to_string())
                .map_err(|e| color_eyre::eyre::eyre!("failed to hash password: {e}"))
        })?
        .join()
        .map_err(|_| color_eyre::eyre::eyre!("hash thread panicked"))?
}

fn verify_password(password: &str, hash: &str) -> bool {
    let password = password.to_string();
    let hash = hash.to_string();
    std::thread::Builder::new()
        .stack_size(4 * 1024 * 1024)
        .spawn(move || {
            let parsed_hash = match PasswordHash::new(&hash) {
                Ok(h) => h,
                Err(_) => return false,
            };
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed_hash)
                .is_ok()
        })
        .map(|h| h.join().unwrap_or(false))
        .unwrap_or(false)
}
