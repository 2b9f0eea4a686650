use async_trait::async_trait;
use sqlx::{AnyPool, Row};

use crate::auth::model::{Pengguna, Role};
use crate::shared::database::sekarang;
use crate::shared::RepositoryError;

/// Memetakan bearer token yang sudah diterbitkan ke principal.
///
/// Penerbitan token (login/register) berada di luar service ini; di sini
/// token hanya dibaca. `Ok(None)` berarti token tidak dikenal, salah format,
/// atau milik pengguna dengan role yang tidak dikenali.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TokenAuthenticator: Send + Sync {
    async fn authenticate(&self, token: &str) -> Result<Option<Pengguna>, RepositoryError>;
}

/// Token berformat `<id>|<secret>`; kolom `token_hash` menyimpan hash bcrypt dari `<secret>`.
pub struct DbTokenAuthenticator {
    pool: AnyPool,
}

impl DbTokenAuthenticator {
    pub fn new(pool: AnyPool) -> Self {
        Self { pool }
    }
}

pub fn pisah_token(token: &str) -> Option<(i64, &str)> {
    let (id, secret) = token.split_once('|')?;
    let id = id.parse::<i64>().ok()?;
    if secret.is_empty() {
        return None;
    }
    Some((id, secret))
}

#[async_trait]
impl TokenAuthenticator for DbTokenAuthenticator {
    async fn authenticate(&self, token: &str) -> Result<Option<Pengguna>, RepositoryError> {
        let Some((token_id, secret)) = pisah_token(token) else {
            return Ok(None);
        };

        let row = sqlx::query(
            r#"
            SELECT t.token_hash, u.id, u.nama, u.email, u.role
            FROM personal_access_tokens t
            JOIN users u ON u.id = t.user_id
            WHERE t.id = $1
            "#,
        )
        .bind(token_id)
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let token_hash: String = row.try_get("token_hash")?;
        let secret = secret.to_string();
        // bcrypt berat untuk CPU, jangan blok worker async
        let cocok = tokio::task::spawn_blocking(move || bcrypt::verify(secret, &token_hash))
            .await
            .map_err(|e| RepositoryError::Other(format!("Verifikasi token gagal: {}", e)))?
            .map_err(|e| RepositoryError::Other(format!("Hash token tidak valid: {}", e)))?;

        if !cocok {
            return Ok(None);
        }

        let role_str: String = row.try_get("role")?;
        let role = match role_str.parse::<Role>() {
            Ok(role) => role,
            Err(e) => {
                log::warn!("Token {} milik pengguna dengan role tidak valid: {}", token_id, e);
                return Ok(None);
            }
        };

        sqlx::query("UPDATE personal_access_tokens SET last_used_at = $1 WHERE id = $2")
            .bind(sekarang())
            .bind(token_id)
            .execute(&self.pool)
            .await?;

        Ok(Some(Pengguna::new(
            row.try_get("id")?,
            row.try_get("nama")?,
            row.try_get("email")?,
            role,
        )))
    }
}
