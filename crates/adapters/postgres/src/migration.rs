//! 启动时的 schema 迁移
//!
//! 每个迁移在独立事务中执行，并记录版本与校验和

use std::collections::HashMap;

use dadamda_errors::{AppError, AppResult};
use sha2::{Digest, Sha256};
use sqlx::PgPool;
use tracing::{debug, info};

/// 迁移定义
#[derive(Debug, Clone)]
pub struct Migration {
    pub version: i64,
    pub name: &'static str,
    pub sql: &'static str,
    pub checksum: String,
}

impl Migration {
    pub fn new(version: i64, name: &'static str, sql: &'static str) -> Self {
        Self {
            version,
            name,
            sql,
            checksum: checksum(sql),
        }
    }
}

/// SQL 文本的 SHA-256（十六进制）
fn checksum(sql: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(sql.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// 找出尚未应用的迁移，按版本升序返回
///
/// 已应用但内容被修改的迁移视为错误
pub fn pending<'a>(
    migrations: &'a [Migration],
    applied: &HashMap<i64, String>,
) -> AppResult<Vec<&'a Migration>> {
    let mut pending = Vec::new();

    for migration in migrations {
        match applied.get(&migration.version) {
            Some(recorded) if *recorded != migration.checksum => {
                return Err(AppError::internal(format!(
                    "Migration {} ({}) was modified after being applied",
                    migration.version, migration.name
                )));
            }
            Some(_) => debug!(version = migration.version, "Migration already applied"),
            None => pending.push(migration),
        }
    }

    pending.sort_by_key(|m| m.version);
    Ok(pending)
}

/// 迁移管理器
pub struct MigrationManager {
    pool: PgPool,
    table_name: String,
}

impl MigrationManager {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            table_name: "_migrations".to_string(),
        }
    }

    async fn init(&self) -> AppResult<()> {
        let create_sql = format!(
            r#"
            CREATE TABLE IF NOT EXISTS {} (
                version BIGINT PRIMARY KEY,
                name VARCHAR(255) NOT NULL,
                applied_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                checksum VARCHAR(64) NOT NULL
            )
            "#,
            self.table_name
        );

        sqlx::query(&create_sql)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to create migration table: {}", e)))?;
        Ok(())
    }

    async fn applied(&self) -> AppResult<HashMap<i64, String>> {
        let sql = format!("SELECT version, checksum FROM {}", self.table_name);
        let rows: Vec<(i64, String)> = sqlx::query_as(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to get migrations: {}", e)))?;

        Ok(rows.into_iter().collect())
    }

    async fn apply(&self, migration: &Migration) -> AppResult<()> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::database(format!("Failed to begin transaction: {}", e)))?;

        sqlx::raw_sql(migration.sql)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::database(format!(
                    "Failed to apply migration {}: {}",
                    migration.version, e
                ))
            })?;

        let insert_sql = format!(
            "INSERT INTO {} (version, name, checksum) VALUES ($1, $2, $3)",
            self.table_name
        );
        sqlx::query(&insert_sql)
            .bind(migration.version)
            .bind(migration.name)
            .bind(&migration.checksum)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::database(format!("Failed to record migration: {}", e)))?;

        tx.commit()
            .await
            .map_err(|e| AppError::database(format!("Failed to commit migration: {}", e)))?;

        info!(
            version = migration.version,
            name = migration.name,
            "Migration applied"
        );
        Ok(())
    }

    /// 应用所有待处理的迁移，返回本次应用的版本
    pub async fn migrate(&self, migrations: &[Migration]) -> AppResult<Vec<i64>> {
        self.init().await?;

        let applied = self.applied().await?;
        let mut versions = Vec::new();
        for migration in pending(migrations, &applied)? {
            self.apply(migration).await?;
            versions.push(migration.version);
        }

        Ok(versions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checksum_is_sha256_hex() {
        let migration = Migration::new(1, "empty", "");
        assert_eq!(
            migration.checksum,
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(Migration::new(2, "a", "SELECT 1").checksum.len(), 64);
    }

    #[test]
    fn test_checksum_consistency() {
        let sql = "CREATE TABLE test (id INT)";
        assert_eq!(Migration::new(1, "a", sql).checksum, Migration::new(1, "a", sql).checksum);
        assert_ne!(
            Migration::new(1, "a", sql).checksum,
            Migration::new(1, "a", "CREATE TABLE other (id INT)").checksum
        );
    }

    #[test]
    fn test_pending_skips_applied_and_sorts() {
        let migrations = vec![
            Migration::new(2, "second", "SELECT 2"),
            Migration::new(1, "first", "SELECT 1"),
            Migration::new(3, "third", "SELECT 3"),
        ];
        let applied = HashMap::from([(1, migrations[1].checksum.clone())]);

        let versions: Vec<i64> = pending(&migrations, &applied)
            .unwrap()
            .iter()
            .map(|m| m.version)
            .collect();
        assert_eq!(versions, vec![2, 3]);
    }

    #[test]
    fn test_pending_rejects_modified_migration() {
        let migrations = vec![Migration::new(1, "first", "SELECT 1")];
        let applied = HashMap::from([(1, "deadbeef".to_string())]);

        assert!(pending(&migrations, &applied).is_err());
    }
}
