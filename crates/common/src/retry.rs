//! 启动阶段重试
//!
//! 只用于建立基础设施连接，业务操作不重试

use std::future::Future;
use std::time::Duration;

use tracing::{info, warn};

/// 指数退避策略，每次等待时间翻倍直到上限
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_delay: Duration,
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            base_delay: Duration::from_millis(500),
            max_delay: Duration::from_secs(10),
        }
    }
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, base_delay: Duration, max_delay: Duration) -> Self {
        Self {
            max_attempts,
            base_delay,
            max_delay,
        }
    }

    /// 第 `failures` 次失败后的等待时间
    pub fn backoff(&self, failures: u32) -> Duration {
        let factor = 1u32.checked_shl(failures.saturating_sub(1)).unwrap_or(u32::MAX);
        self.base_delay
            .checked_mul(factor)
            .map_or(self.max_delay, |delay| delay.min(self.max_delay))
    }
}

/// 按策略重试异步操作，返回最后一次错误
pub async fn retry_async<F, Fut, T, E>(policy: &RetryPolicy, resource: &str, mut op: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    let attempts = policy.max_attempts.max(1);
    let mut failures = 0;

    loop {
        let err = match op().await {
            Ok(value) => {
                if failures > 0 {
                    info!(resource, failures, "Connected after retry");
                }
                return Ok(value);
            }
            Err(e) => e,
        };

        failures += 1;
        if failures >= attempts {
            warn!(resource, attempts, error = %err, "Giving up");
            return Err(err);
        }

        let wait = policy.backoff(failures);
        warn!(
            resource,
            failures,
            error = %err,
            wait_ms = wait.as_millis() as u64,
            "Attempt failed, backing off"
        );
        tokio::time::sleep(wait).await;
    }
}
