//! 请求重试与节流
//! 1. 失败重试：随机等待 + 按重试次数递增的附加等待
//! 2. 请求间隔：基准间隔叠加随机抖动，并设下限

use std::future::Future;
use std::time::Duration;

use rand::Rng;
use tracing::warn;

use crate::config::GlobalConfig;
use crate::error::CollectorResult;

/// 重试策略
#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    /// 最大重试次数（不含首次）
    pub max_retries: u32,
    pub min_wait: Duration,
    pub max_wait: Duration,
}

impl RetryPolicy {
    pub fn from_config(config: &GlobalConfig) -> Self {
        Self {
            max_retries: config.max_retries,
            min_wait: Duration::from_secs(config.min_retry_wait),
            max_wait: Duration::from_secs(config.max_retry_wait),
        }
    }

    /// 不重试
    pub fn never() -> Self {
        Self {
            max_retries: 0,
            min_wait: Duration::ZERO,
            max_wait: Duration::ZERO,
        }
    }

    /// 第 `retry` 次重试前的等待时间（retry 从1开始）
    /// 基础等待取自 [min_wait, max_wait]，每多一次重试再加 1~2 秒
    pub fn wait_for(&self, retry: u32) -> Duration {
        let mut rng = rand::rng();
        let min = self.min_wait.as_secs_f64();
        let max = self.max_wait.as_secs_f64();
        let base = if max > min { rng.random_range(min..=max) } else { min };
        let additional = f64::from(retry.saturating_sub(1)) * rng.random_range(1.0..=2.0);
        Duration::from_secs_f64(base + additional)
    }
}

/// 通用异步重试，返回首次成功结果或最后一次错误
pub async fn retry_async<F, Fut, T>(policy: &RetryPolicy, label: &str, mut func: F) -> CollectorResult<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = CollectorResult<T>>,
{
    let mut retries = 0;
    loop {
        match func().await {
            Ok(value) => return Ok(value),
            Err(e) => {
                if retries >= policy.max_retries {
                    return Err(e);
                }
                retries += 1;
                let wait = policy.wait_for(retries);
                warn!(
                    "[{}] 请求失败：{}，{:.1}秒后重试（{}/{}）",
                    label,
                    e,
                    wait.as_secs_f64(),
                    retries,
                    policy.max_retries
                );
                tokio::time::sleep(wait).await;
            }
        }
    }
}

/// 连续请求之间的节流间隔
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    /// 基准间隔（毫秒）
    pub base_ms: u64,
    /// 抖动区间（毫秒，闭区间）
    pub jitter_ms: (i64, i64),
    /// 最小间隔（毫秒）
    pub floor_ms: u64,
}

impl Pacing {
    /// 热榜平台：基准 -10~+20ms 抖动，不低于50ms
    pub fn platforms(base_ms: u64) -> Self {
        Self {
            base_ms,
            jitter_ms: (-10, 20),
            floor_ms: 50,
        }
    }

    /// RSS订阅源：基准 ±200ms 抖动，不低于500ms
    pub fn feeds(base_ms: u64) -> Self {
        Self {
            base_ms,
            jitter_ms: (-200, 200),
            floor_ms: 500,
        }
    }

    /// 不等待
    pub fn none() -> Self {
        Self {
            base_ms: 0,
            jitter_ms: (0, 0),
            floor_ms: 0,
        }
    }

    pub fn next_interval(&self) -> Duration {
        let (low, high) = self.jitter_ms;
        let jitter = if high > low { rand::rng().random_range(low..=high) } else { low };
        let millis = (self.base_ms as i64 + jitter).max(self.floor_ms as i64).max(0);
        Duration::from_millis(millis as u64)
    }

    pub async fn pause(&self) {
        let interval = self.next_interval();
        if !interval.is_zero() {
            tokio::time::sleep(interval).await;
        }
    }
}
