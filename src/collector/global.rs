//! 全局采集器单例管理
use once_cell::sync::Lazy;
use std::sync::Arc;
use tokio::sync::OnceCell;

use super::collector::NewsCollector;
use crate::config::{ConfigManager, GlobalConfig};
use crate::error::{CollectorError, CollectorResult};

/// 全局采集器实例
static GLOBAL_COLLECTOR: Lazy<Arc<OnceCell<NewsCollector>>> = Lazy::new(|| Arc::new(OnceCell::new()));

/// 初始化全局采集器（默认配置）
pub fn init_collector() -> CollectorResult<()> {
    init_collector_with_config(ConfigManager::get_default())
}

/// 带自定义配置初始化全局采集器，已初始化时忽略
pub fn init_collector_with_config(config: GlobalConfig) -> CollectorResult<()> {
    if GLOBAL_COLLECTOR.get().is_some() {
        return Ok(());
    }

    let collector = NewsCollector::new(config)?;
    // 并发初始化时先完成者生效，后到者的实例直接丢弃
    let _ = GLOBAL_COLLECTOR.set(collector);
    Ok(())
}

/// 获取全局采集器
pub fn global_collector() -> CollectorResult<&'static NewsCollector> {
    GLOBAL_COLLECTOR.get().ok_or(CollectorError::CollectorNotInitialized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init_collector().unwrap();
        let first = global_collector().unwrap() as *const NewsCollector;
        init_collector_with_config(ConfigManager::custom().http_timeout(1).build()).unwrap();
        let second = global_collector().unwrap() as *const NewsCollector;
        assert_eq!(first, second);
        assert_eq!(global_collector().unwrap().config().http_timeout, 10);
    }

    #[test]
    fn test_concurrent_init_all_succeed() {
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| init_collector_with_config(ConfigManager::get_default())))
            .collect();
        for handle in handles {
            assert!(handle.join().unwrap().is_ok());
        }
        assert!(global_collector().is_ok());
    }
}
