// 采集门面
pub mod collector;
// 全局单例
pub mod global;

pub use collector::NewsCollector;
pub use global::{global_collector, init_collector, init_collector_with_config};
