use rustc_hash::FxHashMap;
use std::sync::{Arc, RwLock};

use crate::compiler::compile_tokens;
use crate::core::WordToken;

/// 主题词元缓存
/// 进程级生命周期，首次解析时编译并写入，之后只读，从不失效
#[derive(Debug, Default)]
pub struct TopicCache {
    entries: RwLock<FxHashMap<&'static str, Arc<[WordToken]>>>,
}

impl TopicCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// 读锁查缓存 → 未命中则写锁编译并缓存
    pub fn get_or_compile(&self, topic: &'static str, keywords: &[&str]) -> Arc<[WordToken]> {
        // 缓存内容只会整体写入，锁中毒时数据依然完整
        let read = self.entries.read().unwrap_or_else(|e| e.into_inner());
        if let Some(tokens) = read.get(topic) {
            return tokens.clone();
        }
        drop(read);

        let mut write = self.entries.write().unwrap_or_else(|e| e.into_inner());
        write
            .entry(topic)
            .or_insert_with(|| {
                log::debug!("Compiling {} keywords for topic {}", keywords.len(), topic);
                Arc::from(compile_tokens(keywords.iter().copied()))
            })
            .clone()
    }

    /// 已缓存的主题数
    pub fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
