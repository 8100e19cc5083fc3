//! 全局错误类型定义

use news_collector_engine::CoreError;
use serde_json::Error as SerdeJsonError;
use std::io::Error as IoError;
use thiserror::Error;
use url::ParseError as UrlParseError;

#[derive(Error, Debug)]
pub enum CollectorError {
    // 匹配内核错误（未知主题等）
    #[error("{0}")]
    Core(#[from] CoreError),

    // 网络相关错误
    #[error("网络请求失败：{0}")]
    HttpError(#[from] reqwest::Error),
    #[error("响应状态异常：{0}")]
    BadStatus(String),

    // 解析相关错误
    #[error("JSON解析失败：{0}")]
    JsonError(#[from] SerdeJsonError),
    #[error("订阅源解析失败：{0}")]
    FeedParseError(String),

    // 运行时错误
    #[error("采集器未初始化")]
    CollectorNotInitialized,

    // 基础错误
    #[error("IO操作失败：{0}")]
    IoError(#[from] IoError),
    #[error("URL解析失败：{0}")]
    UrlError(#[from] UrlParseError),
    #[error("无效输入：{0}")]
    InvalidInput(String),
}

// 全局Result类型
pub type CollectorResult<T> = Result<T, CollectorError>;
