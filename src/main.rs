//! news-collector 命令行入口
//!
//! 用法示例：
//!   news-collector --platforms weibo zhihu --keywords 华为 /AI|人工智能/
//!   news-collector --topic AI --global-filter 广告
//!   news-collector --config keywords.txt --max-items 30
//!   news-collector --rss https://hnrss.org/frontpage --max-age-days 1
//!   news-collector --search "华为 鸿蒙" --output result.json

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use serde::Serialize;
use serde_json::json;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use news_collector::{
    global_collector, init_collector_with_config, CollectorError, CombinedReport, ConfigManager, FeedConfig, NewsCollector,
    PlatformSpec, TitleFilter,
};

/// 热榜与RSS一次性采集工具
#[derive(Parser, Debug)]
#[command(name = "news-collector", version)]
#[command(about = "One-shot trending topic and RSS collector with keyword filtering")]
struct Args {
    /// 平台ID列表（默认：weibo zhihu douyin toutiao baidu）
    #[arg(long, num_args = 1..)]
    platforms: Option<Vec<String>>,

    /// 过滤关键词，支持 /正则/ 与 `词 => 别名`
    #[arg(long, num_args = 1..)]
    keywords: Vec<String>,

    /// 关键词配置文件（词组模式）
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// 内置主题（AI、科技公司、芯片半导体…）
    #[arg(long)]
    topic: Option<String>,

    /// 全局过滤词
    #[arg(long = "global-filter", num_args = 1..)]
    global_filter: Vec<String>,

    /// RSS订阅源URL
    #[arg(long, num_args = 1.., value_name = "URL")]
    rss: Vec<String>,

    /// 搜索查询（空格分隔多个关键词）
    #[arg(long)]
    search: Option<String>,

    /// 每个来源的最大条数，0表示不限
    #[arg(long, default_value_t = 20)]
    max_items: usize,

    /// RSS文章最大保留天数，0表示不过滤
    #[arg(long)]
    max_age_days: Option<u32>,

    /// 热榜接口地址
    #[arg(long)]
    api_url: Option<String>,

    /// 代理地址
    #[arg(long)]
    proxy: Option<String>,

    /// 热榜请求超时（秒）
    #[arg(long)]
    timeout: Option<u64>,

    /// 输出JSON文件
    #[arg(long, short = 'o', value_name = "FILE")]
    output: Option<PathBuf>,

    /// 列出可用平台
    #[arg(long)]
    list_platforms: bool,

    /// 列出内置主题
    #[arg(long)]
    list_topics: bool,

    /// 详细日志
    #[arg(long, short = 'v')]
    verbose: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            let body = json!({ "success": false, "error": format!("{:#}", e) });
            println!("{}", serde_json::to_string_pretty(&body).unwrap_or_default());
            ExitCode::FAILURE
        }
    }
}

/// 日志输出到stderr，RUST_LOG 优先
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(args: Args) -> anyhow::Result<()> {
    if args.list_platforms {
        return emit(&NewsCollector::list_platforms(), args.output.as_deref()).await;
    }
    if args.list_topics {
        return emit(&NewsCollector::list_topics(), args.output.as_deref()).await;
    }

    let mut builder = ConfigManager::custom().verbose(args.verbose).proxy_url(args.proxy.clone());
    if let Some(api_url) = &args.api_url {
        builder = builder.api_url(api_url.as_str());
    }
    if let Some(timeout) = args.timeout {
        builder = builder.http_timeout(timeout);
    }
    if let Some(days) = args.max_age_days {
        builder = builder.max_age_days(days);
    }
    init_collector_with_config(builder.build()).context("初始化采集器失败")?;
    let collector = global_collector()?;

    let platforms: Option<Vec<PlatformSpec>> = args
        .platforms
        .as_ref()
        .map(|ids| ids.iter().map(|id| PlatformSpec::from_id(id)).collect());
    let feeds = FeedConfig::from_urls(&args.rss);

    if let Some(query) = &args.search {
        if query.trim().is_empty() {
            return Err(CollectorError::InvalidInput("搜索关键词为空".to_string()).into());
        }
        let feeds = (!feeds.is_empty()).then_some(feeds.as_slice());
        let report = collector
            .search_news(query, platforms.as_deref(), feeds, args.max_items)
            .await;
        return emit(&report, args.output.as_deref()).await;
    }

    let mut report = CombinedReport::default();

    if let Some(topic) = &args.topic {
        let result = collector
            .collect_by_topic(topic, platforms.as_deref(), args.max_items, &args.global_filter)
            .await?;
        report.platforms = Some(result);
    } else if let Some(path) = &args.config {
        let mut config = ConfigManager::load_keyword_file(path)
            .await
            .with_context(|| format!("读取关键词配置失败：{}", path.display()))?;
        config.extend_global_filters(args.global_filter.iter().cloned());
        report.platforms = Some(
            collector
                .collect_with_config(platforms.as_deref(), &config, args.max_items)
                .await,
        );
    } else if platforms.is_some() || feeds.is_empty() {
        let filter = TitleFilter::keywords(&args.keywords, args.global_filter.clone());
        report.platforms = Some(
            collector
                .collect_news(platforms.as_deref(), &filter, args.max_items)
                .await,
        );
    }

    if !feeds.is_empty() {
        report.rss = Some(collector.collect_rss(&feeds, args.max_items).await);
    }

    emit(&report, args.output.as_deref()).await
}

/// 输出格式化JSON（非ASCII字符不转义）
async fn emit<T: Serialize>(value: &T, output: Option<&Path>) -> anyhow::Result<()> {
    let text = serde_json::to_string_pretty(value)?;
    match output {
        Some(path) => {
            tokio::fs::write(path, text)
                .await
                .with_context(|| format!("写入输出文件失败：{}", path.display()))?;
            info!("结果已保存到：{}", path.display());
        }
        None => println!("{}", text),
    }
    Ok(())
}
