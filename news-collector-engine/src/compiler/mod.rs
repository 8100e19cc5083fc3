//! 编译模块：把配置文本/关键词列表编译为可执行的匹配规则
pub mod config_parser;
pub mod token_compiler;

pub use self::config_parser::{parse_keyword_config, parse_keyword_config_strict};
pub use self::token_compiler::{
    compile_token, compile_tokens, compile_with_policy, try_compile_token, CompilePolicy,
};
