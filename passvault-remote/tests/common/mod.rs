//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

use passvault_remote::{HttpClientOptions, HttpConfigService};

/// 跳过测试的宏（当环境变量缺失时）
#[macro_export]
macro_rules! skip_if_no_endpoint {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("跳过测试: 缺少环境变量 {}", $var);
                return;
            }
        )+
    };
}

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// 生成唯一的测试预设名称（只含字母、数字、下划线）
pub fn generate_test_preset_name() -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or_default();
    format!("_test_{}_{nanos}", std::process::id())
}

/// 从环境变量创建测试用 `HttpConfigService`
pub fn service_from_env() -> Option<HttpConfigService> {
    let endpoint = env::var("PASSVAULT_TEST_ENDPOINT").ok()?;
    let options = HttpClientOptions {
        auth_token: env::var("PASSVAULT_TEST_AUTH_TOKEN").ok(),
        ..HttpClientOptions::default()
    };
    HttpConfigService::new(endpoint, options).ok()
}
