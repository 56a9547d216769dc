use tracing_subscriber::EnvFilter;

/// 로그 초기화. `RUST_LOG` 가 있으면 우선, 없으면 설정 파일의 레벨을 쓴다.
pub fn init(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .try_init();
}
