//! アプリケーション設定
//!
//! ログレベルなどの実行時設定を環境変数から読み込む。

/// ログレベルを取得する（優先順位: 起動時 > コンパイル時 > 既定値）
///
/// # 戻り値
/// ログレベル文字列（`error`/`warn`/`info`/`debug`/`trace`）
///
/// # 取得順序
/// 1. 起動時の環境変数（`std::env::var`）
/// 2. コンパイル時の環境変数（`option_env!`マクロ、build.rsが埋め込む）
/// 3. どちらも見つからない場合は`info`
pub fn log_level() -> String {
    std::env::var("LOG_LEVEL")
        .ok()
        .or_else(|| option_env!("LOG_LEVEL").map(str::to_string))
        .unwrap_or_else(|| "info".to_string())
}

/// ログシステムを初期化する
///
/// LOG_LEVEL環境変数に応じたフィルタでenv_loggerを設定する。
/// アプリ起動時に一度だけ呼び出すこと。
pub fn initialize_logging_system() {
    let configured_level = log_level();

    // ログレベルを設定
    let log_level = match configured_level.to_lowercase().as_str() {
        "error" => log::LevelFilter::Error,
        "warn" => log::LevelFilter::Warn,
        "info" => log::LevelFilter::Info,
        "debug" => log::LevelFilter::Debug,
        "trace" => log::LevelFilter::Trace,
        _ => log::LevelFilter::Info,
    };

    // env_loggerを初期化
    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .format_timestamp_secs()
        .format_module_path(false)
        .format_target(false)
        .init();

    log::info!("ログシステムを初期化しました: level={}", configured_level);
}
