/// 共有モジュール
///
/// 機能モジュール間で共有される基盤（設定、エラー、ストレージ、
/// ユーティリティ）を提供します。
pub mod config;
pub mod errors;
pub mod storage;
pub mod utils;
