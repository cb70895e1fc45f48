/// レポート機能モジュール
///
/// このモジュールはレポート管理に関連するすべての機能を提供します：
/// - セッションストア（読み込み・保存・リセット・シード）
/// - レポート番号の採番
/// - レポートの作成・削除・目的更新・ステータス遷移・提出
// サブモジュールの宣言
pub mod commands;
pub mod models;
pub mod seed;
pub mod store;

// モデル
pub use models::{Report, ReportStatus};

// ストア
pub use store::{generate_report_number, LoadOutcome, REPORTS_KEY};

// Tauriコマンドハンドラー
pub use commands::{
    create_report, delete_report, load_reports, reset_session, save_reports, set_report_status,
    submit_report, update_report_purpose,
};
