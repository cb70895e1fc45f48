// 機能モジュール構造
pub mod features;
pub mod shared;

use features::{
    categories::commands as category_commands, expenses::commands as expense_commands,
    locale::commands as locale_commands, receipts::commands as receipt_commands,
    reports::commands as report_commands,
};
use log::info;
use shared::config::initialize_logging_system;
use shared::storage::MemorySessionStorage;
use shared::utils::IdGenerator;
use std::sync::Mutex;
use tauri::Manager;
use tokio_util::sync::CancellationToken;

/// アプリケーション状態
///
/// セッションストレージ・ID生成器・進行中の領収書読み込みトークンを保持する。
/// ストレージはセッション限り（プロセス終了で消える）。
pub struct AppState {
    pub storage: MemorySessionStorage,
    pub ids: IdGenerator,
    pub upload_token: Mutex<Option<CancellationToken>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            storage: MemorySessionStorage::new(),
            ids: IdGenerator::new(),
            upload_token: Mutex::new(None),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .plugin(tauri_plugin_dialog::init())
        .setup(|app| {
            // ログシステムを初期化
            initialize_logging_system();

            app.manage(AppState::new());

            info!("アプリケーション初期化が完了しました");
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // レポートコマンド
            report_commands::load_reports,
            report_commands::save_reports,
            report_commands::reset_session,
            report_commands::create_report,
            report_commands::delete_report,
            report_commands::update_report_purpose,
            report_commands::set_report_status,
            report_commands::submit_report,
            // 経費コマンド
            expense_commands::validate_expense_input,
            expense_commands::create_expense,
            expense_commands::delete_expense,
            // 領収書コマンド
            receipt_commands::upload_receipt,
            receipt_commands::cancel_receipt_upload,
            receipt_commands::attach_receipt,
            receipt_commands::attach_existing_receipt,
            receipt_commands::list_report_receipts,
            receipt_commands::remove_receipt,
            // カテゴリコマンド
            category_commands::get_categories,
            // ロケールコマンド
            locale_commands::get_locale,
            locale_commands::set_locale,
        ])
        .run(tauri::generate_context!())
        .expect("Tauriアプリケーションの実行中にエラーが発生しました");
}
