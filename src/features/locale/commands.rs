//! ロケール操作のTauriコマンド

use crate::features::locale::models::LocaleConfig;
use crate::features::locale::service;
use crate::AppState;
use tauri::State;

/// 有効なロケールを取得する
///
/// # 引数
/// * `requested` - 明示的に要求されたロケールID（オプション）
///
/// # 戻り値
/// 解決されたロケール設定、または失敗時はエラーメッセージ
#[tauri::command]
pub async fn get_locale(
    requested: Option<String>,
    state: State<'_, AppState>,
) -> Result<LocaleConfig, String> {
    Ok(service::resolve_locale(
        &state.storage,
        requested.as_deref(),
    )?)
}

/// ロケールを選択してセッションに記憶する
///
/// # 引数
/// * `id` - ロケールID（"us"・"uk"）
///
/// # 戻り値
/// 記憶したロケール設定、未知のIDの場合は有効なロケールをそのまま返す
#[tauri::command]
pub async fn set_locale(id: String, state: State<'_, AppState>) -> Result<LocaleConfig, String> {
    if let Some(config) = service::remember_locale(&state.storage, &id)? {
        return Ok(config);
    }
    Ok(service::resolve_locale(&state.storage, None)?)
}
