//! カテゴリ操作のTauriコマンド

use crate::features::categories::models::{all_categories, Category};

/// カテゴリ一覧を取得する
///
/// # 戻り値
/// 選択肢として表示するカテゴリの一覧
#[tauri::command]
pub async fn get_categories() -> Result<Vec<Category>, String> {
    Ok(all_categories())
}
