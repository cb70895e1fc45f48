//! 領収書操作のTauriコマンド
//!
//! 読み込み中のキャンセルトークンはAppStateに保持する。新しい読み込みを
//! 開始すると前のトークンは置き換えられ、前の読み込みはキャンセルされる。

use crate::features::receipts::models::ReceiptRef;
use crate::features::receipts::service;
use crate::features::reports::models::Report;
use crate::features::reports::store;
use crate::shared::errors::AppError;
use crate::AppState;
use log::info;
use std::path::PathBuf;
use tauri::State;
use tokio_util::sync::CancellationToken;

/// 進行中の読み込みトークンを新しいものへ入れ替える
fn swap_upload_token(state: &AppState, next: Option<CancellationToken>) -> Result<(), String> {
    let mut slot = state
        .upload_token
        .lock()
        .map_err(|_| AppError::concurrency("アップロードトークンのロック取得に失敗しました"))?;
    if let Some(previous) = slot.take() {
        previous.cancel();
    }
    *slot = next;
    Ok(())
}

/// 領収書ファイルを読み込む
///
/// 非対応の種別は読み込み前に拒否される。`cancel_receipt_upload`で
/// 中断でき、その場合はエラーとして解決する。
///
/// # 引数
/// * `path` - 選択されたファイルのパス
///
/// # 戻り値
/// 領収書参照、または失敗・キャンセル時はエラーメッセージ
#[tauri::command]
pub async fn upload_receipt(
    path: PathBuf,
    state: State<'_, AppState>,
) -> Result<ReceiptRef, String> {
    let token = CancellationToken::new();
    swap_upload_token(&state, Some(token.clone()))?;

    // 読み込み完了後もトークンは残しておく。完了済みの読み込みへの
    // キャンセルは無害で、次の読み込み開始時に置き換えられる。
    Ok(service::read_receipt_file(&path, &state.ids, &token).await?)
}

/// 進行中の領収書読み込みをキャンセルする
///
/// 進行中の読み込みがない場合は何もしない。
///
/// # 戻り値
/// 成功時は()、失敗時はエラーメッセージ
#[tauri::command]
pub async fn cancel_receipt_upload(state: State<'_, AppState>) -> Result<(), String> {
    swap_upload_token(&state, None)?;
    info!("領収書の読み込みキャンセルを要求しました");
    Ok(())
}

/// 領収書を経費に添付する
///
/// 既存の領収書があれば置き換える。
///
/// # 引数
/// * `report_id` - 対象のレポートID
/// * `expense_id` - 対象の経費ID
/// * `receipt` - 添付する領収書参照
///
/// # 戻り値
/// 更新後のレポート、または失敗時はエラーメッセージ
#[tauri::command]
pub async fn attach_receipt(
    report_id: String,
    expense_id: String,
    receipt: ReceiptRef,
    state: State<'_, AppState>,
) -> Result<Report, String> {
    let updated = store::update_report(&state.storage, &report_id, |report| {
        service::attach_receipt_to_expense(report, &expense_id, receipt)
    })?;

    info!("領収書を添付しました: report_id={report_id}, expense_id={expense_id}");
    Ok(updated)
}

/// 既存の領収書を別の経費へ複製して添付する
///
/// 参照の共有は行わず、新しいIDで内容を複製する。
///
/// # 引数
/// * `report_id` - 対象のレポートID
/// * `expense_id` - 添付先の経費ID
/// * `source_receipt_id` - 複製元の領収書ID
///
/// # 戻り値
/// 更新後のレポート、または失敗時はエラーメッセージ
#[tauri::command]
pub async fn attach_existing_receipt(
    report_id: String,
    expense_id: String,
    source_receipt_id: String,
    state: State<'_, AppState>,
) -> Result<Report, String> {
    let new_id = state.ids.next_id();
    let updated = store::update_report(&state.storage, &report_id, |report| {
        service::clone_receipt_to_expense(report, &expense_id, &source_receipt_id, new_id)
    })?;

    info!(
        "既存の領収書を複製して添付しました: report_id={report_id}, expense_id={expense_id}"
    );
    Ok(updated)
}

/// レポート内の領収書一覧を取得する
///
/// 現在のレポート状態から毎回導出する読み取り専用ビュー。
///
/// # 引数
/// * `report_id` - 対象のレポートID
///
/// # 戻り値
/// 領収書参照の一覧、または失敗時はエラーメッセージ
#[tauri::command]
pub async fn list_report_receipts(
    report_id: String,
    state: State<'_, AppState>,
) -> Result<Vec<ReceiptRef>, String> {
    let reports = store::load_reports(&state.storage)?.into_reports();
    let report = reports
        .iter()
        .find(|report| report.id == report_id)
        .ok_or_else(|| AppError::not_found("Report"))?;
    Ok(service::report_receipts(report))
}

/// 経費から領収書を外す
///
/// # 引数
/// * `report_id` - 対象のレポートID
/// * `expense_id` - 対象の経費ID
///
/// # 戻り値
/// 更新後のレポート、または失敗時はエラーメッセージ
#[tauri::command]
pub async fn remove_receipt(
    report_id: String,
    expense_id: String,
    state: State<'_, AppState>,
) -> Result<Report, String> {
    let updated = store::update_report(&state.storage, &report_id, |report| {
        service::detach_receipt_from_expense(report, &expense_id)
    })?;

    info!("領収書を外しました: report_id={report_id}, expense_id={expense_id}");
    Ok(updated)
}
