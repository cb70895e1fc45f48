//! レポート操作のTauriコマンド

use crate::features::reports::models::{Report, ReportStatus};
use crate::features::reports::store;
use crate::shared::errors::{AppError, AppResult};
use crate::AppState;
use chrono::{Datelike, Local, Months, NaiveDate};
use log::info;
use tauri::State;

/// レポート一覧を読み込む
///
/// 初回はシードデータを生成する。保存データが解析できない場合は
/// 空の一覧に縮退する（ログに警告を残す）。
///
/// # 戻り値
/// レポート一覧、または失敗時はエラーメッセージ
#[tauri::command]
pub async fn load_reports(state: State<'_, AppState>) -> Result<Vec<Report>, String> {
    Ok(store::load_reports(&state.storage)?.into_reports())
}

/// レポート一覧を保存する
///
/// # 引数
/// * `reports` - 保存するレポート一覧（全量）
///
/// # 戻り値
/// 成功時は()、失敗時はエラーメッセージ
#[tauri::command]
pub async fn save_reports(
    reports: Vec<Report>,
    state: State<'_, AppState>,
) -> Result<(), String> {
    Ok(store::save_reports(&state.storage, &reports)?)
}

/// セッションをリセットして再シードする
///
/// # 戻り値
/// 再シード後のレポート一覧、または失敗時はエラーメッセージ
#[tauri::command]
pub async fn reset_session(state: State<'_, AppState>) -> Result<Vec<Report>, String> {
    Ok(store::reset_session(&state.storage)?)
}

/// 既存の一覧から新しい下書きレポートを組み立てる
///
/// レポート番号は既存の最大値の次を採番する。目的は既存レポート数ぶん
/// 過去に遡った月から `"<月名> <年> expenses"` として組み立てる。
fn build_new_report(reports: &[Report], today: NaiveDate, id: String) -> AppResult<Report> {
    let month_start = today
        .with_day(1)
        .ok_or_else(|| AppError::storage("月初日の計算に失敗しました"))?;
    let target_month = month_start
        .checked_sub_months(Months::new(reports.len() as u32))
        .ok_or_else(|| AppError::storage("対象月の計算に失敗しました"))?;

    Ok(Report {
        id,
        report_number: store::generate_report_number(reports),
        purpose: format!("{} expenses", target_month.format("%B %Y")),
        status: ReportStatus::Draft,
        expenses: Vec::new(),
    })
}

/// 新しい下書きレポートを作成する
///
/// 作成したレポートは一覧の末尾に追加される。
///
/// # 戻り値
/// 作成したレポート、または失敗時はエラーメッセージ
#[tauri::command]
pub async fn create_report(state: State<'_, AppState>) -> Result<Report, String> {
    let mut reports = store::load_reports(&state.storage)?.into_reports();
    let report = build_new_report(&reports, Local::now().date_naive(), state.ids.next_id())?;

    reports.push(report.clone());
    store::save_reports(&state.storage, &reports)?;
    info!(
        "レポートを作成しました: report_number={}",
        report.report_number
    );
    Ok(report)
}

/// レポートを削除する
///
/// レポート内の経費と領収書も一緒に破棄される。
///
/// # 引数
/// * `report_id` - 削除するレポートID
///
/// # 戻り値
/// 更新後のレポート一覧、または失敗時はエラーメッセージ
#[tauri::command]
pub async fn delete_report(
    report_id: String,
    state: State<'_, AppState>,
) -> Result<Vec<Report>, String> {
    let mut reports = store::load_reports(&state.storage)?.into_reports();
    let before = reports.len();
    reports.retain(|report| report.id != report_id);
    if reports.len() == before {
        return Err(AppError::not_found("Report").into());
    }

    store::save_reports(&state.storage, &reports)?;
    info!("レポートを削除しました: report_id={report_id}");
    Ok(reports)
}

/// レポートの目的を更新する
///
/// # 引数
/// * `report_id` - 対象のレポートID
/// * `purpose` - 新しい目的
///
/// # 戻り値
/// 更新後のレポート、または失敗時はエラーメッセージ
#[tauri::command]
pub async fn update_report_purpose(
    report_id: String,
    purpose: String,
    state: State<'_, AppState>,
) -> Result<Report, String> {
    let updated = store::update_report(&state.storage, &report_id, |report| {
        report.purpose = purpose;
        Ok(())
    })?;
    Ok(updated)
}

/// レポートのステータスを設定する
///
/// セレクタ用の無条件遷移。提出のガード付き遷移は`submit_report`を使う。
///
/// # 引数
/// * `report_id` - 対象のレポートID
/// * `status` - 新しいステータス
///
/// # 戻り値
/// 更新後のレポート、または失敗時はエラーメッセージ
#[tauri::command]
pub async fn set_report_status(
    report_id: String,
    status: ReportStatus,
    state: State<'_, AppState>,
) -> Result<Report, String> {
    let updated = store::update_report(&state.storage, &report_id, |report| {
        report.status = status;
        Ok(())
    })?;
    info!("ステータスを設定しました: report_id={report_id}, status={status:?}");
    Ok(updated)
}

/// レポートをレビューへ提出する
///
/// 経費がひとつ以上ある下書きのみ `In review` へ遷移できる。
///
/// # 引数
/// * `report_id` - 提出するレポートID
///
/// # 戻り値
/// 更新後のレポート、または失敗時はエラーメッセージ
#[tauri::command]
pub async fn submit_report(
    report_id: String,
    state: State<'_, AppState>,
) -> Result<Report, String> {
    let updated = store::update_report(&state.storage, &report_id, |report| {
        if report.status != ReportStatus::Draft || report.expenses.is_empty() {
            return Err(AppError::validation(
                "Only a draft report with at least one expense can be submitted.",
            ));
        }
        report.status = ReportStatus::InReview;
        Ok(())
    })?;
    info!("レポートを提出しました: report_id={report_id}");
    Ok(updated)
}
