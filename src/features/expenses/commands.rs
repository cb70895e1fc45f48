//! 経費操作のTauriコマンド

use crate::features::expenses::models::{build_expense, validate_new_expense, NewExpenseInput};
use crate::features::locale::service::resolve_locale;
use crate::features::reports::models::Report;
use crate::features::reports::store;
use crate::shared::errors::AppError;
use crate::AppState;
use log::info;
use tauri::State;

/// 経費入力を検証する
///
/// 作成せずに検証結果だけを取得するためのコマンド。
///
/// # 引数
/// * `input` - 経費入力
///
/// # 戻り値
/// 検証エラーメッセージの一覧（空なら有効）
#[tauri::command]
pub async fn validate_expense_input(input: NewExpenseInput) -> Result<Vec<String>, String> {
    Ok(validate_new_expense(&input))
}

/// 経費を作成してレポートへ追加する
///
/// 検証に失敗した場合は一切の変更を行わない。通貨コードは
/// 有効な表示ロケールから刻印する。
///
/// # 引数
/// * `report_id` - 追加先のレポートID
/// * `input` - 経費入力
///
/// # 戻り値
/// 更新後のレポート、または失敗時はエラーメッセージ
#[tauri::command]
pub async fn create_expense(
    report_id: String,
    input: NewExpenseInput,
    state: State<'_, AppState>,
) -> Result<Report, String> {
    let errors = validate_new_expense(&input);
    if !errors.is_empty() {
        return Err(AppError::validation(errors.join(" ")).into());
    }

    let locale = resolve_locale(&state.storage, None)?;
    let expense = build_expense(input, state.ids.next_id(), &locale.currency_code);
    let expense_id = expense.id.clone();

    let updated = store::update_report(&state.storage, &report_id, |report| {
        report.expenses.push(expense);
        Ok(())
    })?;

    info!("経費を作成しました: expense_id={expense_id}, report_id={report_id}");
    Ok(updated)
}

/// 経費をレポートから削除する
///
/// # 引数
/// * `report_id` - 対象のレポートID
/// * `expense_id` - 削除する経費ID
///
/// # 戻り値
/// 更新後のレポート、または失敗時はエラーメッセージ
#[tauri::command]
pub async fn delete_expense(
    report_id: String,
    expense_id: String,
    state: State<'_, AppState>,
) -> Result<Report, String> {
    let updated = store::update_report(&state.storage, &report_id, |report| {
        let before = report.expenses.len();
        report.expenses.retain(|expense| expense.id != expense_id);
        if report.expenses.len() == before {
            return Err(AppError::not_found("Expense"));
        }
        Ok(())
    })?;

    info!("経費を削除しました: expense_id={expense_id}, report_id={report_id}");
    Ok(updated)
}
