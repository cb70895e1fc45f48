//! レガシーデータの正規化
//!
//! 保存済みレポートをメモリ上の正準形へ移行する純粋関数群。
//! 日付は `DD/MM/YYYY` → ISO (`YYYY-MM-DD`)、通貨は記号
//! （£・$・€）→ ISOコードへ書き換える。正準形の入力には
//! 一切手を触れない（冪等）。

use crate::features::expenses::models::Expense;
use crate::features::reports::models::Report;
use crate::shared::utils::{is_iso_date, legacy_date_to_iso};

/// 日付を正準形へ正規化する
///
/// # 引数
/// * `date` - 保存されていた日付文字列
///
/// # 戻り値
/// (正規化後の値, 書き換えたかどうか)
pub fn normalize_date(date: &str) -> (String, bool) {
    if is_iso_date(date) {
        return (date.to_string(), false);
    }
    match legacy_date_to_iso(date) {
        Some(iso) => (iso, true),
        // 解釈できない日付はそのまま保持する（破壊しない）
        None => (date.to_string(), false),
    }
}

/// 通貨を正準形へ正規化する
///
/// 前後の空白を除去し大文字化したうえで、レガシーの通貨記号を
/// ISOコードへ置き換える。未知の値はそのまま保持する。
///
/// # 引数
/// * `currency` - 保存されていた通貨文字列
///
/// # 戻り値
/// (正規化後の値, 書き換えたかどうか)
pub fn normalize_currency(currency: &str) -> (String, bool) {
    let cleaned = currency.trim().to_uppercase();
    let normalized = match cleaned.as_str() {
        "£" => "GBP".to_string(),
        "$" => "USD".to_string(),
        "€" => "EUR".to_string(),
        _ => cleaned,
    };
    let changed = normalized != currency;
    (normalized, changed)
}

/// 経費ひとつを正規化する
///
/// # 戻り値
/// いずれかのフィールドを書き換えた場合はtrue
pub fn normalize_expense(expense: &mut Expense) -> bool {
    let (date, date_changed) = normalize_date(&expense.date);
    let (currency, currency_changed) = normalize_currency(&expense.currency);
    expense.date = date;
    expense.currency = currency;
    date_changed || currency_changed
}

/// レポートひとつを正規化する
///
/// # 戻り値
/// 内部のいずれかの経費を書き換えた場合はtrue
pub fn normalize_report(report: &mut Report) -> bool {
    let mut changed = false;
    for expense in &mut report.expenses {
        // 短絡評価で正規化が飛ばされないよう先に実行する
        let expense_changed = normalize_expense(expense);
        changed = changed || expense_changed;
    }
    changed
}

/// レポート一覧全体を正規化する
///
/// # 引数
/// * `reports` - 保存から読み込んだレポート一覧
///
/// # 戻り値
/// ひとつでも書き換えた場合はtrue（再保存が必要）
pub fn normalize_reports(reports: &mut [Report]) -> bool {
    let mut changed = false;
    for report in reports.iter_mut() {
        let report_changed = normalize_report(report);
        changed = changed || report_changed;
    }
    changed
}
