use crate::features::categories;
use crate::features::receipts::models::ReceiptRef;
use crate::shared::utils::is_iso_date;
use serde::{Deserialize, Serialize};

/// 経費データモデル
///
/// `date`の正準形はISO 8601（YYYY-MM-DD）。レガシー形式の日付は
/// ロード時の正規化パスで変換される。`payment_method`は作成時に
/// カテゴリから導出され、単独では編集できない。
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: String,
    pub category: String,
    pub date: String,
    pub amount: f64,
    pub currency: String,
    pub payment_method: String,
    pub merchant: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receipt: Option<ReceiptRef>,
}

/// 経費作成の入力DTO
#[derive(Debug, Clone, Deserialize)]
pub struct NewExpenseInput {
    pub category: String,
    pub date: String,
    pub amount: f64,
    pub merchant: String,
    #[serde(default)]
    pub description: String,
}

/// 経費作成の入力を検証する
///
/// すべてのエラーをまとめて返す（all-or-nothing方式、項目ごとの
/// 部分的な受理は行わない）。メッセージはそのまま画面に表示される。
///
/// # 引数
/// * `input` - 経費作成の入力DTO
///
/// # 戻り値
/// ユーザー向けエラーメッセージのリスト（妥当な場合は空）
pub fn validate_new_expense(input: &NewExpenseInput) -> Vec<String> {
    let mut errors = Vec::new();

    if input.merchant.trim().is_empty() {
        errors.push("Merchant is required.".to_string());
    }

    if input.date.trim().is_empty() {
        errors.push("Date is required.".to_string());
    } else if !is_iso_date(&input.date) {
        errors.push("Date must be valid.".to_string());
    }

    if !(input.amount > 0.0) {
        errors.push("Amount must be greater than 0.".to_string());
    }

    errors
}

/// 検証済みの入力から経費を構築する
///
/// # 引数
/// * `input` - 検証済みの入力DTO
/// * `id` - 発行済みの経費ID
/// * `currency` - 表示ロケール由来の通貨コード（作成時に刻印される）
///
/// # 戻り値
/// 新しい経費（領収書は未添付）
pub fn build_expense(input: NewExpenseInput, id: String, currency: &str) -> Expense {
    let payment_method = categories::payment_method_for(&input.category).to_string();
    Expense {
        id,
        category: input.category,
        date: input.date,
        amount: input.amount,
        currency: currency.to_string(),
        payment_method,
        merchant: input.merchant,
        description: input.description,
        receipt: None,
    }
}
