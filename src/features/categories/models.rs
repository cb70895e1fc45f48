use serde::{Deserialize, Serialize};

/// カテゴリーデータモデル
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub label: String,
    pub payment_method: String,
}

/// カテゴリーカタログ（ラベル → 既定の支払方法）
///
/// 設定としては永続化せず、コンパイル時定数として扱う。
pub const EXPENSE_CATEGORIES: [(&str, &str); 6] = [
    ("Gift | external", "Cash"),
    ("Government Official", "Cash"),
    ("Ground Transportation", "Cash"),
    ("Hardware (Supplies General)", "Cash"),
    ("Hardware Dev (Prod Dev-Other)", "Cash"),
    ("Hotel", "Cash"),
];

/// カテゴリー一覧を取得する
///
/// # 戻り値
/// カタログ順のカテゴリーのリスト
pub fn all_categories() -> Vec<Category> {
    EXPENSE_CATEGORIES
        .iter()
        .map(|(label, payment_method)| Category {
            label: (*label).to_string(),
            payment_method: (*payment_method).to_string(),
        })
        .collect()
}

/// カテゴリーの既定の支払方法を取得する
///
/// # 引数
/// * `label` - カテゴリーラベル
///
/// # 戻り値
/// カタログ上の支払方法（未知のラベルは`Cash`にフォールバック）
pub fn payment_method_for(label: &str) -> &'static str {
    EXPENSE_CATEGORIES
        .iter()
        .find(|(catalog_label, _)| *catalog_label == label)
        .map(|(_, payment_method)| *payment_method)
        .unwrap_or("Cash")
}
