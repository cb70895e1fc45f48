use crate::features::expenses::models::Expense;
use serde::{Deserialize, Serialize};

/// レポートの承認ステータス
///
/// Draft → In review → Processed → Approved の順を想定するが、
/// ステータスセレクタからの任意変更を許す緩いワークフローであり、
/// 厳密な状態機械としては強制しない（submitのみガードされる）。
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum ReportStatus {
    Draft,
    #[serde(rename = "In review")]
    InReview,
    Processed,
    Approved,
}

/// 経費レポートデータモデル
///
/// ひとつの精算期間の経費をまとめるコンテナ。レポートは経費を
/// 排他的に所有し、レポート削除で経費も破棄される。`expenses`の
/// 並び順は挿入順であり、そのまま表示順になる。
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: String,
    pub report_number: String,
    pub purpose: String,
    pub status: ReportStatus,
    pub expenses: Vec<Expense>,
}

impl Report {
    /// レポート内の経費合計を計算する
    ///
    /// # 戻り値
    /// 経費金額の合計
    pub fn total_amount(&self) -> f64 {
        self.expenses.iter().map(|expense| expense.amount).sum()
    }

    /// 領収書が添付された経費の件数を数える
    pub fn receipt_count(&self) -> usize {
        self.expenses
            .iter()
            .filter(|expense| expense.receipt.is_some())
            .count()
    }

    /// IDで経費を検索する（可変参照）
    ///
    /// # 引数
    /// * `expense_id` - 経費ID
    ///
    /// # 戻り値
    /// 見つかった経費への可変参照、存在しなければNone
    pub fn find_expense_mut(&mut self, expense_id: &str) -> Option<&mut Expense> {
        self.expenses
            .iter_mut()
            .find(|expense| expense.id == expense_id)
    }
}
