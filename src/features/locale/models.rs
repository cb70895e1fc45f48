//! ロケール設定のデータモデル

use serde::{Deserialize, Serialize};

/// ロケール選択を保持するストレージキー
pub const LOCALE_KEY: &str = "keihi-seisan-locale";

/// 日付の表示形式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateFormat {
    /// 日/月/年（英国式）
    #[serde(rename = "dd/mm/yyyy")]
    DayMonthYear,
    /// 月/日/年（米国式）
    #[serde(rename = "mm/dd/yyyy")]
    MonthDayYear,
}

/// ロケール設定
///
/// 表示用の通貨・日付形式の組。保存データには影響せず、
/// 新規経費の通貨コードの刻印と表示整形にのみ使われる。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleConfig {
    /// ロケールID（"us"・"uk"）
    pub id: String,
    /// 新規経費へ刻印するISO通貨コード
    pub currency_code: String,
    /// 表示用の通貨記号
    pub currency_symbol: String,
    /// 日付の表示形式
    pub date_format: DateFormat,
}
