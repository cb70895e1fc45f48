use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

/// 正準形（ISO 8601）の日付パターン
static ISO_DATE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("ISO日付パターンが不正です"));

/// レガシー形式（DD/MM/YYYY）の日付パターン
static LEGACY_DATE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{2}/\d{2}/\d{4}$").expect("レガシー日付パターンが不正です"));

/// 正準形のISOカレンダー日付かどうかを検証する
///
/// # 引数
/// * `value` - 検証する日付文字列
///
/// # 戻り値
/// `YYYY-MM-DD`形式かつ実在する暦日ならtrue
///
/// # 検証条件
/// パターン一致だけでなくカレンダー日付として再パースするため、
/// `2024-02-30`のような存在しない日付は拒否される。
pub fn is_iso_date(value: &str) -> bool {
    ISO_DATE_PATTERN.is_match(value) && NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
}

/// レガシー形式`DD/MM/YYYY`の日付をISO形式へ変換する
///
/// # 引数
/// * `value` - 変換する日付文字列
///
/// # 戻り値
/// 実在する暦日ならISO形式文字列、それ以外はNone
pub fn legacy_date_to_iso(value: &str) -> Option<String> {
    if !LEGACY_DATE_PATTERN.is_match(value) {
        return None;
    }
    NaiveDate::parse_from_str(value, "%d/%m/%Y")
        .ok()
        .map(|date| date.format("%Y-%m-%d").to_string())
}

/// 日付文字列を可能ならISO形式へ寄せる
///
/// 正準形ならそのまま、レガシー形式なら変換、どちらでもなければ
/// 生の文字列を返す（呼び出し側は不透明な値として扱う）。
pub fn to_iso_date(value: &str) -> String {
    if is_iso_date(value) {
        return value.to_string();
    }
    legacy_date_to_iso(value).unwrap_or_else(|| value.to_string())
}
