//! ロケール解決と表示整形
//!
//! ロケール表はコンパイル時に固定。解決の優先順位は
//! 明示指定 → セッションに記憶された選択 → 既定（us）。

use crate::features::locale::models::{DateFormat, LocaleConfig, LOCALE_KEY};
use crate::shared::errors::AppResult;
use crate::shared::storage::SessionStorage;
use crate::shared::utils::is_iso_date;
use chrono::NaiveDate;

/// 既定ロケールのID
pub const DEFAULT_LOCALE_ID: &str = "us";

/// 対応ロケール表（ID, 通貨コード, 通貨記号, 日付形式）
const LOCALE_TABLE: [(&str, &str, &str, DateFormat); 2] = [
    ("us", "USD", "$", DateFormat::MonthDayYear),
    ("uk", "GBP", "£", DateFormat::DayMonthYear),
];

/// IDからロケール設定を引く（未知のIDはNone）
pub fn locale_by_id(id: &str) -> Option<LocaleConfig> {
    LOCALE_TABLE
        .iter()
        .find(|(locale_id, _, _, _)| *locale_id == id)
        .map(|(id, code, symbol, format)| LocaleConfig {
            id: (*id).to_string(),
            currency_code: (*code).to_string(),
            currency_symbol: (*symbol).to_string(),
            date_format: *format,
        })
}

/// 有効なロケールを解決する
///
/// # 引数
/// * `storage` - セッションストレージ
/// * `requested` - 明示的に要求されたロケールID（最優先）
///
/// # 戻り値
/// 解決されたロケール設定（未知のIDは無視して次の候補へ）
pub fn resolve_locale(
    storage: &dyn SessionStorage,
    requested: Option<&str>,
) -> AppResult<LocaleConfig> {
    if let Some(config) = requested.and_then(locale_by_id) {
        return Ok(config);
    }
    if let Some(remembered) = storage.get(LOCALE_KEY)? {
        if let Some(config) = locale_by_id(&remembered) {
            return Ok(config);
        }
        log::warn!("記憶されたロケールが不正です（既定を使用します）: {remembered}");
    }
    Ok(locale_by_id(DEFAULT_LOCALE_ID).expect("既定ロケールは必ず表に存在する"))
}

/// ロケール選択をセッションに記憶する
pub fn remember_locale(storage: &dyn SessionStorage, id: &str) -> AppResult<Option<LocaleConfig>> {
    let Some(config) = locale_by_id(id) else {
        log::warn!("未知のロケールIDのため記憶しません: {id}");
        return Ok(None);
    };
    storage.set(LOCALE_KEY, id)?;
    log::info!("ロケールを記憶しました: {id}");
    Ok(Some(config))
}

/// 日付をロケールの形式で表示用に整形する
///
/// 入力は正準形（ISO）のみ解釈する。それ以外の値は移行の対象外
/// なので、手を加えず不透明な文字列として返す。
pub fn format_date_for_locale(date: &str, locale: &LocaleConfig) -> String {
    if !is_iso_date(date) {
        return date.to_string();
    }
    let Ok(parsed) = NaiveDate::parse_from_str(date, "%Y-%m-%d") else {
        return date.to_string();
    };
    match locale.date_format {
        DateFormat::DayMonthYear => parsed.format("%d/%m/%Y").to_string(),
        DateFormat::MonthDayYear => parsed.format("%m/%d/%Y").to_string(),
    }
}

/// 金額をロケールの記号付きで表示用に整形する
pub fn format_currency_for_locale(amount: f64, locale: &LocaleConfig) -> String {
    format!("{}{:.2}", locale.currency_symbol, amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::storage::MemorySessionStorage;

    #[test]
    fn test_default_locale_is_us() {
        let storage = MemorySessionStorage::new();
        let locale = resolve_locale(&storage, None).unwrap();
        assert_eq!(locale.id, "us");
        assert_eq!(locale.currency_code, "USD");
    }

    #[test]
    fn test_explicit_request_wins_over_remembered() {
        let storage = MemorySessionStorage::new();
        remember_locale(&storage, "us").unwrap();
        let locale = resolve_locale(&storage, Some("uk")).unwrap();
        assert_eq!(locale.id, "uk");
        assert_eq!(locale.currency_code, "GBP");
    }

    #[test]
    fn test_remembered_locale_is_used_without_request() {
        let storage = MemorySessionStorage::new();
        remember_locale(&storage, "uk").unwrap();
        let locale = resolve_locale(&storage, None).unwrap();
        assert_eq!(locale.id, "uk");
    }

    #[test]
    fn test_unknown_ids_fall_through_to_default() {
        let storage = MemorySessionStorage::new();
        storage.set(LOCALE_KEY, "fr").unwrap();
        let locale = resolve_locale(&storage, Some("de")).unwrap();
        assert_eq!(locale.id, "us");
    }

    #[test]
    fn test_remember_rejects_unknown_id() {
        let storage = MemorySessionStorage::new();
        assert!(remember_locale(&storage, "fr").unwrap().is_none());
        assert!(storage.get(LOCALE_KEY).unwrap().is_none());
    }

    #[test]
    fn test_format_date_follows_locale() {
        let uk = locale_by_id("uk").unwrap();
        let us = locale_by_id("us").unwrap();
        assert_eq!(format_date_for_locale("2026-01-05", &uk), "05/01/2026");
        assert_eq!(format_date_for_locale("2026-01-05", &us), "01/05/2026");
    }

    #[test]
    fn test_format_date_leaves_non_canonical_input_opaque() {
        let uk = locale_by_id("uk").unwrap();
        assert_eq!(format_date_for_locale("05/01/2026", &uk), "05/01/2026");
        assert_eq!(format_date_for_locale("", &uk), "");
    }

    #[test]
    fn test_format_currency_uses_symbol_and_two_decimals() {
        let uk = locale_by_id("uk").unwrap();
        let us = locale_by_id("us").unwrap();
        assert_eq!(format_currency_for_locale(34.5, &uk), "£34.50");
        assert_eq!(format_currency_for_locale(120.0, &us), "$120.00");
    }
}
