/// ロケール機能モジュール
///
/// このモジュールは表示ロケールに関連する機能を提供します：
/// - ロケール解決（明示指定 → セッション記憶 → 既定）
/// - ロケール選択のセッション記憶
/// - 日付・金額の表示整形
// サブモジュールの宣言
pub mod commands;
pub mod models;
pub mod service;

// モデル
pub use models::{DateFormat, LocaleConfig, LOCALE_KEY};

// サービス
pub use service::{format_currency_for_locale, format_date_for_locale, resolve_locale};

// Tauriコマンドハンドラー
pub use commands::{get_locale, set_locale};
