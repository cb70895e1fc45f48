/// 共有ユーティリティモジュール
///
/// 識別子の発行と日付文字列の検証・変換を提供します。
pub mod dates;
pub mod id;

pub use dates::{is_iso_date, legacy_date_to_iso, to_iso_date};
pub use id::IdGenerator;
