//! セッションスコープのキーバリューストレージ
//!
//! ブラウザのsessionStorage相当をプロセス内に持つ。アプリを終了すると
//! 全データが破棄される（セッションを超える永続化は行わない）。

use crate::shared::errors::{AppError, AppResult};
use std::collections::HashMap;
use std::sync::Mutex;

/// セッションストレージの抽象インターフェース
///
/// ストアやロケール解決はこのトレイト越しにストレージへアクセスする。
/// テストでは本番と同じ`MemorySessionStorage`をそのまま利用できる。
pub trait SessionStorage: Send + Sync {
    /// キーに対応する値を取得する
    ///
    /// # 引数
    /// * `key` - ストレージキー
    ///
    /// # 戻り値
    /// 値（存在しない場合はNone）、または失敗時はエラー
    fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// キーに値を保存する（既存値は上書き）
    ///
    /// # 引数
    /// * `key` - ストレージキー
    /// * `value` - 保存する値
    ///
    /// # 戻り値
    /// 成功時はOk(())、失敗時はエラー
    fn set(&self, key: &str, value: &str) -> AppResult<()>;

    /// キーを削除する（存在しない場合は何もしない）
    ///
    /// # 引数
    /// * `key` - ストレージキー
    ///
    /// # 戻り値
    /// 成功時はOk(())、失敗時はエラー
    fn remove(&self, key: &str) -> AppResult<()>;
}

/// プロセス内メモリに保持するセッションストレージ実装
#[derive(Debug, Default)]
pub struct MemorySessionStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemorySessionStorage {
    /// 空のセッションストレージを作成
    ///
    /// # 戻り値
    /// 新しいセッションストレージ
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for MemorySessionStorage {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| AppError::concurrency("セッションストレージのロック取得に失敗しました"))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| AppError::concurrency("セッションストレージのロック取得に失敗しました"))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| AppError::concurrency("セッションストレージのロック取得に失敗しました"))?;
        entries.remove(key);
        Ok(())
    }
}
