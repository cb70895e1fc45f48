use chrono::Utc;
use std::sync::atomic::{AtomicI64, Ordering};

/// セッション内で一意な識別子を発行するジェネレータ
///
/// プロセス起動時刻（エポックミリ秒）を初期値とし、発行のたびに
/// インクリメントする。セッション内での一意性のみを保証する：
/// 再起動をまたぐ一意性や永続データとの衝突チェックは行わないが、
/// 初期値が壁時計由来のためセッション間の衝突は実用上起こらない。
///
/// モジュールレベルの可変状態ではなく、起動時に一度構築して
/// 必要な箇所へ注入する。テストでは`with_seed`で決定的にできる。
#[derive(Debug)]
pub struct IdGenerator {
    counter: AtomicI64,
}

impl IdGenerator {
    /// 現在時刻を初期値とするジェネレータを作成
    ///
    /// # 戻り値
    /// 新しいIDジェネレータ
    pub fn new() -> Self {
        Self::with_seed(Utc::now().timestamp_millis())
    }

    /// 指定した初期値から始まるジェネレータを作成（テスト用）
    ///
    /// # 引数
    /// * `seed` - カウンタの初期値
    ///
    /// # 戻り値
    /// 新しいIDジェネレータ
    pub fn with_seed(seed: i64) -> Self {
        Self {
            counter: AtomicI64::new(seed),
        }
    }

    /// 次の識別子を発行する
    ///
    /// # 戻り値
    /// 単調増加する10進数文字列のID
    pub fn next_id(&self) -> String {
        self.counter.fetch_add(1, Ordering::SeqCst).to_string()
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_next_id_yields_distinct_values() {
        // N回呼び出すとN個の異なるIDが得られる
        let ids = IdGenerator::new();
        let minted: HashSet<String> = (0..100).map(|_| ids.next_id()).collect();
        assert_eq!(minted.len(), 100);
    }

    #[test]
    fn test_next_id_is_monotonic() {
        let ids = IdGenerator::with_seed(1000);
        let first: i64 = ids.next_id().parse().unwrap();
        let second: i64 = ids.next_id().parse().unwrap();
        assert!(second > first);
    }

    #[test]
    fn test_with_seed_is_deterministic() {
        let ids = IdGenerator::with_seed(42);
        assert_eq!(ids.next_id(), "42");
        assert_eq!(ids.next_id(), "43");
    }
}
