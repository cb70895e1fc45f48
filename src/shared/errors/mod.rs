use thiserror::Error;

/// アプリケーション全体で使用される統一エラー型
#[derive(Debug, Error)]
pub enum AppError {
    /// セッションストレージ関連のエラー
    #[error("ストレージエラー: {0}")]
    Storage(String),

    /// バリデーション関連のエラー
    #[error("バリデーションエラー: {0}")]
    Validation(String),

    /// リソースが見つからない場合のエラー
    #[error("リソースが見つかりません: {0}")]
    NotFound(String),

    /// 処理がキャンセルされた場合のエラー
    #[error("キャンセルされました: {0}")]
    Canceled(String),

    /// 並行処理関連のエラー
    #[error("並行処理エラー: {0}")]
    Concurrency(String),

    /// I/O関連のエラー
    #[error("I/Oエラー: {0}")]
    Io(#[from] std::io::Error),

    /// JSON解析エラー
    #[error("JSON解析エラー: {0}")]
    Json(#[from] serde_json::Error),
}

/// エラーの重要度を表す列挙型
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ErrorSeverity {
    /// 低重要度（ユーザー入力エラーなど）
    Low,
    /// 中重要度（ファイル読み込み失敗など）
    Medium,
    /// 高重要度（ストレージ障害など）
    High,
}

impl AppError {
    /// ユーザーに表示するためのフレンドリーなメッセージを取得
    ///
    /// # 戻り値
    /// ユーザーに表示可能なエラーメッセージ
    pub fn user_message(&self) -> String {
        match self {
            AppError::Storage(_) => "Saving your reports failed. Please try again.".to_string(),
            AppError::Validation(msg) => msg.clone(),
            AppError::NotFound(msg) => msg.clone(),
            AppError::Canceled(msg) => msg.clone(),
            AppError::Concurrency(_) => "Saving your reports failed. Please try again.".to_string(),
            AppError::Io(_) => "Reading the selected file failed.".to_string(),
            AppError::Json(_) => "Stored report data could not be read.".to_string(),
        }
    }

    /// エラーの詳細情報を取得
    ///
    /// # 戻り値
    /// エラーの詳細情報（ログ出力用）
    pub fn details(&self) -> String {
        format!("{self}")
    }

    /// エラーの重要度を取得
    ///
    /// # 戻り値
    /// エラーの重要度レベル
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AppError::Storage(_) => ErrorSeverity::High,
            AppError::Validation(_) => ErrorSeverity::Low,
            AppError::NotFound(_) => ErrorSeverity::Low,
            AppError::Canceled(_) => ErrorSeverity::Low,
            AppError::Concurrency(_) => ErrorSeverity::High,
            AppError::Io(_) => ErrorSeverity::Medium,
            AppError::Json(_) => ErrorSeverity::Medium,
        }
    }

    /// ストレージエラーを作成するヘルパー関数
    ///
    /// # 引数
    /// * `message` - ストレージエラーメッセージ
    ///
    /// # 戻り値
    /// ストレージエラー
    pub fn storage<S: Into<String>>(message: S) -> Self {
        AppError::Storage(message.into())
    }

    /// バリデーションエラーを作成するヘルパー関数
    ///
    /// # 引数
    /// * `message` - バリデーションエラーメッセージ
    ///
    /// # 戻り値
    /// バリデーションエラー
    pub fn validation<S: Into<String>>(message: S) -> Self {
        AppError::Validation(message.into())
    }

    /// リソース未発見エラーを作成するヘルパー関数
    ///
    /// # 引数
    /// * `resource` - 見つからなかったリソース名（画面表示用の英語名）
    ///
    /// # 戻り値
    /// リソース未発見エラー
    pub fn not_found<S: Into<String>>(resource: S) -> Self {
        AppError::NotFound(format!("{} not found.", resource.into()))
    }

    /// キャンセルエラーを作成するヘルパー関数
    ///
    /// # 引数
    /// * `message` - キャンセル理由のメッセージ
    ///
    /// # 戻り値
    /// キャンセルエラー
    pub fn canceled<S: Into<String>>(message: S) -> Self {
        AppError::Canceled(message.into())
    }

    /// 並行処理エラーを作成するヘルパー関数
    ///
    /// # 引数
    /// * `message` - 並行処理エラーメッセージ
    ///
    /// # 戻り値
    /// 並行処理エラー
    pub fn concurrency<S: Into<String>>(message: S) -> Self {
        AppError::Concurrency(message.into())
    }
}

/// AppErrorからStringへの変換（Tauriコマンドでの使用のため）
impl From<AppError> for String {
    fn from(error: AppError) -> Self {
        error.user_message()
    }
}

/// Result型のエイリアス（アプリケーション全体で使用）
pub type AppResult<T> = Result<T, AppError>;
