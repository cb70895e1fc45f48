use serde::{Deserialize, Serialize};

/// 添付可能な領収書のMIMEタイプ
pub const SUPPORTED_MIME_TYPES: [&str; 3] = ["image/png", "image/jpeg", "application/pdf"];

/// サポート外ファイル選択時のユーザー向けメッセージ
pub const UNSUPPORTED_FILE_MESSAGE: &str = "Only .png, .jpg, and .pdf files are allowed.";

/// 領収書ファイル参照データモデル
///
/// ファイルの内容はbase64エンコードされたdata URIとして埋め込む。
/// シードデータの領収書はサイズ0・空のdata URLを持つ。
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptRef {
    pub id: String,
    pub filename: String,
    pub mime_type: String,
    pub size: u64,
    pub data_url: String,
}

impl ReceiptRef {
    /// 新しいIDで領収書を複製する
    ///
    /// 「既存の領収書を選択」は参照の共有ではなく複製になる。
    /// 領収書は常にひとつの経費だけが所有する。
    ///
    /// # 引数
    /// * `id` - 複製に割り当てる新しいID
    ///
    /// # 戻り値
    /// 同じ内容を持つ独立した領収書
    pub fn duplicate_with_id(&self, id: String) -> Self {
        Self {
            id,
            ..self.clone()
        }
    }
}

/// MIMEタイプがサポート対象かどうかを判定する
///
/// # 引数
/// * `mime_type` - 判定するMIMEタイプ
///
/// # 戻り値
/// サポート対象の場合はtrue
pub fn is_supported_mime_type(mime_type: &str) -> bool {
    SUPPORTED_MIME_TYPES.contains(&mime_type)
}

/// ファイル名の拡張子からMIMEタイプを決定する
///
/// # 引数
/// * `filename` - ファイル名
///
/// # 戻り値
/// サポート対象ならMIMEタイプ、サポート外ならNone
pub fn mime_type_for_filename(filename: &str) -> Option<&'static str> {
    let extension = filename.rsplit_once('.')?.1.to_ascii_lowercase();
    match extension.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "pdf" => Some("application/pdf"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_receipt_serialization_uses_wire_field_names() {
        let receipt = ReceiptRef {
            id: "5000".to_string(),
            filename: "uber-receipt-jan.pdf".to_string(),
            mime_type: "application/pdf".to_string(),
            size: 0,
            data_url: String::new(),
        };

        let json = serde_json::to_string(&receipt).unwrap();
        assert!(json.contains("\"mimeType\":\"application/pdf\""));
        assert!(json.contains("\"dataUrl\":\"\""));

        let deserialized: ReceiptRef = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, receipt);
    }

    #[test]
    fn test_duplicate_with_id_keeps_content() {
        let receipt = ReceiptRef {
            id: "5000".to_string(),
            filename: "hilton-folio.pdf".to_string(),
            mime_type: "application/pdf".to_string(),
            size: 1024,
            data_url: "data:application/pdf;base64,AAAA".to_string(),
        };

        let copy = receipt.duplicate_with_id("6000".to_string());
        assert_eq!(copy.id, "6000");
        assert_eq!(copy.filename, receipt.filename);
        assert_eq!(copy.data_url, receipt.data_url);
        // 元の領収書は変更されない
        assert_eq!(receipt.id, "5000");
    }

    #[test]
    fn test_mime_type_for_filename() {
        assert_eq!(mime_type_for_filename("receipt.png"), Some("image/png"));
        assert_eq!(mime_type_for_filename("receipt.JPG"), Some("image/jpeg"));
        assert_eq!(mime_type_for_filename("receipt.jpeg"), Some("image/jpeg"));
        assert_eq!(
            mime_type_for_filename("invoice.pdf"),
            Some("application/pdf")
        );

        // サポート外の拡張子
        assert_eq!(mime_type_for_filename("notes.txt"), None);
        assert_eq!(mime_type_for_filename("archive.tar.gz"), None);
        assert_eq!(mime_type_for_filename("no-extension"), None);
    }

    #[test]
    fn test_is_supported_mime_type() {
        assert!(is_supported_mime_type("image/png"));
        assert!(is_supported_mime_type("image/jpeg"));
        assert!(is_supported_mime_type("application/pdf"));
        assert!(!is_supported_mime_type("image/gif"));
        assert!(!is_supported_mime_type("text/plain"));
    }
}
