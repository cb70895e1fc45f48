use std::env;

fn main() {
    // ビルド時に環境変数を設定
    // ログレベルはコンパイル時に既定値を埋め込み、実行時のLOG_LEVELで上書きできる

    let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    println!("cargo:rustc-env=LOG_LEVEL={}", log_level);

    tauri_build::build()
}
