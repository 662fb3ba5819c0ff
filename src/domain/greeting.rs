// 挨拶レスポンスドキュメント
//
// このモジュールは各Lambda関数が返却する挨拶レスポンスの
// 構造と文言を定義する。

use serde::Serialize;

/// 名前が指定されなかった場合に使用するデフォルト名
pub const DEFAULT_NAME: &str = "World";

/// 成功レスポンスのステータス文字列
const STATUS_SUCCESS: &str = "success";

/// プロキシ統合レスポンスのボディドキュメント
///
/// HTTPレスポンスエンベロープの`body`フィールドに
/// JSON文字列としてシリアライズされて埋め込まれる。
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ProxyGreetingBody {
    /// 挨拶メッセージ
    pub message: String,

    /// 処理結果ステータス（常に"success"）
    pub status: String,
}

impl ProxyGreetingBody {
    /// 指定された名前から挨拶ボディを生成
    ///
    /// # Arguments
    /// * `name` - 挨拶に埋め込む名前（検証済みであること）
    pub fn new(name: &str) -> Self {
        Self {
            message: format!("Hello, {}! Your request was successful.", name),
            status: STATUS_SUCCESS.to_string(),
        }
    }

    /// ボディをJSON文字列としてシリアライズ
    ///
    /// フィールドは文字列のみのため、シリアライズは失敗しない。
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).expect("ProxyGreetingBodyのシリアライズに失敗")
    }
}

/// 非プロキシ統合のレスポンスドキュメント
///
/// HTTPエンベロープを持たず、このドキュメント自体が
/// Lambda関数の戻り値となる。
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PlainGreeting {
    /// 挨拶メッセージ
    pub greeting: String,
}

impl PlainGreeting {
    /// 指定された名前から挨拶ドキュメントを生成
    pub fn new(name: &str) -> Self {
        Self {
            greeting: format!("Hello from non-proxy, {}!", name),
        }
    }
}
