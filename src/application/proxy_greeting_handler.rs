/// プロキシ統合挨拶ハンドラー
///
/// API Gatewayプロキシ統合イベントからクエリパラメータ`name`を抽出し、
/// HTTPレスポンスエンベロープ（statusCode/headers/body）を構築する。
use serde_json::{json, Value};
use thiserror::Error;

use crate::domain::{ProxyGreetingBody, DEFAULT_NAME};

/// プロキシ統合挨拶ハンドラーのエラー型
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProxyGreetingError {
    /// queryStringParametersが存在するがオブジェクトでない
    #[error("queryStringParameters must be an object")]
    QueryParametersNotObject,

    /// nameが存在するが文字列でない
    #[error("name must be a string")]
    NameNotString,
}

/// プロキシ統合の挨拶リクエストを処理するハンドラー
///
/// イベントはホストがJSONデコード済みのマッピングとして渡される。
/// 状態を持たず、イベントのみから決定的にレスポンスを生成する。
pub struct ProxyGreetingHandler;

impl ProxyGreetingHandler {
    /// プロキシ統合イベントを処理してレスポンスエンベロープを生成
    ///
    /// # 処理フロー
    /// 1. イベントからqueryStringParametersを取得
    /// 2. nameを抽出（欠落時は"World"にフォールバック）
    /// 3. 挨拶ボディをシリアライズしてエンベロープに埋め込み
    ///
    /// # 引数
    /// * `event` - API Gatewayプロキシ統合イベント
    ///
    /// # 戻り値
    /// * 成功時は`statusCode`/`headers`/`body`を持つエンベロープ
    /// * イベント形状が不正な場合は`Err(ProxyGreetingError)`
    pub fn handle(event: &Value) -> Result<Value, ProxyGreetingError> {
        let name = Self::resolve_name(event)?;
        let body = ProxyGreetingBody::new(&name);

        Ok(json!({
            "statusCode": 200,
            "headers": {"Content-Type": "application/json"},
            "body": body.to_json(),
        }))
    }

    /// イベントから挨拶に使用する名前を解決
    ///
    /// queryStringParametersまたはnameが欠落（null含む）している場合は
    /// デフォルト名"World"を返す。指定された名前は加工せずそのまま使用する。
    fn resolve_name(event: &Value) -> Result<String, ProxyGreetingError> {
        let params = match event.get("queryStringParameters") {
            // クエリ文字列なしのリクエストではnullが渡される
            None | Some(Value::Null) => return Ok(DEFAULT_NAME.to_string()),
            Some(Value::Object(params)) => params,
            Some(_) => return Err(ProxyGreetingError::QueryParametersNotObject),
        };

        match params.get("name") {
            None | Some(Value::Null) => Ok(DEFAULT_NAME.to_string()),
            Some(Value::String(name)) => Ok(name.clone()),
            Some(_) => Err(ProxyGreetingError::NameNotString),
        }
    }
}
