/// 非プロキシ統合挨拶ハンドラー
///
/// イベント直下の`name`フィールドを抽出し、HTTPエンベロープを持たない
/// 挨拶ペイロードをそのまま返却する。
use serde_json::Value;
use thiserror::Error;

use crate::domain::{PlainGreeting, DEFAULT_NAME};

/// 非プロキシ統合挨拶ハンドラーのエラー型
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PlainGreetingError {
    /// nameが存在するが文字列でない
    #[error("name must be a string")]
    NameNotString,
}

/// 非プロキシ統合の挨拶リクエストを処理するハンドラー
///
/// クエリパラメータのネストはなく、イベント直下のフィールドのみを参照する。
pub struct PlainGreetingHandler;

impl PlainGreetingHandler {
    /// イベントを処理して挨拶ペイロードを生成
    ///
    /// # 引数
    /// * `event` - ホストから渡されたイベントマッピング
    ///
    /// # 戻り値
    /// * 成功時は`greeting`フィールドのみを持つペイロード
    /// * nameが文字列でない場合は`Err(PlainGreetingError)`
    pub fn handle(event: &Value) -> Result<Value, PlainGreetingError> {
        let name = Self::resolve_name(event)?;
        let greeting = PlainGreeting::new(&name);

        // PlainGreetingは文字列フィールドのみのため変換は失敗しない
        Ok(serde_json::to_value(greeting).expect("PlainGreetingのシリアライズに失敗"))
    }

    /// イベント直下から挨拶に使用する名前を解決
    ///
    /// nameが欠落（null含む）している場合はデフォルト名"World"を返す。
    fn resolve_name(event: &Value) -> Result<String, PlainGreetingError> {
        match event.get("name") {
            None | Some(Value::Null) => Ok(DEFAULT_NAME.to_string()),
            Some(Value::String(name)) => Ok(name.clone()),
            Some(_) => Err(PlainGreetingError::NameNotString),
        }
    }
}
