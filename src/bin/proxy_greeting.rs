/// プロキシ統合挨拶Lambdaエントリポイント
///
/// API Gatewayプロキシ統合経由のリクエストを処理し、
/// HTTPレスポンスエンベロープ（statusCode/headers/body）を返却する。
use greeter::application::ProxyGreetingHandler;
use greeter::infrastructure::init_logging;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // 構造化ログを初期化
    init_logging();

    info!("プロキシ統合挨拶Lambda関数を初期化");

    // Lambda関数を実行
    lambda_runtime::run(service_fn(handler)).await
}

/// Lambda関数のメインハンドラー
///
/// イベント形状が不正な場合はエラーをそのままランタイムへ伝播し、
/// ホスト側の汎用的な呼び出しエラーとして報告させる。
async fn handler(event: LambdaEvent<Value>) -> Result<Value, Error> {
    info!("挨拶リクエスト受信");

    let response = ProxyGreetingHandler::handle(&event.payload)?;

    info!("挨拶レスポンス送信");

    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lambda_runtime::Context;
    use serde_json::json;

    /// テスト用のLambdaEventを作成
    fn lambda_event(payload: Value) -> LambdaEvent<Value> {
        LambdaEvent::new(payload, Context::default())
    }

    /// 空イベントでデフォルト名の挨拶エンベロープを返す
    #[tokio::test]
    async fn test_handler_empty_event() {
        let response = handler(lambda_event(json!({}))).await.unwrap();

        assert_eq!(response["statusCode"], 200);
        assert_eq!(response["headers"]["Content-Type"], "application/json");

        let body: Value = serde_json::from_str(response["body"].as_str().unwrap()).unwrap();
        assert_eq!(body["message"], "Hello, World! Your request was successful.");
        assert_eq!(body["status"], "success");
    }

    /// クエリパラメータの名前が挨拶に反映される
    #[tokio::test]
    async fn test_handler_with_name() {
        let event = lambda_event(json!({
            "queryStringParameters": { "name": "Ada" }
        }));

        let response = handler(event).await.unwrap();

        let body: Value = serde_json::from_str(response["body"].as_str().unwrap()).unwrap();
        assert_eq!(body["message"], "Hello, Ada! Your request was successful.");
    }

    /// 不正なイベント形状では呼び出しエラーになる
    #[tokio::test]
    async fn test_handler_propagates_shape_error() {
        let event = lambda_event(json!({
            "queryStringParameters": "name=Ada"
        }));

        let result = handler(event).await;

        assert!(result.is_err());
        assert_eq!(
            result.unwrap_err().to_string(),
            "queryStringParameters must be an object"
        );
    }
}
