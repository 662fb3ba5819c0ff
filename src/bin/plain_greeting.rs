/// 非プロキシ統合挨拶Lambdaエントリポイント
///
/// 直接呼び出しされたイベントを処理し、HTTPエンベロープを持たない
/// 挨拶ペイロードをそのまま返却する。
use greeter::application::PlainGreetingHandler;
use greeter::infrastructure::init_logging;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // 構造化ログを初期化
    init_logging();

    info!("非プロキシ統合挨拶Lambda関数を初期化");

    // Lambda関数を実行
    lambda_runtime::run(service_fn(handler)).await
}

/// Lambda関数のメインハンドラー
///
/// イベント形状が不正な場合はエラーをそのままランタイムへ伝播する。
async fn handler(event: LambdaEvent<Value>) -> Result<Value, Error> {
    info!("挨拶リクエスト受信");

    let response = PlainGreetingHandler::handle(&event.payload)?;

    info!("挨拶レスポンス送信");

    Ok(response)
}
