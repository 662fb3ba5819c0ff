// アプリケーション層モジュール
pub mod plain_greeting_handler;
pub mod proxy_greeting_handler;

// 再エクスポート
pub use plain_greeting_handler::{PlainGreetingError, PlainGreetingHandler};
pub use proxy_greeting_handler::{ProxyGreetingError, ProxyGreetingHandler};
