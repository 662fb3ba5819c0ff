// Domain layer modules
pub mod greeting;

// Re-exports
pub use greeting::{PlainGreeting, ProxyGreetingBody, DEFAULT_NAME};
