pub mod client;
pub mod extract;
pub mod models;
pub mod translator;

pub use client::FreeDictionaryClient;
pub use extract::extract_definitions;
pub use translator::DeepLTranslator;
