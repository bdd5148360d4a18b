pub mod service;

pub use service::PublicClientAuthenticator;
