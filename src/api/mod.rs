pub mod http_client;
pub mod traits;

pub use http_client::HttpGenerationApi;
pub use traits::GenerationApi;
