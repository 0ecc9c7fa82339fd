mod caching_client;
mod pypi_client;

pub use caching_client::CachingRegistryClient;
pub use pypi_client::PyPiRegistryClient;
