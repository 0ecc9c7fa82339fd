mod enrich_request;
mod enrich_response;

pub use enrich_request::EnrichRequest;
pub use enrich_response::EnrichResponse;
