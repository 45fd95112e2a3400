pub mod relay;
pub mod response_builder;

pub use relay::{RelayOutcome, RelayedResponse};
pub use response_builder::{ResponseBuilder, APPLICATION_JSON_UTF8};
