//! HTTP request domain types

mod body;
mod descriptor;
mod header;
mod method;
mod query;

pub use body::RequestBody;
pub use descriptor::ApiRequest;
pub use header::{Header, Headers};
pub use method::HttpMethod;
pub use query::QueryParams;
