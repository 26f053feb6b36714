//! REST API endpoint implementations.
//!
//! Each function here is one HTTP operation: build the URL, send the
//! request through [`send_request`], and deserialize the body. Identity is
//! the caller's concern; the `reqwest::Client` passed in already carries
//! any default headers the client was built with.

mod applications;
mod authentications;
mod endpoints;
mod request;
mod source_types;
mod sources;

pub use applications::{list_application_types, list_applications};
pub use authentications::{
    create_authentication, list_endpoint_authentications, update_authentication,
};
pub use endpoints::{create_endpoint, list_endpoints, list_source_endpoints, update_endpoint};
pub use request::send_request;
pub use source_types::list_source_types;
pub use sources::{
    ListSourcesParams, create_source, delete_source, list_sources, show_source, update_source,
};
