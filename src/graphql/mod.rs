//! GraphQL request layer: wire contract, operation documents, and the
//! request gateway.

pub mod documents;
pub mod gateway;
pub mod wire;

pub use gateway::{HttpTransport, RequestGateway, Transport};
