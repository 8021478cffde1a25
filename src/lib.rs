//! Request assembly for Stripe legacy Charges authorizations.
//!
//! The crate turns a typed set of transaction parameters into the
//! form-encoded field set of a `capture=false` charge, resolving which
//! payment source representation to attach. Transport, authentication and
//! response handling live with the caller.

pub mod connector_types;
pub mod connectors;
pub mod enums;
pub mod errors;
pub mod payment_method_data;
pub mod request;
pub mod types;

pub use connector_types::PaymentsAuthorizeData;
pub use connectors::Stripe;
pub use errors::{ConnectorError, CustomResult, ParsingError};
pub use request::{Method, RequestContent};
pub use types::{AmountConvertor, FloatMajorUnit, MinorUnit, MinorUnitForConnector};
