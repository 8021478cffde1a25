pub mod transformers;


use crate::{
    connector_types::PaymentsAuthorizeData,
    errors::{ConnectorError, CustomResult},
    request::{Method, RequestContent},
};
use transformers as stripe;

pub(crate) mod headers {
    pub(crate) const CONTENT_TYPE: &str = "Content-Type";
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Stripe;

impl Stripe {
    pub fn id(&self) -> &'static str {
        "stripe"
    }

    pub fn common_get_content_type(&self) -> &'static str {
        "application/x-www-form-urlencoded"
    }

    pub fn get_http_method(&self) -> Method {
        Method::Post
    }

    pub fn get_content_type_header(&self) -> (String, String) {
        (
            headers::CONTENT_TYPE.to_string(),
            self.common_get_content_type().to_string(),
        )
    }

    /// Charges are always posted to `{base_url}/charges`.
    pub fn get_url(&self, base_url: &str) -> String {
        format!("{base_url}/charges")
    }

    /// Assembles the authorize payload. Fails before anything is emitted when
    /// a mandatory field is missing or no payment source can be resolved.
    pub fn get_request_body(
        &self,
        req: &PaymentsAuthorizeData,
    ) -> CustomResult<RequestContent, ConnectorError> {
        let connector_req = stripe::ChargesRequest::try_from(req)?;
        Ok(RequestContent::FormUrlEncoded(Box::new(connector_req)))
    }
}
