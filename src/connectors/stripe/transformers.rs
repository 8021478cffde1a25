use std::collections::HashMap;

use error_stack::ResultExt;
use hyperswitch_masking::{PeekInterface, Secret};
use serde::Serialize;

use crate::{
    connector_types::PaymentsAuthorizeData,
    errors::ConnectorError,
    payment_method_data::Card,
    types::{AmountConvertor, MinorUnit, MinorUnitForConnector},
};

/// Field set for `POST /charges` with manual capture.
#[derive(Debug, Serialize, PartialEq)]
pub struct ChargesRequest {
    pub amount: MinorUnit, //amount in cents, hence passed as integer
    pub currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub meta_data: HashMap<String, String>,
    /// Always false: the charge reserves funds and must be captured
    /// separately before it expires.
    pub capture: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_fee: Option<MinorUnit>,
    #[serde(flatten)]
    pub source: ChargeSource,
}

/// Exactly one payment source representation is attached to a charge.
///
/// A stored card can only be charged in the context of its owning customer,
/// so a card reference on its own never becomes a source.
#[derive(Debug, Serialize, PartialEq)]
#[serde(untagged)]
pub enum ChargeSource {
    CustomerCard {
        customer: Secret<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        card: Option<Secret<String>>,
    },
    Token {
        card: Secret<String>,
    },
    RawCard(ChargeCardData),
}

#[derive(Debug, Serialize, PartialEq)]
pub struct ChargeCardData {
    #[serde(rename = "card[number]")]
    card_number: Secret<String>,
    #[serde(rename = "card[exp_month]")]
    card_exp_month: Secret<String>,
    #[serde(rename = "card[exp_year]")]
    card_exp_year: Secret<String>,
    #[serde(rename = "card[cvc]", skip_serializing_if = "Option::is_none")]
    card_cvc: Option<Secret<String>>,
    #[serde(rename = "card[name]", skip_serializing_if = "Option::is_none")]
    card_name: Option<Secret<String>>,
    #[serde(rename = "card[address_line1]", skip_serializing_if = "Option::is_none")]
    card_address_line1: Option<Secret<String>>,
    #[serde(rename = "card[address_line2]", skip_serializing_if = "Option::is_none")]
    card_address_line2: Option<Secret<String>>,
    #[serde(rename = "card[address_city]", skip_serializing_if = "Option::is_none")]
    card_address_city: Option<String>,
    #[serde(rename = "card[address_state]", skip_serializing_if = "Option::is_none")]
    card_address_state: Option<Secret<String>>,
    #[serde(rename = "card[address_zip]", skip_serializing_if = "Option::is_none")]
    card_address_zip: Option<Secret<String>>,
    #[serde(
        rename = "card[address_country]",
        skip_serializing_if = "Option::is_none"
    )]
    card_address_country: Option<String>,
}

impl From<&Card> for ChargeCardData {
    fn from(card: &Card) -> Self {
        let address = card.billing_address.as_ref();
        Self {
            card_number: card.card_number.clone(),
            card_exp_month: card.card_exp_month.clone(),
            card_exp_year: card.card_exp_year.clone(),
            card_cvc: card.card_cvc.clone(),
            card_name: card.card_holder_name.clone(),
            card_address_line1: address.and_then(|a| a.line1.clone()),
            card_address_line2: address.and_then(|a| a.line2.clone()),
            card_address_city: address.and_then(|a| a.city.clone()),
            card_address_state: address.and_then(|a| a.state.clone()),
            card_address_zip: address.and_then(|a| a.zip.clone()),
            card_address_country: address.and_then(|a| a.country.clone()),
        }
    }
}

fn non_empty(reference: &Option<Secret<String>>) -> Option<Secret<String>> {
    reference
        .as_ref()
        .filter(|value| !value.peek().is_empty())
        .cloned()
}

impl TryFrom<&PaymentsAuthorizeData> for ChargeSource {
    type Error = error_stack::Report<ConnectorError>;
    fn try_from(item: &PaymentsAuthorizeData) -> Result<Self, Self::Error> {
        if item.customer_reference.is_none() && item.card_reference.is_some() {
            tracing::debug!("card reference without customer reference is not chargeable, ignored");
        }
        if let Some(customer) = non_empty(&item.customer_reference) {
            return Ok(Self::CustomerCard {
                customer,
                card: non_empty(&item.card_reference),
            });
        }
        if let Some(token) = non_empty(&item.token) {
            return Ok(Self::Token { card: token });
        }
        if let Some(card) = &item.card {
            return Ok(Self::RawCard(ChargeCardData::from(card)));
        }
        Err(ConnectorError::MissingRequiredField { field_name: "card" }.into())
    }
}

impl TryFrom<&PaymentsAuthorizeData> for ChargesRequest {
    type Error = error_stack::Report<ConnectorError>;
    fn try_from(item: &PaymentsAuthorizeData) -> Result<Self, Self::Error> {
        let major_amount = item
            .amount
            .ok_or(ConnectorError::MissingRequiredField {
                field_name: "amount",
            })?;
        let currency = item
            .currency
            .ok_or(ConnectorError::MissingRequiredField {
                field_name: "currency",
            })?;

        let amount = MinorUnitForConnector
            .convert(major_amount, currency)
            .change_context(ConnectorError::AmountConversionFailed)?;

        let application_fee = item
            .application_fee
            .filter(|fee| !fee.is_zero())
            .map(|fee| MinorUnitForConnector.convert(fee, currency))
            .transpose()
            .change_context(ConnectorError::AmountConversionFailed)?;

        let source = ChargeSource::try_from(item)?;

        Ok(Self {
            amount,
            currency: currency.to_string().to_lowercase(),
            description: item.description.clone(),
            meta_data: get_transaction_metadata(&item.metadata),
            capture: false,
            application_fee,
            source,
        })
    }
}

fn get_transaction_metadata(metadata: &HashMap<String, String>) -> HashMap<String, String> {
    metadata
        .iter()
        .map(|(key, value)| (format!("metadata[{key}]"), value.clone()))
        .collect()
}
