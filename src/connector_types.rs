//! Typed view over the transaction parameters of an authorize call.

use std::collections::HashMap;

use hyperswitch_masking::Secret;

use crate::{enums::Currency, payment_method_data::Card, types::FloatMajorUnit};

/// Everything the caller can set before building a charges authorize request.
/// The struct is read-only to the assembler; a fresh payload is produced per
/// call.
#[derive(Clone, Debug, Default)]
pub struct PaymentsAuthorizeData {
    pub amount: Option<FloatMajorUnit>,
    pub currency: Option<Currency>,
    pub description: Option<String>,
    pub metadata: HashMap<String, String>,
    /// Platform fee deducted from the charge. A fee of exactly zero is
    /// indistinguishable from "unset" and is omitted from the wire.
    pub application_fee: Option<FloatMajorUnit>,
    /// Identifier of a previously stored customer record.
    pub customer_reference: Option<Secret<String>>,
    /// Identifier of a stored card belonging to that customer. Only
    /// chargeable together with `customer_reference`.
    pub card_reference: Option<Secret<String>>,
    /// One-time tokenized representation of card data.
    pub token: Option<Secret<String>>,
    pub card: Option<Card>,
}
