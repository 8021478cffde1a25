//! Amount types shared between the parameter store and the connector payload.

use std::fmt::Display;

use rust_decimal::{
    prelude::{FromPrimitive, ToPrimitive},
    Decimal,
};

use crate::{enums::Currency, errors::ParsingError};

/// Amount convertor trait for the connector wire representation.
pub trait AmountConvertor: Send {
    /// Output type for the connector
    type Output;
    /// helps in conversion of connector required amount type
    fn convert(
        &self,
        amount: FloatMajorUnit,
        currency: Currency,
    ) -> Result<Self::Output, error_stack::Report<ParsingError>>;
}

/// Connector required amount type: the Charges API takes integer minor units.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct MinorUnitForConnector;

impl AmountConvertor for MinorUnitForConnector {
    type Output = MinorUnit;
    fn convert(
        &self,
        amount: FloatMajorUnit,
        currency: Currency,
    ) -> Result<Self::Output, error_stack::Report<ParsingError>> {
        amount.to_minor_unit_as_i64(currency)
    }
}

/// This Unit struct represents MinorUnit in which core amount works
#[derive(
    Default, Debug, serde::Deserialize, serde::Serialize, Clone, Copy, PartialEq, Eq, Hash, PartialOrd,
)]
pub struct MinorUnit(pub i64);

impl MinorUnit {
    /// forms a new minor unit from amount
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// gets amount as i64 value
    pub fn get_amount_as_i64(self) -> i64 {
        self.0
    }
}

impl Display for MinorUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Caller supplied decimal amount in the currency's major denomination.
#[derive(Default, Debug, serde::Deserialize, serde::Serialize, Clone, Copy, PartialEq)]
pub struct FloatMajorUnit(pub f64);

impl FloatMajorUnit {
    /// forms a new major unit from amount
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0.0
    }

    /// Converts to minor unit as i64 based on the currency's decimal places.
    /// Fractional minor units are rounded (half to even), never truncated.
    fn to_minor_unit_as_i64(
        self,
        currency: Currency,
    ) -> Result<MinorUnit, error_stack::Report<ParsingError>> {
        let amount_decimal =
            Decimal::from_f64(self.0).ok_or(ParsingError::FloatToDecimalConversionFailure)?;

        let exponent = currency.number_of_digits_after_decimal_point();
        let multiplier = Decimal::from(10_u32.pow(u32::from(exponent)));
        let amount_i64 = (amount_decimal * multiplier)
            .round()
            .to_i64()
            .ok_or(ParsingError::DecimalToI64ConversionFailure)?;
        Ok(MinorUnit::new(amount_i64))
    }
}
