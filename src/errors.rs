//! Errors surfaced while assembling a connector request.

/// Shorthand for a `Result` carrying an [`error_stack::Report`].
pub type CustomResult<T, E> = error_stack::Result<T, E>;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConnectorError {
    #[error("Missing required field: {field_name}")]
    MissingRequiredField { field_name: &'static str },
    #[error("Failed to convert the amount to the connector representation")]
    AmountConversionFailed,
}

/// Internal failures of the decimal arithmetic behind amount conversion.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ParsingError {
    #[error("Failed to convert f64 amount to decimal")]
    FloatToDecimalConversionFailure,
    #[error("Failed to convert decimal amount to i64")]
    DecimalToI64ConversionFailure,
}
