// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Response envelope decoding.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ControllerError, Error, ParseError, ProtocolError};

/// A decoded `{Type, Value}` response from the controller.
///
/// Decoding only checks that a top-level `Value` exists and that it does not
/// carry an `Error` code. The `Type` field is kept for inspection but never
/// validated against the request.
///
/// # Examples
///
/// ```
/// use eqoweb_lib::response::Envelope;
///
/// let envelope = Envelope::parse(r#"{"Type":2,"Value":{"rsp":true}}"#).unwrap();
/// assert_eq!(envelope.code(), Some(2));
/// assert_eq!(envelope.value()["rsp"], true);
///
/// let err = Envelope::parse(r#"{"Type":0,"Value":{"Error":1}}"#).unwrap_err();
/// assert_eq!(err.to_string(), "controller error: The controller is busy, please try again later");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    code: Option<i64>,
    value: Value,
}

impl Envelope {
    /// Parses a raw response body.
    ///
    /// # Errors
    ///
    /// - [`ProtocolError::InvalidBody`] if the body is not JSON
    /// - [`ParseError::MissingValue`] if there is no top-level `Value`
    /// - [`Error::Controller`] if `Value` contains an `Error` field
    pub fn parse(body: &str) -> Result<Self, Error> {
        let json: Value = serde_json::from_str(body).map_err(ProtocolError::InvalidBody)?;
        Self::from_json(json, body)
    }

    fn from_json(mut json: Value, body: &str) -> Result<Self, Error> {
        let code = json.get("Type").and_then(Value::as_i64);
        let value = json
            .get_mut("Value")
            .map(Value::take)
            .ok_or_else(|| ParseError::MissingValue(body.to_string()))?;

        if let Some(error) = value.get("Error") {
            tracing::debug!(code = %error, "Controller reported an error");
            let error = error
                .as_i64()
                .map_or_else(ControllerError::unrecognized, ControllerError::from_code);
            return Err(error.into());
        }

        Ok(Self { code, value })
    }

    /// Returns the `Type` code of the response, if present.
    #[must_use]
    pub fn code(&self) -> Option<i64> {
        self.code
    }

    /// Returns the `Value` payload.
    #[must_use]
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Deserializes the payload into a typed response.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Json`] if the payload does not match `T`.
    pub fn payload<T: DeserializeOwned>(self) -> Result<T, ParseError> {
        serde_json::from_value(self.value).map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ControllerErrorKind;

    #[test]
    fn missing_value_is_malformed() {
        let err = Envelope::parse(r#"{"Type":11}"#).unwrap_err();
        assert!(matches!(err, Error::Parse(ParseError::MissingValue(_))));
    }

    #[test]
    fn non_object_body_is_malformed() {
        let err = Envelope::parse("[1,2,3]").unwrap_err();
        assert!(matches!(err, Error::Parse(ParseError::MissingValue(_))));
    }

    #[test]
    fn invalid_json_is_transport_error() {
        let err = Envelope::parse("<html>").unwrap_err();
        assert!(matches!(err, Error::Protocol(ProtocolError::InvalidBody(_))));
    }

    #[test]
    fn embedded_error_is_controller_error() {
        let err = Envelope::parse(r#"{"Type":0,"Value":{"Error":3}}"#).unwrap_err();
        match err {
            Error::Controller(e) => {
                assert_eq!(e.code(), Some(3));
                assert_eq!(e.kind(), ControllerErrorKind::TooManyDevices);
                assert_eq!(
                    e.to_string(),
                    "Too much devices are connected to the controller."
                );
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn non_integer_error_code_is_undefined_controller_error() {
        for body in [
            r#"{"Value":{"Error":"boom"}}"#,
            r#"{"Value":{"Error":null}}"#,
            r#"{"Value":{"Error":2.5}}"#,
        ] {
            let err = Envelope::parse(body).unwrap_err();
            match err {
                Error::Controller(e) => {
                    assert_eq!(e.code(), None);
                    assert_eq!(e.kind(), ControllerErrorKind::Undefined);
                }
                other => panic!("unexpected error for {body}: {other:?}"),
            }
        }
    }

    #[test]
    fn null_value_is_accepted() {
        let envelope = Envelope::parse(r#"{"Type":13,"Value":null}"#).unwrap();
        assert_eq!(envelope.code(), Some(13));
        assert!(envelope.value().is_null());
    }

    #[test]
    fn response_type_is_not_validated() {
        let envelope = Envelope::parse(r#"{"Type":99,"Value":{}}"#).unwrap();
        assert_eq!(envelope.code(), Some(99));
    }
}
