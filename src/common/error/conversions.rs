//! Error conversion implementations.
//!
//! `OoxmlError` converts through `#[from]`; packaging errors raised directly
//! by the OPC layer are routed through it so callers see one variant.

use super::types::Error;
use crate::ooxml::error::OoxmlError;
use crate::ooxml::opc::error::OpcError;

impl From<OpcError> for Error {
    fn from(err: OpcError) -> Self {
        match err {
            OpcError::IoError(e) => Error::Io(e),
            other => Error::Ooxml(OoxmlError::Opc(other)),
        }
    }
}
