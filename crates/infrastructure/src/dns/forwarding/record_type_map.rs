//! Mnemonic → hickory `RecordType` mapping.
//!
//! Mnemonics are matched case-sensitively, the way the codec spells them
//! (`MX`, not `mx`); whatever the codec does not know is a query error.

use dot_query_domain::DomainError;
use hickory_proto::rr::RecordType as HickoryRecordType;
use std::str::FromStr;

pub struct RecordTypeMapper;

impl RecordTypeMapper {
    pub fn from_mnemonic(mnemonic: &str) -> Result<HickoryRecordType, DomainError> {
        // hickory only knows upper-case spellings
        if mnemonic.chars().any(|c| c.is_ascii_lowercase()) {
            return Err(DomainError::QueryError(format!(
                "Unknown record type '{}'",
                mnemonic
            )));
        }

        HickoryRecordType::from_str(mnemonic).map_err(|e| {
            DomainError::QueryError(format!("Unknown record type '{}': {}", mnemonic, e))
        })
    }
}
