use thiserror::Error;

/// Failures raised by the subnet arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubnetError {
    /// The user supplied text that is not a valid address, mask or CIDR block.
    #[error("invalid input '{input}': {reason}")]
    Parse { input: String, reason: String },

    /// A derived attribute could not be computed for an otherwise parsed subnet.
    #[error("cannot derive {attribute} of {subnet}: {reason}")]
    Derivation {
        attribute: &'static str,
        subnet: String,
        reason: String,
    },
}

impl SubnetError {
    pub fn parse(input: impl Into<String>, reason: impl ToString) -> Self {
        Self::Parse {
            input: input.into(),
            reason: reason.to_string(),
        }
    }

    pub fn derivation(
        attribute: &'static str,
        subnet: impl ToString,
        reason: impl ToString,
    ) -> Self {
        Self::Derivation {
            attribute,
            subnet: subnet.to_string(),
            reason: reason.to_string(),
        }
    }
}
