use super::*;

pub type ContractResult<A> = Result<A, ContractError>;

/// Contract token ID type.
/// Token IDs are issued sequentially, so the fixed width 32 bit ID type is
/// sufficient.
pub type ContractTokenId = TokenIdU32;

/// Contract token amount type.
/// Every token is unique, so amounts are only ever one.
pub type ContractTokenAmount = TokenAmountU8;

/// Wrapping the custom errors in a type with CIS2 errors.
pub type ContractError = Cis2Error<CustomContractError>;
