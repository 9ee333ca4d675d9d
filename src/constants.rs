/// Wire opcode for the token transfer message.
pub const TRANSFER_NFT_OPCODE: u8 = 0x18;

/// Wire opcode for the contract ownership transfer message.
pub const TRANSFER_OWNERSHIP_OPCODE: u8 = 0x19;

/// Wire opcode for the pause message.
pub const PAUSE_OPCODE: u8 = 0x1a;

/// Wire opcode for the unpause message.
pub const UNPAUSE_OPCODE: u8 = 0x1b;

/// Tag for the custom OwnershipTransferred event.
pub const OWNERSHIP_TRANSFERRED_TAG: u8 = u8::MAX - 5;

/// Tag for the custom Paused event.
pub const PAUSED_TAG: u8 = u8::MAX - 6;

/// Tag for the custom Unpaused event.
pub const UNPAUSED_TAG: u8 = u8::MAX - 7;
