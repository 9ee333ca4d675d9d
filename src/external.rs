use super::*;

/// Construction arguments for the collection.
#[derive(Debug, Serialize, SchemaType)]
pub struct InitParams {
    /// Image URL shared by every token in the collection. Immutable after
    /// initialization.
    pub image_url: String,
    /// Capacity ceiling for the collection. Must be at least one.
    pub max_supply: u32,
}

/// An inbound message, decoded once at the boundary.
///
/// The wire layout is a single opcode byte followed by fixed width fields.
/// A payload with no opcode is a bare value transfer and requests a mint.
/// The token ID crosses the wire as a plain 32 bit unsigned integer without
/// a length prefix; addresses use the native address encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Issue the next token to the sender.
    Mint,
    /// Reassign the holder of a minted token.
    TransferNft {
        token_id: ContractTokenId,
        new_owner: Address,
    },
    /// Hand administrative control of the collection to a new address.
    TransferOwnership { new_owner: Address },
    /// Halt minting.
    Pause,
    /// Resume minting.
    Unpause,
}

impl Serial for Message {
    fn serial<W: Write>(&self, out: &mut W) -> Result<(), W::Err> {
        match self {
            Message::Mint => Ok(()),
            Message::TransferNft {
                token_id,
                new_owner,
            } => {
                out.write_u8(TRANSFER_NFT_OPCODE)?;
                out.write_u32(token_id.0)?;
                new_owner.serial(out)
            }
            Message::TransferOwnership { new_owner } => {
                out.write_u8(TRANSFER_OWNERSHIP_OPCODE)?;
                new_owner.serial(out)
            }
            Message::Pause => out.write_u8(PAUSE_OPCODE),
            Message::Unpause => out.write_u8(UNPAUSE_OPCODE),
        }
    }
}

impl Deserial for Message {
    fn deserial<R: Read>(source: &mut R) -> ParseResult<Self> {
        let opcode = match source.read_u8() {
            Ok(opcode) => opcode,
            // No opcode means a bare value transfer, which requests a mint.
            Err(_) => return Ok(Message::Mint),
        };
        match opcode {
            TRANSFER_NFT_OPCODE => {
                let token_id = TokenIdU32(source.read_u32()?);
                let new_owner = Address::deserial(source)?;
                Ok(Message::TransferNft {
                    token_id,
                    new_owner,
                })
            }
            TRANSFER_OWNERSHIP_OPCODE => {
                let new_owner = Address::deserial(source)?;
                Ok(Message::TransferOwnership { new_owner })
            }
            PAUSE_OPCODE => Ok(Message::Pause),
            UNPAUSE_OPCODE => Ok(Message::Unpause),
            _ => Err(ParseError::default()),
        }
    }
}

/// Aggregate view of the collection state.
#[derive(Debug, Serialize, SchemaType, PartialEq, Eq)]
pub struct ViewState {
    /// Image URL shared by every token in the collection.
    pub image_url: String,
    /// Capacity ceiling for the collection.
    pub max_supply: u32,
    /// Number of tokens issued so far.
    pub total_minted: u32,
    /// Administrative owner of the collection.
    pub owner: Address,
    /// Whether minting is currently halted.
    pub paused: bool,
}
