use super::*;

/// An untagged event of administrative control moving to a new address.
#[derive(Debug, Serialize, SchemaType, PartialEq, Eq)]
pub struct OwnershipTransferredEvent {
    /// Previous administrative owner.
    pub previous_owner: Address,
    /// New administrative owner.
    pub new_owner: Address,
}

/// Tagged Custom event to be serialized for the event log.
#[derive(Debug, PartialEq, Eq)]
pub enum CollectionEvent {
    /// Administrative control of the collection changed hands.
    OwnershipTransferred(OwnershipTransferredEvent),
    /// Minting was halted.
    Paused,
    /// Minting was resumed.
    Unpaused,
}

impl Serial for CollectionEvent {
    fn serial<W: Write>(&self, out: &mut W) -> Result<(), W::Err> {
        match self {
            CollectionEvent::OwnershipTransferred(event) => {
                out.write_u8(OWNERSHIP_TRANSFERRED_TAG)?;
                event.serial(out)
            }
            CollectionEvent::Paused => out.write_u8(PAUSED_TAG),
            CollectionEvent::Unpaused => out.write_u8(UNPAUSED_TAG),
        }
    }
}

impl Deserial for CollectionEvent {
    fn deserial<R: Read>(source: &mut R) -> ParseResult<Self> {
        let tag = source.read_u8()?;
        match tag {
            OWNERSHIP_TRANSFERRED_TAG => OwnershipTransferredEvent::deserial(source)
                .map(CollectionEvent::OwnershipTransferred),
            PAUSED_TAG => Ok(CollectionEvent::Paused),
            UNPAUSED_TAG => Ok(CollectionEvent::Unpaused),
            _ => Err(ParseError::default()),
        }
    }
}
