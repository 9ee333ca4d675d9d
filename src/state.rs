use super::*;

/// The contract state: the collection singleton and its token registry.
#[derive(Serial, DeserialWithState)]
#[concordium(state_parameter = "S")]
pub struct State<S: HasStateApi> {
    /// Image URL shared by every token in the collection. Immutable after
    /// initialization.
    pub image_url: String,
    /// Capacity ceiling for the collection. Immutable after initialization.
    pub max_supply: u32,
    /// Number of tokens issued so far. Never decreases and never exceeds
    /// `max_supply`.
    pub total_minted: u32,
    /// Administrative owner of the collection. Always exactly one address.
    pub owner: Address,
    /// While set, minting is rejected.
    pub paused: bool,
    /// Current holder of every minted token, keyed by sequential token ID in
    /// `[1, total_minted]`.
    pub tokens: StateMap<ContractTokenId, Address, S>,
}

// Functions for creating, updating and querying the contract state.
impl<S: HasStateApi> State<S> {
    /// Creates a state with no tokens minted and minting enabled.
    pub fn new(
        state_builder: &mut StateBuilder<S>,
        image_url: String,
        max_supply: u32,
        owner: Address,
    ) -> Self {
        State {
            image_url,
            max_supply,
            total_minted: 0,
            owner,
            paused: false,
            tokens: state_builder.new_map(),
        }
    }

    /// Issue the next sequential token to the given sender.
    ///
    /// The pause flag is checked before capacity, so a paused contract at
    /// capacity reports `ContractPaused`.
    ///
    /// Results in an error if the
    /// - contract is paused
    /// - collection is at capacity
    pub fn mint(&mut self, sender: Address) -> ContractResult<ContractTokenId> {
        ensure!(!self.paused, CustomContractError::ContractPaused.into());
        ensure!(
            self.total_minted < self.max_supply,
            CustomContractError::MaxSupplyReached.into()
        );

        self.total_minted += 1;
        let token_id = TokenIdU32(self.total_minted);
        self.tokens.insert(token_id, sender);

        Ok(token_id)
    }

    /// Update the state with a transfer of a token to a new holder.
    ///
    /// Results in an error if the
    /// - token ID has never been minted
    /// - sender is not the current holder
    pub fn transfer_token(
        &mut self,
        token_id: ContractTokenId,
        new_owner: Address,
        sender: &Address,
    ) -> ContractResult<()> {
        let mut holder = self
            .tokens
            .entry(token_id)
            .occupied_or(ContractError::InvalidTokenId)?;

        ensure!(*holder == *sender, ContractError::Unauthorized);

        *holder = new_owner;
        Ok(())
    }

    /// Hand administrative control of the collection to a new address.
    /// Returns the previous owner for the event log.
    ///
    /// Results in an error if the sender is not the current owner.
    pub fn transfer_ownership(
        &mut self,
        new_owner: Address,
        sender: &Address,
    ) -> ContractResult<Address> {
        ensure!(self.owner == *sender, ContractError::Unauthorized);

        let previous_owner = self.owner;
        self.owner = new_owner;
        Ok(previous_owner)
    }

    /// Set the pause flag. Setting the flag to its current value is a no-op
    /// success.
    ///
    /// Results in an error if the sender is not the current owner.
    pub fn set_paused(&mut self, value: bool, sender: &Address) -> ContractResult<()> {
        ensure!(self.owner == *sender, ContractError::Unauthorized);

        self.paused = value;
        Ok(())
    }

    /// Number of tokens issued so far.
    pub fn total_minted(&self) -> u32 {
        self.total_minted
    }

    /// Whether minting is currently halted.
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Get the current holder of a given token ID.
    /// Results in an error if the token ID has never been minted.
    pub fn token_owner(&self, token_id: &ContractTokenId) -> ContractResult<Address> {
        self.tokens
            .get(token_id)
            .map(|holder| *holder)
            .ok_or(ContractError::InvalidTokenId)
    }
}
