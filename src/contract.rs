use super::*;

/// Initialize the collection with an image URL and a capacity ceiling.
/// The account deploying the contract becomes the administrative owner.
///
/// It rejects if:
/// - It fails to parse the parameter.
/// - The capacity ceiling is zero.
#[init(contract = "NFTCollection", parameter = "InitParams")]
fn init<S: HasStateApi>(
    ctx: &impl HasInitContext,
    state_builder: &mut StateBuilder<S>,
) -> InitResult<State<S>> {
    // Parse the parameter.
    let params: InitParams = ctx.parameter_cursor().get()?;

    // A collection that can never mint anything is a deployment mistake.
    ensure!(
        params.max_supply > 0,
        CustomContractError::InvalidMaxSupply.into()
    );

    Ok(State::new(
        state_builder,
        params.image_url,
        params.max_supply,
        Address::Account(ctx.init_origin()),
    ))
}

/// Entry point for every inbound message.
///
/// The payload is decoded into a `Message` once at the boundary and
/// dispatched with an exhaustive match. A payload with no opcode requests a
/// mint for the sender. Attached CCD is never consulted by any guard; mint
/// pricing is a caller side convention.
///
/// Every accepted message commits exactly one state transition and logs the
/// matching event. A rejected message aborts with no state change.
///
/// It rejects if:
/// - It fails to parse the parameter.
/// - Minting while the contract is paused (`ContractPaused`).
/// - Minting when the collection is at capacity (`MaxSupplyReached`).
/// - Transferring a token the sender does not hold (`Unauthorized`), or one
///   that has never been minted (`InvalidTokenId`).
/// - Pausing, unpausing or transferring contract ownership from any sender
///   other than the administrative owner (`Unauthorized`).
/// - Fails to log event.
#[receive(
    contract = "NFTCollection",
    name = "receive",
    parameter = "Message",
    mutable,
    payable,
    enable_logger
)]
fn receive<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    _amount: Amount,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    // Parse the parameter.
    let message: Message = ctx.parameter_cursor().get()?;
    // Get the sender who invoked this contract function.
    let sender = ctx.sender();

    match message {
        Message::Mint => {
            let token_id = host.state_mut().mint(sender)?;

            // Event for the minted NFT.
            logger.log(&Cis2Event::Mint(MintEvent {
                token_id,
                amount: ContractTokenAmount::from(1),
                owner: sender,
            }))?;

            // Metadata URL for the NFT. The whole collection shares one
            // image, set at initialization.
            logger.log(
                &Cis2Event::<ContractTokenId, ContractTokenAmount>::TokenMetadata(
                    TokenMetadataEvent {
                        token_id,
                        metadata_url: MetadataUrl {
                            url: host.state().image_url.clone(),
                            hash: None,
                        },
                    },
                ),
            )?;
        }
        Message::TransferNft {
            token_id,
            new_owner,
        } => {
            host.state_mut()
                .transfer_token(token_id, new_owner, &sender)?;

            // Event for the token transfer.
            logger.log(&Cis2Event::Transfer(TransferEvent {
                token_id,
                amount: ContractTokenAmount::from(1),
                from: sender,
                to: new_owner,
            }))?;
        }
        Message::TransferOwnership { new_owner } => {
            let previous_owner = host.state_mut().transfer_ownership(new_owner, &sender)?;

            // Event for the change of administrative owner.
            logger.log(&CollectionEvent::OwnershipTransferred(
                OwnershipTransferredEvent {
                    previous_owner,
                    new_owner,
                },
            ))?;
        }
        Message::Pause => {
            host.state_mut().set_paused(true, &sender)?;
            logger.log(&CollectionEvent::Paused)?;
        }
        Message::Unpause => {
            host.state_mut().set_paused(false, &sender)?;
            logger.log(&CollectionEvent::Unpaused)?;
        }
    }

    Ok(())
}

/// View the full collection state.
#[receive(contract = "NFTCollection", name = "view", return_value = "ViewState")]
fn view<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<ViewState> {
    let state = host.state();

    Ok(ViewState {
        image_url: state.image_url.clone(),
        max_supply: state.max_supply,
        total_minted: state.total_minted,
        owner: state.owner,
        paused: state.paused,
    })
}

/// View the number of tokens issued so far.
#[receive(contract = "NFTCollection", name = "totalMinted", return_value = "u32")]
fn total_minted<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<u32> {
    Ok(host.state().total_minted())
}

/// View the administrative owner of the collection.
#[receive(contract = "NFTCollection", name = "owner", return_value = "Address")]
fn owner<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<Address> {
    Ok(host.state().owner)
}

/// View whether minting is currently halted.
#[receive(contract = "NFTCollection", name = "paused", return_value = "bool")]
fn paused<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<bool> {
    Ok(host.state().is_paused())
}

/// View the current holder of a given token ID.
///
/// It rejects if:
/// - It fails to parse the parameter.
/// - The token ID has never been minted.
#[receive(
    contract = "NFTCollection",
    name = "tokenOwner",
    parameter = "ContractTokenId",
    return_value = "Address"
)]
fn token_owner<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<Address> {
    // Parse the parameter.
    let token_id: ContractTokenId = ctx.parameter_cursor().get()?;

    host.state().token_owner(&token_id)
}

#[concordium_cfg_test]
mod tests {
    use super::*;
    use test_infrastructure::*;

    const ACCOUNT_0: AccountAddress = AccountAddress([0u8; 32]);
    const ADDRESS_0: Address = Address::Account(ACCOUNT_0);
    const ACCOUNT_1: AccountAddress = AccountAddress([1u8; 32]);
    const ADDRESS_1: Address = Address::Account(ACCOUNT_1);
    const ACCOUNT_2: AccountAddress = AccountAddress([2u8; 32]);
    const ADDRESS_2: Address = Address::Account(ACCOUNT_2);

    const IMAGE_URL: &str = "https://example.com/nft-image.jpg";
    // Small capacity so the ceiling is easy to hit in tests.
    const MAX_SUPPLY: u32 = 3;

    fn token_1() -> ContractTokenId {
        TokenIdU32(1)
    }

    /// Test helper function which creates a contract state owned by
    /// `ADDRESS_0` with no tokens minted.
    fn setup_host() -> TestHost<State<TestStateApi>> {
        let mut state_builder = TestStateBuilder::new();
        let state = State::new(
            &mut state_builder,
            String::from(IMAGE_URL),
            MAX_SUPPLY,
            ADDRESS_0,
        );
        TestHost::new(state, state_builder)
    }

    /// Test helper function which sends one message through the dispatcher.
    fn dispatch(
        host: &mut TestHost<State<TestStateApi>>,
        sender: Address,
        message: &Message,
        logger: &mut TestLogger,
    ) -> ContractResult<()> {
        let mut ctx = TestReceiveContext::empty();
        let parameter_bytes = to_bytes(message);
        ctx.set_sender(sender).set_parameter(&parameter_bytes);
        receive(&ctx, host, Amount::zero(), logger)
    }

    /// Test initialization succeeds and the deployer becomes the owner.
    #[concordium_test]
    fn test_init() {
        // Setup the context
        let mut ctx = TestInitContext::empty();
        let params = InitParams {
            image_url: String::from(IMAGE_URL),
            max_supply: MAX_SUPPLY,
        };
        let parameter_bytes = to_bytes(&params);
        ctx.set_init_origin(ACCOUNT_0).set_parameter(&parameter_bytes);

        let mut builder = TestStateBuilder::new();

        // Call the contract function.
        let result = init(&ctx, &mut builder);

        // Check the state
        let state = result.expect_report("Contract initialization failed");
        claim_eq!(state.image_url, IMAGE_URL, "Image URL should be kept");
        claim_eq!(state.max_supply, MAX_SUPPLY, "Max supply should be kept");
        claim_eq!(state.total_minted(), 0, "No token should be minted yet");
        claim_eq!(state.owner, ADDRESS_0, "Deployer should become the owner");
        claim!(!state.is_paused(), "Contract should start unpaused");
        claim_eq!(
            state.tokens.iter().count(),
            0,
            "Token registry should start empty"
        );
    }

    /// Test initialization rejects a zero capacity ceiling.
    #[concordium_test]
    fn test_init_rejects_zero_max_supply() {
        // Setup the context
        let mut ctx = TestInitContext::empty();
        let params = InitParams {
            image_url: String::from(IMAGE_URL),
            max_supply: 0,
        };
        let parameter_bytes = to_bytes(&params);
        ctx.set_init_origin(ACCOUNT_0).set_parameter(&parameter_bytes);

        let mut builder = TestStateBuilder::new();

        // Call the contract function.
        let result = init(&ctx, &mut builder);

        // Check the result
        claim!(result.is_err(), "Expected zero capacity to be rejected");
    }

    /// Test minting, ensuring the new token is owned by the sender and the
    /// appropriate events are logged.
    #[concordium_test]
    fn test_mint() {
        let mut host = setup_host();
        let mut logger = TestLogger::init();

        // Call the contract function.
        let result = dispatch(&mut host, ADDRESS_1, &Message::Mint, &mut logger);

        // Check the result
        claim!(result.is_ok(), "Results in rejection");

        // Check the state
        claim_eq!(host.state().total_minted(), 1, "One token should be minted");
        claim_eq!(
            host.state().token_owner(&token_1()),
            Ok(ADDRESS_1),
            "Token should be owned by the minting sender"
        );

        // Check the logs
        claim!(
            logger.logs.contains(&to_bytes(&Cis2Event::Mint(MintEvent {
                token_id: token_1(),
                amount: ContractTokenAmount::from(1),
                owner: ADDRESS_1,
            }))),
            "Expected an event for minting token 1"
        );
        claim!(
            logger.logs.contains(&to_bytes(
                &Cis2Event::<ContractTokenId, ContractTokenAmount>::TokenMetadata(
                    TokenMetadataEvent {
                        token_id: token_1(),
                        metadata_url: MetadataUrl {
                            url: String::from(IMAGE_URL),
                            hash: None,
                        },
                    }
                )
            )),
            "Expected a metadata event carrying the collection image URL"
        );
    }

    /// Test that minting succeeds up to the capacity ceiling and the next
    /// attempt fails without changing the counter.
    #[concordium_test]
    fn test_mint_until_max_supply() {
        let mut host = setup_host();
        let mut logger = TestLogger::init();

        for expected in 1..=MAX_SUPPLY {
            let result = dispatch(&mut host, ADDRESS_0, &Message::Mint, &mut logger);
            claim!(result.is_ok(), "Results in rejection");
            claim_eq!(
                host.state().total_minted(),
                expected,
                "Counter should increase by one per mint"
            );
        }

        // One more mint attempt must fail.
        let result = dispatch(&mut host, ADDRESS_0, &Message::Mint, &mut logger);

        let err = result.expect_err_report("Expected to fail");
        claim_eq!(
            err,
            ContractError::Custom(CustomContractError::MaxSupplyReached),
            "Error is expected to be MaxSupplyReached"
        );
        claim_eq!(
            host.state().total_minted(),
            MAX_SUPPLY,
            "Counter should be unchanged by the rejected mint"
        );
    }

    /// Test that minting fails while paused and works again after unpausing.
    #[concordium_test]
    fn test_mint_when_paused() {
        let mut host = setup_host();
        let mut logger = TestLogger::init();

        // Pause by the owner.
        let result = dispatch(&mut host, ADDRESS_0, &Message::Pause, &mut logger);
        claim!(result.is_ok(), "Results in rejection");
        claim!(host.state().is_paused(), "Contract should be paused");
        claim!(
            logger.logs.contains(&to_bytes(&CollectionEvent::Paused)),
            "Expected a Paused event"
        );

        // Mint attempt while paused must fail.
        let result = dispatch(&mut host, ADDRESS_1, &Message::Mint, &mut logger);
        let err = result.expect_err_report("Expected to fail");
        claim_eq!(
            err,
            ContractError::Custom(CustomContractError::ContractPaused),
            "Error is expected to be ContractPaused"
        );
        claim_eq!(
            host.state().total_minted(),
            0,
            "Counter should be unchanged by the rejected mint"
        );

        // Unpause by the owner.
        let result = dispatch(&mut host, ADDRESS_0, &Message::Unpause, &mut logger);
        claim!(result.is_ok(), "Results in rejection");
        claim!(
            logger.logs.contains(&to_bytes(&CollectionEvent::Unpaused)),
            "Expected an Unpaused event"
        );

        // The identical mint now succeeds.
        let result = dispatch(&mut host, ADDRESS_1, &Message::Mint, &mut logger);
        claim!(result.is_ok(), "Results in rejection");
        claim_eq!(
            host.state().total_minted(),
            1,
            "Counter should increase by exactly one"
        );
    }

    /// Test that the pause guard is checked before the capacity guard when a
    /// mint would trip both.
    #[concordium_test]
    fn test_paused_checked_before_capacity() {
        let mut host = setup_host();
        let mut logger = TestLogger::init();

        // Fill the collection, then pause.
        for _ in 0..MAX_SUPPLY {
            let result = dispatch(&mut host, ADDRESS_0, &Message::Mint, &mut logger);
            claim!(result.is_ok(), "Results in rejection");
        }
        let result = dispatch(&mut host, ADDRESS_0, &Message::Pause, &mut logger);
        claim!(result.is_ok(), "Results in rejection");

        // Both guards would reject; the pause error must win.
        let result = dispatch(&mut host, ADDRESS_0, &Message::Mint, &mut logger);
        let err = result.expect_err_report("Expected to fail");
        claim_eq!(
            err,
            ContractError::Custom(CustomContractError::ContractPaused),
            "Pause must be reported before capacity"
        );
    }

    /// Test transfer succeeds when the sender holds the token.
    #[concordium_test]
    fn test_transfer_account() {
        let mut host = setup_host();
        let mut logger = TestLogger::init();

        let result = dispatch(&mut host, ADDRESS_0, &Message::Mint, &mut logger);
        claim!(result.is_ok(), "Results in rejection");

        // Call the contract function.
        let result = dispatch(
            &mut host,
            ADDRESS_0,
            &Message::TransferNft {
                token_id: token_1(),
                new_owner: ADDRESS_1,
            },
            &mut logger,
        );

        // Check the result.
        claim!(result.is_ok(), "Results in rejection");

        // Check the state.
        claim_eq!(
            host.state().token_owner(&token_1()),
            Ok(ADDRESS_1),
            "Token should be held by the receiver"
        );

        // Check the logs.
        claim!(
            logger
                .logs
                .contains(&to_bytes(&Cis2Event::Transfer(TransferEvent {
                    token_id: token_1(),
                    amount: ContractTokenAmount::from(1),
                    from: ADDRESS_0,
                    to: ADDRESS_1,
                }))),
            "Expected an event for the transfer of token 1"
        );
    }

    /// Test transfer fails when the sender does not hold the token, leaving
    /// the holder unchanged.
    #[concordium_test]
    fn test_transfer_not_authorized() {
        let mut host = setup_host();
        let mut logger = TestLogger::init();

        let result = dispatch(&mut host, ADDRESS_0, &Message::Mint, &mut logger);
        claim!(result.is_ok(), "Results in rejection");
        let result = dispatch(
            &mut host,
            ADDRESS_0,
            &Message::TransferNft {
                token_id: token_1(),
                new_owner: ADDRESS_1,
            },
            &mut logger,
        );
        claim!(result.is_ok(), "Results in rejection");

        // ADDRESS_2 holds nothing and must not be able to move token 1.
        let result = dispatch(
            &mut host,
            ADDRESS_2,
            &Message::TransferNft {
                token_id: token_1(),
                new_owner: ADDRESS_0,
            },
            &mut logger,
        );

        // Check the result.
        let err = result.expect_err_report("Expected to fail");
        claim_eq!(
            err,
            ContractError::Unauthorized,
            "Error is expected to be Unauthorized"
        );

        // Check the state.
        claim_eq!(
            host.state().token_owner(&token_1()),
            Ok(ADDRESS_1),
            "Holder should be unchanged by the rejected transfer"
        );
    }

    /// Test transfer of a token that has never been minted.
    #[concordium_test]
    fn test_transfer_unknown_token() {
        let mut host = setup_host();
        let mut logger = TestLogger::init();

        // Call the contract function.
        let result = dispatch(
            &mut host,
            ADDRESS_0,
            &Message::TransferNft {
                token_id: TokenIdU32(42),
                new_owner: ADDRESS_1,
            },
            &mut logger,
        );

        // Check the result.
        let err = result.expect_err_report("Expected to fail");
        claim_eq!(
            err,
            ContractError::InvalidTokenId,
            "Error is expected to be InvalidTokenId"
        );
    }

    /// Test contract ownership transfer by the current owner.
    #[concordium_test]
    fn test_transfer_ownership() {
        let mut host = setup_host();
        let mut logger = TestLogger::init();

        // Call the contract function.
        let result = dispatch(
            &mut host,
            ADDRESS_0,
            &Message::TransferOwnership {
                new_owner: ADDRESS_1,
            },
            &mut logger,
        );

        // Check the result.
        claim!(result.is_ok(), "Results in rejection");

        // Check the state.
        claim_eq!(
            host.state().owner,
            ADDRESS_1,
            "Collection should have a new owner"
        );

        // Check the logs.
        claim!(
            logger.logs.contains(&to_bytes(
                &CollectionEvent::OwnershipTransferred(OwnershipTransferredEvent {
                    previous_owner: ADDRESS_0,
                    new_owner: ADDRESS_1,
                })
            )),
            "Expected an event for the ownership transfer"
        );

        // The previous owner has lost administrative rights.
        let result = dispatch(&mut host, ADDRESS_0, &Message::Pause, &mut logger);
        let err = result.expect_err_report("Expected to fail");
        claim_eq!(
            err,
            ContractError::Unauthorized,
            "Error is expected to be Unauthorized"
        );
    }

    /// Test contract ownership transfer fails for any other sender.
    #[concordium_test]
    fn test_transfer_ownership_not_authorized() {
        let mut host = setup_host();
        let mut logger = TestLogger::init();

        // Call the contract function.
        let result = dispatch(
            &mut host,
            ADDRESS_1,
            &Message::TransferOwnership {
                new_owner: ADDRESS_1,
            },
            &mut logger,
        );

        // Check the result.
        let err = result.expect_err_report("Expected to fail");
        claim_eq!(
            err,
            ContractError::Unauthorized,
            "Error is expected to be Unauthorized"
        );

        // Check the state.
        claim_eq!(
            host.state().owner,
            ADDRESS_0,
            "Owner should be unchanged by the rejected transfer"
        );
    }

    /// Test that only the owner can pause and unpause.
    #[concordium_test]
    fn test_pause_not_authorized() {
        let mut host = setup_host();
        let mut logger = TestLogger::init();

        // Pause attempt by a non-owner.
        let result = dispatch(&mut host, ADDRESS_1, &Message::Pause, &mut logger);
        let err = result.expect_err_report("Expected to fail");
        claim_eq!(
            err,
            ContractError::Unauthorized,
            "Error is expected to be Unauthorized"
        );
        claim!(!host.state().is_paused(), "Flag should be unchanged");

        // Pause by the owner, then an unpause attempt by a non-owner.
        let result = dispatch(&mut host, ADDRESS_0, &Message::Pause, &mut logger);
        claim!(result.is_ok(), "Results in rejection");

        let result = dispatch(&mut host, ADDRESS_1, &Message::Unpause, &mut logger);
        let err = result.expect_err_report("Expected to fail");
        claim_eq!(
            err,
            ContractError::Unauthorized,
            "Error is expected to be Unauthorized"
        );
        claim!(host.state().is_paused(), "Flag should be unchanged");
    }

    /// Test that setting the pause flag to its current value is a no-op
    /// success.
    #[concordium_test]
    fn test_pause_idempotent() {
        let mut host = setup_host();
        let mut logger = TestLogger::init();

        let result = dispatch(&mut host, ADDRESS_0, &Message::Pause, &mut logger);
        claim!(result.is_ok(), "Results in rejection");
        let result = dispatch(&mut host, ADDRESS_0, &Message::Pause, &mut logger);
        claim!(result.is_ok(), "Pausing twice should succeed");
        claim!(host.state().is_paused(), "Contract should stay paused");

        let result = dispatch(&mut host, ADDRESS_0, &Message::Unpause, &mut logger);
        claim!(result.is_ok(), "Results in rejection");
        let result = dispatch(&mut host, ADDRESS_0, &Message::Unpause, &mut logger);
        claim!(result.is_ok(), "Unpausing twice should succeed");
        claim!(!host.state().is_paused(), "Contract should stay unpaused");
    }

    /// Test the wire codec of the message type.
    #[concordium_test]
    fn test_message_codec() {
        // An empty payload is a mint request.
        let message = from_bytes::<Message>(&[]).expect_report("Failed to decode empty payload");
        claim_eq!(message, Message::Mint, "Empty payload should decode to Mint");
        claim_eq!(
            to_bytes(&Message::Mint).len(),
            0,
            "Mint should encode to an empty payload"
        );

        // The token transfer opcode is followed by a fixed width 32 bit ID
        // and the native address encoding.
        let message = Message::TransferNft {
            token_id: TokenIdU32(7),
            new_owner: ADDRESS_1,
        };
        let bytes = to_bytes(&message);
        claim_eq!(bytes[0], TRANSFER_NFT_OPCODE, "Unexpected opcode byte");
        claim_eq!(
            &bytes[1..5],
            &7u32.to_le_bytes()[..],
            "ID field should be 4 bytes"
        );
        claim_eq!(
            from_bytes::<Message>(&bytes).expect_report("Failed to decode transfer"),
            message,
            "Transfer should round-trip"
        );

        let message = Message::TransferOwnership {
            new_owner: ADDRESS_2,
        };
        let bytes = to_bytes(&message);
        claim_eq!(bytes[0], TRANSFER_OWNERSHIP_OPCODE, "Unexpected opcode byte");
        claim_eq!(
            from_bytes::<Message>(&bytes).expect_report("Failed to decode ownership transfer"),
            message,
            "Ownership transfer should round-trip"
        );

        claim_eq!(to_bytes(&Message::Pause), [PAUSE_OPCODE].to_vec());
        claim_eq!(to_bytes(&Message::Unpause), [UNPAUSE_OPCODE].to_vec());

        // Unknown opcodes are a decoding failure.
        claim!(
            from_bytes::<Message>(&[0x17]).is_err(),
            "Unknown opcode should fail to decode"
        );
    }

    /// Test the aggregate view entrypoint.
    #[concordium_test]
    fn test_view() {
        let mut host = setup_host();
        let mut logger = TestLogger::init();

        let result = dispatch(&mut host, ADDRESS_1, &Message::Mint, &mut logger);
        claim!(result.is_ok(), "Results in rejection");

        let ctx = TestReceiveContext::empty();

        // Call the contract function.
        let result = view(&ctx, &host);

        // Check the result.
        let view_state = result.expect_report("View failed");
        claim_eq!(
            view_state,
            ViewState {
                image_url: String::from(IMAGE_URL),
                max_supply: MAX_SUPPLY,
                total_minted: 1,
                owner: ADDRESS_0,
                paused: false,
            },
            "Unexpected view of the collection state"
        );
    }

    /// Test the token owner view, including the unminted case.
    #[concordium_test]
    fn test_token_owner_view() {
        let mut host = setup_host();
        let mut logger = TestLogger::init();

        let result = dispatch(&mut host, ADDRESS_1, &Message::Mint, &mut logger);
        claim!(result.is_ok(), "Results in rejection");

        let mut ctx = TestReceiveContext::empty();
        let parameter_bytes = to_bytes(&token_1());
        ctx.set_parameter(&parameter_bytes);

        // Call the contract function.
        let result = token_owner(&ctx, &host);
        claim_eq!(result, Ok(ADDRESS_1), "Unexpected holder of token 1");

        let mut ctx = TestReceiveContext::empty();
        let parameter_bytes = to_bytes(&TokenIdU32(2));
        ctx.set_parameter(&parameter_bytes);

        // Call the contract function.
        let result = token_owner(&ctx, &host);
        let err = result.expect_err_report("Expected to fail");
        claim_eq!(
            err,
            ContractError::InvalidTokenId,
            "Error is expected to be InvalidTokenId"
        );
    }
}
