//! A capped NFT collection smart contract.
//!
//! # Description
//! An instance of this smart contract manages a single collection of
//! non-fungible tokens with a fixed capacity decided at initialization.
//! Tokens carry sequential IDs starting from 1 and are minted by sending the
//! contract a bare message with no opcode; the sender of the mint message
//! becomes the owner of the new token. Once `max_supply` tokens have been
//! minted, no further tokens can ever be issued. There is no functionality to
//! burn tokens.
//!
//! The account deploying the contract becomes the administrative owner of the
//! collection. Only the administrative owner can pause and unpause minting or
//! hand the collection over to another address. Individual tokens can only be
//! transferred by their current holder.
//!
//! All inbound messages share a single `receive` entrypoint and are decoded
//! into the `Message` type from a one byte opcode followed by fixed width
//! fields. Read-only views are exposed as separate entrypoints and never
//! modify state.
//!
//! Note: The word 'address' refers to either an account address or a
//! contract address.

#![cfg_attr(not(feature = "std"), no_std)]
use crate::{constants::*, errors::*, events::*, external::*, state::*, types::*};
use concordium_cis2::*;
use concordium_std::*;

mod constants;
mod contract;
mod errors;
mod events;
mod external;
mod state;
mod types;
