#![cfg_attr(not(feature = "std"), no_std, no_main)]
use ink::env::*;

#[derive(Debug, PartialEq, Eq, scale::Encode, scale::Decode, Copy, Clone)]
#[cfg_attr(feature = "std", derive(scale_info::TypeInfo))]
pub enum Error {
    /// Caller neither holds the token nor operates for its holder.
    NotOwner,
    /// Caller is not the holder, the approved account or an operator.
    NotApproved,
    /// A token with this id is already minted.
    TokenExists,
    /// No token with this id is currently minted.
    TokenNotFound,
    /// `from` does not hold the token being transferred.
    IncorrectOwner,
    /// Zero account, self approval or an unreachable destination.
    NotAllowed,
}

pub type Result<T> = core::result::Result<T, Error>;

/// A token ID.
pub type TokenId = u32;
type AccountId = <DefaultEnvironment as ::ink::env::Environment>::AccountId;

#[ink::trait_definition]
pub trait TERC721 {
    /// Returns the collection name.
    #[ink(message)]
    fn name(&self) -> ink::prelude::string::String;

    /// Returns the collection symbol.
    #[ink(message)]
    fn symbol(&self) -> ink::prelude::string::String;

    /// Returns the balance of the owner.
    ///
    /// This represents the amount of unique tokens the owner has.
    #[ink(message)]
    fn balance_of(&self, owner: AccountId) -> u32;

    /// Returns the owner of the token.
    #[ink(message)]
    fn owner_of(&self, id: TokenId) -> Option<AccountId>;

    /// Returns the approved account ID for this token if any.
    #[ink(message)]
    fn get_approved(&self, id: TokenId) -> Option<AccountId>;

    /// Returns `true` if the operator is approved by the owner.
    #[ink(message)]
    fn is_approved_for_all(&self, owner: AccountId, operator: AccountId) -> bool;

    /// Approves or disapproves the operator for all tokens of the caller.
    #[ink(message)]
    fn set_approval_for_all(&mut self, operator: AccountId, approved: bool) -> Result<()>;

    /// Approves the account to transfer the specified token on behalf of its holder.
    #[ink(message)]
    fn approve(&mut self, to: AccountId, id: TokenId) -> Result<()>;

    /// Transfer approved or owned token.
    #[ink(message)]
    fn transfer_from(&mut self, from: AccountId, to: AccountId, id: TokenId) -> Result<()>;

    /// Transfer approved or owned token, refusing destinations that cannot hold it.
    #[ink(message)]
    fn safe_transfer_from(&mut self, from: AccountId, to: AccountId, id: TokenId) -> Result<()>;
}
