//! # Minimum NFT
//!
//! A minimal ERC-721 collection whose minting and burning are reserved to a single
//! contract owner.
//!
//! ## Overview
//!
//! The contract composes two capabilities:
//! - [`trait_ownable::TOwnable`]: one privileged account which can be handed over or
//!   renounced for good.
//! - [`trait_erc721::TERC721`]: the token ledger with balances, per-token approvals and
//!   operators.
//!
//! ## Error Handling
//!
//! Any message that modifies the state returns a `Result` and checks every precondition
//! before touching storage, so an `Err` leaves the state as it was. Failed messages are
//! reverted by ink! on chain.
//!
//! ## Token Management
//!
//! Only the contract owner can mint, choosing both the recipient and the token id.
//! Only the contract owner can burn, and it can burn any live token whoever holds it.
//!
//! Transfers may be initiated by:
//! - The holder of a token
//! - The approved address of a token
//! - An authorized operator of the current holder of a token
//!
//! ## Ownership
//!
//! The deploying account becomes the contract owner. Once ownership is renounced no
//! account can mint or burn again.
//!
//! None of the messages is payable, so any call carrying value is rejected.

#![cfg_attr(not(feature = "std"), no_std, no_main)]
pub use self::minimum_nft::{Error, ErrorKind, MinimumNft, MinimumNftRef};

#[ink::contract]
mod minimum_nft {
    use ink::{
        env::debug_println,
        prelude::string::{String, ToString},
        storage::Mapping,
    };
    use trait_erc721::{Error as TokenError, TokenId, TERC721};
    use trait_ownable::{ensure_owner, Error as OwnableError, TOwnable};

    /// Collection name used by [`MinimumNft::new`].
    pub const NAME: &str = "Minimum NFT";
    /// Collection symbol used by [`MinimumNft::new`].
    pub const SYMBOL: &str = "MIN";

    #[ink(storage)]
    pub struct MinimumNft {
        name: String,
        symbol: String,
        /// Contract owner, `None` once renounced.
        owner: Option<AccountId>,
        /// Mapping from token to holder.
        token_owner: Mapping<TokenId, AccountId>,
        /// Mapping from token to approved account.
        token_approvals: Mapping<TokenId, AccountId>,
        /// Mapping from holder to number of held tokens.
        owned_tokens_count: Mapping<AccountId, u32>,
        /// Mapping from holder to operator approvals.
        operator_approvals: Mapping<(AccountId, AccountId), ()>,
    }

    /// Failure of a composed message, either from the ownership gate or the ledger.
    #[derive(Debug, PartialEq, Eq, scale::Encode, scale::Decode, Copy, Clone)]
    #[cfg_attr(feature = "std", derive(scale_info::TypeInfo))]
    pub enum Error {
        Ownable(OwnableError),
        Token(TokenError),
    }

    /// Coarse classification of an [`Error`].
    #[derive(Debug, PartialEq, Eq, Copy, Clone)]
    pub enum ErrorKind {
        /// The caller lacks the privilege the message requires.
        Authorization,
        /// The message is invalid for the current tokens.
        State,
    }

    impl Error {
        pub fn kind(&self) -> ErrorKind {
            match self {
                Error::Ownable(OwnableError::CallerIsNotOwner)
                | Error::Token(TokenError::NotOwner)
                | Error::Token(TokenError::NotApproved) => ErrorKind::Authorization,
                Error::Token(_) => ErrorKind::State,
            }
        }
    }

    impl From<OwnableError> for Error {
        fn from(error: OwnableError) -> Self {
            Error::Ownable(error)
        }
    }

    impl From<TokenError> for Error {
        fn from(error: TokenError) -> Self {
            Error::Token(error)
        }
    }

    pub type Result<T> = core::result::Result<T, Error>;

    /// Event emitted when a token is minted, transferred or burned.
    ///
    /// `None` stands for the zero account: `from` on mint, `to` on burn.
    #[ink(event)]
    pub struct Transfer {
        #[ink(topic)]
        from: Option<AccountId>,
        #[ink(topic)]
        to: Option<AccountId>,
        #[ink(topic)]
        id: TokenId,
    }

    /// Event emitted when a token approval changes.
    #[ink(event)]
    pub struct Approval {
        #[ink(topic)]
        owner: AccountId,
        #[ink(topic)]
        approved: Option<AccountId>,
        #[ink(topic)]
        id: TokenId,
    }

    /// Event emitted when an operator is enabled or disabled for an owner.
    /// The operator can manage all tokens of the owner.
    #[ink(event)]
    pub struct ApprovalForAll {
        #[ink(topic)]
        owner: AccountId,
        #[ink(topic)]
        operator: AccountId,
        approved: bool,
    }

    /// Event emitted when the contract owner changes, including renouncement.
    #[ink(event)]
    pub struct OwnershipTransferred {
        #[ink(topic)]
        previous_owner: Option<AccountId>,
        #[ink(topic)]
        new_owner: Option<AccountId>,
    }

    fn is_zero(account: &AccountId) -> bool {
        *account == AccountId::from([0x0; 32])
    }

    impl MinimumNft {
        /// Creates the "Minimum NFT" (MIN) collection owned by the caller.
        #[ink(constructor)]
        pub fn new() -> Self {
            Self::with_metadata(NAME.to_string(), SYMBOL.to_string())
        }

        /// Creates a collection with the given name and symbol owned by the caller.
        #[ink(constructor)]
        pub fn with_metadata(name: String, symbol: String) -> Self {
            let caller = Self::env().caller();
            Self::env().emit_event(OwnershipTransferred {
                previous_owner: None,
                new_owner: Some(caller),
            });

            Self {
                name,
                symbol,
                owner: Some(caller),
                token_owner: Mapping::new(),
                token_approvals: Mapping::new(),
                owned_tokens_count: Mapping::new(),
                operator_approvals: Mapping::new(),
            }
        }

        /// Creates token `id` held by `to`. Only the contract owner can mint.
        #[ink(message)]
        pub fn mint(&mut self, to: AccountId, id: TokenId) -> Result<()> {
            self.ensure_contract_owner()?;
            self.add_token_to(&to, id)?;

            self.env().emit_event(Transfer {
                from: None,
                to: Some(to),
                id,
            });
            Ok(())
        }

        /// Destroys token `id` whoever holds it. Only the contract owner can burn.
        #[ink(message)]
        pub fn burn(&mut self, id: TokenId) -> Result<()> {
            self.ensure_contract_owner()?;
            let holder = self.token_owner.get(id).ok_or(TokenError::TokenNotFound)?;

            self.clear_approval(id);
            self.remove_token_from(&holder, id)?;

            self.env().emit_event(Transfer {
                from: Some(holder),
                to: None,
                id,
            });
            Ok(())
        }

        fn ensure_contract_owner(&self) -> trait_ownable::Result<()> {
            let caller = self.env().caller();
            ensure_owner(self.owner, caller).map_err(|error| {
                debug_println!("rejected {:?}: not the contract owner", caller);
                error
            })
        }

        fn set_owner(&mut self, new_owner: Option<AccountId>) {
            let previous_owner = core::mem::replace(&mut self.owner, new_owner);
            self.env().emit_event(OwnershipTransferred {
                previous_owner,
                new_owner,
            });
        }

        /// Moves token `id` from `from` to `to` on behalf of the caller.
        ///
        /// With `safe` set the contract's own account is refused as destination.
        fn transfer_token_from(
            &mut self,
            from: &AccountId,
            to: &AccountId,
            id: TokenId,
            safe: bool,
        ) -> trait_erc721::Result<()> {
            let caller = self.env().caller();
            let holder = self.token_owner.get(id).ok_or(TokenError::TokenNotFound)?;
            if !self.approved_or_owner(&caller, &holder, id) {
                debug_println!("rejected {:?}: not allowed to move token {}", caller, id);
                return Err(TokenError::NotApproved);
            }
            if holder != *from {
                return Err(TokenError::IncorrectOwner);
            }
            if is_zero(to) || (safe && *to == self.env().account_id()) {
                return Err(TokenError::NotAllowed);
            }

            self.clear_approval(id);
            self.remove_token_from(from, id)?;
            self.add_token_to(to, id)?;

            self.env().emit_event(Transfer {
                from: Some(*from),
                to: Some(*to),
                id,
            });
            Ok(())
        }

        /// Removes token `id` from its holder.
        fn remove_token_from(&mut self, from: &AccountId, id: TokenId) -> trait_erc721::Result<()> {
            let Self {
                token_owner,
                owned_tokens_count,
                ..
            } = self;

            if token_owner.get(id) != Some(*from) {
                return Err(TokenError::IncorrectOwner);
            }

            let count = owned_tokens_count
                .get(from)
                .and_then(|c| c.checked_sub(1))
                .ok_or(TokenError::IncorrectOwner)?;
            owned_tokens_count.insert(from, &count);
            token_owner.remove(id);

            Ok(())
        }

        /// Adds token `id` to the `to` account.
        fn add_token_to(&mut self, to: &AccountId, id: TokenId) -> trait_erc721::Result<()> {
            let Self {
                token_owner,
                owned_tokens_count,
                ..
            } = self;

            if is_zero(to) {
                return Err(TokenError::NotAllowed);
            };

            if token_owner.contains(id) {
                return Err(TokenError::TokenExists);
            }

            let count = owned_tokens_count.get(to).map(|c| c + 1).unwrap_or(1);

            owned_tokens_count.insert(to, &count);
            token_owner.insert(id, to);

            Ok(())
        }

        fn clear_approval(&mut self, id: TokenId) {
            self.token_approvals.remove(id);
        }

        fn approved_for_all(&self, owner: &AccountId, operator: &AccountId) -> bool {
            self.operator_approvals.contains((owner, operator))
        }

        /// Returns true if `caller` is the `holder` of token `id`, its approved account,
        /// or an operator of the holder.
        fn approved_or_owner(&self, caller: &AccountId, holder: &AccountId, id: TokenId) -> bool {
            !is_zero(caller)
                && (caller == holder
                    || self.token_approvals.get(id) == Some(*caller)
                    || self.approved_for_all(holder, caller))
        }
    }

    impl TOwnable for MinimumNft {
        #[ink(message)]
        fn owner(&self) -> Option<AccountId> {
            self.owner
        }

        /// Handing ownership to the zero account leaves the contract without owner.
        #[ink(message)]
        fn transfer_ownership(&mut self, new_owner: AccountId) -> trait_ownable::Result<()> {
            self.ensure_contract_owner()?;
            let new_owner = if is_zero(&new_owner) {
                None
            } else {
                Some(new_owner)
            };
            self.set_owner(new_owner);
            Ok(())
        }

        #[ink(message)]
        fn renounce_ownership(&mut self) -> trait_ownable::Result<()> {
            self.ensure_contract_owner()?;
            self.set_owner(None);
            Ok(())
        }
    }

    impl TERC721 for MinimumNft {
        #[ink(message)]
        fn name(&self) -> String {
            self.name.clone()
        }

        #[ink(message)]
        fn symbol(&self) -> String {
            self.symbol.clone()
        }

        #[ink(message)]
        fn balance_of(&self, owner: AccountId) -> u32 {
            self.owned_tokens_count.get(owner).unwrap_or(0)
        }

        #[ink(message)]
        fn owner_of(&self, id: TokenId) -> Option<AccountId> {
            self.token_owner.get(id)
        }

        #[ink(message)]
        fn get_approved(&self, id: TokenId) -> Option<AccountId> {
            self.token_approvals.get(id)
        }

        #[ink(message)]
        fn is_approved_for_all(&self, owner: AccountId, operator: AccountId) -> bool {
            self.approved_for_all(&owner, &operator)
        }

        #[ink(message)]
        fn set_approval_for_all(
            &mut self,
            operator: AccountId,
            approved: bool,
        ) -> trait_erc721::Result<()> {
            let caller = self.env().caller();
            if operator == caller {
                return Err(TokenError::NotAllowed);
            }

            if approved {
                self.operator_approvals.insert((&caller, &operator), &());
            } else {
                self.operator_approvals.remove((&caller, &operator));
            }

            self.env().emit_event(ApprovalForAll {
                owner: caller,
                operator,
                approved,
            });
            Ok(())
        }

        /// Approving the zero account clears the current approval.
        #[ink(message)]
        fn approve(&mut self, to: AccountId, id: TokenId) -> trait_erc721::Result<()> {
            let caller = self.env().caller();
            let holder = self.token_owner.get(id).ok_or(TokenError::TokenNotFound)?;
            if !(holder == caller || self.approved_for_all(&holder, &caller)) {
                return Err(TokenError::NotOwner);
            }
            if to == holder {
                return Err(TokenError::NotAllowed);
            }

            let approved = if is_zero(&to) {
                self.clear_approval(id);
                None
            } else {
                self.token_approvals.insert(id, &to);
                Some(to)
            };

            self.env().emit_event(Approval {
                owner: holder,
                approved,
                id,
            });
            Ok(())
        }

        #[ink(message)]
        fn transfer_from(
            &mut self,
            from: AccountId,
            to: AccountId,
            id: TokenId,
        ) -> trait_erc721::Result<()> {
            self.transfer_token_from(&from, &to, id, false)
        }

        /// The contract itself cannot hold tokens, so it is refused as destination.
        #[ink(message)]
        fn safe_transfer_from(
            &mut self,
            from: AccountId,
            to: AccountId,
            id: TokenId,
        ) -> trait_erc721::Result<()> {
            self.transfer_token_from(&from, &to, id, true)
        }
    }


}
