#![cfg_attr(not(feature = "std"), no_std, no_main)]
use ink::env::*;

#[derive(Debug, PartialEq, Eq, scale::Encode, scale::Decode, Copy, Clone)]
#[cfg_attr(feature = "std", derive(scale_info::TypeInfo))]
pub enum Error {
    /// The caller is not the current contract owner.
    CallerIsNotOwner,
}

pub type Result<T> = core::result::Result<T, Error>;

type AccountId = <DefaultEnvironment as ::ink::env::Environment>::AccountId;

/// Single privileged account gating administrative messages.
#[ink::trait_definition]
pub trait TOwnable {
    /// Returns the current owner, or `None` once ownership has been renounced.
    #[ink(message)]
    fn owner(&self) -> Option<AccountId>;

    /// Hands ownership over to `new_owner`. Only the current owner may call it.
    #[ink(message)]
    fn transfer_ownership(&mut self, new_owner: AccountId) -> Result<()>;

    /// Leaves the contract without an owner. This cannot be undone.
    #[ink(message)]
    fn renounce_ownership(&mut self) -> Result<()>;
}

/// Fails unless `caller` is the recorded `owner`.
///
/// A renounced contract (`owner == None`) rejects every caller.
pub fn ensure_owner(owner: Option<AccountId>, caller: AccountId) -> Result<()> {
    if owner != Some(caller) {
        return Err(Error::CallerIsNotOwner);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_owner_accepts_only_the_owner() {
        let owner = AccountId::from([0x01; 32]);
        let other = AccountId::from([0x02; 32]);
        assert_eq!(ensure_owner(Some(owner), owner), Ok(()));
        assert_eq!(ensure_owner(Some(owner), other), Err(Error::CallerIsNotOwner));
    }

    #[test]
    fn renounced_owner_rejects_everyone() {
        let zero = AccountId::from([0x0; 32]);
        let someone = AccountId::from([0x03; 32]);
        assert_eq!(ensure_owner(None, someone), Err(Error::CallerIsNotOwner));
        assert_eq!(ensure_owner(None, zero), Err(Error::CallerIsNotOwner));
    }
}
