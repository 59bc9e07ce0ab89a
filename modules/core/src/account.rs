use {
    cosmwasm_std::{HexBinary, StdResult, Storage},
    ics27::Account,
};

/// The ledger's account model. This module only constructs accounts; their
/// numbering and persistence belong to the keeper behind this seam.
pub trait AccountKeeper {
    /// The account living at `address`, of whatever kind
    fn get_account(&self, store: &dyn Storage, address: &HexBinary) -> StdResult<Option<Account>>;

    /// Assign the next account number to a newly constructed account and
    /// return it. Does not persist the account.
    fn new_account(&self, store: &mut dyn Storage, account: Account) -> StdResult<Account>;

    /// Persist an account at its address
    fn set_account(&self, store: &mut dyn Storage, account: &Account) -> StdResult<()>;
}
