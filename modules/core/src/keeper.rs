use {
    crate::{
        account::AccountKeeper,
        error::{Error, Result},
        handshake::{self, MessageDispatcher},
        port,
        state::OWNER_ACCOUNTS,
    },
    cosmwasm_std::{HexBinary, Storage},
    ics27::{Account, BaseAccount, InterchainAccount},
    sha2::{Digest, Sha256},
};

/// Derive the controller port id for an (owner, connection) pair. Distinct
/// pairs never collide: the connection id contains no whitespace, so the
/// prefix + connection + owner concatenation parses back unambiguously.
pub fn generate_port_id(owner: &str, connection_id: &str) -> String {
    let owner = owner.trim();
    format!("{}{connection_id}-{owner}", ics27::ICA_PREFIX)
}

/// Derive the address an account registered under `identifier` will live at:
/// SHA-256 of the identifier truncated to the ledger's address length.
pub fn generate_address(identifier: &str) -> HexBinary {
    let hash = Sha256::digest(identifier.as_bytes());
    hash[..ics27::ADDRESS_LENGTH].to_vec().into()
}

/// Entry point to registering an interchain account.
///
/// Derives the port id for the (owner, connection) pair, binds it, claims
/// the resulting capability under the port path, and asks the dispatcher to
/// start the channel handshake. Fails with [`Error::PortAlreadyBound`] if
/// the pair has been registered before.
///
/// Regaining access to an account whose channel has since closed cannot be
/// done here; that takes a regular channel open against the existing port.
pub fn init_interchain_account(
    store:         &mut dyn Storage,
    dispatcher:    &mut dyn MessageDispatcher,
    connection_id: &str,
    owner:         &str,
) -> Result<()> {
    let port_id = generate_port_id(owner, connection_id);

    if port::is_bound(store, &port_id) {
        return Err(Error::PortAlreadyBound {
            port_id,
        });
    }

    let cap = port::bind_port(store, &port_id)?;
    port::claim_capability(store, &cap, &ics27::port_path(&port_id))?;

    handshake::open_init(store, dispatcher, &port_id, connection_id)
}

/// Materialize the account for a port once its handshake has opened. The
/// surrounding module calls this on the channel-open signal; the handshake
/// state itself is not observable from here.
///
/// The account is persisted before the owner index entry is written, so an
/// index entry always points at an existing account.
pub fn register_interchain_account(
    store:    &mut dyn Storage,
    accounts: &dyn AccountKeeper,
    port_id:  &str,
) -> Result<Account> {
    let address = generate_address(port_id);

    if let Some(existing) = accounts.get_account(store, &address)? {
        return Err(Error::AccountExists {
            address: existing.address().to_hex(),
        });
    }

    let ica = InterchainAccount::new(BaseAccount::new(address.clone()), port_id);

    let account = accounts.new_account(store, Account::Interchain(ica))?;
    accounts.set_account(store, &account)?;

    set_interchain_account_address(store, port_id, &address.to_hex())?;

    Ok(account)
}

pub fn set_interchain_account_address(
    store:   &mut dyn Storage,
    port_id: &str,
    address: &str,
) -> Result<String> {
    OWNER_ACCOUNTS.save(store, port_id, &address.into())?;
    Ok(address.into())
}

pub fn get_interchain_account_address(store: &dyn Storage, port_id: &str) -> Result<String> {
    OWNER_ACCOUNTS
        .may_load(store, port_id)?
        .ok_or_else(|| Error::AccountNotFound {
            id: port_id.into(),
        })
}

/// The interchain account living at `address`. Fails with
/// [`Error::AccountNotFound`] both when nothing lives there and when the
/// account there is of a different kind.
pub fn get_ibc_account(
    store:    &dyn Storage,
    accounts: &dyn AccountKeeper,
    address:  &HexBinary,
) -> Result<InterchainAccount> {
    match accounts.get_account(store, address)? {
        Some(Account::Interchain(ica)) => Ok(ica),
        _ => Err(Error::AccountNotFound {
            id: address.to_hex(),
        }),
    }
}

// ----------------------------------- Tests -----------------------------------
