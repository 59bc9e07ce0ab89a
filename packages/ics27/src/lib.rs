use {
    cosmwasm_schema::cw_serde,
    cosmwasm_std::{HexBinary, IbcOrder},
};

// ---------------------------------- channel ----------------------------------

/// Expected channel packet ordering rule
pub const ORDER: IbcOrder = IbcOrder::Ordered;

/// Expected channel version string
pub const VERSION: &str = "ics27-1";

/// The well-known port the host side of the protocol binds to. Handshakes
/// initiated by the controller side name this as the counterparty port.
pub const PORT_ID: &str = "interchain-account";

/// Prefix of every controller port id derived from an (owner, connection) pair
pub const ICA_PREFIX: &str = "ics-27-";

/// Signer recorded on messages submitted by this module
pub const MODULE_NAME: &str = "interchainaccounts";

/// Path under which a port's capability is claimed
pub fn port_path(port_id: &str) -> String {
    format!("ports/{port_id}")
}

// --------------------------------- handshake ---------------------------------

/// Request to start a channel handshake, routed to the chain's channel
/// subsystem by the message dispatcher. Only the first of the four handshake
/// steps is ever produced by the controller module; the remaining steps are
/// driven by relayers.
#[cw_serde]
pub struct MsgChannelOpenInit {
    /// The port on this chain the channel is to be bound to
    pub port_id: String,

    /// Channel version proposed to the counterparty
    pub version: String,

    /// Packet ordering rule. Interchain account channels are ORDERED so that
    /// transactions execute on the host in the order the owner signed them.
    pub order: IbcOrder,

    /// Identifiers of the connections the channel travels over. A single hop
    /// for every channel this module opens.
    pub connection_hops: Vec<String>,

    /// The well-known port on the counterparty chain
    pub counterparty_port_id: String,

    /// Module that signed the message
    pub signer: String,
}

// ---------------------------------- accounts ---------------------------------

/// Number of bytes in a derived account address
pub const ADDRESS_LENGTH: usize = 20;

/// A ledger account, tagged by kind. The account keeper hands accounts out
/// behind this enum so that callers can test the discriminant instead of
/// downcasting.
#[cw_serde]
pub enum Account {
    Base(BaseAccount),
    Interchain(InterchainAccount),
}

impl Account {
    pub fn address(&self) -> &HexBinary {
        match self {
            Account::Base(base) => &base.address,
            Account::Interchain(ica) => &ica.base.address,
        }
    }
}

/// The fields every account kind carries. Account number assignment belongs
/// to the account keeper, not to whoever constructs the account.
#[cw_serde]
pub struct BaseAccount {
    pub address: HexBinary,
    pub account_number: u64,
    pub sequence: u64,
}

impl BaseAccount {
    pub fn new(address: HexBinary) -> Self {
        Self {
            address,
            account_number: 0,
            sequence: 0,
        }
    }
}

/// A ledger account controlled by a remote owner through the channel bound to
/// `port_id`. Created exactly once per port id, never mutated afterwards.
#[cw_serde]
pub struct InterchainAccount {
    pub base: BaseAccount,

    /// The port this account is bound to, and by extension the
    /// (owner, connection) pair it was registered for
    pub port_id: String,
}

impl InterchainAccount {
    pub fn new(base: BaseAccount, port_id: impl Into<String>) -> Self {
        Self {
            base,
            port_id: port_id.into(),
        }
    }
}
