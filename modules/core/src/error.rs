use cosmwasm_std::StdError;

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Std(#[from] StdError),

    #[error("port `{port_id}` is already bound")]
    PortAlreadyBound {
        port_id: String,
    },

    #[error("unable to claim capability at path `{path}`")]
    CapabilityClaimFailed {
        path: String,
    },

    #[error("channel open init for port `{port_id}` was rejected by the dispatcher: {reason}")]
    HandshakeDispatchFailed {
        port_id: String,
        reason: String,
    },

    #[error("an account already exists at `{address}`")]
    AccountExists {
        address: String,
    },

    #[error("no interchain account found for `{id}`")]
    AccountNotFound {
        id: String,
    },
}

pub type Result<T> = core::result::Result<T, Error>;
