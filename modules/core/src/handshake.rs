use {
    crate::error::{Error, Result},
    cosmwasm_std::{StdResult, Storage},
    ics27::MsgChannelOpenInit,
};

/// The chain's message router. Routes a handshake-initiation request to the
/// channel subsystem and returns its result; all channel-side state changes
/// happen behind this seam.
pub trait MessageDispatcher {
    fn dispatch(&mut self, store: &mut dyn Storage, msg: MsgChannelOpenInit) -> StdResult<()>;
}

/// Build the open-init request for a freshly bound controller port. The
/// channel is ORDERED, runs the ics27 version, and names the host side's
/// well-known port as the counterparty.
pub fn open_init_msg(port_id: &str, connection_id: &str) -> MsgChannelOpenInit {
    MsgChannelOpenInit {
        port_id:              port_id.into(),
        version:              ics27::VERSION.into(),
        order:                ics27::ORDER,
        connection_hops:      vec![connection_id.into()],
        counterparty_port_id: ics27::PORT_ID.into(),
        signer:               ics27::MODULE_NAME.into(),
    }
}

/// Submit the open-init request for `port_id` over `connection_id`. No local
/// state is touched; whatever the dispatcher returns decides the outcome.
pub fn open_init(
    store:         &mut dyn Storage,
    dispatcher:    &mut dyn MessageDispatcher,
    port_id:       &str,
    connection_id: &str,
) -> Result<()> {
    let msg = open_init_msg(port_id, connection_id);

    dispatcher
        .dispatch(store, msg)
        .map_err(|err| Error::HandshakeDispatchFailed {
            port_id: port_id.into(),
            reason:  err.to_string(),
        })
}

// ----------------------------------- Tests -----------------------------------

#[cfg(test)]
mod tests {
    use cosmwasm_std::IbcOrder;

    use super::*;

    #[test]
    fn proper_open_init_msg() {
        let msg = open_init_msg("ics-27-connection-0-owner-A", "connection-0");

        assert_eq!(msg.port_id, "ics-27-connection-0-owner-A");
        assert_eq!(msg.version, ics27::VERSION);
        assert_eq!(msg.order, IbcOrder::Ordered);
        assert_eq!(msg.connection_hops, vec!["connection-0".to_string()]);
        assert_eq!(msg.counterparty_port_id, ics27::PORT_ID);
        assert_eq!(msg.signer, ics27::MODULE_NAME);
    }
}
