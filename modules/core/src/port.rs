use {
    crate::error::{Error, Result},
    cosmwasm_std::Storage,
    cw_storage_plus::{Item, Map},
};

// port_id => capability index of the binding
const PORTS: Map<&str, u64> = Map::new("port");

// capability path => capability index claimed there
const CLAIMS: Map<&str, u64> = Map::new("cap_claim");

const NEXT_CAPABILITY: Item<u64> = Item::new("next_cap");

/// An unforgeable token granting exclusive authority over a bound port.
///
/// The index is private and there is no public constructor: the only way to
/// obtain a capability is [`bind_port`], and its validity is established by
/// looking it up at a claimed path, never by inspecting it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Capability {
    index: u64,
}

pub fn is_bound(store: &dyn Storage, port_id: &str) -> bool {
    PORTS.has(store, port_id)
}

/// Bind a port to this module and return the capability that proves
/// ownership of it.
pub fn bind_port(store: &mut dyn Storage, port_id: &str) -> Result<Capability> {
    if is_bound(store, port_id) {
        return Err(Error::PortAlreadyBound {
            port_id: port_id.into(),
        });
    }

    let index = NEXT_CAPABILITY.may_load(store)?.unwrap_or(1);
    NEXT_CAPABILITY.save(store, &(index + 1))?;
    PORTS.save(store, port_id, &index)?;

    Ok(Capability {
        index,
    })
}

/// Record ownership of a freshly issued capability under a path.
///
/// An occupied path is an invariant violation here: the caller's bound-check
/// must have passed for the capability to exist at all.
pub fn claim_capability(store: &mut dyn Storage, cap: &Capability, path: &str) -> Result<()> {
    if CLAIMS.has(store, path) {
        return Err(Error::CapabilityClaimFailed {
            path: path.into(),
        });
    }

    CLAIMS.save(store, path, &cap.index)?;

    Ok(())
}

/// Whether `cap` is the capability claimed at `path`
pub fn authenticate_capability(store: &dyn Storage, cap: &Capability, path: &str) -> bool {
    matches!(CLAIMS.may_load(store, path), Ok(Some(index)) if index == cap.index)
}

// ----------------------------------- Tests -----------------------------------

#[cfg(test)]
mod tests {
    use cosmwasm_std::testing::MockStorage;

    use super::*;

    #[test]
    fn binding_port() {
        let mut store = MockStorage::new();

        let cap = bind_port(&mut store, "ics-27-connection-0-owner").unwrap();

        assert!(is_bound(&store, "ics-27-connection-0-owner"));
        assert!(!is_bound(&store, "ics-27-connection-1-owner"));

        // distinct ports receive distinct capabilities
        let other = bind_port(&mut store, "ics-27-connection-1-owner").unwrap();
        assert_ne!(cap, other);
    }

    #[test]
    fn rejecting_double_bind() {
        let mut store = MockStorage::new();

        bind_port(&mut store, "ics-27-connection-0-owner").unwrap();

        let err = bind_port(&mut store, "ics-27-connection-0-owner").unwrap_err();
        assert_eq!(
            err,
            Error::PortAlreadyBound {
                port_id: "ics-27-connection-0-owner".into(),
            },
        );
    }

    #[test]
    fn claiming_capability() {
        let mut store = MockStorage::new();

        let cap = bind_port(&mut store, "ics-27-connection-0-owner").unwrap();
        let path = ics27::port_path("ics-27-connection-0-owner");

        claim_capability(&mut store, &cap, &path).unwrap();

        assert!(authenticate_capability(&store, &cap, &path));
        assert!(!authenticate_capability(&store, &cap, "ports/other"));

        // a different port's capability does not authenticate at this path
        let other = bind_port(&mut store, "ics-27-connection-1-owner").unwrap();
        assert!(!authenticate_capability(&store, &other, &path));
    }

    #[test]
    fn rejecting_occupied_claim_path() {
        let mut store = MockStorage::new();

        let path = ics27::port_path("ics-27-connection-0-owner");

        let cap = bind_port(&mut store, "ics-27-connection-0-owner").unwrap();
        claim_capability(&mut store, &cap, &path).unwrap();

        let other = bind_port(&mut store, "ics-27-connection-1-owner").unwrap();
        let err = claim_capability(&mut store, &other, &path).unwrap_err();
        assert_eq!(
            err,
            Error::CapabilityClaimFailed {
                path,
            },
        );
    }
}
