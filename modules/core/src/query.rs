use {
    crate::{msg::AccountResponse, state::OWNER_ACCOUNTS},
    cosmwasm_std::{StdResult, Storage},
    cw_paginate::paginate_map,
    cw_storage_plus::Bound,
};

pub fn account(store: &dyn Storage, port_id: String) -> StdResult<AccountResponse> {
    Ok(AccountResponse {
        address: OWNER_ACCOUNTS.load(store, &port_id)?,
        port_id,
    })
}

pub fn accounts(
    store:       &dyn Storage,
    start_after: Option<String>,
    limit:       Option<u32>,
) -> StdResult<Vec<AccountResponse>> {
    let start = start_after.as_ref().map(|port_id| Bound::exclusive(port_id.as_str()));
    paginate_map(&OWNER_ACCOUNTS, store, start, limit, |port_id, address| {
        Ok(AccountResponse {
            port_id,
            address,
        })
    })
}

// ----------------------------------- Tests -----------------------------------

#[cfg(test)]
mod tests {
    use cosmwasm_std::testing::MockStorage;

    use super::*;

    #[test]
    fn paginating_accounts() {
        let mut store = MockStorage::new();

        for (port_id, address) in [("port-a", "1111"), ("port-b", "2222"), ("port-c", "3333")] {
            OWNER_ACCOUNTS.save(&mut store, port_id, &address.into()).unwrap();
        }

        let all = accounts(&store, None, None).unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(
            all[0],
            AccountResponse {
                port_id: "port-a".into(),
                address: "1111".into(),
            },
        );

        let page = accounts(&store, Some("port-a".into()), Some(1)).unwrap();
        assert_eq!(
            page,
            vec![AccountResponse {
                port_id: "port-b".into(),
                address: "2222".into(),
            }],
        );
    }
}
