use cw_storage_plus::Map;

// port_id => hex-encoded account address
//
// An entry here means an account with that exact address exists in the
// account keeper's store; the account is always persisted before the entry
// is written.
pub const OWNER_ACCOUNTS: Map<&str, String> = Map::new("owner_acct");
