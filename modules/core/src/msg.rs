use cosmwasm_schema::cw_serde;

#[cw_serde]
pub struct AccountResponse {
    pub port_id: String,

    /// Hex-encoded address of the account registered under the port
    pub address: String,
}
