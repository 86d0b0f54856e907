/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::model::responses::CustomerClient;
use crate::model::utils::resource_id;
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Client account linked under the login (manager) customer
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ClientAccount {
    /// Customer id, the trailing segment of `customers/{id}`
    pub account_id: String,
    /// Descriptive name of the account
    pub account_name: String,
    /// Account currency, ISO 4217
    pub currency_code: String,
    /// Account status, e.g. `ENABLED`
    pub status: String,
}

impl From<CustomerClient> for ClientAccount {
    fn from(client: CustomerClient) -> Self {
        ClientAccount {
            account_id: resource_id(&client.client_customer).to_string(),
            account_name: client.descriptive_name,
            currency_code: client.currency_code,
            status: client.status,
        }
    }
}
