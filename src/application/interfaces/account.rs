/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::error::AppError;
use crate::presentation::account::ClientAccount;
use async_trait::async_trait;

/// Interface for the account service
#[async_trait]
pub trait AccountService: Send + Sync {
    /// Lists the non-manager client accounts under the login customer
    ///
    /// # Returns
    /// * One [`ClientAccount`] per linked client, in API order
    async fn list_client_accounts(&self) -> Result<Vec<ClientAccount>, AppError>;

    /// Lists the ids of every customer the credentials can access directly
    async fn list_accessible_customers(&self) -> Result<Vec<String>, AppError>;
}
