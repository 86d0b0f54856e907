/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Outcome records for campaign mutations
//!
//! Mutation helpers do not fail when the mutate call itself fails: they return
//! an [`UpdateResult`] whose `success` flag is cleared and whose per-field
//! entries say what happened to each requested change.

use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Which part of a campaign an update touched
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UpdateKind {
    /// Campaign budget amount
    Budget,
    /// Bid modifier
    Bid,
    /// Bidding strategy
    BiddingStrategy,
}

/// What happened to a single requested change
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum UpdateOutcome {
    /// The API accepted the change
    Success,
    /// The API call failed
    Failed {
        /// Error description
        error: String,
    },
    /// The change is not supported yet; no call was made
    NotImplemented,
}

/// New value of an updated field
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum UpdateValue {
    /// Monetary amount or multiplier
    Amount(f64),
    /// Enum name, e.g. a bidding strategy
    Name(String),
}

/// Per-field entry of an [`UpdateResult`]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldUpdate {
    /// Updated field
    #[serde(rename = "type")]
    pub kind: UpdateKind,
    /// Value before the update, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_value: Option<String>,
    /// Requested value
    pub new_value: UpdateValue,
    /// Requested value in micros, for monetary fields
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_value_micros: Option<i64>,
    /// Outcome of the change
    #[serde(flatten)]
    pub outcome: UpdateOutcome,
}

impl FieldUpdate {
    /// Returns `true` unless the change failed
    #[must_use]
    pub fn is_ok(&self) -> bool {
        !matches!(self.outcome, UpdateOutcome::Failed { .. })
    }
}

/// Target of the update and the per-field outcomes
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct UpdateDetails {
    /// Customer owning the campaign
    pub customer_id: String,
    /// Updated campaign
    pub campaign_id: String,
    /// Campaign name at the time of the update
    pub campaign_name: String,
    /// One entry per requested change
    pub updates: Vec<FieldUpdate>,
}

/// Structured result of a campaign mutation
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct UpdateResult {
    /// `false` as soon as one requested change failed
    pub success: bool,
    /// Summary message
    pub message: String,
    /// Target and per-field outcomes
    pub update_details: UpdateDetails,
}

impl UpdateResult {
    /// Starts a successful result for the given campaign
    pub fn initiated(
        message: impl Into<String>,
        customer_id: impl Into<String>,
        campaign_id: impl Into<String>,
        campaign_name: impl Into<String>,
    ) -> Self {
        Self {
            success: true,
            message: message.into(),
            update_details: UpdateDetails {
                customer_id: customer_id.into(),
                campaign_id: campaign_id.into(),
                campaign_name: campaign_name.into(),
                updates: Vec::new(),
            },
        }
    }

    /// Appends an entry, clearing `success` and replacing the message when it failed
    pub fn record(&mut self, update: FieldUpdate, failure_message: impl FnOnce(&str) -> String) {
        if let UpdateOutcome::Failed { error } = &update.outcome {
            self.success = false;
            self.message = failure_message(error);
        }
        self.update_details.updates.push(update);
    }

    /// Entries whose change failed
    pub fn failed_updates(&self) -> impl Iterator<Item = &FieldUpdate> {
        self.update_details.updates.iter().filter(|u| !u.is_ok())
    }
}
