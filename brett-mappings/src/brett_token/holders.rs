use ethers::types::{Address, I256, U256};
use serde::{Deserialize, Serialize};

use crate::events::hashes;
use crate::handlers::{HandlerContext, HandlerError};
use crate::states::Entity;
use crate::RepoError;

use super::analytics::checked_add;

/// Running ledger of one address, keyed by [`address_key`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holder {
    pub id: String,
    #[serde(with = "crate::states::big_ints::i256_string")]
    pub balance: I256,
    #[serde(with = "crate::states::big_ints::u256_string")]
    pub total_received: U256,
    #[serde(with = "crate::states::big_ints::u256_string")]
    pub total_sent: U256,
    pub transaction_count: u32,
}

impl Entity for Holder {
    fn entity_type() -> &'static str {
        "Holder"
    }

    fn id(&self) -> String {
        self.id.clone()
    }
}

/// Lowercase `0x`-prefixed hex, the only form holders are keyed by.
pub fn address_key(address: &Address) -> String {
    hashes::h160_to_string(address)
}

pub async fn get_or_create_holder<C: HandlerContext>(
    address: &Address,
    context: &C,
) -> Result<Holder, RepoError> {
    Holder::get_or_create(&address_key(address), context, Holder::new).await
}

impl Holder {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            balance: I256::zero(),
            total_received: U256::zero(),
            total_sent: U256::zero(),
            transaction_count: 0,
        }
    }

    /// Sends `value` out. The balance may go negative.
    pub fn debit(&mut self, value: U256) -> Result<(), HandlerError> {
        self.balance =
            self.balance.checked_sub(to_signed(value)?).ok_or(HandlerError::Overflow("balance"))?;
        self.total_sent = checked_add(self.total_sent, value, "totalSent")?;

        self.count_transaction()
    }

    pub fn credit(&mut self, value: U256) -> Result<(), HandlerError> {
        self.balance =
            self.balance.checked_add(to_signed(value)?).ok_or(HandlerError::Overflow("balance"))?;
        self.total_received = checked_add(self.total_received, value, "totalReceived")?;

        self.count_transaction()
    }

    fn count_transaction(&mut self) -> Result<(), HandlerError> {
        self.transaction_count = self
            .transaction_count
            .checked_add(1)
            .ok_or(HandlerError::Overflow("transactionCount"))?;

        Ok(())
    }
}

fn to_signed(value: U256) -> Result<I256, HandlerError> {
    let signed = I256::from_raw(value);

    if signed.is_negative() {
        Err(HandlerError::Overflow("balance"))
    } else {
        Ok(signed)
    }
}
