//! Immutable per-event records, keyed by transaction hash and log index.
//! Replaying an event rewrites the same key.
use ethers::types::{Address, H256, U256};
use serde::{Deserialize, Serialize};

use crate::handlers::{HandlerError, PureHandlerContext};
use crate::states::Entity;
use crate::{Event, ParamError};

pub trait LogRecord: Entity {
    const ABI: &'static str;

    fn from_event(event: &Event) -> Result<Self, ParamError>;
}

/// Builds the record for the context's event and saves it.
pub async fn record<'a, T: LogRecord>(context: &PureHandlerContext<'a>) -> Result<T, HandlerError> {
    let log_record = T::from_event(&context.event)?;
    log_record.save(context).await?;

    Ok(log_record)
}

macro_rules! log_record {
    (
        $name:ident = $abi:literal {
            $($field:ident: $ty:ty = $getter:ident($param:literal) $(as $with:literal)?),+ $(,)?
        }
    ) => {
        #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct $name {
            pub id: String,
            $(
                $(#[serde(with = $with)])?
                pub $field: $ty,
            )+
            pub block_number: u64,
            pub block_timestamp: u64,
            pub transaction_hash: H256,
        }

        impl Entity for $name {
            fn entity_type() -> &'static str {
                stringify!($name)
            }

            fn id(&self) -> String {
                self.id.clone()
            }
        }

        impl LogRecord for $name {
            const ABI: &'static str = $abi;

            fn from_event(event: &Event) -> Result<Self, ParamError> {
                let params = event.get_params();

                Ok(Self {
                    id: event.log_record_id(),
                    $($field: params.$getter($param)?,)+
                    block_number: event.get_block_number(),
                    block_timestamp: event.get_block_timestamp(),
                    transaction_hash: event.get_transaction_hash(),
                })
            }
        }
    };
}

log_record!(Approval = "event Approval(address indexed owner, address indexed spender, uint256 value)" {
    owner: Address = get_address("owner"),
    spender: Address = get_address("spender"),
    value: U256 = get_uint("value") as "crate::states::big_ints::u256_string",
});

log_record!(Transfer = "event Transfer(address indexed from, address indexed to, uint256 value)" {
    from: Address = get_address("from"),
    to: Address = get_address("to"),
    value: U256 = get_uint("value") as "crate::states::big_ints::u256_string",
});

log_record!(ExcludeFromFees = "event ExcludeFromFees(address indexed account, bool isExcluded)" {
    account: Address = get_address("account"),
    is_excluded: bool = get_bool("isExcluded"),
});

log_record!(ExcludeFromLimits = "event ExcludeFromLimits(address indexed account, bool isExcluded)" {
    account: Address = get_address("account"),
    is_excluded: bool = get_bool("isExcluded"),
});

log_record!(OwnershipTransferred = "event OwnershipTransferred(address indexed previousOwner, address indexed newOwner)" {
    previous_owner: Address = get_address("previousOwner"),
    new_owner: Address = get_address("newOwner"),
});

log_record!(SetAutomatedMarketMakerPair = "event SetAutomatedMarketMakerPair(address indexed pair, bool indexed value)" {
    pair: Address = get_address("pair"),
    value: bool = get_bool("value"),
});

log_record!(SwapAndLiquify = "event SwapAndLiquify(uint256 tokensSwapped, uint256 ethReceived, uint256 tokensIntoLiquidity)" {
    tokens_swapped: U256 = get_uint("tokensSwapped") as "crate::states::big_ints::u256_string",
    eth_received: U256 = get_uint("ethReceived") as "crate::states::big_ints::u256_string",
    tokens_into_liquidity: U256 = get_uint("tokensIntoLiquidity") as "crate::states::big_ints::u256_string",
});

log_record!(TokensAirdropped = "event TokensAirdropped(uint256 totalWallets, uint256 totalTokens)" {
    total_wallets: U256 = get_uint("totalWallets") as "crate::states::big_ints::u256_string",
    total_tokens: U256 = get_uint("totalTokens") as "crate::states::big_ints::u256_string",
});

log_record!(DevelopmentWalletUpdated = "event developmentWalletUpdated(address indexed newWallet, address indexed oldWallet)" {
    new_wallet: Address = get_address("newWallet"),
    old_wallet: Address = get_address("oldWallet"),
});

log_record!(LiquidityWalletUpdated = "event liquidityWalletUpdated(address indexed newWallet, address indexed oldWallet)" {
    new_wallet: Address = get_address("newWallet"),
    old_wallet: Address = get_address("oldWallet"),
});

log_record!(MarketingWalletUpdated = "event marketingWalletUpdated(address indexed newWallet, address indexed oldWallet)" {
    new_wallet: Address = get_address("newWallet"),
    old_wallet: Address = get_address("oldWallet"),
});
