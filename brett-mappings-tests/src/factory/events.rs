use std::str::FromStr;

use brett_mappings::brett_token::{
    event_handlers::SET_BUY_FEES_EVENT_ABI, Approval, DevelopmentWalletUpdated, ExcludeFromFees,
    ExcludeFromLimits, LiquidityWalletUpdated, LogRecord, MarketingWalletUpdated,
    OwnershipTransferred, SetAutomatedMarketMakerPair, SwapAndLiquify, TokensAirdropped, Transfer,
};
use brett_mappings::{Event, Provenance};
use ethers::abi::Token;
use ethers::types::{Address, H256, U256};

use super::{BRETT_CONTRACT_ADDRESS, BRETT_CONTRACT_START_BLOCK_NUMBER};

pub const BLOCK_TIME_SECONDS: u64 = 2;
pub const GENESIS_TIMESTAMP: u64 = 1_709_000_000;

/// Provenance of log `log_index` in block `block_offset` past the contract's
/// start block. Each block gets its own transaction hash.
pub fn at(block_offset: u64, log_index: u32) -> Provenance {
    Provenance {
        contract_address: brett_address(),
        transaction_hash: H256::from_low_u64_be(0x5eed_0000 + block_offset),
        log_index,
        block_number: BRETT_CONTRACT_START_BLOCK_NUMBER + block_offset,
        block_timestamp: GENESIS_TIMESTAMP + block_offset * BLOCK_TIME_SECONDS,
    }
}

pub fn brett_address() -> Address {
    Address::from_str(BRETT_CONTRACT_ADDRESS).unwrap()
}

pub fn wallet(seed: u64) -> Address {
    Address::from_low_u64_be(0xa11ce_0000 + seed)
}

pub fn transfer_event(from: Address, to: Address, value: u64, provenance: Provenance) -> Event {
    Event::new(
        Transfer::ABI,
        [
            ("from", Token::Address(from)),
            ("to", Token::Address(to)),
            ("value", Token::Uint(U256::from(value))),
        ],
        provenance,
    )
}

pub fn approval_event(owner: Address, spender: Address, value: u64, provenance: Provenance) -> Event {
    Event::new(
        Approval::ABI,
        [
            ("owner", Token::Address(owner)),
            ("spender", Token::Address(spender)),
            ("value", Token::Uint(U256::from(value))),
        ],
        provenance,
    )
}

pub fn exclude_from_fees_event(account: Address, is_excluded: bool, provenance: Provenance) -> Event {
    Event::new(
        ExcludeFromFees::ABI,
        [
            ("account", Token::Address(account)),
            ("isExcluded", Token::Bool(is_excluded)),
        ],
        provenance,
    )
}

pub fn exclude_from_limits_event(
    account: Address,
    is_excluded: bool,
    provenance: Provenance,
) -> Event {
    Event::new(
        ExcludeFromLimits::ABI,
        [
            ("account", Token::Address(account)),
            ("isExcluded", Token::Bool(is_excluded)),
        ],
        provenance,
    )
}

pub fn ownership_transferred_event(
    previous_owner: Address,
    new_owner: Address,
    provenance: Provenance,
) -> Event {
    Event::new(
        OwnershipTransferred::ABI,
        [
            ("previousOwner", Token::Address(previous_owner)),
            ("newOwner", Token::Address(new_owner)),
        ],
        provenance,
    )
}

pub fn set_automated_market_maker_pair_event(
    pair: Address,
    value: bool,
    provenance: Provenance,
) -> Event {
    Event::new(
        SetAutomatedMarketMakerPair::ABI,
        [("pair", Token::Address(pair)), ("value", Token::Bool(value))],
        provenance,
    )
}

pub fn set_buy_fees_event(buy_fees: u64, provenance: Provenance) -> Event {
    Event::new(
        SET_BUY_FEES_EVENT_ABI,
        [("buyFees", Token::Uint(U256::from(buy_fees)))],
        provenance,
    )
}

pub fn swap_and_liquify_event(
    tokens_swapped: u64,
    eth_received: u64,
    tokens_into_liquidity: u64,
    provenance: Provenance,
) -> Event {
    Event::new(
        SwapAndLiquify::ABI,
        [
            ("tokensSwapped", Token::Uint(U256::from(tokens_swapped))),
            ("ethReceived", Token::Uint(U256::from(eth_received))),
            ("tokensIntoLiquidity", Token::Uint(U256::from(tokens_into_liquidity))),
        ],
        provenance,
    )
}

pub fn tokens_airdropped_event(total_wallets: u64, total_tokens: u64, provenance: Provenance) -> Event {
    Event::new(
        TokensAirdropped::ABI,
        [
            ("totalWallets", Token::Uint(U256::from(total_wallets))),
            ("totalTokens", Token::Uint(U256::from(total_tokens))),
        ],
        provenance,
    )
}

#[derive(Clone, Copy, Debug)]
pub enum WalletKind {
    Development,
    Liquidity,
    Marketing,
}

pub fn wallet_updated_event(
    kind: WalletKind,
    new_wallet: Address,
    old_wallet: Address,
    provenance: Provenance,
) -> Event {
    let abi = match kind {
        WalletKind::Development => DevelopmentWalletUpdated::ABI,
        WalletKind::Liquidity => LiquidityWalletUpdated::ABI,
        WalletKind::Marketing => MarketingWalletUpdated::ABI,
    };

    Event::new(
        abi,
        [
            ("newWallet", Token::Address(new_wallet)),
            ("oldWallet", Token::Address(old_wallet)),
        ],
        provenance,
    )
}
