use ethers::types::Log;

use crate::contracts::ContractAddress;
use crate::events::hashes;
use crate::{Call, Event, EventError, Mappings, MappingsError, Repo};

use super::call_handler::CallHandlerContext;
use super::pure_handler::PureHandlerContext;

/// Runs every event through the handler registered for its ABI, one at a
/// time and in the given order. Stops at the first failing handler; events
/// before it stay applied.
pub async fn handle_events<R: Repo>(
    mappings: &Mappings<R>,
    events: &[Event],
) -> Result<usize, MappingsError> {
    for event in events {
        let handler = mappings
            .pure_handlers_by_event_abi
            .get(event.abi.as_str())
            .ok_or_else(|| MappingsError::NoHandler(event.abi.clone()))?;

        tracing::debug!(
            abi = %event.abi,
            block_number = event.get_block_number(),
            log_index = event.get_log_index(),
            "handling event"
        );

        let handler_context = PureHandlerContext::new(event, &mappings.repo);
        handler.handle_event(handler_context).await.map_err(|error| MappingsError::Handler {
            trigger: event.abi.clone(),
            error,
        })?;
    }

    tracing::info!(count = events.len(), "handled events");

    Ok(events.len())
}

/// Decodes `(log, block_timestamp)` pairs against the registered contracts
/// and handles the resulting events. Removed logs and logs outside every
/// registered contract address are skipped.
pub async fn handle_logs<R: Repo>(
    mappings: &Mappings<R>,
    logs: &[(Log, u64)],
) -> Result<usize, MappingsError> {
    let mut events = Vec::with_capacity(logs.len());

    for (log, block_timestamp) in logs {
        if log.removed == Some(true) {
            tracing::debug!(address = %hashes::h160_to_string(&log.address), "skipping removed log");
            continue;
        }

        let block_number =
            log.block_number.ok_or(EventError::MissingProvenance("block number"))?.as_u64();

        if !is_indexed(&mappings.contract_addresses, log, block_number) {
            tracing::debug!(
                address = %hashes::h160_to_string(&log.address),
                block_number,
                "skipping log outside indexed contracts"
            );
            continue;
        }

        let topic = log.topics.first().ok_or(EventError::MissingProvenance("topic"))?;
        let contract_event =
            mappings.events_by_topics.get(topic).ok_or(EventError::UnknownTopic(*topic))?;

        events.push(Event::from_log(log, contract_event, *block_timestamp)?);
    }

    handle_events(mappings, &events).await
}

pub async fn handle_calls<R: Repo>(
    mappings: &Mappings<R>,
    calls: &[Call],
) -> Result<usize, MappingsError> {
    for call in calls {
        let handler = mappings
            .call_handlers_by_function
            .get(call.function.as_str())
            .ok_or_else(|| MappingsError::NoHandler(call.function.clone()))?;

        tracing::debug!(
            function = %call.function,
            block_number = call.block_number,
            transaction_hash = %hashes::h256_to_string(&call.transaction_hash),
            "handling call"
        );

        let handler_context = CallHandlerContext::new(call, &mappings.repo);
        handler.handle_call(handler_context).await.map_err(|error| MappingsError::Handler {
            trigger: call.function.clone(),
            error,
        })?;
    }

    tracing::info!(count = calls.len(), "handled calls");

    Ok(calls.len())
}

fn is_indexed(contract_addresses: &[ContractAddress], log: &Log, block_number: u64) -> bool {
    let address = hashes::h160_to_string(&log.address);

    contract_addresses
        .iter()
        .any(|contract_address| contract_address.covers(&address, block_number))
}
