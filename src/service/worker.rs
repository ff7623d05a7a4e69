//! Answer worker thread
//!
//! Handles answer requests in a background thread so the UI never blocks on
//! the network. Receives requests via channel, runs them against the answer
//! service, and sends exactly one terminal response per request back.
//!
//! Uses a current-thread tokio runtime for async HTTP with cancellation
//! support. Panics are caught and logged so they cannot corrupt the terminal;
//! the dropped response channel then tells the controller the worker is gone.

use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc::{Receiver, Sender};

use tokio_util::sync::CancellationToken;

use super::{AnswerError, AnswerRequest, AnswerResponse, AnswerService};
use crate::config::ServiceConfig;

/// Spawn the answer worker thread
///
/// Creates a background thread with a tokio runtime that:
/// 1. Listens for requests on the request channel
/// 2. Calls the answer service, racing each call against its cancel token
/// 3. Sends the outcome back via the response channel
pub fn spawn_worker(
    config: &ServiceConfig,
    request_rx: Receiver<AnswerRequest>,
    response_tx: Sender<AnswerResponse>,
) {
    let service_result = AnswerService::from_config(config);
    if let Err(e) = &service_result {
        log::error!("Answer service unavailable: {}", e);
    }

    std::thread::spawn(move || {
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            let rt = match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(rt) => rt,
                Err(e) => {
                    log::error!("Failed to create worker runtime: {}", e);
                    return;
                }
            };

            rt.block_on(worker_loop(service_result, request_rx, response_tx));
        }));

        if let Err(e) = result {
            let panic_msg = if let Some(s) = e.downcast_ref::<&str>() {
                s.to_string()
            } else if let Some(s) = e.downcast_ref::<String>() {
                s.clone()
            } else {
                "Unknown panic".to_string()
            };
            log::error!("Answer worker thread panicked: {}", panic_msg);
        }
    });
}

/// Main async worker loop - processes requests until the channel is closed
///
/// Requests are handled one at a time. The controller cancels the previous
/// token before sending a new request, so a superseded call is abandoned
/// before the next one starts.
async fn worker_loop(
    service_result: Result<AnswerService, AnswerError>,
    request_rx: Receiver<AnswerRequest>,
    response_tx: Sender<AnswerResponse>,
) {
    // Blocking recv() is fine here since this is a dedicated thread
    while let Ok(request) = request_rx.recv() {
        match request {
            AnswerRequest::Query {
                query,
                request_id,
                cancel_token,
            } => {
                let response =
                    handle_query_async(&service_result, &query, request_id, cancel_token).await;
                if response_tx.send(response).is_err() {
                    log::debug!("Response channel closed, stopping worker");
                    break;
                }
            }
        }
    }
}

/// Run one query to completion or cancellation
///
/// Uses `tokio::select!` in biased mode so a cancellation that is already
/// signalled wins over a completed call.
async fn handle_query_async(
    service_result: &Result<AnswerService, AnswerError>,
    query: &str,
    request_id: u64,
    cancel_token: CancellationToken,
) -> AnswerResponse {
    if cancel_token.is_cancelled() {
        return AnswerResponse::Cancelled { request_id };
    }

    let service = match service_result {
        Ok(service) => service,
        Err(e) => {
            return AnswerResponse::Failed {
                request_id,
                error: e.clone(),
            };
        }
    };

    log::debug!(
        "Request {} started via {} service",
        request_id,
        service.name()
    );

    tokio::select! {
        biased;

        _ = cancel_token.cancelled() => {
            log::debug!("Request {} cancelled in flight", request_id);
            AnswerResponse::Cancelled { request_id }
        }

        result = service.ask(query) => match result {
            Ok(text) => AnswerResponse::Answer { request_id, text },
            Err(AnswerError::Cancelled) => AnswerResponse::Cancelled { request_id },
            Err(error) => {
                log::debug!("Request {} failed: {}", request_id, error);
                AnswerResponse::Failed { request_id, error }
            }
        }
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
