// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Mock Transport
//!
//! In-memory transport that replays queued responses and records every
//! request it receives. Used by tests in place of [`crate::HttpTransport`].

use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};

use crate::transport::{Request, Response, Transport, TransportError, TransportResult};

/// Transport returning queued responses in FIFO order.
///
/// When the queue is empty, requests fail with
/// [`TransportError::ConnectionFailed`].
#[derive(Debug, Default)]
pub struct MockTransport {
    queued: Mutex<VecDeque<TransportResult<Response>>>,
    requests: Mutex<Vec<Request>>,
}

impl MockTransport {
    /// Creates an empty mock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a response for the next request.
    pub fn queue_response(&self, response: Response) {
        self.queued
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(Ok(response));
    }

    /// Queues a 200 response with the given body.
    pub fn queue_body(&self, body: impl Into<String>) {
        self.queue_response(Response::ok(body));
    }

    /// Queues a transport failure for the next request.
    pub fn queue_error(&self, error: TransportError) {
        self.queued
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(Err(error));
    }

    /// All requests received so far, oldest first.
    pub fn requests(&self) -> Vec<Request> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// The most recent request.
    pub fn last_request(&self) -> Option<Request> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }

    /// Number of queued responses not yet consumed.
    pub fn pending(&self) -> usize {
        self.queued
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl Transport for MockTransport {
    fn get(&self, request: &Request) -> TransportResult<Response> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request.clone());

        let next = self
            .queued
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front();

        match next {
            Some(Ok(response))
                if request.options.halt_on_error.unwrap_or(false) && !response.success =>
            {
                Err(TransportError::Status(response.status))
            }
            Some(result) => result,
            None => Err(TransportError::ConnectionFailed(format!(
                "no response queued for {}",
                request.url
            ))),
        }
    }
}
