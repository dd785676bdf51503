use isahc::http::{header::CONTENT_TYPE, Request, StatusCode, Uri};
use log::{debug, info, warn};
use thiserror::Error;

use crate::{
    model::{PoolReply, Transaction},
    transport::{Transport, TransportError},
};

pub const TRANSACTIONS_PATH: &str = "/transactions";

#[derive(Error, Debug)]
pub enum SendError {
    #[error("Could not encode transaction: {0}")]
    Encoding(#[source] serde_json::Error),

    #[error("Could not build request for `{target}`: {reason}")]
    RequestConstruction { target: String, reason: String },

    #[error("Could not reach transaction pool: {0}")]
    Transport(#[source] TransportError),

    #[error("Transaction pool rejected transaction with status {status}: {reason}")]
    Rejection { status: u16, reason: String },
}

/// Turns a transaction into the request payload.
pub trait Encoder {
    fn encode(&self, transaction: &Transaction) -> Result<Vec<u8>, serde_json::Error>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct JsonEncoder;

impl Encoder for JsonEncoder {
    fn encode(&self, transaction: &Transaction) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(transaction)
    }
}

pub struct Sender<T, E = JsonEncoder> {
    transport: T,
    encoder: E,
}

impl<T: Transport> Sender<T> {
    pub fn new(transport: T) -> Sender<T> {
        Sender {
            transport,
            encoder: JsonEncoder,
        }
    }
}

impl<T: Transport, E: Encoder> Sender<T, E> {
    pub fn with_encoder(transport: T, encoder: E) -> Sender<T, E> {
        Sender { transport, encoder }
    }

    fn build_request(destination: &str, payload: Vec<u8>) -> Result<Request<Vec<u8>>, SendError> {
        let target = format!("{}{}", destination, TRANSACTIONS_PATH);
        let construction_error = |reason: String| SendError::RequestConstruction {
            target: target.clone(),
            reason,
        };

        let uri = target
            .parse::<Uri>()
            .map_err(|err| construction_error(err.to_string()))?;

        if uri.scheme().is_none() || uri.authority().is_none() {
            return Err(construction_error("missing scheme or host".to_string()));
        }

        Request::post(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(payload)
            .map_err(|err| construction_error(err.to_string()))
    }

    fn rejection_reason(status: StatusCode, reply: &PoolReply, body: &[u8]) -> String {
        if let Some(reason) = reply.error.as_ref().filter(|reason| !reason.is_empty()) {
            return reason.clone();
        }

        let raw_body = String::from_utf8_lossy(body);
        let raw_body = raw_body.trim();
        if !raw_body.is_empty() {
            return raw_body.to_string();
        }

        status
            .canonical_reason()
            .unwrap_or("no reason given")
            .to_string()
    }

    /// Posts `transaction` to `{destination}/transactions`. Only a
    /// `201 Created` counts as success; nothing is retried.
    pub fn send(&self, transaction: &Transaction, destination: &str) -> Result<PoolReply, SendError> {
        let payload = self
            .encoder
            .encode(transaction)
            .map_err(SendError::Encoding)?;

        let request = Self::build_request(destination, payload)?;
        debug!("Sending transaction to {}", request.uri());

        let response = self
            .transport
            .execute(request)
            .map_err(SendError::Transport)?;

        let status = response.status();
        debug!("Response status: {}", status);
        debug!("Response headers: {:?}", response.headers());

        let body = response.body();
        let reply = PoolReply::decode(body);

        if status != StatusCode::CREATED {
            let reason = Self::rejection_reason(status, &reply, body);
            warn!("Transaction rejected with status {}: {}", status, reason);

            return Err(SendError::Rejection {
                status: status.as_u16(),
                reason,
            });
        }

        match &reply.id {
            Some(id) => info!("Transaction created with id {}", id),
            None => info!("Transaction created"),
        }

        Ok(reply)
    }
}
