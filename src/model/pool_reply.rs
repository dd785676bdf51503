use log::warn;
use serde::Deserialize;

/// Body the transaction pool answers with. Both fields are optional and
/// an undecodable body is treated as an empty reply.
#[derive(Debug, Default, Clone, Deserialize, PartialEq, Eq)]
pub struct PoolReply {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl PoolReply {
    pub fn decode(body: &[u8]) -> PoolReply {
        if body.iter().all(u8::is_ascii_whitespace) {
            return PoolReply::default();
        }

        match serde_json::from_slice(body) {
            Ok(reply) => reply,
            Err(err) => {
                warn!("Could not decode transaction pool reply: {}", err);
                PoolReply::default()
            }
        }
    }
}
