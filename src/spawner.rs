use crate::{
    builder::TransactionSource,
    model::PoolReply,
    sender::{Encoder, JsonEncoder, SendError, Sender},
    transport::Transport,
};

pub struct Spawner<S, T, E = JsonEncoder> {
    source: S,
    sender: Sender<T, E>,
    base_url: String,
}

impl<S, T, E> Spawner<S, T, E>
where
    S: TransactionSource,
    T: Transport,
    E: Encoder,
{
    pub fn new(source: S, sender: Sender<T, E>, base_url: &str) -> Spawner<S, T, E> {
        Spawner {
            source,
            sender,
            base_url: base_url.to_string(),
        }
    }

    /// Builds one transaction and submits it to the configured pool.
    pub fn spawn_transaction(&self) -> Result<PoolReply, SendError> {
        let transaction = self.source.build();

        self.sender.send(&transaction, &self.base_url)
    }
}
