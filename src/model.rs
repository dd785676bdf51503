mod address;
mod pool_reply;
mod transaction;

pub use address::Address;
pub use pool_reply::PoolReply;
pub use transaction::Transaction;

#[cfg(test)]
pub use address::test_address_util;
