use crate::model::{Address, Transaction};

pub const FIXTURE_VALUE: f64 = 100.21;

/// Anything that can hand out the next transaction to submit.
pub trait TransactionSource {
    fn build(&self) -> Transaction;
}

impl<F> TransactionSource for F
where
    F: Fn() -> Transaction,
{
    fn build(&self) -> Transaction {
        self()
    }
}

/// Produces the canonical Bar -> Foo transaction. The id is left for the
/// transaction pool to assign.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureBuilder;

impl TransactionSource for FixtureBuilder {
    fn build(&self) -> Transaction {
        Transaction {
            id: None,
            recipient_address: Address::new("Foo", "FooStreet", "1", "FooTown"),
            sender_address: Address::new("Bar", "BarStreet", "1", "BarTown"),
            value: FIXTURE_VALUE,
        }
    }
}
