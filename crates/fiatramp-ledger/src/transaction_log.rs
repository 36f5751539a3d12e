//! Append-only transaction log — the Transaction Recorder.
//!
//! Every settlement attempt that passes compliance and debits a wallet gets
//! exactly one record here. The log exposes no update or delete API:
//! immutability is structural, not a convention.

use std::collections::HashMap;

use fiatramp_types::{PartnerId, Transaction, TransactionId, TransactionType, UserId};
use rust_decimal::Decimal;

/// Append-only store of settlement intent records.
pub struct TransactionLog {
    /// Records in creation order.
    entries: Vec<Transaction>,
    /// Index into `entries` by transaction id.
    by_id: HashMap<TransactionId, usize>,
}

impl TransactionLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            by_id: HashMap::new(),
        }
    }

    /// Persist a new `Processing` record with a freshly generated id and
    /// return a copy of it.
    pub fn record(
        &mut self,
        user_id: UserId,
        amount: Decimal,
        tx_type: TransactionType,
        partner_id: PartnerId,
    ) -> Transaction {
        let tx = Transaction::new(user_id, amount, tx_type, partner_id);
        self.by_id.insert(tx.id, self.entries.len());
        self.entries.push(tx.clone());
        tx
    }

    /// Look up a record by id.
    #[must_use]
    pub fn get(&self, id: &TransactionId) -> Option<&Transaction> {
        self.by_id.get(id).map(|&i| &self.entries[i])
    }

    /// All records for a user, in creation order.
    pub fn for_user(&self, user_id: UserId) -> impl Iterator<Item = &Transaction> {
        self.entries.iter().filter(move |tx| tx.user_id == user_id)
    }

    /// All records, in creation order.
    #[must_use]
    pub fn entries(&self) -> &[Transaction] {
        &self.entries
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for TransactionLog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use fiatramp_types::TransactionStatus;

    use super::*;

    #[test]
    fn record_persists_and_returns_the_record() {
        let mut log = TransactionLog::new();
        let user = UserId::new();
        let tx = log.record(
            user,
            Decimal::new(5_000_000, 0),
            TransactionType::Onramp,
            PartnerId::new("vasp_001"),
        );

        assert_eq!(tx.status, TransactionStatus::Processing);
        assert_eq!(log.len(), 1);

        let stored = log.get(&tx.id).expect("record should be retrievable");
        assert_eq!(stored.user_id, user);
        assert_eq!(stored.amount, Decimal::new(5_000_000, 0));
        assert_eq!(stored.status, TransactionStatus::Processing);
    }

    #[test]
    fn repeated_records_get_distinct_ids() {
        let mut log = TransactionLog::new();
        let user = UserId::new();
        let a = log.record(
            user,
            Decimal::ONE,
            TransactionType::Onramp,
            PartnerId::new("vasp_001"),
        );
        let b = log.record(
            user,
            Decimal::ONE,
            TransactionType::Onramp,
            PartnerId::new("vasp_001"),
        );
        assert_ne!(a.id, b.id);
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn for_user_filters_and_preserves_order() {
        let mut log = TransactionLog::new();
        let alice = UserId::new();
        let bob = UserId::new();
        let first = log.record(
            alice,
            Decimal::new(100, 0),
            TransactionType::Onramp,
            PartnerId::new("vasp_001"),
        );
        log.record(
            bob,
            Decimal::new(200, 0),
            TransactionType::Onramp,
            PartnerId::new("vasp_002"),
        );
        let second = log.record(
            alice,
            Decimal::new(300, 0),
            TransactionType::Onramp,
            PartnerId::new("vasp_001"),
        );

        let mine: Vec<_> = log.for_user(alice).collect();
        assert_eq!(mine.len(), 2);
        assert_eq!(mine[0].id, first.id);
        assert_eq!(mine[1].id, second.id);
    }

    #[test]
    fn unknown_id_is_none() {
        let log = TransactionLog::new();
        assert!(log.get(&TransactionId::new()).is_none());
        assert!(log.is_empty());
    }
}
