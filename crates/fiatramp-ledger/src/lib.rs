//! # fiatramp-ledger
//!
//! **Persistence plane**: the three stores the settlement flow reads and
//! writes — users, fiat wallets, and the append-only transaction log.
//!
//! ## Architecture
//!
//! 1. **UserDirectory**: the users table; settlement only reads it
//! 2. **FiatLedger**: source of truth for wallet balances; the only code
//!    that mutates them
//! 3. **TransactionLog**: append-only intent records, one per settlement
//!    attempt
//!
//! All mutations are atomic at the call boundary: either the full operation
//! succeeds or the store is unchanged.

pub mod transaction_log;
pub mod user_directory;
pub mod wallet_store;

pub use transaction_log::TransactionLog;
pub use user_directory::UserDirectory;
pub use wallet_store::FiatLedger;
