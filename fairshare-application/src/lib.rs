#![warn(clippy::uninlined_format_args)]

pub mod ledger_service;
pub mod model;
pub mod ports;
pub mod settlement_recorder;

pub use ledger_service::LedgerService;
pub use model::{
    ActivityKind, LedgerSnapshot, NewActivity, NewSettlement, PaymentMethod, Session,
    SettlementRequest,
};
pub use ports::{LedgerStore, StoreError};
pub use settlement_recorder::{RecordSettlementError, SettlementRecorder};
