// acr122u/src/prelude.rs

pub use crate::card::{CardType, KnownCard};
pub use crate::device::{
    Connection, Control, ExitHandle, LifecycleEvent, ReaderConfig, ReaderMonitor, Transmit,
    prepare_reader,
};
pub use crate::protocol::{
    AtrInfo, Command, OutcomeKind, PiccOperatingParameter, ResponseOutcome, classify,
    compute_check_digit, unwrap_payload,
};
pub use crate::transport::{ReaderTransport, Transport};
pub use crate::{
    BuzzerLink, Disposition, Error, KeyType, Protocol, Result, ShareMode, StatusBits, StatusWord,
    Uid, ValueOp,
};

pub use crate::utils::{parse_hex, pause, to_hex};
