//! Order ledger module.
//!
//! Session state plus the operations shoppers perform on it: cart edits,
//! wishlist toggles, pricing and checkout.

mod clock;
mod ledger;
mod session;

pub use clock::{Clock, FixedClock, SystemClock};
pub use ledger::{CartAck, OrderLedger};
pub use session::SessionState;
