pub mod intent;
pub mod router;

pub use intent::{Intent, IntentRequest, SessionState, Slot, SlotLookup, SlotValue};
pub use router::IntentKind;
