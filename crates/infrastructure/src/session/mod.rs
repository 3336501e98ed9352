//! Session token sealing

mod sealed_codec;

pub use sealed_codec::{DEV_SESSION_SECRET, SealedSessionCodec};
