//! Wire-facing types shared between the steering core and any frontend:
//! parameter domains, the outbound payload schema, and the transport error
//! taxonomy.

pub mod domain;
pub mod error;
pub mod protocol;
