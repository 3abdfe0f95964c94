pub mod jid;

pub use jid::Jid;
