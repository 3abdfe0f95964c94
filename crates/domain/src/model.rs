pub mod entities;

pub use entities::Jid;
