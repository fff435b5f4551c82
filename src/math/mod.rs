pub mod coefs;

pub use coefs::Coefs;
