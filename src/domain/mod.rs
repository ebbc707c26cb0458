mod device;
mod identifier_deserializer;
mod ipsw;

pub use device::Device;
pub use ipsw::Ipsw;
