pub mod gateway;
pub mod pi_network;

pub use gateway::{GatewayError, PaymentGateway, UpstreamResponse};
pub use pi_network::PiNetworkClient;
