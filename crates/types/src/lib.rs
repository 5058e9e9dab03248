mod l1_network;

pub use l1_network::*;
