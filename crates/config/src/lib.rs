pub mod forge_interface;
pub mod traits;

mod consts;
mod descriptor;
mod network;
mod solc;

pub use crate::{consts::*, descriptor::*, network::*, solc::*};
