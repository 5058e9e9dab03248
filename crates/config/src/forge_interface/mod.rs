pub mod deploy_pramb_cover;
pub mod script_params;
