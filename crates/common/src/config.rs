use once_cell::sync::OnceCell;

static GLOBAL_CONFIG: OnceCell<GlobalConfig> = OnceCell::new();

#[derive(Debug)]
pub struct GlobalConfig {
    pub verbose: bool,
}

pub fn init_global_config(config: GlobalConfig) {
    GLOBAL_CONFIG
        .set(config)
        .expect("Global config is already initialized");
}

pub fn global_config() -> &'static GlobalConfig {
    GLOBAL_CONFIG.get_or_init(|| GlobalConfig { verbose: false })
}
