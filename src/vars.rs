macro_rules! env_config {
    ($name:ident, $env_key:expr, $default:expr) => {
        paste::paste! {
            pub static [<DIRCLEAN_ $name>]: ::std::sync::LazyLock<&'static str> = ::std::sync::LazyLock::new(|| {
                ::std::boxed::Box::leak(
                    ::std::env::var($env_key)
                        .unwrap_or_else(|_| $default.to_string())
                        .into_boxed_str()
                )
            });
        }
    };
    ($name:ident, $default:expr) => {
        env_config!($name, stringify!([<DIRCLEAN_ $name>]), $default);
    };
}

env_config!(CONFIG_PATH, "configs/Clean.properties");
env_config!(LOG_PATH, "logs/App.log");
env_config!(SCHEDULE, "0 0 3 * * *");
