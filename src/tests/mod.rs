use std::sync::Once;

use crate::{Phonelib, PHONELIB, PhonelibConfig};

mod formatting_tests;
mod phonelib_tests;

static INIT_LOGGER: Once = Once::new();

pub(crate) fn get_phonelib() -> Phonelib {
    INIT_LOGGER.call_once(|| {
        let _ = colog::default_builder()
            .filter_level(log::LevelFilter::Trace)
            .try_init();
    });
    PHONELIB.clone()
}

pub(crate) fn get_phonelib_with(config: PhonelibConfig) -> Phonelib {
    get_phonelib()
        .with_config(config)
        .expect("test configuration should be valid")
}
