#[macro_export]
macro_rules! get_trellis_setting {
    ($setting:ident) => {
        ::std::env::var(stringify!($setting))
            .unwrap_or($crate::config::$setting.to_string())
    };
    ($setting:ident, usize) => {
        match ::std::env::var(stringify!($setting)) {
            Ok(v) => match v.parse::<usize>() {
                Ok(i) => i,
                Err(_e) => {
                    ::log::warn!(
                        "Env var setting {}, is not a valid unsigned integer. Using default",
                        stringify!($setting)
                    );
                    $crate::config::$setting
                }
            },
            Err(_e) => $crate::config::$setting,
        }
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_setting_falls_back_to_default() {
        std::env::remove_var("TRELLIS_SPINNER_FRAME_MS");
        let v = get_trellis_setting!(TRELLIS_SPINNER_FRAME_MS, usize);
        assert_eq!(v, crate::config::TRELLIS_SPINNER_FRAME_MS);
    }

    #[test]
    fn test_setting_ignores_invalid_integer() {
        std::env::set_var("TRELLIS_TUI_TICK_MS", "not-a-number");
        let v = get_trellis_setting!(TRELLIS_TUI_TICK_MS, usize);
        assert_eq!(v, crate::config::TRELLIS_TUI_TICK_MS);
        std::env::remove_var("TRELLIS_TUI_TICK_MS");
    }

    #[test]
    fn test_string_setting_default() {
        std::env::remove_var("TRELLIS_LOCALE_PATH");
        let v = get_trellis_setting!(TRELLIS_LOCALE_PATH);
        assert_eq!(v, "");
    }
}
