/// Runs `$run`, asserting that it panics. With `payload = ...`, the panic message is also
/// compared, which checks that a panic raised in a callback reaches the caller untouched.
#[allow(unused_macros)]
macro_rules! assert_panics {
    ($run:block) => {
        assert_panics!($run, "block failed to panic")
    };
    ($run:block, $msg:literal) => {
        assert!(
            std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $run)).is_err(),
            $msg
        )
    };
    ($run:block, payload = $expected:expr) => {{
        let payload = match std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $run)) {
            Ok(_) => panic!("block failed to panic"),
            Err(payload) => payload,
        };
        let message = payload
            .downcast_ref::<&str>()
            .copied()
            .or_else(|| payload.downcast_ref::<String>().map(String::as_str));
        assert_eq!(
            message,
            Some($expected),
            "The panic payload should reach the caller unchanged."
        );
    }};
}

#[allow(unused_imports)]
pub(crate) use assert_panics;
