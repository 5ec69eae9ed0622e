/// Asserts that a block panics. With `raises`, also asserts that the panic message is exactly the
/// rendered condition, which is what [`Panic::panic`](crate::panic::Panic::panic) produces.
#[allow(unused_macros)]
macro_rules! assert_panics {
    ($run:block) => {
        assert_panics!($run, "block failed to panic")
    };
    ($run:block, raises $condition:expr) => {{
        let Err(payload) = std::panic::catch_unwind(|| $run) else {
            panic!("block failed to raise {}", $condition)
        };
        assert_eq!(
            payload.downcast_ref::<String>().map(String::as_str),
            Some($condition.to_string().as_str()),
            "The panic message should be the rendered condition."
        );
    }};
    ($run:block, $msg:literal) => {
        assert!(std::panic::catch_unwind(|| $run).is_err(), $msg);
    };
}

#[allow(unused_imports)]
pub(crate) use assert_panics;
