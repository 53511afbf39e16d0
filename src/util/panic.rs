/// Asserts that running the block panics, optionally checking that the panic message contains some
/// text (`assert_panics!({ .. }, with "text")`).
///
/// Producers close over `Rc`s and `Cell`s, which are never unwind safe, so the block always runs
/// inside [`AssertUnwindSafe`](std::panic::AssertUnwindSafe).
#[allow(unused_macros)]
macro_rules! assert_panics {
    ($run:block) => {
        assert_panics!($run, "assertion failed to panic")
    };
    ($run:block, with $expected:expr) => {
        match std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $run)) {
            Ok(_) => panic!("assertion failed to panic"),
            Err(payload) => {
                let message = $crate::util::panic::payload_message(&*payload);
                assert!(
                    message.contains($expected),
                    "panicked with {message:?} rather than {:?}",
                    $expected
                );
            },
        }
    };
    ($run:block, $msg:literal) => {
        assert!(
            std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $run)).is_err(),
            $msg
        );
    };
}

#[allow(unused_imports)]
pub(crate) use assert_panics;

/// Pulls the message out of a panic payload, which is a `&str` for literal messages and a `String`
/// for formatted ones.
#[cfg(test)]
pub(crate) fn payload_message(payload: &(dyn std::any::Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or_default()
}
