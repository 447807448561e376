/// Asserts that the provided block panics, catching the unwind so that the test can keep going.
/// The block is wrapped in [`AssertUnwindSafe`](std::panic::AssertUnwindSafe) because most blocks
/// here capture a container by mutable reference.
#[allow(unused_macros)]
macro_rules! assert_panics {
    ($run:block) => {
        assert_panics!($run, "block was expected to panic")
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
