mod equivalence;
mod scenarios;

/// Routes the library's `log` output through the test harness. Run with
/// `RUST_LOG=trace` to see every update and query.
fn init_logging() {
  let _ = env_logger::builder().is_test(true).try_init();
}
