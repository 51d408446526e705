use logsentinel::{Status, bypass};

fn main() {
    logsentinel::info("runtime logs are on by default");
    logsentinel::debug_info("debug logs are not, this line is never printed");

    logsentinel::toggle_debug_logs();
    logsentinel::debug_warn("debug logs enabled");
    logsentinel::error("errors go to stderr");

    logsentinel::toggle_runtime_logs();
    logsentinel::info("silenced");
    bypass().info("bypassing the runtime toggle");

    // unknown statuses fall back to INFO after a warning
    logsentinel::current().runtime_log("VERBOSE", "hello", true);
    logsentinel::current().runtime_log(Status::Warning, "", true);

    let handles: Vec<_> = (0..3)
        .map(|i| std::thread::spawn(move || bypass().warn(&format!("hello from thread {i}"))))
        .collect();
    for h in handles {
        h.join().unwrap();
    }
}
