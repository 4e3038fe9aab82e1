use std::thread;

/// Spawn + detach: the closure runs on its own named thread, its result
/// and any panic are discarded, and nothing is propagated back to the
/// caller. For side jobs like opening a plot viewer that must not block
/// or fail the analysis.
pub fn spawn_detached<F>(name: &str, f: F)
where
    F: FnOnce() + Send + 'static,
{
    let _ = thread::Builder::new().name(name.to_string()).spawn(f);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn detached_task_runs() {
        let (tx, rx) = mpsc::channel();
        spawn_detached("test-task", move || {
            tx.send(42).unwrap();
        });
        assert_eq!(rx.recv().unwrap(), 42);
    }

    #[test]
    fn panicking_task_does_not_propagate() {
        spawn_detached("test-panic", || panic!("discarded"));
    }
}
