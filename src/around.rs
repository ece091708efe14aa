use std::ops::ControlFlow;

/*
 * Holds a flag that is only false while some work is in progress.
 */
#[derive(Debug)]
pub struct Cleanup {
    clean: bool,
}

/*
 * Puts the flag back when dropped, which also covers early returns and unwinding
 */
struct Restore<'a>(&'a mut bool);

impl Drop for Restore<'_> {
    fn drop(&mut self) {
        *self.0 = true;
    }
}

impl Cleanup {
    pub fn new() -> Self {
        Cleanup { clean: true }
    }

    pub fn is_clean(&self) -> bool {
        self.clean
    }

    /*
     * Run <f> with the flag lowered. The flag is raised again however <f> exits :
     * normally, by breaking out, or by panicking.
     */
    pub fn do_stuff<B>(&mut self, f: impl FnOnce() -> ControlFlow<B>) -> ControlFlow<B> {
        self.clean = false;
        let _restore = Restore(&mut self.clean);
        f()
    }

    /*
     * Same as do_stuff but the flag is only raised when <f> runs to completion
     */
    pub fn do_stuff_dangerously<B>(
        &mut self,
        f: impl FnOnce() -> ControlFlow<B>,
    ) -> ControlFlow<B> {
        self.clean = false;
        if let ControlFlow::Break(value) = f() {
            return ControlFlow::Break(value);
        }
        self.clean = true;
        ControlFlow::Continue(())
    }
}

impl Default for Cleanup {
    fn default() -> Self {
        Self::new()
    }
}

pub trait Logger {
    fn info(&self, message: &str);
    fn error(&self, message: &str);
}

/*
 * Forwards to the global tracing subscriber
 */
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        tracing::info!("{}", message);
    }

    fn error(&self, message: &str) {
        tracing::error!("{}", message);
    }
}

/*
 * Log before and after <f>, or log the failure and hand the error back untouched.
 */
pub fn log_around<L, R, E, F>(logger: &L, label: &str, f: F) -> Result<R, E>
where
    L: Logger + ?Sized,
    F: FnOnce() -> Result<R, E>,
{
    logger.info(&format!("Before {}", label));
    match f() {
        Ok(result) => {
            logger.info(&format!("After {}", label));
            Ok(result)
        }
        Err(err) => {
            logger.error(&format!("Error during {}", label));
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{
        cell::RefCell,
        panic::{self, AssertUnwindSafe},
    };

    #[test]
    fn cleanup() {
        let mut foo = Cleanup::new();
        let flow = foo.do_stuff(|| ControlFlow::Break(()));
        assert!(flow.is_break());
        assert!(foo.is_clean());
    }

    #[test]
    fn broken_cleanup() {
        let mut foo = Cleanup::new();
        let _ = foo.do_stuff_dangerously(|| ControlFlow::Break(()));
        assert!(!foo.is_clean());

        let _ = foo.do_stuff_dangerously(|| ControlFlow::<()>::Continue(()));
        assert!(foo.is_clean());
    }

    #[test]
    fn cleanup_after_panic() {
        let mut foo = Cleanup::new();
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            foo.do_stuff(|| -> ControlFlow<()> { panic!("Something Broke") })
        }));
        assert!(result.is_err());
        assert!(foo.is_clean());
    }

    #[derive(Default)]
    struct MockLogger {
        lines: RefCell<Vec<String>>,
    }

    impl Logger for MockLogger {
        fn info(&self, message: &str) {
            self.lines.borrow_mut().push(format!("info: {}", message));
        }

        fn error(&self, message: &str) {
            self.lines.borrow_mut().push(format!("error: {}", message));
        }
    }

    #[test]
    fn log_around_success() {
        let log = MockLogger::default();
        let result: Result<u32, String> = log_around(&log, "Example", || Ok(42));
        assert_eq!(result, Ok(42));
        assert_eq!(
            *log.lines.borrow(),
            vec!["info: Before Example", "info: After Example"]
        );
    }

    #[test]
    fn log_around_that_fails() {
        let log = MockLogger::default();
        let result: Result<(), String> =
            log_around(&log, "Example Error", || Err("Something Broke".to_string()));
        assert_eq!(result, Err("Something Broke".to_string()));
        assert_eq!(
            *log.lines.borrow(),
            vec!["info: Before Example Error", "error: Error during Example Error"]
        );
    }

    #[test]
    fn log_around_dyn_logger() {
        let log: Box<dyn Logger> = Box::new(TracingLogger);
        let result: Result<&str, ()> = log_around(log.as_ref(), "boxed", || Ok("done"));
        assert_eq!(result, Ok("done"));
    }
}
