use did_ledger_core::ClientOptions;

/// Progress-output collaborator for the operation forwarder.  Informational lines go through
/// `report`, which may be suppressed by the caller's options; error lines go through
/// `report_error`, which never is.
pub trait Reporter: Send + Sync {
    fn report(&self, options: &ClientOptions, message: &str);
    fn report_error(&self, message: &str);
}

/// Writes informational lines to stdout (unless the options say to be quiet) and error lines
/// to stderr.  This is the reporter end users see.
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn report(&self, options: &ClientOptions, message: &str) {
        if !options.quiet {
            println!("{}", message);
        }
    }
    fn report_error(&self, message: &str) {
        eprintln!("{}", message);
    }
}
