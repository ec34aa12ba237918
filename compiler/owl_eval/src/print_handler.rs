//! Where `print` and `println` output goes.
//!
//! Hosts pick a destination when building the [`Machine`](crate::Machine);
//! tests use the buffer and read it back through the shared handle.

use std::io::Write;
use std::sync::Arc;

use parking_lot::Mutex;

/// Output destination.
pub enum PrintHandlerImpl {
    /// Process stdout, flushed after every write.
    Stdout,
    /// In-memory capture.
    Buffer(Mutex<String>),
    /// Discards all output.
    Silent,
}

impl PrintHandlerImpl {
    fn write(&self, text: &str) {
        match self {
            Self::Stdout => {
                let mut out = std::io::stdout().lock();
                // A closed stdout must not abort evaluation.
                let _ = out.write_all(text.as_bytes());
                let _ = out.flush();
            }
            Self::Buffer(buffer) => buffer.lock().push_str(text),
            Self::Silent => {}
        }
    }

    pub fn print(&self, text: &str) {
        self.write(text);
    }

    pub fn println(&self, text: &str) {
        self.write(text);
        self.write("\n");
    }

    /// Everything captured since creation or the last [`clear`](Self::clear).
    /// Always empty unless this is a buffer.
    pub fn get_output(&self) -> String {
        match self {
            Self::Buffer(buffer) => buffer.lock().clone(),
            Self::Stdout | Self::Silent => String::new(),
        }
    }

    pub fn clear(&self) {
        if let Self::Buffer(buffer) = self {
            buffer.lock().clear();
        }
    }
}

/// Handle shared between a machine and whoever reads the output.
pub type SharedPrintHandler = Arc<PrintHandlerImpl>;

pub fn stdout_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Stdout)
}

pub fn buffer_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Buffer(Mutex::new(String::new())))
}

pub fn silent_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Silent)
}
