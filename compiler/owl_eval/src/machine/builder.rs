//! `MachineBuilder` for configuring a [`Machine`].

use super::Machine;
use crate::intrinsics::{builtin_table, IntrinsicTable};
use crate::{stdout_handler, Environment, SharedPrintHandler};

/// Builder for [`Machine`].
///
/// Defaults: the built-in intrinsic table, stdout output, no frame limit.
#[derive(Default)]
pub struct MachineBuilder {
    intrinsics: Option<IntrinsicTable>,
    print_handler: Option<SharedPrintHandler>,
    frame_limit: Option<usize>,
}

impl MachineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `table` instead of the built-ins.
    #[must_use]
    pub fn intrinsics(mut self, table: IntrinsicTable) -> Self {
        self.intrinsics = Some(table);
        self
    }

    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Fail a function call with `FrameLimitExceeded` once `limit` frames
    /// (base frame included) are live.
    #[must_use]
    pub fn frame_limit(mut self, limit: usize) -> Self {
        self.frame_limit = Some(limit);
        self
    }

    pub fn build(self) -> Machine {
        Machine {
            env: Environment::new(),
            intrinsics: self.intrinsics.unwrap_or_else(builtin_table),
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
            halted: false,
            frame_limit: self.frame_limit,
        }
    }
}
