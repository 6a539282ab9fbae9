//! Artifact dispatcher: resolve a pattern, load its demonstration module,
//! look up the entry symbol, invoke it and classify the outcome.

pub mod artifacts;

use crate::catalog::types::{ArtifactKind, PatternRecord};
use crate::catalog::Registry;
use crate::{PatternbookError, Result};
use artifacts::EntryFn;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::time::{Duration, Instant};

/// Report for a successful invocation.
#[derive(Debug)]
pub struct RunReport {
    /// Wall-clock duration of the entry call itself.
    pub elapsed: Duration,
}

/// Executes the runnable artifact behind a resolved pattern.
pub struct PatternRunner<'a> {
    registry: &'a Registry,
}

impl<'a> PatternRunner<'a> {
    pub fn new(registry: &'a Registry) -> Self {
        Self { registry }
    }

    /// Resolve a free-form name. An unknown name is an expected outcome, not
    /// a defect; callers report it and continue.
    pub fn resolve(&self, name: &str) -> Result<&'a PatternRecord> {
        self.registry
            .find_by_name(name)
            .ok_or_else(|| PatternbookError::NotFound(name.to_string()))
    }

    /// Resolve and run in one step.
    pub fn run(&self, name: &str) -> Result<RunReport> {
        let record = self.resolve(name)?;
        self.invoke(record)
    }

    /// Load the module behind the record's code path, look up its entry
    /// symbol and invoke it, timing the call. Errors and panics raised by
    /// the example itself are classified, never propagated.
    pub fn invoke(&self, record: &PatternRecord) -> Result<RunReport> {
        let Some(code_path) = record.artifact_path(ArtifactKind::Code) else {
            return Err(PatternbookError::LoadFailed(record.id.clone()));
        };
        let module_ref = artifacts::module_ref_from_path(code_path);
        let module = artifacts::lookup(&module_ref)
            .ok_or_else(|| PatternbookError::LoadFailed(module_ref.clone()))?;
        let symbol = record.entry_symbol();
        let entry = module
            .symbol(symbol)
            .ok_or_else(|| PatternbookError::EntryMissing {
                module: module_ref,
                symbol: symbol.to_string(),
            })?;
        invoke_entry(entry)
    }
}

/// Invoke one entry function, measuring it and folding both error returns
/// and panics into `RuntimeFailed`.
fn invoke_entry(entry: EntryFn) -> Result<RunReport> {
    let started = Instant::now();
    let outcome = panic::catch_unwind(AssertUnwindSafe(entry));
    let elapsed = started.elapsed();
    match outcome {
        Ok(Ok(())) => Ok(RunReport { elapsed }),
        Ok(Err(cause)) => Err(PatternbookError::RuntimeFailed(cause)),
        Err(payload) => Err(PatternbookError::RuntimeFailed(anyhow::anyhow!(
            "panic: {}",
            panic_message(payload.as_ref())
        ))),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "opaque panic payload".to_string()
    }
}
