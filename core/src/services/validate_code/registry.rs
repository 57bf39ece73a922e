//! Processor lookup by code type or name

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::CodeType;
use crate::errors::{CodeResult, ValidateCodeError};

use super::processor::CodeProcessor;

/// Immutable mapping from code type to its processor
///
/// Built once at startup and shared by reference afterwards.
#[derive(Clone, Default)]
pub struct ProcessorRegistry {
    processors: HashMap<CodeType, Arc<CodeProcessor>>,
}

/// Collects processors before the registry is frozen
#[derive(Default)]
pub struct ProcessorRegistryBuilder {
    processors: HashMap<CodeType, Arc<CodeProcessor>>,
}

impl ProcessorRegistryBuilder {
    /// Register a processor under its own code type, replacing any earlier one
    pub fn register(mut self, processor: CodeProcessor) -> Self {
        self.processors.insert(processor.kind(), Arc::new(processor));
        self
    }

    pub fn build(self) -> ProcessorRegistry {
        tracing::info!(
            processors = self.processors.len(),
            "Verification code processor registry built"
        );
        ProcessorRegistry {
            processors: self.processors,
        }
    }
}

impl ProcessorRegistry {
    pub fn builder() -> ProcessorRegistryBuilder {
        ProcessorRegistryBuilder::default()
    }

    /// Processor bound to `kind`
    pub fn find_by_kind(&self, kind: CodeType) -> CodeResult<&Arc<CodeProcessor>> {
        self.processors
            .get(&kind)
            .ok_or_else(|| ValidateCodeError::ProcessorNotFound {
                name: kind.processor_name(),
            })
    }

    /// Processor for a code type name, matched case-insensitively
    ///
    /// Any miss, including a name that is not a code type at all, is
    /// reported as `ProcessorNotFound`.
    pub fn find_by_name(&self, name: &str) -> CodeResult<&Arc<CodeProcessor>> {
        match CodeType::resolve(name) {
            Ok(kind) => self.find_by_kind(kind),
            Err(_) => Err(ValidateCodeError::ProcessorNotFound {
                name: format!("{}Processor", name.trim().to_lowercase()),
            }),
        }
    }

    /// Registered code types in declaration order
    pub fn kinds(&self) -> Vec<CodeType> {
        CodeType::ALL
            .into_iter()
            .filter(|kind| self.processors.contains_key(kind))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.processors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processors.is_empty()
    }
}
