//! Generator dispatch table

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::{CodeType, ValidateCode};
use crate::errors::{CodeResult, ValidateCodeError};

use super::context::RequestContext;
use super::traits::CodeGenerator;

/// Immutable mapping from code type to its generator
#[derive(Clone, Default)]
pub struct GeneratorRegistry {
    generators: HashMap<CodeType, Arc<dyn CodeGenerator>>,
}

/// Collects generators before the registry is frozen
#[derive(Default)]
pub struct GeneratorRegistryBuilder {
    generators: HashMap<CodeType, Arc<dyn CodeGenerator>>,
}

impl GeneratorRegistryBuilder {
    /// Bind a generator to a code type, replacing any earlier binding
    pub fn register<G>(mut self, kind: CodeType, generator: G) -> Self
    where
        G: CodeGenerator + 'static,
    {
        self.generators.insert(kind, Arc::new(generator));
        self
    }

    pub fn build(self) -> GeneratorRegistry {
        tracing::debug!(
            generators = self.generators.len(),
            "Verification code generator registry built"
        );
        GeneratorRegistry {
            generators: self.generators,
        }
    }
}

impl GeneratorRegistry {
    pub fn builder() -> GeneratorRegistryBuilder {
        GeneratorRegistryBuilder::default()
    }

    /// Generator bound to `kind`
    pub fn get(&self, kind: CodeType) -> CodeResult<&Arc<dyn CodeGenerator>> {
        self.generators
            .get(&kind)
            .ok_or_else(|| ValidateCodeError::GeneratorNotFound {
                name: kind.generator_name(),
            })
    }

    /// Generate a code of the given type
    pub fn generate(&self, kind: CodeType, ctx: &dyn RequestContext) -> CodeResult<ValidateCode> {
        self.get(kind)?.generate(ctx)
    }

    pub fn contains(&self, kind: CodeType) -> bool {
        self.generators.contains_key(&kind)
    }

    /// Registered code types in declaration order
    pub fn kinds(&self) -> Vec<CodeType> {
        CodeType::ALL
            .into_iter()
            .filter(|kind| self.contains(*kind))
            .collect()
    }
}
