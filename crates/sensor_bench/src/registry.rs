//! Name-based lookup of generator implementations.
//!
//! Generators are registered under a string key per [`GeneratorCategory`]. Lookups ignore
//! ASCII case, so `"Square"` resolves like `"square"`, while [`GeneratorRegistry::names`]
//! reports keys exactly as registered. Each resolution calls the registered factory and
//! hands out a fresh, exclusively owned generator.
//!
//! Typical usage:
//! - Validate user input with [`GeneratorRegistry::contains`], listing
//!   [`GeneratorRegistry::names`] in the error message.
//! - Build generators with [`GeneratorRegistry::resolve_mesh`] and
//!   [`GeneratorRegistry::resolve_sequence`].
use std::fmt;

use crate::error::{Error, Result};
use crate::mesh::{HoneycombMesh, MeshGenerator, SquareMesh, TriangleMesh};
use crate::sequence::{GaussianSequence, HaltonSequence, RandomSequence, SequenceGenerator};

/// Kind of generator a registry key refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeneratorCategory {
    Mesh,
    Sequence,
}

impl fmt::Display for GeneratorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeneratorCategory::Mesh => f.write_str("mesh"),
            GeneratorCategory::Sequence => f.write_str("sequence"),
        }
    }
}

type Factory<T> = Box<dyn Fn() -> Box<T> + Send + Sync>;

/// Factories of one generator category, keyed by name.
pub struct NamedRegistry<T: ?Sized> {
    category: GeneratorCategory,
    entries: Vec<(String, Factory<T>)>,
}

impl<T: ?Sized> NamedRegistry<T> {
    /// Creates an empty registry for `category`.
    pub fn new(category: GeneratorCategory) -> Self {
        Self {
            category,
            entries: Vec::new(),
        }
    }

    pub fn category(&self) -> GeneratorCategory {
        self.category
    }

    /// Registers a factory under `name`.
    ///
    /// Registering a name twice keeps both entries; lookups return the first one.
    pub fn register<F>(&mut self, name: impl Into<String>, factory: F)
    where
        F: Fn() -> Box<T> + Send + Sync + 'static,
    {
        self.entries.push((name.into(), Box::new(factory)));
    }

    /// Registered names, case preserved, in registration order.
    ///
    /// Names differing only in case are listed once, spelled as first registered.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::with_capacity(self.entries.len());
        for (name, _) in &self.entries {
            if !names.iter().any(|known| known.eq_ignore_ascii_case(name)) {
                names.push(name.as_str());
            }
        }
        names
    }

    /// Case-insensitive existence check.
    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// Builds a fresh generator registered under `name`.
    pub fn resolve(&self, name: &str) -> Result<Box<T>> {
        self.find(name)
            .map(|factory| factory())
            .ok_or_else(|| Error::UnknownGenerator {
                category: self.category,
                name: name.to_owned(),
            })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn find(&self, name: &str) -> Option<&Factory<T>> {
        self.entries
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, factory)| factory)
    }
}

/// Mesh and sequence generators available for selection by name.
pub struct GeneratorRegistry {
    meshes: NamedRegistry<dyn MeshGenerator>,
    sequences: NamedRegistry<dyn SequenceGenerator>,
}

impl GeneratorRegistry {
    /// Creates a registry with no generators.
    pub fn new() -> Self {
        Self {
            meshes: NamedRegistry::new(GeneratorCategory::Mesh),
            sequences: NamedRegistry::new(GeneratorCategory::Sequence),
        }
    }

    /// Creates a registry holding the square, triangle and honeycomb meshes and the random,
    /// Halton and Gaussian sequences. Random generators are seeded from the clock.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry
            .meshes
            .register(SquareMesh::NAME, || Box::new(SquareMesh));
        registry
            .meshes
            .register(TriangleMesh::NAME, || Box::new(TriangleMesh));
        registry
            .meshes
            .register(HoneycombMesh::NAME, || Box::new(HoneycombMesh));
        registry
            .sequences
            .register(RandomSequence::NAME, || Box::new(RandomSequence::new()));
        registry
            .sequences
            .register(HaltonSequence::NAME, || Box::new(HaltonSequence::new()));
        registry
            .sequences
            .register(GaussianSequence::NAME, || Box::new(GaussianSequence::new()));
        registry
    }

    pub fn meshes(&self) -> &NamedRegistry<dyn MeshGenerator> {
        &self.meshes
    }

    pub fn meshes_mut(&mut self) -> &mut NamedRegistry<dyn MeshGenerator> {
        &mut self.meshes
    }

    pub fn sequences(&self) -> &NamedRegistry<dyn SequenceGenerator> {
        &self.sequences
    }

    pub fn sequences_mut(&mut self) -> &mut NamedRegistry<dyn SequenceGenerator> {
        &mut self.sequences
    }

    /// Registered names of `category`, case preserved.
    pub fn names(&self, category: GeneratorCategory) -> Vec<&str> {
        match category {
            GeneratorCategory::Mesh => self.meshes.names(),
            GeneratorCategory::Sequence => self.sequences.names(),
        }
    }

    /// Case-insensitive existence check within `category`.
    pub fn contains(&self, category: GeneratorCategory, name: &str) -> bool {
        match category {
            GeneratorCategory::Mesh => self.meshes.contains(name),
            GeneratorCategory::Sequence => self.sequences.contains(name),
        }
    }

    pub fn resolve_mesh(&self, name: &str) -> Result<Box<dyn MeshGenerator>> {
        self.meshes.resolve(name)
    }

    pub fn resolve_sequence(&self, name: &str) -> Result<Box<dyn SequenceGenerator>> {
        self.sequences.resolve(name)
    }
}

impl Default for GeneratorRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}
