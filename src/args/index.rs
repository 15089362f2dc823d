//! Lookup tables over a command's argument specs.
//!
//! The [`ArgumentIndex`] is keyed three ways: the exact `(name, shorthand)`
//! pair, the name alone, and the shorthand alone. When two specs would fill
//! the same key the first one in declaration order keeps it; the later spec
//! is unreachable through that key and is reported by
//! [`ArgumentIndex::collisions`].

use std::collections::HashMap;
use std::fmt;

use super::spec::ArgumentSpec;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum IndexKey {
    Pair(String, String),
    Name(String),
    Shorthand(String),
}

/// Which lookup table a collision happened in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionKind {
    Name,
    Shorthand,
}

impl fmt::Display for CollisionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollisionKind::Name => write!(f, "name"),
            CollisionKind::Shorthand => write!(f, "shorthand"),
        }
    }
}

/// A declaration that lost a key to an earlier one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collision {
    pub kind: CollisionKind,
    pub key: String,
    /// Name of the spec that keeps the key.
    pub kept: String,
    /// Name of the spec that can no longer be addressed by the key.
    pub shadowed: String,
}

impl fmt::Display for Collision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} '{}' already declared by '{}', '{}' is unreachable through it",
            self.kind, self.key, self.kept, self.shadowed
        )
    }
}

/// First-registration-wins lookup over a list of specs.
#[derive(Debug)]
pub struct ArgumentIndex<'a> {
    entries: HashMap<IndexKey, &'a ArgumentSpec>,
    collisions: Vec<Collision>,
}

impl<'a> ArgumentIndex<'a> {
    /// Index `specs` in declaration order.
    pub fn build<I>(specs: I) -> Self
    where
        I: IntoIterator<Item = &'a ArgumentSpec>,
    {
        let mut index = Self {
            entries: HashMap::new(),
            collisions: Vec::new(),
        };

        for spec in specs {
            let shorthand = spec.shorthand().unwrap_or_default();

            // Unnamed positional specs are reachable by position only.
            if spec.name().is_empty() && shorthand.is_empty() {
                continue;
            }

            index
                .entries
                .entry(IndexKey::Pair(spec.name().to_string(), shorthand.to_string()))
                .or_insert(spec);

            if !spec.name().is_empty() {
                index.insert(IndexKey::Name(spec.name().to_string()), spec);
            }
            if !shorthand.is_empty() {
                index.insert(IndexKey::Shorthand(shorthand.to_string()), spec);
            }
        }

        index
    }

    fn insert(&mut self, key: IndexKey, spec: &'a ArgumentSpec) {
        if let Some(&kept) = self.entries.get(&key) {
            let (kind, key) = match key {
                IndexKey::Name(k) => (CollisionKind::Name, k),
                IndexKey::Shorthand(k) => (CollisionKind::Shorthand, k),
                IndexKey::Pair(..) => return,
            };
            self.collisions.push(Collision {
                kind,
                key,
                kept: kept.name().to_string(),
                shadowed: spec.name().to_string(),
            });
            return;
        }
        self.entries.insert(key, spec);
    }

    pub fn lookup_by_pair(&self, name: &str, shorthand: &str) -> Option<&'a ArgumentSpec> {
        self.entries
            .get(&IndexKey::Pair(name.to_string(), shorthand.to_string()))
            .copied()
    }

    pub fn lookup_by_name(&self, name: &str) -> Option<&'a ArgumentSpec> {
        self.entries.get(&IndexKey::Name(name.to_string())).copied()
    }

    pub fn lookup_by_shorthand(&self, shorthand: &str) -> Option<&'a ArgumentSpec> {
        self.entries
            .get(&IndexKey::Shorthand(shorthand.to_string()))
            .copied()
    }

    /// Declarations shadowed by an earlier spec, in declaration order.
    pub fn collisions(&self) -> &[Collision] {
        &self.collisions
    }
}
