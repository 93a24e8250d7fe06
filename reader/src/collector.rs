//! Walks a most-derived-first sequence of levels, collecting field and
//! method injection points while suppressing method declarations that a
//! more-derived level has already overridden.

use std::collections::HashSet;

use crate::descriptor::{FieldPoint, MethodPoint};
use crate::method::InjectCandidate;

/////////////////////////////////////////////////////////////////////////////////////////

/// Accumulates injection points across levels, most-derived level first.
/// `finish` reverses the accumulation order so callers see base-class
/// declarations before derived ones, matching the order a hand-written
/// constructor would run them in.
pub struct InjectionCollector {
    /// Method names already added: a later (less-derived) declaration of
    /// the same name must not be added again.
    added: HashSet<String>,
    /// Method names a level has claimed without qualifying for addition:
    /// this suppresses any ancestor's `Inject` declaration of that name.
    not_inject: HashSet<String>,
    fields: Vec<FieldPoint>,
    methods: Vec<MethodPoint>,
}

impl InjectionCollector {
    pub fn new() -> Self {
        Self {
            added: HashSet::new(),
            not_inject: HashSet::new(),
            fields: Vec::new(),
            methods: Vec::new(),
        }
    }

    /// Feeds one level's worth of injection points, most-derived level
    /// called first. `methods` includes every method declaration at this
    /// level, not just the `Inject`-annotated ones: a plain override
    /// still needs to suppress an ancestor's `Inject` method of the same
    /// name.
    pub fn collect_level(&mut self, fields: Vec<FieldPoint>, methods: Vec<InjectCandidate>) {
        self.fields.extend(fields);
        for candidate in methods {
            let name = candidate.point.method_name.clone();
            let eligible = candidate.is_inject
                && !self.not_inject.contains(&name)
                && !self.added.contains(&name)
                && !candidate.is_private;
            if eligible {
                self.added.insert(name);
                self.methods.push(candidate.point);
            } else {
                self.not_inject.insert(name);
            }
        }
    }

    /// Consumes the collector, returning fields and methods in
    /// base-to-derived declaration order.
    pub fn finish(mut self) -> (Vec<FieldPoint>, Vec<MethodPoint>) {
        self.fields.reverse();
        self.methods.reverse();
        (self.fields, self.methods)
    }
}

/////////////////////////////////////////////////////////////////////////////////////////
