//! Entity trait: things looked up by identity rather than by value.

use std::collections::HashMap;

/// Entity marker + minimal interface.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}

/// Map each entity id to its position in `entities`.
///
/// Fails with the first id that appears twice.
pub fn index_by_id<E: Entity>(entities: &[E]) -> Result<HashMap<E::Id, usize>, E::Id> {
    let mut index = HashMap::with_capacity(entities.len());
    for (position, entity) in entities.iter().enumerate() {
        if index.insert(entity.id().clone(), position).is_some() {
            return Err(entity.id().clone());
        }
    }
    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Named(&'static str);

    impl Entity for Named {
        type Id = &'static str;

        fn id(&self) -> &Self::Id {
            &self.0
        }
    }

    #[test]
    fn index_keeps_positions() {
        let index = index_by_id(&[Named("a"), Named("b")]).unwrap();
        assert_eq!(index["a"], 0);
        assert_eq!(index["b"], 1);
    }

    #[test]
    fn duplicate_ids_are_reported() {
        assert_eq!(index_by_id(&[Named("a"), Named("b"), Named("a")]), Err("a"));
    }
}
