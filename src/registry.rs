use combiner::{Combine, NullCombiner};
use errors::*;
use mapper::Map;
use partition::Partition;
use reducer::Reduce;

/// `UserImplRegistry` tracks the user's implementations of Map, Reduce, etc.
///
/// The user should use the `UserImplRegistryBuilder` to create this and then pass it in to `run`.
pub struct UserImplRegistry<'a, M, R, P, C>
where
    M: Map + 'a,
    R: Reduce<Value = M::Value> + 'a,
    P: Partition<M::Key, M::Value> + 'a,
    C: Combine<M::Value> + 'a,
    M::Value: Default + ::serde::Serialize + ::serde::de::DeserializeOwned,
{
    pub mapper: &'a M,
    pub reducer: &'a R,
    pub partitioner: &'a P,
    pub combiner: Option<&'a C>,
}

/// `UserImplRegistryBuilder` is used to create a `UserImplRegistry`.
pub struct UserImplRegistryBuilder<'a, M, R, P, C>
where
    M: Map + 'a,
    R: Reduce<Value = M::Value> + 'a,
    P: Partition<M::Key, M::Value> + 'a,
    C: Combine<M::Value> + 'a,
    M::Value: Default + ::serde::Serialize + ::serde::de::DeserializeOwned,
{
    mapper: Option<&'a M>,
    reducer: Option<&'a R>,
    partitioner: Option<&'a P>,
    combiner: Option<&'a C>,
}

impl<'a, M, R, P, C> Default for UserImplRegistryBuilder<'a, M, R, P, C>
where
    M: Map + 'a,
    R: Reduce<Value = M::Value> + 'a,
    P: Partition<M::Key, M::Value> + 'a,
    C: Combine<M::Value> + 'a,
    M::Value: Default + ::serde::Serialize + ::serde::de::DeserializeOwned,
{
    fn default() -> UserImplRegistryBuilder<'a, M, R, P, C> {
        UserImplRegistryBuilder {
            mapper: None,
            reducer: None,
            partitioner: None,
            combiner: None,
        }
    }
}

impl<'a, M, R, P, C> UserImplRegistryBuilder<'a, M, R, P, C>
where
    M: Map + 'a,
    R: Reduce<Value = M::Value> + 'a,
    P: Partition<M::Key, M::Value> + 'a,
    C: Combine<M::Value> + 'a,
    M::Value: Default + ::serde::Serialize + ::serde::de::DeserializeOwned,
{
    pub fn new() -> UserImplRegistryBuilder<'a, M, R, P, C> {
        Default::default()
    }

    pub fn mapper(&mut self, mapper: &'a M) -> &mut UserImplRegistryBuilder<'a, M, R, P, C> {
        self.mapper = Some(mapper);
        self
    }

    pub fn reducer(&mut self, reducer: &'a R) -> &mut UserImplRegistryBuilder<'a, M, R, P, C> {
        self.reducer = Some(reducer);
        self
    }

    pub fn partitioner(
        &mut self,
        partitioner: &'a P,
    ) -> &mut UserImplRegistryBuilder<'a, M, R, P, C> {
        self.partitioner = Some(partitioner);
        self
    }

    pub fn combiner(&mut self, combiner: &'a C) -> &mut UserImplRegistryBuilder<'a, M, R, P, C> {
        self.combiner = Some(combiner);
        self
    }

    pub fn build(&self) -> Result<UserImplRegistry<'a, M, R, P, C>> {
        let mapper = self.mapper
            .chain_err(|| "Error building UserImplRegistry: No Mapper provided")?;
        let reducer = self.reducer
            .chain_err(|| "Error building UserImplRegistry: No Reducer provided")?;
        let partitioner = self.partitioner
            .chain_err(|| "Error building UserImplRegistry: No Partitioner provided")?;

        Ok(UserImplRegistry {
            mapper,
            reducer,
            partitioner,
            combiner: self.combiner,
        })
    }
}

/// Construct a `UserImplRegistryBuilder` that does not need a `Combine` implementation.
impl<'a, M, R, P> UserImplRegistryBuilder<'a, M, R, P, NullCombiner>
where
    M: Map + 'a,
    R: Reduce<Value = M::Value> + 'a,
    P: Partition<M::Key, M::Value> + 'a,
    M::Value: Default + ::serde::Serialize + ::serde::de::DeserializeOwned,
{
    pub fn new_no_combiner() -> UserImplRegistryBuilder<'a, M, R, P, NullCombiner> {
        Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anagram::{AlphabetPartitioner, AnagramCombiner, AnagramMapper, AnagramReducer};

    #[test]
    fn build_with_combiner() {
        let mapper = AnagramMapper;
        let reducer = AnagramReducer::default();
        let partitioner = AlphabetPartitioner::new(4);
        let combiner = AnagramCombiner;

        let registry = UserImplRegistryBuilder::new()
            .mapper(&mapper)
            .reducer(&reducer)
            .partitioner(&partitioner)
            .combiner(&combiner)
            .build()
            .unwrap();

        assert!(registry.combiner.is_some());
    }

    #[test]
    fn build_without_combiner() {
        let mapper = AnagramMapper;
        let reducer = AnagramReducer::default();
        let partitioner = AlphabetPartitioner::new(4);

        let registry = UserImplRegistryBuilder::new_no_combiner()
            .mapper(&mapper)
            .reducer(&reducer)
            .partitioner(&partitioner)
            .build()
            .unwrap();

        assert!(registry.combiner.is_none());
    }

    #[test]
    fn build_without_mapper_fails() {
        let reducer = AnagramReducer::default();
        let partitioner = AlphabetPartitioner::new(4);

        let mut builder =
            UserImplRegistryBuilder::<AnagramMapper, _, _, NullCombiner>::new_no_combiner();
        let result = builder.reducer(&reducer).partitioner(&partitioner).build();

        assert!(result.is_err());
    }
}
