use crate::core::library::LibraryResult;

/// Converts persistence entities into transfer objects.
pub trait Mapper<Source, Target>: Sync + Send {
    fn map(&self, source: &Source) -> LibraryResult<Target>;

    fn map_all(&self, sources: &[Source]) -> LibraryResult<Vec<Target>> {
        sources.iter().map(|source| self.map(source)).collect()
    }
}
