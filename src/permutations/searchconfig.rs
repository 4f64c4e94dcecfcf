use typed_builder::TypedBuilder;

/// Limits for exhaustive permutation generation.
///
/// An n-letter input yields n!/∏(dup!) distinct permutations, so unguarded
/// exhaustive runs on long inputs exhaust memory long before they finish.
/// `max_letters` rejects such inputs up front.
#[derive(TypedBuilder, Clone, Debug)]
pub struct SearchConfig {
    #[builder(default = 10)]
    pub max_letters: usize,
}

impl Default for SearchConfig {
    fn default() -> SearchConfig {
        SearchConfig::builder().build()
    }
}
