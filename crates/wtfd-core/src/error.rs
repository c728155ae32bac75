/// A configured module root that could not be located on the search path.
///
/// Never fatal: the engine logs it, records it in the report and moves on.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("could not resolve module root `{name}`")]
pub struct ModuleResolutionFailure {
    pub name: String,
}

impl ModuleResolutionFailure {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
