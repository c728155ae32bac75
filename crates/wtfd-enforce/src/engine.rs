use std::path::PathBuf;

use wtfd_core::config::{ParseErrorPolicy, ScanConfiguration};
use wtfd_core::error::ModuleResolutionFailure;
use wtfd_core::types::SkippedFile;
use wtfd_parsers::python::DeclarationExtractor;
use wtfd_parsers::resolver::ModuleResolver;
use wtfd_parsers::treesitter::ParseError;
use wtfd_parsers::walker::{FileWalker, WalkError};

use crate::audit::audit;
use crate::report::{ReportAggregator, RunReport};

/// Fatal errors of a scan. Everything else is recovered and recorded in the
/// [`RunReport`].
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error(transparent)]
    Walk(#[from] WalkError),
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: ParseError,
    },
}

/// Output of the discovery phase.
#[derive(Debug, Default)]
pub struct Collected {
    /// Candidate files in traversal order. Overlapping roots yield duplicates.
    pub files: Vec<PathBuf>,
    pub unresolved: Vec<ModuleResolutionFailure>,
}

/// Runs the collect → extract → audit → report pipeline, one file at a time.
pub struct ScanEngine {
    config: ScanConfiguration,
    resolver: Box<dyn ModuleResolver>,
    verbose: bool,
}

impl ScanEngine {
    pub fn new(config: ScanConfiguration, resolver: Box<dyn ModuleResolver>) -> Self {
        Self {
            config,
            resolver,
            verbose: false,
        }
    }

    /// Log per-file progress to stderr.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn config(&self) -> &ScanConfiguration {
        &self.config
    }

    /// Discover candidate files.
    ///
    /// Without module roots the project root is walked. Otherwise each root
    /// is resolved in order; roots that cannot be resolved are reported and
    /// skipped.
    pub fn collect(&self) -> Result<Collected, ScanError> {
        let mut collected = Collected::default();

        if self.config.module_roots().is_empty() {
            collected.files = self.walker_for(self.config.project_root().to_path_buf()).walk()?;
            return Ok(collected);
        }

        for name in self.config.module_roots() {
            match self.resolver.resolve(name) {
                Some(dir) => {
                    if self.verbose {
                        eprintln!("wtfd: module root `{}` -> {}", name, dir.display());
                    }
                    collected.files.extend(self.walker_for(dir).walk()?);
                }
                None => {
                    let failure = ModuleResolutionFailure::new(name.as_str());
                    eprintln!("wtfd: warning: {}, skipping", failure);
                    collected.unresolved.push(failure);
                }
            }
        }
        Ok(collected)
    }

    /// Scan every candidate file and fold the results into a [`RunReport`].
    pub fn run(&self) -> Result<RunReport, ScanError> {
        let collected = self.collect()?;
        let mut aggregator = ReportAggregator::new();
        for failure in collected.unresolved {
            aggregator.record_unresolved(failure);
        }

        let mut extractor = DeclarationExtractor::new();
        for path in &collected.files {
            let file = path.to_string_lossy().to_string();
            if self.verbose {
                eprintln!("wtfd: scanning {}", file);
            }

            let contents = std::fs::read(path).map_err(|source| ScanError::Read {
                path: file.clone(),
                source,
            })?;

            let declarations = match extractor.extract_bytes(&contents) {
                Ok(d) => d,
                Err(source) => match self.config.parse_errors() {
                    ParseErrorPolicy::Fail => {
                        return Err(ScanError::Parse { path: file, source });
                    }
                    ParseErrorPolicy::Warn => {
                        eprintln!("wtfd: warning: skipping {}: {}", file, source);
                        aggregator.record_skipped(SkippedFile {
                            file,
                            reason: source.to_string(),
                        });
                        continue;
                    }
                },
            };

            aggregator.record_file(audit(&file, &declarations, self.config.excluded_names()));
        }

        if self.verbose {
            eprintln!(
                "wtfd: {} file(s) scanned, {} violation(s)",
                collected.files.len(),
                aggregator.violation_count()
            );
        }

        Ok(aggregator.finish(self.config.strict_mode()))
    }

    fn walker_for(&self, root: PathBuf) -> FileWalker {
        FileWalker::new(&root)
            .skip_dunder_files(self.config.skip_dunder_files())
            .ignore_patterns(self.config.ignore_patterns())
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
