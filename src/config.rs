//! Configuration management for text sorting

use crate::composite::CompositeSorter;
use crate::error::{SortError, SortResult};
use crate::mode::StandardMode;
use crate::source::SegmentMode;
use crate::strategy::AlphabeticStrategy;
use std::path::Path;
use std::str::FromStr;

/// Upper bound on chained strategies
pub const MAX_STRATEGIES: usize = 64;

/// One link of the strategy chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrategySpec {
    pub mode: StandardMode,
    pub reverse: bool,
    pub ignore_quotes: bool,
}

impl StrategySpec {
    pub fn new(mode: StandardMode) -> Self {
        Self {
            mode,
            reverse: false,
            ignore_quotes: true,
        }
    }

    pub fn with_reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }

    pub fn with_ignore_quotes(mut self, ignore_quotes: bool) -> Self {
        self.ignore_quotes = ignore_quotes;
        self
    }

    /// Parse a spec like `case-priority`, `i:r` or `p:uq`.
    ///
    /// Option letters after the colon: `r` reverse, `q` keep quotes,
    /// `u` uppercase first and `l` lowercase first (case priority only).
    pub fn parse(spec: &str) -> SortResult<Self> {
        let (mode_str, opts) = match spec.split_once(':') {
            Some((mode, opts)) => (mode, opts),
            None => (spec, ""),
        };

        let mode_str = mode_str.trim();
        if mode_str.is_empty() {
            return Err(SortError::invalid_strategy_spec(spec));
        }

        let mut mode: StandardMode = mode_str
            .parse()
            .map_err(|_| SortError::invalid_strategy_spec(spec))?;
        let mut parsed = Self::new(mode);

        for ch in opts.trim().chars() {
            match ch {
                'r' => parsed.reverse = true,
                'q' => parsed.ignore_quotes = false,
                'u' | 'l' => {
                    if !mode.is_case_priority() {
                        return Err(SortError::invalid_strategy_spec(&format!(
                            "{spec} (option '{ch}' needs case-priority)"
                        )));
                    }
                    mode = StandardMode::CasePriority {
                        lowercase_first: ch == 'l',
                    };
                    parsed.mode = mode;
                }
                _ => {
                    return Err(SortError::invalid_strategy_spec(&format!(
                        "{spec} (unknown option '{ch}')"
                    )));
                }
            }
        }

        Ok(parsed)
    }

    pub fn into_strategy(self) -> AlphabeticStrategy {
        AlphabeticStrategy::new(self.mode)
            .with_reverse(self.reverse)
            .with_ignore_quotes(self.ignore_quotes)
    }
}

impl Default for StrategySpec {
    fn default() -> Self {
        Self::new(StandardMode::default())
    }
}

impl FromStr for StrategySpec {
    type Err = SortError;

    fn from_str(s: &str) -> SortResult<Self> {
        Self::parse(s)
    }
}

impl std::fmt::Display for StrategySpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut opts = String::new();
        if self.reverse {
            opts.push('r');
        }
        if !self.ignore_quotes {
            opts.push('q');
        }
        if let StandardMode::CasePriority {
            lowercase_first: false,
        } = self.mode
        {
            opts.push('u');
        }

        if opts.is_empty() {
            write!(f, "{}", self.mode)
        } else {
            write!(f, "{}:{}", self.mode, opts)
        }
    }
}

/// Main configuration structure for a sorting run
#[derive(Debug, Clone)]
pub struct SorterConfig {
    /// Strategy chain in priority order
    pub strategies: Vec<StrategySpec>,
    /// Files to read from (if not specified, use stdin)
    pub input_files: Vec<String>,
    /// Output file path
    pub output_file: Option<String>,
    /// How input text is split into units
    pub segment_mode: SegmentMode,
    /// Check if input is already sorted
    pub check: bool,
    /// Remove dash divider lines before splitting
    pub strip_dividers: bool,
    /// Verbose diagnostics
    pub debug: bool,
}

impl Default for SorterConfig {
    fn default() -> Self {
        Self {
            strategies: Vec::new(),
            input_files: Vec::new(),
            output_file: None,
            segment_mode: SegmentMode::default(),
            check: false,
            strip_dividers: true,
            debug: false,
        }
    }
}

impl SorterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a strategy to the chain
    pub fn add_strategy(mut self, spec: StrategySpec) -> Self {
        self.strategies.push(spec);
        self
    }

    pub fn with_input_files(mut self, files: Vec<String>) -> Self {
        self.input_files = files;
        self
    }

    pub fn with_output_file(mut self, output_file: Option<String>) -> Self {
        self.output_file = output_file;
        self
    }

    pub fn with_segment_mode(mut self, segment_mode: SegmentMode) -> Self {
        self.segment_mode = segment_mode;
        self
    }

    pub fn with_check(mut self, check: bool) -> Self {
        self.check = check;
        self
    }

    pub fn with_strip_dividers(mut self, strip_dividers: bool) -> Self {
        self.strip_dividers = strip_dividers;
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Validate configuration for consistency
    pub fn validate(&self) -> SortResult<()> {
        if self.check && self.output_file.is_some() {
            return Err(SortError::conflicting_options(
                "--check produces no output, cannot use --output",
            ));
        }

        if self.strategies.len() > MAX_STRATEGIES {
            return Err(SortError::conflicting_options(&format!(
                "too many strategies (maximum {MAX_STRATEGIES})"
            )));
        }

        Ok(())
    }

    /// Configured strategies, or the case-priority default when none are set
    pub fn effective_strategies(&self) -> Vec<StrategySpec> {
        if self.strategies.is_empty() {
            vec![StrategySpec::default()]
        } else {
            self.strategies.clone()
        }
    }

    pub fn build_sorter(&self) -> CompositeSorter<String> {
        let mut sorter = CompositeSorter::new();
        for spec in self.effective_strategies() {
            sorter.push_strategy(spec.into_strategy());
        }
        sorter
    }

    pub fn reading_from_stdin(&self) -> bool {
        self.input_files.is_empty() || (self.input_files.len() == 1 && self.input_files[0] == "-")
    }

    pub fn writing_to_stdout(&self) -> bool {
        self.output_file.is_none()
    }

    pub fn output_path(&self) -> Option<&Path> {
        self.output_file.as_deref().map(Path::new)
    }
}

/// Builder pattern for creating configurations
pub struct SorterConfigBuilder {
    config: SorterConfig,
}

impl SorterConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: SorterConfig::default(),
        }
    }

    pub fn strategy(mut self, spec: StrategySpec) -> Self {
        self.config.strategies.push(spec);
        self
    }

    pub fn input_file(mut self, file: String) -> Self {
        self.config.input_files.push(file);
        self
    }

    pub fn output_file(mut self, file: String) -> Self {
        self.config.output_file = Some(file);
        self
    }

    pub fn segment_mode(mut self, mode: SegmentMode) -> Self {
        self.config.segment_mode = mode;
        self
    }

    pub fn check(mut self) -> Self {
        self.config.check = true;
        self
    }

    pub fn keep_dividers(mut self) -> Self {
        self.config.strip_dividers = false;
        self
    }

    pub fn debug(mut self) -> Self {
        self.config.debug = true;
        self
    }

    /// Build the final configuration
    pub fn build(self) -> SortResult<SorterConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

impl Default for SorterConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Preset configurations for common orderings
pub mod presets {
    use super::*;

    pub fn case_sensitive() -> SorterConfig {
        SorterConfig::new().add_strategy(StrategySpec::new(StandardMode::CaseSensitive))
    }

    pub fn case_insensitive() -> SorterConfig {
        SorterConfig::new().add_strategy(StrategySpec::new(StandardMode::CaseInsensitive))
    }

    /// Case variants grouped, lowercase first
    pub fn case_priority() -> SorterConfig {
        SorterConfig::new().add_strategy(StrategySpec::new(StandardMode::CASE_PRIORITY))
    }

    pub fn letters_only() -> SorterConfig {
        SorterConfig::new().add_strategy(StrategySpec::new(StandardMode::LettersOnly))
    }

    /// Letters first, then case-insensitive, then raw code points
    pub fn dictionary() -> SorterConfig {
        SorterConfig::new()
            .add_strategy(StrategySpec::new(StandardMode::LettersOnly))
            .add_strategy(StrategySpec::new(StandardMode::CaseInsensitive))
            .add_strategy(StrategySpec::new(StandardMode::CaseSensitive))
    }
}
