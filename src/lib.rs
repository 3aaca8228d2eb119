//! Composable ordering of sentences and other text units
//!
//! Strings are ordered by a chain of [`SortStrategy`] values held in a
//! [`CompositeSorter`]. The first strategy that tells two items apart
//! decides their order; ties fall through to the next strategy, and items
//! that tie on every strategy keep their input order.
//!
//! ```
//! use text_sorter::{AlphabeticStrategy, CompositeSorter, StandardMode};
//!
//! let sorter = CompositeSorter::new()
//!     .add_strategy(AlphabeticStrategy::new(StandardMode::CaseInsensitive))
//!     .add_strategy(AlphabeticStrategy::new(StandardMode::CaseSensitive));
//!
//! let words = vec!["banana".to_string(), "Apple".to_string(), "apple".to_string()];
//! assert_eq!(sorter.sort(&words), ["Apple", "apple", "banana"]);
//! ```

#![warn(clippy::all)]

pub mod composite;
pub mod config;
pub mod error;
pub mod mode;
pub mod output;
pub mod source;
pub mod strategy;

// Re-export commonly used types
pub use composite::CompositeSorter;
pub use config::{SorterConfig, StrategySpec};
pub use error::{SortError, SortResult};
pub use mode::{
    CaseInsensitive, CasePriority, CaseSensitive, LettersOnly, StandardMode, StringCompareMode,
};
pub use source::{Segmenter, SegmentMode};
pub use strategy::{from_fn, AlphabeticStrategy, SortStrategy};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;
pub const SORT_FAILURE: i32 = 2;

/// Configured inputs, with `-` (stdin) when none are given
pub fn input_names(config: &SorterConfig) -> Vec<String> {
    if config.input_files.is_empty() {
        vec!["-".to_string()]
    } else {
        config.input_files.clone()
    }
}

/// Load one input and split it into units
pub fn load_units(config: &SorterConfig, input: &str) -> SortResult<Vec<String>> {
    let text = source::load_input(input)?;
    let text = if config.strip_dividers {
        source::strip_dividers(&text)
    } else {
        text
    };

    let units = config.segment_mode.segmenter().segment(&text);
    log::debug!(
        "{}: {} units ({} split)",
        input,
        units.len(),
        config.segment_mode
    );
    Ok(units)
}

/// Gather units from every configured input, in input order
pub fn collect_units(config: &SorterConfig) -> SortResult<Vec<String>> {
    let mut units = Vec::new();
    for input in input_names(config) {
        units.extend(load_units(config, &input)?);
    }
    Ok(units)
}

/// Verify each input is already ordered on its own
fn check_inputs(config: &SorterConfig, sorter: &CompositeSorter<String>) -> SortResult<i32> {
    for input in input_names(config) {
        let units = load_units(config, &input)?;
        if let Some(position) = sorter.first_disorder(&units) {
            return Err(SortError::not_sorted(&input, position));
        }
    }
    Ok(EXIT_SUCCESS)
}

/// Load, order and write according to `config`
pub fn run(config: &SorterConfig) -> SortResult<i32> {
    config.validate()?;

    let strategies = config.effective_strategies();
    log::debug!(
        "strategy chain: {}",
        strategies
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    );

    let sorter = config.build_sorter();
    if config.check {
        return check_inputs(config, &sorter);
    }

    let units = collect_units(config)?;
    let sorted = sorter.par_sort(&units);
    output::write_units(&sorted, config.output_path())?;
    log::info!("wrote {} units", sorted.len());

    Ok(EXIT_SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SorterConfigBuilder;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_run_sorts_file() -> SortResult<()> {
        let temp_dir = TempDir::new()?;
        let input_file = temp_dir.path().join("input.txt");
        let output_file = temp_dir.path().join("output.txt");

        fs::write(
            &input_file,
            "Banana split.\n----------\n'apple' pie.\nApple tart.\n\nbanana bread.\n",
        )?;

        let config = SorterConfigBuilder::new()
            .input_file(input_file.to_string_lossy().to_string())
            .output_file(output_file.to_string_lossy().to_string())
            .build()?;
        assert_eq!(run(&config)?, EXIT_SUCCESS);

        let output_content = fs::read_to_string(&output_file)?;
        assert_eq!(
            output_content,
            "'apple' pie.\nApple tart.\nbanana bread.\nBanana split.\n"
        );
        Ok(())
    }

    #[test]
    fn test_run_with_chain_and_paragraphs() -> SortResult<()> {
        let temp_dir = TempDir::new()?;
        let first = temp_dir.path().join("first.txt");
        let second = temp_dir.path().join("second.txt");
        let output_file = temp_dir.path().join("output.txt");

        fs::write(&first, "cherry\nsoda\n\nApple\n")?;
        fs::write(&second, "apple\n")?;

        let config = SorterConfigBuilder::new()
            .strategy(StrategySpec::parse("i:r")?)
            .strategy(StrategySpec::parse("s")?)
            .segment_mode(SegmentMode::Paragraph)
            .input_file(first.to_string_lossy().to_string())
            .input_file(second.to_string_lossy().to_string())
            .output_file(output_file.to_string_lossy().to_string())
            .build()?;
        run(&config)?;

        assert_eq!(
            fs::read_to_string(&output_file)?,
            "cherry soda\nApple\napple\n"
        );
        Ok(())
    }

    #[test]
    fn test_run_check_mode() -> SortResult<()> {
        let temp_dir = TempDir::new()?;
        let sorted = temp_dir.path().join("sorted.txt");
        let unsorted = temp_dir.path().join("unsorted.txt");
        fs::write(&sorted, "apple\nApple\nbanana\n")?;
        fs::write(&unsorted, "apple\nbanana\nApple\n")?;

        let config = SorterConfigBuilder::new()
            .input_file(sorted.to_string_lossy().to_string())
            .check()
            .build()?;
        assert_eq!(run(&config)?, EXIT_SUCCESS);

        let unsorted_name = unsorted.to_string_lossy().to_string();
        let config = SorterConfigBuilder::new()
            .input_file(unsorted_name.clone())
            .check()
            .build()?;
        let err = run(&config).expect_err("unsorted input must fail the check");
        assert!(matches!(err, SortError::NotSorted { position: 3, .. }));
        assert_eq!(err.to_string(), format!("{unsorted_name}:3: disorder"));
        assert_eq!(err.exit_code(), EXIT_FAILURE);
        Ok(())
    }

    #[test]
    fn test_run_check_mode_reports_position_per_file() -> SortResult<()> {
        let temp_dir = TempDir::new()?;
        let first = temp_dir.path().join("first.txt");
        let second = temp_dir.path().join("second.txt");
        // Each file is ordered on its own even though the concatenation is not.
        fs::write(&first, "banana\ncherry\ndate\n")?;
        fs::write(&second, "apple\n\nbanana\nApple\n")?;

        let first_name = first.to_string_lossy().to_string();
        let second_name = second.to_string_lossy().to_string();
        let config = SorterConfigBuilder::new()
            .input_file(first_name.clone())
            .check()
            .build()?;
        assert_eq!(run(&config)?, EXIT_SUCCESS);

        let config = SorterConfigBuilder::new()
            .input_file(first_name)
            .input_file(second_name.clone())
            .check()
            .build()?;
        match run(&config) {
            Err(SortError::NotSorted { file, position }) => {
                assert_eq!(file, second_name);
                assert_eq!(position, 3);
            }
            other => panic!("unexpected result: {other:?}"),
        }
        Ok(())
    }

    #[test]
    fn test_run_missing_input_aborts() -> SortResult<()> {
        let temp_dir = TempDir::new()?;
        let output_file = temp_dir.path().join("output.txt");
        let config = SorterConfigBuilder::new()
            .input_file(temp_dir.path().join("absent.txt").to_string_lossy().to_string())
            .output_file(output_file.to_string_lossy().to_string())
            .build()?;

        let err = run(&config).expect_err("missing input must fail");
        assert!(matches!(err, SortError::FileNotFound { .. }));
        assert_eq!(err.exit_code(), SORT_FAILURE);
        assert!(!output_file.exists());
        Ok(())
    }
}
