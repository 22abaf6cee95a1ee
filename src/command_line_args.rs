// Copyright 2018 Chris Pearce
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fmt;
use std::io;
use std::process;

use argparse::{ArgumentParser, Store, StoreTrue};

pub const DEFAULT_MIN_SUPPORT: f64 = 0.55;
pub const DEFAULT_MIN_CONFIDENCE: f64 = 0.9;
pub const DEFAULT_MAX_RULES: i64 = 10;

pub struct Arguments {
    pub input_file_path: String,
    pub output_file_path: String,
    pub min_support: f64,
    pub min_confidence: f64,
    pub max_rules: i64,
    pub list_itemsets: bool,
    pub runtime_sweep: bool,
    pub verbose: bool,
}

/// An out-of-range option value that was replaced by its default.
#[derive(Debug, PartialEq)]
pub struct ConfigFallback {
    pub option: &'static str,
    pub rejected: String,
    pub default: String,
}

impl fmt::Display for ConfigFallback {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Invalid {} {}. Using default of {}",
            self.option, self.rejected, self.default
        )
    }
}

impl Default for Arguments {
    fn default() -> Arguments {
        Arguments {
            input_file_path: String::from("vote.arff"),
            output_file_path: String::from("result.txt"),
            min_support: DEFAULT_MIN_SUPPORT,
            min_confidence: DEFAULT_MIN_CONFIDENCE,
            max_rules: DEFAULT_MAX_RULES,
            list_itemsets: false,
            runtime_sweep: false,
            verbose: false,
        }
    }
}

fn in_unit_range(x: f64) -> bool {
    x >= 0.0 && x <= 1.0
}

impl Arguments {
    // Out-of-range settings don't stop the run; each is reset to its
    // default and reported back to the caller.
    pub fn sanitize(&mut self) -> Vec<ConfigFallback> {
        let mut fallbacks = vec![];
        if !in_unit_range(self.min_support) {
            fallbacks.push(ConfigFallback {
                option: "--min-support",
                rejected: self.min_support.to_string(),
                default: DEFAULT_MIN_SUPPORT.to_string(),
            });
            self.min_support = DEFAULT_MIN_SUPPORT;
        }
        if !in_unit_range(self.min_confidence) {
            fallbacks.push(ConfigFallback {
                option: "--min-confidence",
                rejected: self.min_confidence.to_string(),
                default: DEFAULT_MIN_CONFIDENCE.to_string(),
            });
            self.min_confidence = DEFAULT_MIN_CONFIDENCE;
        }
        if self.max_rules < 0 {
            fallbacks.push(ConfigFallback {
                option: "--max-rules",
                rejected: self.max_rules.to_string(),
                default: DEFAULT_MAX_RULES.to_string(),
            });
            self.max_rules = DEFAULT_MAX_RULES;
        }
        fallbacks
    }

    pub fn max_rules_reported(&self) -> usize {
        if self.max_rules < 0 {
            DEFAULT_MAX_RULES as usize
        } else {
            self.max_rules as usize
        }
    }
}

// Parses argv (program name first). On a usage error the parser has
// already printed to stderr; the Err holds the exit code.
pub fn parse_args(argv: Vec<String>) -> Result<Arguments, i32> {
    let mut args = Arguments::default();

    {
        let mut parser = ArgumentParser::new();
        parser.set_description("Apriori frequent itemset and association rule miner.");

        parser
            .refer(&mut args.input_file_path)
            .add_option(
                &["--input"],
                Store,
                "Input dataset in ARFF format (.arff) or CSV with a header row.",
            )
            .metavar("file_path");

        parser
            .refer(&mut args.output_file_path)
            .add_option(
                &["--output"],
                Store,
                "File the report is appended to. \
                 Rule format: premise count ==> implication count <conf:(x)> <sup:(y)>.",
            )
            .metavar("file_path");

        parser
            .refer(&mut args.min_support)
            .add_option(
                &["--min-support"],
                Store,
                "Minimum itemset support threshold, in range [0,1]. Default 0.55.",
            )
            .metavar("threshold");

        parser
            .refer(&mut args.min_confidence)
            .add_option(
                &["--min-confidence"],
                Store,
                "Minimum rule confidence threshold, in range [0,1]. Default 0.9.",
            )
            .metavar("threshold");

        parser
            .refer(&mut args.max_rules)
            .add_option(
                &["--max-rules"],
                Store,
                "Number of best rules written to the report. Default 10.",
            )
            .metavar("count");

        parser.refer(&mut args.list_itemsets).add_option(
            &["--list-itemsets"],
            StoreTrue,
            "Also write every frequent itemset with its count.",
        );

        parser.refer(&mut args.runtime_sweep).add_option(
            &["--runtime-sweep"],
            StoreTrue,
            "Time mining and rule generation at supports 0.1 to 1.0.",
        );

        parser
            .refer(&mut args.verbose)
            .add_option(&["-v", "--verbose"], StoreTrue, "Debug logging.");

        parser.parse(argv, &mut io::stdout(), &mut io::stderr())?;
    }

    Ok(args)
}

pub fn parse_args_or_exit() -> Arguments {
    match parse_args(std::env::args().collect()) {
        Ok(args) => args,
        Err(code) => process::exit(code),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(args: &[&str]) -> Vec<String> {
        let mut v = vec![String::from("apriori")];
        v.extend(args.iter().map(|s| s.to_string()));
        v
    }

    #[test]
    fn test_defaults() {
        let mut args = parse_args(argv(&[])).unwrap();
        assert_eq!(args.input_file_path, "vote.arff");
        assert_eq!(args.output_file_path, "result.txt");
        assert_eq!(args.min_support, 0.55);
        assert_eq!(args.min_confidence, 0.9);
        assert_eq!(args.max_rules_reported(), 10);
        assert!(!args.list_itemsets && !args.runtime_sweep && !args.verbose);
        assert!(args.sanitize().is_empty());
    }

    #[test]
    fn test_options() {
        let args = parse_args(argv(&[
            "--input",
            "weather.csv",
            "--min-support",
            "0.2",
            "--min-confidence",
            "1",
            "--max-rules",
            "3",
            "--runtime-sweep",
        ]))
        .unwrap();
        assert_eq!(args.input_file_path, "weather.csv");
        assert_eq!(args.min_support, 0.2);
        assert_eq!(args.min_confidence, 1.0);
        assert_eq!(args.max_rules_reported(), 3);
        assert!(args.runtime_sweep);
    }

    #[test]
    fn test_out_of_range_falls_back() {
        let mut args = parse_args(argv(&[
            "--min-support",
            "1.5",
            "--min-confidence=-0.1",
            "--max-rules=-4",
        ]))
        .unwrap();
        let fallbacks = args.sanitize();
        assert_eq!(fallbacks.len(), 3);
        assert_eq!(fallbacks[0].option, "--min-support");
        assert_eq!(fallbacks[0].rejected, "1.5");
        assert_eq!(
            fallbacks[0].to_string(),
            "Invalid --min-support 1.5. Using default of 0.55"
        );
        assert_eq!(args.min_support, 0.55);
        assert_eq!(args.min_confidence, 0.9);
        assert_eq!(args.max_rules, 10);

        let mut args = Arguments::default();
        args.min_support = std::f64::NAN;
        assert_eq!(args.sanitize().len(), 1);
        assert_eq!(args.min_support, 0.55);
    }

    #[test]
    fn test_unparseable_is_usage_error() {
        assert!(parse_args(argv(&["--min-support", "lots"])).is_err());
    }
}
