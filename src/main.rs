mod apriori;
mod command_line_args;
mod dataset;
mod encoder;
mod error;
mod generate_rules;
mod item;
mod itemset;
mod rank;
mod report;
mod rule;
mod runtime;
mod support_table;
mod transaction;
mod vec_sets;

use apriori::mine;
use command_line_args::parse_args_or_exit;
use command_line_args::Arguments;
use dataset::Dataset;
use encoder::Encoder;
use error::Result;
use generate_rules::generate_rules;
use item::Item;
use rank::rank_rules;
use report::RunSummary;
use runtime::runtime_sweep;

use log::{error, info, warn, LevelFilter};
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::process;
use std::time::Instant;

fn configure_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn mine_apriori(args: &Arguments) -> Result<()> {
    let start = Instant::now();

    info!("Loading data set: {}", args.input_file_path);
    let timer = Instant::now();
    let dataset = Dataset::open(Path::new(&args.input_file_path))?;
    if let Some(relation) = &dataset.relation {
        info!("Relation: {}", relation);
    }
    let mut encoder = Encoder::new();
    let transactions = encoder.encode_dataset(&dataset);
    info!(
        "Encoded {} instances of {} attributes into {} items in {:.3} seconds.",
        transactions.len(),
        dataset.num_attributes(),
        encoder.num_items(),
        timer.elapsed().as_secs_f64()
    );

    info!("Mining frequent itemsets at support {}...", args.min_support);
    let timer = Instant::now();
    let mined = mine(encoder.items(), &transactions, args.min_support);
    info!(
        "Apriori found {} frequent itemsets over {} levels ({} counted) in {:.3} seconds.",
        mined.num_frequent(),
        mined.levels.len(),
        mined.table.len(),
        timer.elapsed().as_secs_f64()
    );

    info!("Generating rules at confidence {}...", args.min_confidence);
    let timer = Instant::now();
    let mut rules = generate_rules(&mined, &transactions, args.min_confidence);
    rank_rules(&mut rules);
    info!(
        "Generated {} rules in {:.3} seconds.",
        rules.len(),
        timer.elapsed().as_secs_f64()
    );

    {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&args.output_file_path)?;
        let mut output = BufWriter::new(file);
        let summary = RunSummary {
            input_file_path: &args.input_file_path,
            num_instances: dataset.num_instances(),
            num_attributes: dataset.num_attributes(),
            min_support: args.min_support,
            min_confidence: args.min_confidence,
        };
        report::write_header(&mut output, &summary)?;
        report::write_levels(&mut output, &mined.levels)?;
        if args.list_itemsets {
            report::write_itemsets(&mut output, &mined.levels, &mined.table, &encoder)?;
        }
        report::write_rules(&mut output, &rules, &encoder, args.max_rules_reported())?;

        if args.runtime_sweep {
            info!("Running runtime sweep over supports 0.1 to 1.0...");
            let items: Vec<Item> = encoder.items().collect();
            let points = runtime_sweep(&items, &transactions, args.min_confidence);
            writeln!(output)?;
            writeln!(
                output,
                "End of main program. Now testing runtime with different supports, 0.1 to 1.0"
            )?;
            report::write_sweep(&mut output, &points)?;
        }
        output.flush()?;
    }

    info!("Report appended to {}", args.output_file_path);
    info!("Total runtime: {:.3} seconds", start.elapsed().as_secs_f64());

    Ok(())
}

fn main() {
    let mut arguments = parse_args_or_exit();
    configure_logging(arguments.verbose);

    for fallback in arguments.sanitize() {
        warn!("{}", fallback);
    }

    if let Err(err) = mine_apriori(&arguments) {
        error!("{}", err);
        if err.is_data_unavailable() {
            error!("Error gathering data from given file. Exiting.");
        }
        process::exit(1);
    }
}
