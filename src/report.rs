use crate::apriori::Level;
use crate::encoder::Encoder;
use crate::item::Item;
use crate::rule::Rule;
use crate::runtime::SweepPoint;
use crate::support_table::SupportTable;
use std::io::{self, Write};

pub struct RunSummary<'a> {
    pub input_file_path: &'a str,
    pub num_instances: usize,
    pub num_attributes: usize,
    pub min_support: f64,
    pub min_confidence: f64,
}

pub fn write_header<W: Write>(out: &mut W, summary: &RunSummary) -> io::Result<()> {
    let min_instances = (summary.min_support * summary.num_instances as f64) as usize;
    writeln!(out)?;
    writeln!(out, "=======")?;
    writeln!(out, "Apriori")?;
    writeln!(out, "=======")?;
    writeln!(out)?;
    writeln!(out, "Input file: {}", summary.input_file_path)?;
    writeln!(out, "Number of Instances: {}", summary.num_instances)?;
    writeln!(out, "Number of Attributes: {}", summary.num_attributes)?;
    writeln!(
        out,
        "Minimum support: {} ({} instances)",
        summary.min_support, min_instances
    )?;
    writeln!(out, "Minimum metric <confidence>: {}", summary.min_confidence)?;
    writeln!(out, "Generated sets of large itemsets:")?;
    Ok(())
}

pub fn write_levels<W: Write>(out: &mut W, levels: &[Level]) -> io::Result<()> {
    for level in levels {
        writeln!(out)?;
        writeln!(
            out,
            "Size of set of large itemsets L({}): {}",
            level.k,
            level.frequent.len()
        )?;
    }
    Ok(())
}

pub fn write_itemsets<W: Write>(
    out: &mut W,
    levels: &[Level],
    table: &SupportTable,
    encoder: &Encoder,
) -> io::Result<()> {
    for level in levels {
        writeln!(out)?;
        writeln!(out, "Large Itemsets L({}):", level.k)?;
        for itemset in &level.frequent {
            writeln!(
                out,
                " {} {}",
                Item::item_vec_to_string(itemset.items(), encoder),
                table.get(itemset).unwrap_or(0)
            )?;
        }
    }
    Ok(())
}

// Rules must already be ranked; only the first max_rules are written.
pub fn write_rules<W: Write>(
    out: &mut W,
    rules: &[Rule],
    encoder: &Encoder,
    max_rules: usize,
) -> io::Result<()> {
    writeln!(out)?;
    if rules.is_empty() {
        writeln!(out, "No rules found!")?;
        return Ok(());
    }
    writeln!(out, "There were {} rules found.", rules.len())?;
    writeln!(out, "Best rules found:")?;
    writeln!(out)?;
    for (index, rule) in rules.iter().take(max_rules).enumerate() {
        writeln!(out, "\t{}. {}", index + 1, rule.to_string(encoder))?;
    }
    Ok(())
}

pub fn write_sweep<W: Write>(out: &mut W, points: &[SweepPoint]) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "==================")?;
    writeln!(out, "RUNTIME RESULTS")?;
    writeln!(out, "==================")?;
    for point in points {
        writeln!(out)?;
        writeln!(out, "Minimum support: {:.1}", point.min_support)?;
        writeln!(out, "\t Apriori Algorithm: {:.6} seconds", point.mining_seconds)?;
        writeln!(out, "\t Rule Generation: {:.6} seconds", point.rule_seconds)?;
        writeln!(
            out,
            "\t Frequent itemsets: {}, rules: {}",
            point.num_itemsets, point.num_rules
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apriori::mine;
    use crate::encoder::fixtures::transactions_of;
    use crate::generate_rules::generate_rules;
    use crate::rank::rank_rules;

    fn scenario_report(max_rules: usize) -> String {
        let (encoder, transactions) =
            transactions_of(&[&["A", "B"], &["A", "B", "C"], &["A"], &["B", "C"]]);
        let mined = mine(encoder.items(), &transactions, 0.5);
        let mut rules = generate_rules(&mined, &transactions, 0.6);
        rank_rules(&mut rules);

        let mut out: Vec<u8> = vec![];
        let summary = RunSummary {
            input_file_path: "abc.csv",
            num_instances: transactions.len(),
            num_attributes: 3,
            min_support: 0.5,
            min_confidence: 0.6,
        };
        write_header(&mut out, &summary).unwrap();
        write_levels(&mut out, &mined.levels).unwrap();
        write_itemsets(&mut out, &mined.levels, &mined.table, &encoder).unwrap();
        write_rules(&mut out, &rules, &encoder, max_rules).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_report() {
        let report = scenario_report(10);
        assert!(report.contains("Number of Instances: 4\n"));
        assert!(report.contains("Minimum support: 0.5 (2 instances)\n"));
        assert!(report.contains("Minimum metric <confidence>: 0.6\n"));
        assert!(report.contains("Size of set of large itemsets L(1): 3\n"));
        assert!(report.contains("Size of set of large itemsets L(2): 2\n"));
        assert!(report.contains("Large Itemsets L(2):\n A B 2\n B C 2\n"));
        assert!(report.contains("There were 4 rules found.\n"));
        assert!(report.contains("\t1. C 2 ==> B 2    <conf:(1.00)>    <sup:(0.50)>\n"));
        assert!(report.contains("\t4. "));
    }

    #[test]
    fn test_truncation() {
        let report = scenario_report(2);
        assert!(report.contains("There were 4 rules found.\n"));
        assert!(report.contains("\t2. "));
        assert!(!report.contains("\t3. "));
    }

    #[test]
    fn test_no_rules() {
        let (encoder, _) = transactions_of(&[]);
        let mut out: Vec<u8> = vec![];
        write_rules(&mut out, &[], &encoder, 10).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "\nNo rules found!\n");
    }

    #[test]
    fn test_sweep() {
        let mut out: Vec<u8> = vec![];
        let points = vec![SweepPoint {
            min_support: 0.1,
            mining_seconds: 0.25,
            rule_seconds: 0.0,
            num_itemsets: 7,
            num_rules: 3,
        }];
        write_sweep(&mut out, &points).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Minimum support: 0.1\n"));
        assert!(text.contains("\t Apriori Algorithm: 0.250000 seconds\n"));
        assert!(text.contains("\t Frequent itemsets: 7, rules: 3\n"));
    }
}
