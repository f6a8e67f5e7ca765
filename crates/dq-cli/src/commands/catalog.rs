use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use dq_text::{Catalog, Language};

pub fn run(format: &str) -> Result<(), String> {
    let catalog = Catalog::builtin();

    match format {
        "table" => print_table(&catalog),
        "json" => {
            let json =
                serde_json::to_string_pretty(&catalog.coverage()).map_err(|e| e.to_string())?;
            println!("{json}");
            Ok(())
        }
        other => Err(format!("unknown format '{other}' (expected table or json)")),
    }
}

fn print_table(catalog: &Catalog) -> Result<(), String> {
    let coverage = catalog.coverage();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    let mut header = vec!["Key".to_string()];
    header.extend(Language::ALL.iter().map(|l| l.code().to_string()));
    table.set_header(header);

    for entry in &coverage {
        let mut row = vec![entry.key.to_string()];
        row.extend(Language::ALL.iter().map(|l| {
            if entry.languages.contains(l) {
                "yes".to_string()
            } else {
                "missing".to_string()
            }
        }));
        table.add_row(row);
    }

    println!("{table}");
    println!();

    let gaps: usize = Language::ALL
        .iter()
        .map(|&l| catalog.missing(l).len())
        .sum();
    if gaps == 0 {
        println!("  {} keys, {}", coverage.len(), "fully translated".green());
    } else {
        println!(
            "  {} keys, {}",
            coverage.len(),
            format!("{gaps} missing translations").yellow()
        );
        for language in Language::ALL {
            for key in catalog.missing(language) {
                println!("    {} {key}", language.name().bold());
            }
        }
    }

    Ok(())
}
