use crate::core::Variant;
use crate::model::{CoefficientTable, DiscriminantFunction, LogisticModel};
use anyhow::Result;

fn signed(first: bool, value: f64) -> String {
    match (first, value < 0.0) {
        (true, _) => format!("{}", value),
        (false, true) => format!(" - {}", -value),
        (false, false) => format!(" + {}", value),
    }
}

fn describe_discriminant(f: &DiscriminantFunction) -> String {
    let mut out = String::new();
    let terms = [
        (f.tail_length, "log10(tail length)"),
        (f.body_length, "log10(body length)"),
        (f.tail_diameter, "log10(tail diameter)"),
    ];
    for (coefficient, symbol) in terms.iter().filter(|(c, _)| *c != 0.0) {
        out.push_str(&signed(out.is_empty(), *coefficient));
        out.push_str(&format!(" * {}", symbol));
    }
    out.push_str(&signed(out.is_empty(), f.intercept));
    out
}

fn describe_logistic(model: &LogisticModel) -> String {
    let mut out = signed(true, model.intercept);
    for term in model.terms {
        out.push_str(&signed(false, term.coefficient));
        for factor in term.factors {
            out.push_str(&format!(" * {}", factor.symbol()));
        }
    }
    out
}

/// Human-readable formulas for one coefficient table.
pub fn describe_table(table: &CoefficientTable) -> String {
    format!(
        "Model {}\n  SMHM = {}\n  WHM  = {}\n  z    = {}\n  p    = 1 / (1 + e^(-z))\n",
        table.variant.label(),
        describe_discriminant(&table.salt_marsh),
        describe_discriminant(&table.western),
        describe_logistic(&table.logistic),
    )
}

fn selected_tables(variant: Option<Variant>) -> Vec<&'static CoefficientTable> {
    match variant {
        Some(v) => vec![CoefficientTable::for_variant(v)],
        None => vec![
            CoefficientTable::for_variant(Variant::WithDiameter),
            CoefficientTable::for_variant(Variant::WithoutDiameter),
        ],
    }
}

pub fn show_coefficients(variant: Option<Variant>, json: bool) -> Result<()> {
    let tables = selected_tables(variant);
    if json {
        println!("{}", serde_json::to_string_pretty(&tables)?);
    } else {
        let text: Vec<String> = tables.into_iter().map(describe_table).collect();
        print!("{}", text.join("\n"));
    }
    Ok(())
}
