use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::Value;
use std::str::FromStr;
use tabled::{builder::Builder, Table};

use super::{is_money_key, is_percent_key};

/// Format output as a table using the tabled crate. Money fields render
/// as dollars, fraction fields as percentages.
pub fn print_table(value: &Value) {
    match value {
        Value::Object(map) => {
            if let Some(result) = map.get("result") {
                print_result_table(result, map);
            } else {
                print_flat_object(value);
            }
        }
        Value::Array(arr) => {
            print_array_table(arr);
        }
        _ => {
            println!("{}", value);
        }
    }
}

fn print_result_table(result: &Value, envelope: &serde_json::Map<String, Value>) {
    if let Value::Object(res_map) = result {
        // Row collections print as their own tables; scalars and nested
        // aggregates collect into one field/value table below them.
        let mut scalar_rows: Vec<(String, String)> = Vec::new();
        for (key, val) in res_map {
            match val {
                Value::Array(arr) if !arr.is_empty() && arr.iter().all(Value::is_object) => {
                    println!("{}:", key);
                    print_array_table(arr);
                    println!();
                }
                Value::Object(nested) => {
                    for (nested_key, nested_val) in nested {
                        scalar_rows.push((
                            format!("{}.{}", key, nested_key),
                            format_field(nested_key, nested_val),
                        ));
                    }
                }
                _ => scalar_rows.push((key.clone(), format_field(key, val))),
            }
        }
        if !scalar_rows.is_empty() {
            let mut builder = Builder::default();
            builder.push_record(["Field", "Value"]);
            for (key, val) in &scalar_rows {
                builder.push_record([key.as_str(), val.as_str()]);
            }
            println!("{}", Table::from(builder));
        }
    } else {
        print_flat_object(&Value::Object(envelope.clone()));
    }

    // Print warnings if any
    if let Some(Value::Array(warnings)) = envelope.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings {
                if let Value::String(s) = w {
                    println!("  - {}", s);
                }
            }
        }
    }

    // Print methodology
    if let Some(Value::String(meth)) = envelope.get("methodology") {
        println!("\nMethodology: {}", meth);
    }
}

fn print_flat_object(value: &Value) {
    if let Value::Object(map) = value {
        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        for (key, val) in map {
            builder.push_record([key.as_str(), &format_field(key, val)]);
        }
        let table = Table::from(builder);
        println!("{}", table);
    }
}

fn print_array_table(arr: &[Value]) {
    if arr.is_empty() {
        println!("(empty)");
        return;
    }

    // Collect all keys from first object for headers
    if let Some(Value::Object(first)) = arr.first() {
        let headers: Vec<String> = first.keys().cloned().collect();
        let mut builder = Builder::default();
        builder.push_record(&headers);

        for item in arr {
            if let Value::Object(map) = item {
                let row: Vec<String> = headers
                    .iter()
                    .map(|h| {
                        map.get(h.as_str())
                            .map(|v| format_field(h, v))
                            .unwrap_or_default()
                    })
                    .collect();
                builder.push_record(row);
            }
        }

        let table = Table::from(builder);
        println!("{}", table);
    } else {
        // Simple array of values
        for item in arr {
            println!("{}", format_value(item));
        }
    }
}

/// Apply display formatting by field name. Decimal values arrive as JSON
/// strings; anything that fails to parse falls back to plain rendering.
fn format_field(key: &str, value: &Value) -> String {
    let parsed = match value {
        Value::String(s) => Decimal::from_str(s).ok(),
        _ => None,
    };
    match parsed {
        Some(d) if is_percent_key(key) => format!("{}%", (d * dec!(100)).round_dp(1)),
        Some(d) if is_money_key(key) && d.is_sign_negative() => {
            format!("-${}", d.abs().round_dp(2))
        }
        Some(d) if is_money_key(key) => format!("${}", d.round_dp(2)),
        _ => format_value(value),
    }
}

fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::Array(arr) => {
            let items: Vec<String> = arr.iter().map(format_value).collect();
            items.join(", ")
        }
        Value::Object(_) => serde_json::to_string(value).unwrap_or_default(),
    }
}
