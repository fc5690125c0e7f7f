use serde_json::Value;

/// Print just the headline number from the output.
///
/// Heuristic: look for well-known result fields in order of priority,
/// falling back through the overall aggregate to the first field.
pub fn print_minimal(value: &Value) {
    // Try to extract the "result" envelope
    let result_obj = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    // Priority list of key output fields
    let priority_keys = [
        "gross_margin_delta",
        "gross_margin",
        "discounted_price",
        "average_scenario_aov",
        "scenario_quantity",
        "merchandise_cost",
    ];

    if let Value::Object(map) = result_obj {
        for key in &priority_keys {
            if let Some(val) = map.get(*key) {
                if !val.is_null() {
                    println!("{}", format_minimal(val));
                    return;
                }
            }
        }

        // Category summaries headline with the overall margin
        if let Some(Value::Object(overall)) = map.get("overall") {
            if let Some(val) = overall.get("gross_margin") {
                println!("{}", format_minimal(val));
                return;
            }
        }

        // Fall back to first field
        if let Some((key, val)) = map.iter().next() {
            println!("{}: {}", key, format_minimal(val));
            return;
        }
    }

    // Not an object, just print directly
    println!("{}", format_minimal(result_obj));
}

fn format_minimal(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
