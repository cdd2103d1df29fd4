// ============================================================================
// Basic Usage Example
// ============================================================================

use financial_calculator::prelude::*;

fn main() -> Result<(), CalcError> {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Financial Calculator Example ===\n");

    let mut history = History::from_config(&HistoryConfig::new().with_max_entries(5))?;

    // Tax-inclusive prices, validating the rate first
    println!("Pricing items at 20% VAT...");
    for prix_ht in [19.99, 120.0, 5.5] {
        let check = validate_percentage(20.0);
        if let Some(reason) = check.error() {
            println!("  skipped: {}", reason);
            continue;
        }
        let prix_ttc = calculate_prix_ttc(prix_ht, 20.0);
        history.save("calculate-ttc", vec![prix_ht, 20.0], prix_ttc);
        println!("  {:.2} HT -> {:.2} TTC", prix_ht, prix_ttc);
    }

    // Compound interest
    let capital = calculate_interets_composes(1000.0, 5.0, 10.0)?;
    history.save("compound-interest", vec![1000.0, 5.0, 10.0], capital);
    println!("\n1000 at 5% for 10 years: {:.2}", capital);

    // Chained accumulator
    let mut calc = Calculator::new();
    calc.add(10.0).multiply(2.0).subtract(5.0).divide(3.0)?;
    history.save("chain", vec![10.0, 2.0, 5.0, 3.0], calc.value());
    println!("((0 + 10) * 2 - 5) / 3 = {}", calc.value());

    // Division by zero leaves the register alone
    let outcome = calc.divide(0.0).map(|_| ());
    match outcome {
        Ok(()) => println!("unexpected success"),
        Err(err) => {
            println!("divide by zero rejected: {} (value still {})", err, calc.value());
            history.save("divide-error", vec![calc.value(), 0.0], f64::NAN);
        },
    }

    // Oldest entry has been evicted (capacity 5, 6 saves)
    println!("\nHistory ({} of {} entries):", history.get_size(), history.capacity());
    for entry in history.iter() {
        println!("  {} {:?} = {}", entry.operation, entry.inputs, entry.result);
    }

    let exported = history.export();
    println!("\nExported JSON:\n{}", exported);

    let mut restored = History::new();
    restored.import(&exported)?;
    println!(
        "\nRestored {} entries, {} TTC calculations",
        restored.get_size(),
        restored.get_by_operation("calculate-ttc").len()
    );

    Ok(())
}
