//! Calculator Demo
//!
//! Clicks through the keypad of the mock DOM frontend, shows what the DOM
//! renders, then runs the shared behavioural specification against both
//! frontends.
//!
//! Run with: cargo run --example calculator_demo
//! Set `RUST_LOG=pocket_calculator=debug` to see every transition.

use pocket_calculator::driver::{run_full_specification, CalculatorDriver};
use pocket_calculator::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> CalcResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║              Pocket Calculator - Mock DOM Demo               ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();

    let mut driver = WasmDriver::new();

    println!("🧮 Keypad ({} buttons):", driver.keypad().button_count());
    let (rows, cols) = driver.keypad().dimensions();
    for row in 0..rows {
        let labels: Vec<String> = (0..cols)
            .map(|col| {
                driver
                    .keypad()
                    .get_button_at(row, col)
                    .map_or_else(|| " ".to_string(), |btn| btn.action.label())
            })
            .collect();
        println!("   {}", labels.join("  "));
    }
    println!();

    println!("1️⃣  Clicking: 7 × 8 =");
    for id in ["btn-7", "btn-times", "btn-8"] {
        driver.click(id)?;
    }
    println!("   Pending line: {:?}", driver.pending_element_text());
    driver.click("btn-equals")?;
    println!("   Display:      {:?}", driver.display_element_text());

    println!("\n2️⃣  Chaining: 3 + 4 + 5 =");
    driver.enter_keys("C3+4+")?;
    println!("   After second +: {} ({:?})", driver.display(), driver.pending_line());
    driver.enter_keys("5=")?;
    println!("   Result:         {}", driver.display());

    println!("\n3️⃣  Sign and percent: 50 % ±");
    driver.enter_keys("C50%±")?;
    println!("   Display: {}", driver.display());

    println!("\n4️⃣  Division by zero: 9 ÷ 0 =");
    driver.enter_keys("C9÷0=")?;
    println!("   Display: {}", driver.display());

    println!("\n5️⃣  History list (from DOM, newest first):");
    for (i, item) in driver.history_list_items().iter().enumerate() {
        println!("   [{i}] {item}");
    }
    println!("\n   Events dispatched: {}", driver.dom().event_history().len());

    println!("\n6️⃣  Strict division policy:");
    let config = CalculatorConfig::from_json(r#"{"division_by_zero":"error"}"#)?;
    let mut strict = Calculator::with_config(config);
    if let Err(err) = strict.enter_keys("9÷0=") {
        println!("   Error: {err}");
    }
    println!("   Display: {}", strict.display_text());

    println!();
    println!("═══════════════════════════════════════════════════════════════");
    println!("  Running the shared specification against both frontends");
    println!("═══════════════════════════════════════════════════════════════");

    print!("  ✓ Calculator ... ");
    run_full_specification(&mut Calculator::new());
    println!("PASSED");

    print!("  ✓ WasmDriver ... ");
    run_full_specification(&mut WasmDriver::new());
    println!("PASSED");

    Ok(())
}
