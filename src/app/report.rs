//! Console reporting for the deployment pipeline.
//!
//! Plain functions over stdout; formatting is never process-global state.

/// Print a success line.
pub fn success(message: &str) {
    println!("✅ {message}");
}

/// Print a warning line.
pub fn warn(message: &str) {
    println!("⚠️  {message}");
}

/// Print an informational line.
pub fn info(message: &str) {
    println!("ℹ️  {message}");
}

/// Print an in-progress line.
pub fn progress(message: &str) {
    println!("⏳ {message}");
}

/// Print a step header, e.g. `STEP 4: Create Treasury [4/7]`.
pub fn step(number: usize, total: usize, name: &str) {
    println!("\nSTEP {number}: {name} [{number}/{total}]");
}

/// Print a section divider.
pub fn section(title: &str) {
    println!("\n{}", "─".repeat(60));
    println!("{}", title.to_uppercase());
    println!("{}", "─".repeat(60));
}

/// Print a resolved (or unresolved) identifier.
pub fn contract_id(label: &str, value: Option<&str>) {
    match value {
        Some(v) => println!("📦 {label}: {v}"),
        None => println!("📦 {label}: <not found>"),
    }
}
