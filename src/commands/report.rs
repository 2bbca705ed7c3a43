use std::path::Path;

use crate::config::Config;
use crate::console;
use crate::error::AppError;
use crate::model::Inventory;
use crate::report::{ReportLayout, report_path, write_report};
use crate::scanner::Scanner;
use crate::utils::absolute_display;

pub struct ReportOptions {
    pub image_id: String,
    pub image_name: String,
}

/// Scan one image and write its component report. Returns the inventory that was written.
pub fn execute_report(options: ReportOptions) -> Result<Inventory, AppError> {
    let config = Config::load()?;
    let scanner = Scanner::new(&config);

    console::step(&format!("Starting {} scan for image: {}", scanner.binary(), options.image_name));

    console::step(&format!("Step 1: Running {}...", scanner.binary()));
    console::step(&format!("Running {} for image: {}", scanner.binary(), options.image_id));
    let output = scanner.scan(&options.image_id)?;

    console::step("Step 2: Writing results to Excel...");
    let inventory = Inventory::from_json(&output.stdout)?;
    let path = report_path(&config.output_dir, &options.image_name);
    let written = write_report(&path, &ReportLayout::new(&inventory.components))?;
    console::success(&format!("Excel file created: {}", written.display()));

    print_summary(&inventory, &written);
    console::success("Process completed successfully!");
    Ok(inventory)
}

fn print_summary(inventory: &Inventory, path: &Path) {
    println!();
    console::heading("Summary of Findings:");
    println!("- Number of components found: {}", inventory.len());
    println!("- Path of the Excel file: {}", absolute_display(path));
}
