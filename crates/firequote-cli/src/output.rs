//! Output formatting module

use firequote_domain::model::{ExtinguisherProduct, FloorResult, HazardStandards, Quotation};
use firequote_types::{OutputFormat, Result};

pub fn output_quotation(
    format: OutputFormat,
    quotation: &Quotation,
    currency: &str,
) -> Result<()> {
    if format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(quotation)?;
        println!("{}", content);
        return Ok(());
    }

    println!("\nQuotation");
    println!("=========");
    println!("Floors:              {}", quotation.floor_results.len());
    println!("Total extinguishers: {}", quotation.total_extinguishers);

    println!("\n--- Floor Requirements ---");
    for fr in &quotation.floor_results {
        println!(
            "Floor {:<3} {:<12} {:<10} {} x {} {}",
            fr.floor.number,
            fr.floor.usage.label(),
            fr.hazard_level.label(),
            fr.extinguishers_required,
            fr.agent_type.label(),
            fr.recommended_capacity
        );
        for note in &fr.notes {
            println!("          note: {}", note);
        }
    }

    println!("\n--- Line Items ---");
    for item in &quotation.line_items {
        println!(
            "{:<36} {}{:>8} x {:<4} = {}{}",
            item.description, currency, item.unit_price, item.quantity, currency, item.subtotal
        );
    }

    println!();
    println!("Subtotal (excl. tax): {}{}", currency, quotation.subtotal_excl_tax);
    println!(
        "GST ({:.0}%):            {}{}",
        quotation.tax_rate * 100.0,
        currency,
        quotation.tax_amount
    );
    println!("Grand total:          {}{}", currency, quotation.grand_total);

    Ok(())
}

pub fn output_floor_result(format: OutputFormat, result: &FloorResult) -> Result<()> {
    if format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(result)?;
        println!("{}", content);
        return Ok(());
    }

    println!("\nFloor Requirement");
    println!("=================");
    println!("Area:            {} ({:?})", result.floor.raw_area, result.floor.unit);
    println!("Usage:           {}", result.floor.usage.label());
    println!("Hazard level:    {}", result.hazard_level.label());
    println!("Units required:  {}", result.extinguishers_required);
    println!("Agent:           {}", result.agent_type.label());
    println!("Capacity:        {}", result.recommended_capacity);
    for note in &result.notes {
        println!("Note:            {}", note);
    }

    Ok(())
}

pub fn output_standards(format: OutputFormat, standards: &HazardStandards) {
    if format == OutputFormat::Json {
        if let Ok(content) = serde_json::to_string_pretty(standards) {
            println!("{}", content);
        }
        return;
    }

    println!("\nBIS 2190:2024 Hazard Standards");
    println!("==============================");
    println!(
        "{:<10} {:<8} {:>14} {:>18}",
        "Hazard", "Rating", "Coverage m²", "Max travel dist m"
    );
    for (label, standard) in [
        ("LOW", &standards.low),
        ("MODERATE", &standards.moderate),
        ("HIGH", &standards.high),
    ] {
        println!(
            "{:<10} {:<8} {:>14} {:>18}",
            label, standard.rating, standard.coverage_area_m2, standard.max_travel_distance_m
        );
    }
}

pub fn output_catalog(
    format: OutputFormat,
    products: &[&ExtinguisherProduct],
    currency: &str,
) -> Result<()> {
    if format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(products)?;
        println!("{}", content);
        return Ok(());
    }

    println!("\nProduct Catalog");
    println!("===============");
    println!(
        "{:<18} {:<10} {:<10} {:>10} {:>12}",
        "Agent", "Capacity", "Rating", "Price", "Coverage m²"
    );
    for product in products {
        println!(
            "{:<18} {:<10} {:<10} {}{:>9} {:>12}",
            product.agent_type.label(),
            product.capacity_label,
            product.rating_label,
            currency,
            product.unit_cost,
            product.coverage_area_m2
        );
    }

    Ok(())
}
