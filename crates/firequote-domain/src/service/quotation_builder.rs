//! Quotation aggregation and pricing

use crate::model::{AgentType, FloorResult, LineItem, ProductCatalog, Quotation, TAX_RATE};
use firequote_types::{Error, Result};

/// Fixed price of one wall-mount stand, in whole currency units
pub const STAND_UNIT_COST: i64 = 500;

/// Aggregate per-floor results into a priced quotation.
///
/// Line items are grouped by (agent, capacity) in floor-visitation order,
/// so the same input always yields the same item ordering. Tax is rounded
/// half-up once from the exact subtotal.
pub fn build_quotation(floor_results: &[FloorResult], catalog: &ProductCatalog) -> Result<Quotation> {
    if floor_results.is_empty() {
        return Err(Error::InvalidInput("empty floor list".to_string()));
    }

    let total_extinguishers: u32 = floor_results.iter().map(|fr| fr.extinguishers_required).sum();

    // Vector scan keeps first-seen ordering; a hash map would not
    let mut groups: Vec<(AgentType, String, u32)> = Vec::new();
    for fr in floor_results {
        match groups
            .iter_mut()
            .find(|(agent, capacity, _)| *agent == fr.agent_type && *capacity == fr.recommended_capacity)
        {
            Some(group) => group.2 += fr.extinguishers_required,
            None => groups.push((
                fr.agent_type,
                fr.recommended_capacity.clone(),
                fr.extinguishers_required,
            )),
        }
    }

    let mut line_items = Vec::with_capacity(groups.len() + 1);
    for (agent, capacity, quantity) in &groups {
        let product = catalog.find(*agent, capacity).ok_or_else(|| {
            Error::MissingCatalogEntry {
                agent: agent.label().to_string(),
                capacity: capacity.clone(),
            }
        })?;
        line_items.push(LineItem {
            description: format!(
                "{} {} ({})",
                product.agent_type.label(),
                product.capacity_label,
                product.rating_label
            ),
            unit_price: product.unit_cost,
            quantity: *quantity,
            subtotal: product.unit_cost * i64::from(*quantity),
        });
    }

    line_items.push(LineItem {
        description: "Wall mount stand".to_string(),
        unit_price: STAND_UNIT_COST,
        quantity: total_extinguishers,
        subtotal: STAND_UNIT_COST * i64::from(total_extinguishers),
    });

    let subtotal_excl_tax: i64 = line_items.iter().map(|item| item.subtotal).sum();
    let tax_amount = round_tax_half_up(subtotal_excl_tax);

    Ok(Quotation {
        floor_results: floor_results.to_vec(),
        total_extinguishers,
        line_items,
        subtotal_excl_tax,
        tax_rate: TAX_RATE,
        tax_amount,
        grand_total: subtotal_excl_tax + tax_amount,
    })
}

/// 18% GST on the subtotal, half-up to the whole currency unit.
/// Integer arithmetic, so repeated runs are bit-identical.
fn round_tax_half_up(subtotal: i64) -> i64 {
    (subtotal * 18 + 50) / 100
}

/// Render a plain-text quotation report
pub fn generate_quotation_report(quotation: &Quotation) -> String {
    let mut report = String::new();
    report.push_str("==================================================\n");
    report.push_str("          Fire Extinguisher Quotation             \n");
    report.push_str("          per BIS 2190:2024 standards             \n");
    report.push_str("==================================================\n\n");

    report.push_str("[Floor Requirements]\n");
    report.push_str("-".repeat(70).as_str());
    report.push('\n');
    report.push_str(&format!(
        "{:<7} {:<12} {:<10} {:>6} {:<18} {:>8}\n",
        "Floor", "Usage", "Hazard", "Units", "Agent", "Capacity"
    ));
    report.push_str("-".repeat(70).as_str());
    report.push('\n');
    for fr in &quotation.floor_results {
        report.push_str(&format!(
            "{:<7} {:<12} {:<10} {:>6} {:<18} {:>8}\n",
            fr.floor.number,
            fr.floor.usage.label(),
            fr.hazard_level.label(),
            fr.extinguishers_required,
            fr.agent_type.label(),
            fr.recommended_capacity
        ));
        for note in &fr.notes {
            report.push_str(&format!("        * {}\n", note));
        }
    }
    report.push('\n');

    report.push_str("[Line Items]\n");
    report.push_str("-".repeat(70).as_str());
    report.push('\n');
    report.push_str(&format!(
        "{:<36} {:>10} {:>6} {:>12}\n",
        "Description", "Unit ₹", "Qty", "Subtotal ₹"
    ));
    report.push_str("-".repeat(70).as_str());
    report.push('\n');
    for item in &quotation.line_items {
        report.push_str(&format!(
            "{:<36} {:>10} {:>6} {:>12}\n",
            item.description, item.unit_price, item.quantity, item.subtotal
        ));
    }
    report.push('\n');

    report.push_str(&format!(
        "  Total extinguishers:    {}\n",
        quotation.total_extinguishers
    ));
    report.push_str(&format!(
        "  Subtotal (excl. tax):   ₹{}\n",
        quotation.subtotal_excl_tax
    ));
    report.push_str(&format!(
        "  GST ({:.0}%):              ₹{}\n",
        quotation.tax_rate * 100.0,
        quotation.tax_amount
    ));
    report.push_str(&format!(
        "  Grand total:            ₹{}\n",
        quotation.grand_total
    ));
    report.push_str("==================================================\n");
    report
}
