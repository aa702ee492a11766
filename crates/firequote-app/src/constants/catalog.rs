//! Default extinguisher product catalog with list prices

use std::sync::LazyLock;

use firequote_domain::model::{AgentType, ExtinguisherProduct, ProductCatalog};

/// Default price list, whole rupees. Per-agent entries are in ascending
/// capacity order, which capacity selection relies on.
static DEFAULT_CATALOG: LazyLock<ProductCatalog> = LazyLock::new(|| {
    ProductCatalog::new(vec![
        ExtinguisherProduct {
            agent_type: AgentType::AbcPowder,
            capacity_label: "4 KG".to_string(),
            rating_label: "4A:144B".to_string(),
            unit_cost: 5034,
            coverage_area_m2: 150.0,
        },
        ExtinguisherProduct {
            agent_type: AgentType::AbcPowder,
            capacity_label: "9 KG".to_string(),
            rating_label: "6A:233B".to_string(),
            unit_cost: 7817,
            coverage_area_m2: 250.0,
        },
        ExtinguisherProduct {
            agent_type: AgentType::Co2,
            capacity_label: "4.5 KG".to_string(),
            rating_label: "55B".to_string(),
            unit_cost: 11667,
            coverage_area_m2: 100.0,
        },
        ExtinguisherProduct {
            agent_type: AgentType::Foam,
            capacity_label: "9 LTR".to_string(),
            rating_label: "4A:144B".to_string(),
            unit_cost: 5117,
            coverage_area_m2: 150.0,
        },
        ExtinguisherProduct {
            agent_type: AgentType::Water,
            capacity_label: "9 LTR".to_string(),
            rating_label: "3A".to_string(),
            unit_cost: 5017,
            coverage_area_m2: 150.0,
        },
        ExtinguisherProduct {
            agent_type: AgentType::WetChemical,
            capacity_label: "6 LTR".to_string(),
            rating_label: "25F".to_string(),
            unit_cost: 26332,
            coverage_area_m2: 100.0,
        },
        ExtinguisherProduct {
            agent_type: AgentType::Avd,
            capacity_label: "2 LTR".to_string(),
            rating_label: "E-Class".to_string(),
            unit_cost: 28394,
            coverage_area_m2: 50.0,
        },
    ])
});

/// The default product catalog
pub fn default_catalog() -> &'static ProductCatalog {
    &DEFAULT_CATALOG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_agent_has_a_listing() {
        let catalog = default_catalog();
        for agent in [
            AgentType::Water,
            AgentType::Foam,
            AgentType::Co2,
            AgentType::AbcPowder,
            AgentType::WetChemical,
            AgentType::Avd,
        ] {
            assert!(
                !catalog.products_for(agent).is_empty(),
                "no listing for {}",
                agent.label()
            );
        }
    }

    #[test]
    fn test_abc_capacities_ascend() {
        let abc = default_catalog().products_for(AgentType::AbcPowder);
        assert_eq!(abc[0].capacity_label, "4 KG");
        assert_eq!(abc[1].capacity_label, "9 KG");
        assert!(abc[0].unit_cost < abc[1].unit_cost);
    }

    #[test]
    fn test_prices_positive() {
        for product in default_catalog().all() {
            assert!(product.unit_cost > 0);
            assert!(product.coverage_area_m2 > 0.0);
        }
    }
}
