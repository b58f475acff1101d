use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use storefront_core::{CatalogView, JsonCatalog, LoadStatus, Product, Storefront};

pub mod cart;
pub mod filters;
pub mod pagination;
pub mod popup;
pub mod smoke;
pub mod sorting;

/// Shared inputs for every scenario run.
#[derive(Debug, Clone)]
pub struct ScenarioCtx {
    pub catalog: JsonCatalog,
    pub verbose: bool,
}

impl ScenarioCtx {
    /// A freshly loaded storefront over the scenario catalog.
    pub fn fresh_store(&self) -> Result<Storefront> {
        let mut store = Storefront::default();
        store.load_from(&self.catalog);
        if let LoadStatus::Failed(reason) = store.status() {
            anyhow::bail!("catalog failed to load: {reason}");
        }
        ensure!(!store.catalog().is_empty(), "catalog is empty");
        Ok(store)
    }

    pub fn note(&self, message: &str) {
        if self.verbose {
            println!("   · {message}");
        }
    }
}

/// Products currently in the view sequence, or an empty list.
pub fn view_products(store: &Storefront) -> &[Product] {
    match store.view() {
        CatalogView::Products(products) => products,
        CatalogView::Unpainted | CatalogView::NoMatches => &[],
    }
}

pub fn titles(products: &[Product]) -> Vec<&str> {
    products.iter().map(|p| p.title.as_str()).collect()
}

type ScenarioFn = fn(&ScenarioCtx) -> Result<()>;

#[derive(Clone, Copy)]
pub struct Scenario {
    pub key: &'static str,
    pub description: &'static str,
    run: ScenarioFn,
}

const SCENARIOS: &[Scenario] = &[
    Scenario {
        key: "smoke",
        description: "Catalog loads and page 1 is painted",
        run: smoke::run,
    },
    Scenario {
        key: "filters",
        description: "Search, price range and category filters",
        run: filters::run,
    },
    Scenario {
        key: "sorting",
        description: "Price sort orders and catalog order",
        run: sorting::run,
    },
    Scenario {
        key: "pagination",
        description: "Page slicing and Previous/Next controls",
        run: pagination::run,
    },
    Scenario {
        key: "cart",
        description: "Title-keyed cart aggregation and removal",
        run: cart::run,
    },
    Scenario {
        key: "popup",
        description: "Detail popup open, reopen and close",
        run: popup::run,
    },
];

pub fn list_scenarios() -> impl Iterator<Item = (&'static str, &'static str)> {
    SCENARIOS.iter().map(|s| (s.key, s.description))
}

pub fn get_scenario(key: &str) -> Option<Scenario> {
    SCENARIOS.iter().copied().find(|s| s.key == key)
}

/// Expand `all` into every registered key, keeping other entries in order.
pub fn expand_keys(keys: Vec<String>) -> Vec<String> {
    if !keys.iter().any(|k| k == "all") {
        return keys;
    }
    let mut expanded: Vec<String> = keys.into_iter().filter(|k| k != "all").collect();
    for (key, _) in list_scenarios() {
        if !expanded.iter().any(|k| k == key) {
            expanded.push(key.to_string());
        }
    }
    expanded
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub scenario_name: String,
    pub passed: bool,
    pub failures: Vec<String>,
    #[serde(with = "duration_serde")]
    pub duration: Duration,
}

impl ScenarioResult {
    fn unknown(key: &str) -> Self {
        Self {
            scenario_name: key.to_string(),
            passed: false,
            failures: vec![format!("Unknown scenario: {key}")],
            duration: Duration::ZERO,
        }
    }
}

pub fn run_scenarios(keys: &[String], ctx: &ScenarioCtx) -> Vec<ScenarioResult> {
    keys.iter()
        .map(|key| {
            let Some(scenario) = get_scenario(key) else {
                log::warn!("unknown scenario {key}");
                return ScenarioResult::unknown(key);
            };
            log::debug!("running scenario {key}");
            let start = Instant::now();
            let outcome = (scenario.run)(ctx);
            let duration = start.elapsed();
            match outcome {
                Ok(()) => ScenarioResult {
                    scenario_name: key.clone(),
                    passed: true,
                    failures: Vec::new(),
                    duration,
                },
                Err(err) => ScenarioResult {
                    scenario_name: key.clone(),
                    passed: false,
                    failures: vec![format!("{err:#}")],
                    duration,
                },
            }
        })
        .collect()
}

/// Load the scenario catalog from disk.
pub fn catalog_from_file(path: &std::path::Path) -> Result<JsonCatalog> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog {}", path.display()))?;
    Ok(JsonCatalog::new(json))
}

mod duration_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_millis().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = u128::deserialize(deserializer)?;
        Ok(Duration::from_millis(u64::try_from(millis).unwrap_or(0)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = include_str!("../../../storefront-core/fixtures/products.json");

    fn fixture_ctx() -> ScenarioCtx {
        ScenarioCtx {
            catalog: JsonCatalog::new(FIXTURE),
            verbose: false,
        }
    }

    #[test]
    fn every_registered_scenario_passes_on_the_fixture() {
        let keys = expand_keys(vec!["all".to_string()]);
        assert_eq!(keys.len(), SCENARIOS.len());
        let results = run_scenarios(&keys, &fixture_ctx());
        for result in &results {
            assert!(result.passed, "{} failed: {:?}", result.scenario_name, result.failures);
        }
    }

    #[test]
    fn unknown_keys_are_failures() {
        let results = run_scenarios(&["checkout".to_string()], &fixture_ctx());
        assert_eq!(results.len(), 1);
        assert!(!results[0].passed);
        assert_eq!(results[0].failures, vec!["Unknown scenario: checkout".to_string()]);
    }

    #[test]
    fn expand_keys_keeps_explicit_order() {
        let keys = expand_keys(vec!["cart".to_string(), "all".to_string()]);
        assert_eq!(keys[0], "cart");
        assert_eq!(keys.iter().filter(|k| *k == "cart").count(), 1);
        assert_eq!(keys.len(), SCENARIOS.len());
    }

    #[test]
    fn broken_catalog_fails_scenarios() {
        let ctx = ScenarioCtx {
            catalog: JsonCatalog::new("{\"not\": \"an array\"}"),
            verbose: false,
        };
        let results = run_scenarios(&["smoke".to_string()], &ctx);
        assert!(!results[0].passed);
        assert!(results[0].failures[0].contains("catalog failed to load"));
    }

    #[test]
    fn result_duration_serializes_as_millis() {
        let result = ScenarioResult {
            scenario_name: "smoke".to_string(),
            passed: true,
            failures: Vec::new(),
            duration: Duration::from_millis(42),
        };
        let json = serde_json::to_value(&result).expect("serialize");
        assert_eq!(json["duration"], 42);
    }
}
