//! Open Food Facts search client
//!
//! Queries the public `cgi/search.pl` endpoint and maps products to
//! `FoodItem`s. Products without an energy value are discarded. There is no
//! retry; a failed request is reported once and the caller moves on.
//!
//! API reference: <https://openfoodfacts.github.io/openfoodfacts-server/api/>

use std::time::Duration;

use serde::{Deserialize, Deserializer};
use tracing::{debug, warn};

use crate::config::settings::LookupSettings;
use crate::error::{FitcoachError, FitcoachResult};
use crate::models::FoodItem;

use super::FoodLookup;

/// Name used for products that come back without one
const UNNAMED_PRODUCT: &str = "Продукт";

/// Most candidates a search ever returns
pub const MAX_CANDIDATES: u32 = 5;

/// Open Food Facts client configuration
#[derive(Debug, Clone)]
pub struct OpenFoodFactsConfig {
    /// Base URL, e.g. `https://world.openfoodfacts.org`
    pub base_url: String,
    /// Candidates requested per search, at most `MAX_CANDIDATES`
    pub page_size: u32,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for OpenFoodFactsConfig {
    fn default() -> Self {
        Self::from(&LookupSettings::default())
    }
}

impl From<&LookupSettings> for OpenFoodFactsConfig {
    fn from(settings: &LookupSettings) -> Self {
        Self {
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            page_size: settings.page_size.clamp(1, MAX_CANDIDATES),
            timeout: Duration::from_secs(settings.timeout_secs),
        }
    }
}

/// Search response envelope
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    products: Vec<Product>,
}

#[derive(Debug, Deserialize)]
struct Product {
    #[serde(default)]
    product_name: Option<String>,
    #[serde(default)]
    nutriments: Nutriments,
}

#[derive(Debug, Default, Deserialize)]
struct Nutriments {
    #[serde(rename = "energy-kcal_100g", default, deserialize_with = "lenient_number")]
    energy_kcal_100g: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    proteins_100g: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    fat_100g: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    carbohydrates_100g: Option<f64>,
}

/// Nutriment values arrive as numbers or numeric strings depending on the product
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Number(n)) => n.as_f64(),
        Some(serde_json::Value::String(s)) => s.trim().replace(',', ".").parse().ok(),
        _ => None,
    })
}

/// Convert a search response body into usable foods
fn map_products(response: SearchResponse) -> Vec<FoodItem> {
    response
        .products
        .into_iter()
        .filter_map(|product| {
            let kcal100 = product.nutriments.energy_kcal_100g.filter(|k| *k > 0.0)?;
            let name = product
                .product_name
                .filter(|n| !n.trim().is_empty())
                .unwrap_or_else(|| UNNAMED_PRODUCT.to_string());

            FoodItem::new(
                name,
                kcal100,
                product.nutriments.proteins_100g.unwrap_or(0.0),
                product.nutriments.fat_100g.unwrap_or(0.0),
                product.nutriments.carbohydrates_100g.unwrap_or(0.0),
            )
            .map_err(|e| debug!(error = %e, "discarding lookup candidate"))
            .ok()
        })
        .take(MAX_CANDIDATES as usize)
        .collect()
}

/// Blocking Open Food Facts client
pub struct OpenFoodFactsClient {
    config: OpenFoodFactsConfig,
    http_client: reqwest::blocking::Client,
}

impl OpenFoodFactsClient {
    /// Create a new client
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be constructed
    pub fn new(config: OpenFoodFactsConfig) -> FitcoachResult<Self> {
        let http_client = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("fitcoach/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| FitcoachError::Lookup(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            config,
            http_client,
        })
    }

    fn search_url(&self) -> String {
        format!("{}/cgi/search.pl", self.config.base_url)
    }
}

impl FoodLookup for OpenFoodFactsClient {
    fn search(&self, query: &str) -> FitcoachResult<Vec<FoodItem>> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let page_size = self.config.page_size.clamp(1, MAX_CANDIDATES).to_string();
        let response = self
            .http_client
            .get(self.search_url())
            .query(&[
                ("search_terms", query),
                ("search_simple", "1"),
                ("json", "1"),
                ("page_size", page_size.as_str()),
            ])
            .send()
            .map_err(|e| FitcoachError::Lookup(format!("Open Food Facts request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, query, "food lookup returned an error status");
            return Err(FitcoachError::Lookup(format!("Open Food Facts HTTP {}", status)));
        }

        let body: SearchResponse = response
            .json()
            .map_err(|e| FitcoachError::Lookup(format!("JSON parse error: {}", e)))?;

        let foods = map_products(body);
        debug!(query, candidates = foods.len(), "food lookup finished");
        Ok(foods)
    }
}
