//! PokeAPI catalog client

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;

use crate::state::{EntryDetail, EntrySummary, TypeSlot};

pub const API_BASE: &str = "https://pokeapi.co/api/v2";
const COLLECTION: &str = "pokemon";

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("no entry named '{0}'")]
    NotFound(String),
}

/// Read-only access to the remote catalog.
///
/// Each call is exactly one request; implementations do not cache or retry.
#[async_trait]
pub trait CatalogClient: Send + Sync {
    async fn fetch_summary_list(&self, count: usize) -> Result<Vec<EntrySummary>, CatalogError>;

    async fn fetch_detail(&self, name: &str) -> Result<EntryDetail, CatalogError>;
}

// ============================================================================
// Wire types
// ============================================================================

#[derive(Clone, Debug, Deserialize)]
struct NamedResource {
    name: String,
    url: String,
}

#[derive(Clone, Debug, Deserialize)]
struct ListResponse {
    results: Vec<NamedResource>,
}

#[derive(Clone, Debug, Deserialize)]
struct PokemonResponse {
    id: u32,
    name: String,
    height: u32,
    weight: u32,
    sprites: serde_json::Value,
    types: Vec<PokemonTypeSlot>,
}

#[derive(Clone, Debug, Deserialize)]
struct PokemonTypeSlot {
    slot: u8,
    #[serde(rename = "type")]
    type_info: NamedResource,
}

pub fn decode_summary_list(bytes: &[u8]) -> Result<Vec<EntrySummary>, CatalogError> {
    let response: ListResponse =
        serde_json::from_slice(bytes).map_err(|err| CatalogError::Decode(err.to_string()))?;
    Ok(response
        .results
        .into_iter()
        .map(|resource| EntrySummary {
            name: resource.name,
            reference_url: resource.url,
        })
        .collect())
}

pub fn decode_detail(bytes: &[u8]) -> Result<EntryDetail, CatalogError> {
    let response: PokemonResponse =
        serde_json::from_slice(bytes).map_err(|err| CatalogError::Decode(err.to_string()))?;

    let mut slots = response.types;
    slots.sort_by_key(|slot| slot.slot);

    Ok(EntryDetail {
        id: response.id,
        name: response.name,
        height: tenths(response.height),
        weight: tenths(response.weight),
        sprite_url: pointer_string(&response.sprites, "/front_default"),
        types: slots
            .into_iter()
            .map(|slot| TypeSlot {
                type_name: slot.type_info.name,
            })
            .collect(),
    })
}

/// PokeAPI reports decimetres and hectograms; shown as metres and kilograms.
fn tenths(value: u32) -> String {
    format!("{}.{}", value / 10, value % 10)
}

fn pointer_string(value: &serde_json::Value, pointer: &str) -> Option<String> {
    value
        .pointer(pointer)
        .and_then(|val| val.as_str())
        .map(|s| s.to_string())
}

/// Map a response status to an error.
///
/// `name` is set for detail lookups; only those turn 404 into `NotFound`.
fn check_status(status: StatusCode, name: Option<&str>, url: &str) -> Result<(), CatalogError> {
    match name {
        Some(name) if status == StatusCode::NOT_FOUND => {
            Err(CatalogError::NotFound(name.to_string()))
        }
        _ if !status.is_success() => {
            Err(CatalogError::Transport(format!("HTTP {status} for {url}")))
        }
        _ => Ok(()),
    }
}

// ============================================================================
// HTTP client
// ============================================================================

pub struct PokeApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl PokeApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn list_url(&self, count: usize) -> String {
        format!("{}/{COLLECTION}?limit={count}&offset=0", self.base_url)
    }

    fn detail_url(&self, name: &str) -> String {
        format!(
            "{}/{COLLECTION}/{}",
            self.base_url,
            urlencoding::encode(name)
        )
    }

    async fn get_bytes(&self, url: &str) -> Result<(StatusCode, Vec<u8>), CatalogError> {
        tracing::debug!(url, "catalog request");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| CatalogError::Transport(err.to_string()))?;
        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|err| CatalogError::Transport(err.to_string()))?
            .to_vec();
        tracing::debug!(url, status = status.as_u16(), len = bytes.len(), "catalog response");
        Ok((status, bytes))
    }
}

impl Default for PokeApiClient {
    fn default() -> Self {
        Self::new(API_BASE)
    }
}

#[async_trait]
impl CatalogClient for PokeApiClient {
    async fn fetch_summary_list(&self, count: usize) -> Result<Vec<EntrySummary>, CatalogError> {
        let url = self.list_url(count);
        let (status, bytes) = self.get_bytes(&url).await?;
        check_status(status, None, &url)?;
        decode_summary_list(&bytes)
    }

    async fn fetch_detail(&self, name: &str) -> Result<EntryDetail, CatalogError> {
        let url = self.detail_url(name);
        let (status, bytes) = self.get_bytes(&url).await?;
        check_status(status, Some(name), &url)?;
        decode_detail(&bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const PIKACHU: &str = r#"{
        "id": 25,
        "name": "pikachu",
        "height": 4,
        "weight": 60,
        "sprites": {
            "front_default": "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/25.png",
            "back_default": null
        },
        "types": [
            { "slot": 1, "type": { "name": "electric", "url": "https://pokeapi.co/api/v2/type/13/" } }
        ],
        "abilities": []
    }"#;

    #[test]
    fn test_decode_summary_list_keeps_response_order() {
        let body = br#"{
            "count": 1302,
            "next": "https://pokeapi.co/api/v2/pokemon?offset=3&limit=3",
            "previous": null,
            "results": [
                { "name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon/1/" },
                { "name": "ivysaur", "url": "https://pokeapi.co/api/v2/pokemon/2/" },
                { "name": "venusaur", "url": "https://pokeapi.co/api/v2/pokemon/3/" }
            ]
        }"#;

        let entries = decode_summary_list(body).unwrap();
        let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["bulbasaur", "ivysaur", "venusaur"]);
        assert_eq!(entries[1].reference_url, "https://pokeapi.co/api/v2/pokemon/2/");
    }

    #[test]
    fn test_decode_detail_converts_units() {
        let detail = decode_detail(PIKACHU.as_bytes()).unwrap();
        assert_eq!(detail.id, 25);
        assert_eq!(detail.name, "pikachu");
        assert_eq!(detail.height, "0.4");
        assert_eq!(detail.weight, "6.0");
        assert_eq!(
            detail.types,
            vec![TypeSlot {
                type_name: "electric".into()
            }]
        );
        assert!(detail.sprite_url.unwrap().ends_with("/25.png"));
    }

    #[test]
    fn test_decode_detail_orders_types_by_slot() {
        let body = br#"{
            "id": 6, "name": "charizard", "height": 17, "weight": 905,
            "sprites": { "front_default": null },
            "types": [
                { "slot": 2, "type": { "name": "flying", "url": "" } },
                { "slot": 1, "type": { "name": "fire", "url": "" } }
            ]
        }"#;
        let detail = decode_detail(body).unwrap();
        let types: Vec<_> = detail.types.iter().map(|t| t.type_name.as_str()).collect();
        assert_eq!(types, vec!["fire", "flying"]);
        assert_eq!(detail.weight, "90.5");
        assert_eq!(detail.sprite_url, None);
    }

    #[test]
    fn test_decode_rejects_wrong_shape() {
        let err = decode_summary_list(br#"{"count": 3}"#).unwrap_err();
        assert!(matches!(err, CatalogError::Decode(_)));

        let err = decode_detail(b"Not Found").unwrap_err();
        assert!(matches!(err, CatalogError::Decode(_)));
    }

    #[test]
    fn test_urls() {
        let client = PokeApiClient::new("https://pokeapi.co/api/v2/");
        assert_eq!(
            client.list_url(150),
            "https://pokeapi.co/api/v2/pokemon?limit=150&offset=0"
        );
        assert_eq!(
            client.detail_url("mr mime"),
            "https://pokeapi.co/api/v2/pokemon/mr%20mime"
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            CatalogError::NotFound("missingno".into()).to_string(),
            "no entry named 'missingno'"
        );
        assert_eq!(
            CatalogError::Transport("timeout".into()).to_string(),
            "request failed: timeout"
        );
    }

    #[test]
    fn test_status_mapping() {
        let url = "https://pokeapi.co/api/v2/pokemon/missingno";
        assert_eq!(
            check_status(StatusCode::NOT_FOUND, Some("missingno"), url),
            Err(CatalogError::NotFound("missingno".into()))
        );
        assert_eq!(
            check_status(StatusCode::NOT_FOUND, None, url),
            Err(CatalogError::Transport(format!("HTTP 404 Not Found for {url}")))
        );
        assert!(matches!(
            check_status(StatusCode::INTERNAL_SERVER_ERROR, Some("pikachu"), url),
            Err(CatalogError::Transport(_))
        ));
        assert_eq!(check_status(StatusCode::OK, Some("pikachu"), url), Ok(()));
        assert_eq!(check_status(StatusCode::OK, None, url), Ok(()));
    }
}
