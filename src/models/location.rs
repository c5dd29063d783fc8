//! Location area models
//!
//! Pagination pages from `/location-area/` and single areas from
//! `/location-area/{name}`.

use serde::Deserialize;

use super::NamedResource;

/// One page of the location area listing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LocationAreaPage {
    /// Total number of areas across all pages
    pub count: u32,
    /// URL of the following page, absent on the last page
    pub next: Option<String>,
    /// URL of the preceding page, absent on the first page
    pub previous: Option<String>,
    pub results: Vec<NamedResource>,
}

/// A location area and the Pokemon that can be encountered there.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LocationArea {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub pokemon_encounters: Vec<PokemonEncounter>,
}

impl LocationArea {
    /// Names of the Pokemon found in this area, in API order.
    pub fn pokemon_names(&self) -> impl Iterator<Item = &str> {
        self.pokemon_encounters
            .iter()
            .map(|encounter| encounter.pokemon.name.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PokemonEncounter {
    pub pokemon: NamedResource,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_decodes_with_null_previous() {
        let json = r#"{
            "count": 1089,
            "next": "https://pokeapi.co/api/v2/location-area/?offset=20&limit=20",
            "previous": null,
            "results": [
                {"name": "canalave-city-area", "url": "https://pokeapi.co/api/v2/location-area/1/"},
                {"name": "eterna-city-area", "url": "https://pokeapi.co/api/v2/location-area/2/"}
            ]
        }"#;

        let page: LocationAreaPage = serde_json::from_str(json).unwrap();

        assert_eq!(page.count, 1089);
        assert!(page.previous.is_none());
        assert_eq!(
            page.next.as_deref(),
            Some("https://pokeapi.co/api/v2/location-area/?offset=20&limit=20")
        );
        assert_eq!(page.results[1].name, "eterna-city-area");
    }

    #[test]
    fn test_area_ignores_unmodeled_fields() {
        let json = r#"{
            "id": 1,
            "name": "canalave-city-area",
            "game_index": 1,
            "encounter_method_rates": [],
            "location": {"name": "canalave-city", "url": "https://pokeapi.co/api/v2/location/1/"},
            "pokemon_encounters": [
                {"pokemon": {"name": "tentacool", "url": "https://pokeapi.co/api/v2/pokemon/72/"}, "version_details": []},
                {"pokemon": {"name": "tentacruel", "url": "https://pokeapi.co/api/v2/pokemon/73/"}, "version_details": []}
            ]
        }"#;

        let area: LocationArea = serde_json::from_str(json).unwrap();

        assert_eq!(area.id, 1);
        assert_eq!(
            area.pokemon_names().collect::<Vec<_>>(),
            vec!["tentacool", "tentacruel"]
        );
    }
}
